//! `cargo xtask class-table`: dumps resolved Photon class strings as JSON for snapshot review.

use crate::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;
use chrono::{SecondsFormat, Utc};
use photon_ui::{
    ButtonStyle, ButtonVariant, CardStyle, ComponentSize, FieldStyle, FieldVariant, FocusState,
    ModalSize, ModalStyle, SurfaceVariant, Token, PHOTON_VERSION,
};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

type Table = BTreeMap<&'static str, BTreeMap<&'static str, String>>;

/// Resolved class strings for every variant/size pair with default effects.
#[derive(Debug, Serialize)]
pub struct ClassTable {
    version: &'static str,
    generated_at: String,
    button: Table,
    input: Table,
    card: BTreeMap<&'static str, String>,
    modal_panel: BTreeMap<&'static str, String>,
}

impl ClassTable {
    /// Resolve the full table.
    pub fn build() -> Self {
        let button = ButtonVariant::ALL
            .iter()
            .map(|variant| {
                let row = ComponentSize::ALL
                    .iter()
                    .map(|size| {
                        let style = ButtonStyle {
                            variant: *variant,
                            size: *size,
                            ..ButtonStyle::default()
                        };
                        (size.token(), style.resolve())
                    })
                    .collect();
                (variant.token(), row)
            })
            .collect();

        let input = FieldVariant::ALL
            .iter()
            .map(|variant| {
                let row = ComponentSize::ALL
                    .iter()
                    .map(|size| {
                        let style = FieldStyle {
                            variant: *variant,
                            size: *size,
                            ..FieldStyle::default()
                        };
                        (size.token(), style.resolve_input(FocusState::Blurred))
                    })
                    .collect();
                (variant.token(), row)
            })
            .collect();

        let card = SurfaceVariant::ALL
            .iter()
            .map(|variant| {
                let style = CardStyle {
                    variant: *variant,
                    ..CardStyle::default()
                };
                (variant.token(), style.resolve())
            })
            .collect();

        let modal_panel = ModalSize::ALL
            .iter()
            .map(|size| {
                let style = ModalStyle {
                    size: *size,
                    ..ModalStyle::default()
                };
                (size.token(), style.resolve_panel())
            })
            .collect();

        Self {
            version: PHOTON_VERSION,
            generated_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            button,
            input,
            card,
            modal_panel,
        }
    }
}

/// Parsed `class-table` arguments.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ClassTableOptions {
    output: Option<PathBuf>,
    show_help: bool,
}

/// `cargo xtask class-table`
pub struct ClassTableCommand;

impl XtaskCommand for ClassTableCommand {
    type Options = ClassTableOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        let mut options = ClassTableOptions::default();
        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "help" | "--help" | "-h" => options.show_help = true,
                "--output" | "-o" => {
                    let Some(path) = iter.next() else {
                        return Err(XtaskError::usage("`--output` requires a path"));
                    };
                    options.output = Some(PathBuf::from(path));
                }
                other => {
                    return Err(XtaskError::usage(format!(
                        "unknown class-table argument `{other}`"
                    )))
                }
            }
        }
        Ok(options)
    }

    fn run(root: &Path, options: Self::Options) -> XtaskResult<()> {
        if options.show_help {
            eprintln!("Usage: cargo xtask class-table [--output <path>]");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&ClassTable::build())?;
        match options.output {
            Some(path) => {
                let path = root.join(path);
                if let Some(parent) = path.parent() {
                    fs::create_dir_all(parent).map_err(|err| XtaskError::io(parent, err))?;
                }
                fs::write(&path, json).map_err(|err| XtaskError::io(&path, err))?;
                println!("wrote {}", path.display());
            }
            None => println!("{json}"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_covers_every_variant_and_size() {
        let table = ClassTable::build();

        assert_eq!(table.button.len(), ButtonVariant::ALL.len());
        assert!(table
            .button
            .values()
            .all(|row| row.len() == ComponentSize::ALL.len()));
        assert_eq!(table.input.len(), FieldVariant::ALL.len());
        assert_eq!(table.card.len(), SurfaceVariant::ALL.len());
        assert_eq!(table.modal_panel.len(), ModalSize::ALL.len());
        assert!(table.button["quantum"]["lg"].contains("bg-photon-quantum"));
    }

    #[test]
    fn output_flag_requires_a_path() {
        let parsed = ClassTableCommand::parse(&["--output".to_string(), "out.json".to_string()])
            .expect("parse");
        assert_eq!(parsed.output, Some(PathBuf::from("out.json")));
        assert!(ClassTableCommand::parse(&["--output".to_string()]).is_err());
    }
}
