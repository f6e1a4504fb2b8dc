//! Per-component style resolvers.
//!
//! Layer order, low to high: base, variant, size, state and effects, caller override. The caller
//! override is always appended last and never replaces earlier classes.

use serde::{Deserialize, Serialize};

use super::{ClassList, EffectFlags};
use crate::state::FocusState;
use crate::tokens::{
    AnimationSpeed, Backdrop, ButtonVariant, ComponentSize, FieldVariant, Glow, HoverStyle,
    ModalAnimation, ModalSize, SurfaceVariant,
};

const BUTTON_BASE: &str = "photon-button relative inline-flex items-center justify-center gap-2 \
     rounded-lg border font-medium transition-all select-none \
     focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-offset-2";
const FIELD_BASE: &str =
    "photon-input block w-full outline-none transition-all duration-200 placeholder:opacity-60";
const FIELD_WRAPPER: &str = "photon-field relative flex flex-col gap-1";
const CARD_BASE: &str =
    "photon-card relative rounded-xl overflow-hidden transition-all duration-300";
const CARD_INTERACTIVE: &str = "cursor-pointer focus-visible:outline-none focus-visible:ring-2 \
     focus-visible:ring-photon-primary";
const MODAL_CONTAINER: &str = "photon-modal fixed inset-0 z-50 flex items-center justify-center";
const MODAL_PANEL: &str = "photon-modal-panel relative w-full rounded-2xl p-6 space-y-4";
const MODAL_BACKDROP: &str = "photon-modal-backdrop fixed inset-0";
const DISABLED: &str = "opacity-50 cursor-not-allowed";

/// Style inputs for one button render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ButtonStyle {
    /// Color role.
    pub variant: ButtonVariant,
    /// Size token.
    pub size: ComponentSize,
    /// Effect flags, including `loading`.
    pub effects: EffectFlags,
    /// Transition speed.
    pub speed: AnimationSpeed,
    /// Native disabled flag.
    pub disabled: bool,
    /// Caller override classes, appended last.
    pub class: Option<String>,
}

impl ButtonStyle {
    /// Resolves the final class string.
    pub fn resolve(&self) -> String {
        let mut classes = ClassList::new();
        classes
            .push(BUTTON_BASE)
            .push(self.speed.duration_class())
            .push(self.variant.classes())
            .push(self.size.button_classes())
            .push_if(self.disabled && !self.effects.loading, DISABLED);
        self.effects.extend(&mut classes);
        classes.push_opt(self.class.as_deref());
        classes.finish()
    }

    /// Whether clicks reach the caller. False while disabled or loading.
    pub fn is_interactive(&self) -> bool {
        !self.disabled && !self.effects.suppresses_interaction()
    }
}

/// Validation outcome shown by a field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldStatus {
    /// No validation message, or only help text.
    #[default]
    Neutral,
    /// An error message is shown.
    Error,
    /// A success message is shown.
    Success,
}

impl FieldStatus {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Error => "error",
            Self::Success => "success",
        }
    }

    fn classes(self) -> &'static str {
        match self {
            Self::Neutral => "",
            Self::Error => "border-photon-danger ring-photon-danger/40",
            Self::Success => "border-photon-success ring-photon-success/40",
        }
    }
}

/// Style inputs for one text field render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    /// Field variant.
    pub variant: FieldVariant,
    /// Size token.
    pub size: ComponentSize,
    /// Halo intensity.
    pub glow: Glow,
    /// Validation outcome.
    pub status: FieldStatus,
    /// Native disabled flag.
    pub disabled: bool,
    /// A leading icon occupies the left gutter.
    pub leading_icon: bool,
    /// A trailing icon occupies the right gutter.
    pub trailing_icon: bool,
    /// Caller override classes for the input element, appended last.
    pub class: Option<String>,
}

impl FieldStyle {
    /// Resolves the input element's classes for the given focus state.
    pub fn resolve_input(&self, focus: FocusState) -> String {
        let mut classes = ClassList::new();
        classes
            .push(FIELD_BASE)
            .push(self.variant.classes())
            .push(self.size.field_classes())
            .push_if(self.leading_icon, "pl-10")
            .push_if(self.trailing_icon, "pr-10")
            .push_if(focus.is_focused(), self.variant.focus_classes())
            .push(self.status.classes())
            .push_if(self.disabled, DISABLED);
        EffectFlags {
            glow: self.glow,
            ..EffectFlags::default()
        }
        .extend(&mut classes);
        classes.push_opt(self.class.as_deref());
        classes.finish()
    }

    /// Classes for the wrapper holding label, input and message.
    pub fn wrapper_classes(&self) -> &'static str {
        FIELD_WRAPPER
    }
}

/// Style inputs for one card render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CardStyle {
    /// Surface variant.
    pub variant: SurfaceVariant,
    /// Whether inner padding applies.
    pub padded: bool,
    /// Inner padding scale.
    pub padding: ComponentSize,
    /// Halo intensity.
    pub glow: Glow,
    /// Pointer-hover treatment.
    pub hover: HoverStyle,
    /// The card itself is clickable.
    pub interactive: bool,
    /// Caller override classes, appended last.
    pub class: Option<String>,
}

impl Default for CardStyle {
    fn default() -> Self {
        Self {
            variant: SurfaceVariant::Standard,
            padded: true,
            padding: ComponentSize::Md,
            glow: Glow::Off,
            hover: HoverStyle::None,
            interactive: false,
            class: None,
        }
    }
}

impl CardStyle {
    /// Resolves the final class string.
    pub fn resolve(&self) -> String {
        let mut classes = ClassList::new();
        classes
            .push(CARD_BASE)
            .push(self.variant.classes())
            .push_if(self.padded, self.padding.padding_classes())
            .push_if(self.interactive, CARD_INTERACTIVE);
        EffectFlags {
            glow: self.glow,
            hover: self.hover,
            ..EffectFlags::default()
        }
        .extend(&mut classes);
        classes.push_opt(self.class.as_deref());
        classes.finish()
    }
}

/// Style inputs for one modal render.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModalStyle {
    /// Panel surface variant.
    pub variant: SurfaceVariant,
    /// Panel width.
    pub size: ModalSize,
    /// Enter animation.
    pub animation: ModalAnimation,
    /// Backdrop treatment.
    pub backdrop: Backdrop,
    /// Panel halo intensity.
    pub glow: Glow,
    /// Caller override classes for the panel, appended last.
    pub class: Option<String>,
}

impl ModalStyle {
    /// Classes for the fixed full-viewport container.
    pub fn resolve_container(&self) -> String {
        let mut classes = ClassList::new();
        classes
            .push(MODAL_CONTAINER)
            .push(if self.size == ModalSize::Full { "p-0" } else { "p-4" });
        classes.finish()
    }

    /// Classes for the backdrop layer.
    pub fn resolve_backdrop(&self) -> String {
        let mut classes = ClassList::new();
        classes
            .push(MODAL_BACKDROP)
            .push(self.backdrop.classes())
            .push(&self.animation.backdrop_transition().entered());
        classes.finish()
    }

    /// Classes for the dialog panel.
    pub fn resolve_panel(&self) -> String {
        let mut classes = ClassList::new();
        classes
            .push(MODAL_PANEL)
            .push(self.variant.classes())
            .push(self.size.classes());
        EffectFlags {
            glow: self.glow,
            ..EffectFlags::default()
        }
        .extend(&mut classes);
        classes
            .push(&self.animation.panel_transition().entered())
            .push_opt(self.class.as_deref());
        classes.finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokens::Token;

    fn position(haystack: &str, class: &str) -> usize {
        haystack
            .split_whitespace()
            .position(|candidate| candidate == class)
            .unwrap_or_else(|| panic!("`{class}` missing from `{haystack}`"))
    }

    #[test]
    fn button_layers_follow_precedence_order() {
        let style = ButtonStyle {
            variant: ButtonVariant::Danger,
            size: ComponentSize::Lg,
            effects: EffectFlags {
                ripple: true,
                ..EffectFlags::default()
            },
            class: Some("my-override".to_string()),
            ..ButtonStyle::default()
        };
        let classes = style.resolve();

        let base = position(&classes, "photon-button");
        let variant = position(&classes, "bg-photon-danger");
        let size = position(&classes, "min-h-12");
        let effect = position(&classes, "photon-ripple");
        let caller = position(&classes, "my-override");
        assert!(base < variant && variant < size && size < effect && effect < caller);
        assert!(classes.ends_with("my-override"));
    }

    #[test]
    fn override_classes_are_appended_for_every_variant_and_size() {
        for variant in ButtonVariant::ALL {
            for size in ComponentSize::ALL {
                let style = ButtonStyle {
                    variant: *variant,
                    size: *size,
                    class: Some("mt-4 uppercase".to_string()),
                    ..ButtonStyle::default()
                };
                let classes = style.resolve();
                assert!(classes.contains(variant.classes().split(' ').next().unwrap()));
                assert!(classes.ends_with("mt-4 uppercase"), "{classes}");
            }
        }
    }

    #[test]
    fn resolution_is_idempotent() {
        let style = ButtonStyle {
            variant: ButtonVariant::Plasma,
            effects: EffectFlags {
                glow: Glow::Quantum,
                particles: true,
                ..EffectFlags::default()
            },
            class: Some("shadow-glow w-1/2".to_string()),
            ..ButtonStyle::default()
        };

        assert_eq!(style.resolve(), style.resolve());
        assert_eq!(style.clone().resolve(), style.resolve());
    }

    #[test]
    fn disabled_and_loading_are_not_interactive() {
        let idle = ButtonStyle::default();
        let disabled = ButtonStyle {
            disabled: true,
            ..ButtonStyle::default()
        };
        let loading = ButtonStyle {
            effects: EffectFlags {
                loading: true,
                ..EffectFlags::default()
            },
            ..ButtonStyle::default()
        };

        assert!(idle.is_interactive());
        assert!(!disabled.is_interactive());
        assert!(!loading.is_interactive());
        assert!(disabled.resolve().contains("cursor-not-allowed"));
        assert!(loading.resolve().contains("cursor-wait"));
        assert!(!loading.resolve().contains("cursor-not-allowed"));
    }

    #[test]
    fn field_focus_and_status_layers() {
        let style = FieldStyle {
            variant: FieldVariant::Quantum,
            status: FieldStatus::Error,
            leading_icon: true,
            ..FieldStyle::default()
        };
        let blurred = style.resolve_input(FocusState::Blurred);
        let focused = style.resolve_input(FocusState::Focused);

        assert!(!blurred.contains("ring-photon-quantum/50"));
        assert!(focused.contains("ring-photon-quantum/50"));
        assert!(focused.contains("border-photon-danger"));
        assert!(focused.contains("pl-10"));
        assert!(!focused.contains("pr-10"));
        assert_eq!(style.wrapper_classes(), FIELD_WRAPPER);
    }

    #[test]
    fn field_override_lands_last() {
        let style = FieldStyle {
            glow: Glow::Subtle,
            disabled: true,
            class: Some("font-mono".to_string()),
            ..FieldStyle::default()
        };
        let classes = style.resolve_input(FocusState::Blurred);

        assert!(classes.contains("shadow-glow-sm"));
        assert!(classes.contains("opacity-50"));
        assert!(classes.ends_with("font-mono"));
    }

    #[test]
    fn card_padding_hover_and_glow() {
        let style = CardStyle {
            variant: SurfaceVariant::Glass,
            hover: HoverStyle::Float,
            glow: Glow::Normal,
            ..CardStyle::default()
        };
        let classes = style.resolve();
        assert!(classes.contains("backdrop-blur-lg"));
        assert!(classes.contains("p-6"));
        assert!(classes.contains("hover:-translate-y-2"));
        assert!(classes.contains("shadow-glow"));
        assert!(!classes.contains("cursor-pointer"));

        let unpadded = CardStyle {
            padded: false,
            interactive: true,
            ..CardStyle::default()
        };
        let classes = unpadded.resolve();
        assert!(!classes.contains("p-6"));
        assert!(classes.contains("cursor-pointer"));
    }

    #[test]
    fn modal_layers() {
        let style = ModalStyle {
            variant: SurfaceVariant::Quantum,
            size: ModalSize::Full,
            animation: ModalAnimation::Zoom,
            backdrop: Backdrop::Dark,
            glow: Glow::Intense,
            class: Some("gap-8".to_string()),
        };

        assert_eq!(
            style.resolve_container(),
            "photon-modal fixed inset-0 z-50 flex items-center justify-center p-0"
        );
        assert_eq!(
            style.resolve_backdrop(),
            "photon-modal-backdrop fixed inset-0 bg-black/70 transition-opacity duration-300 \
             opacity-100"
        );
        let panel = style.resolve_panel();
        assert!(panel.contains("max-w-full"));
        assert!(panel.contains("shadow-glow-lg"));
        assert!(panel.contains("scale-100"));
        assert!(panel.ends_with("gap-8"));
    }

    #[test]
    fn modal_panel_shadow_comes_from_the_surface_only() {
        for variant in SurfaceVariant::ALL {
            let style = ModalStyle {
                variant: *variant,
                ..ModalStyle::default()
            };
            let panel = style.resolve_panel();
            let shadows: Vec<&str> = panel
                .split_whitespace()
                .filter(|class| class.starts_with("shadow-"))
                .collect();
            let surface: Vec<&str> = variant
                .classes()
                .split_whitespace()
                .filter(|class| class.starts_with("shadow-"))
                .collect();
            assert_eq!(shadows, surface, "{variant}");
        }
    }

    #[test]
    fn styles_deserialize_from_partial_documents() {
        let style: ButtonStyle = serde_json::from_str(
            r#"{"variant": "quantum", "size": "nope", "effects": {"glow": "quantum"}}"#,
        )
        .unwrap();

        assert_eq!(style.variant, ButtonVariant::Quantum);
        assert_eq!(style.size, ComponentSize::Md);
        assert_eq!(style.effects.glow, Glow::Quantum);

        let card: CardStyle = serde_json::from_str("{}").unwrap();
        assert_eq!(card, CardStyle::default());
    }
}
