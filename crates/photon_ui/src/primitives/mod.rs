//! Leptos components binding the pure render plans to native elements.
//!
//! Every root element carries the `data-ui-*` contract (`data-ui-primitive`, `data-ui-kind`,
//! plus variant, size and state tokens) alongside the resolved class string.

use leptos::ev::{self, FocusEvent, KeyboardEvent, MouseEvent};
use leptos::*;

use crate::icon::{Icon, IconName};
use crate::render::{ButtonParts, CardParts, FieldContent, FieldParts, ModalContent, ModalParts};
use crate::state::{DisclosureConfig, DismissReason, FocusState};
use crate::style::{ButtonStyle, CardStyle, EffectFlags, FieldStyle, ModalStyle};
use crate::theme::use_theme;
use crate::tokens::{
    bool_token, AnimationSpeed, Backdrop, ButtonVariant, ComponentSize, FieldVariant, Glow,
    HoverStyle, ModalAnimation, ModalSize, SurfaceVariant, Token,
};

mod controls;
mod data_display;
mod overlays;

pub use controls::{Button, Input, ParticleLayer, Spinner};
pub use data_display::Card;
pub use overlays::Modal;

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn merge_layout_class_ignores_empty_extras() {
        assert_eq!(merge_layout_class("photon-theme", None), "photon-theme");
        assert_eq!(merge_layout_class("photon-theme", Some("")), "photon-theme");
        assert_eq!(
            merge_layout_class("photon-theme", Some("min-h-screen")),
            "photon-theme min-h-screen"
        );
    }
}
