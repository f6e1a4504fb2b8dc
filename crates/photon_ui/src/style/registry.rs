//! Static token-to-class lookup tables.

use crate::tokens::{
    AnimationSpeed, Backdrop, ButtonVariant, ComponentSize, FieldVariant, HoverStyle,
    ModalAnimation, ModalSize, SurfaceVariant,
};

impl ButtonVariant {
    /// Background, border and text classes for this variant.
    ///
    /// Every row carries the `bg-photon-<token>` and `border-photon-<token>` markers.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => {
                "bg-photon-primary border-photon-primary text-white hover:bg-photon-primary/90"
            }
            Self::Secondary => {
                "bg-photon-secondary border-photon-secondary text-white hover:bg-photon-secondary/90"
            }
            Self::Quantum => {
                "bg-photon-quantum border-photon-quantum bg-gradient-to-r from-photon-quantum to-photon-secondary text-white"
            }
            Self::Plasma => {
                "bg-photon-plasma border-photon-plasma bg-gradient-to-r from-photon-plasma via-photon-danger to-photon-warning bg-[length:200%_auto] animate-plasma text-white"
            }
            Self::Laser => {
                "bg-photon-laser border-photon-laser border-2 bg-opacity-10 text-photon-laser animate-laser-pulse"
            }
            Self::Photon => "bg-photon-photon border-photon-photon text-white shadow-inner",
            Self::Success => {
                "bg-photon-success border-photon-success text-white hover:bg-photon-success/90"
            }
            Self::Danger => {
                "bg-photon-danger border-photon-danger text-white hover:bg-photon-danger/90"
            }
            Self::Warning => {
                "bg-photon-warning border-photon-warning text-photon-dark hover:bg-photon-warning/90"
            }
            Self::Dark => "bg-photon-dark border-photon-dark text-white hover:bg-photon-dark/90",
            Self::Light => {
                "bg-photon-light border-photon-light text-photon-dark hover:bg-photon-light/90"
            }
        }
    }
}

impl SurfaceVariant {
    /// Surface classes shared by cards and modal panels.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Standard => "bg-white text-photon-dark border border-photon-gray/40 shadow-md",
            Self::Glass => "bg-white/10 text-white border border-white/20 backdrop-blur-lg",
            Self::Quantum => {
                "bg-gradient-to-br from-photon-dark via-photon-quantum/30 to-photon-dark text-white border border-photon-quantum/50"
            }
            Self::Minimal => "bg-transparent border-0 shadow-none",
            Self::Elevated => "bg-white text-photon-dark border-0 shadow-2xl",
        }
    }
}

impl FieldVariant {
    /// Resting classes for the input element.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-white text-photon-dark border border-photon-gray rounded-md",
            Self::Quantum => "bg-photon-dark/80 text-white border border-photon-quantum rounded-md",
            Self::Glass => {
                "bg-white/10 text-white border border-white/20 rounded-md backdrop-blur-md"
            }
            Self::Minimal => "bg-transparent border-0 border-b-2 border-photon-gray rounded-none",
        }
    }

    /// Classes applied while the field holds focus.
    pub fn focus_classes(self) -> &'static str {
        match self {
            Self::Primary => "border-photon-primary ring-2 ring-photon-primary/40",
            Self::Quantum => "border-photon-quantum ring-2 ring-photon-quantum/50",
            Self::Glass => "border-white/40 ring-2 ring-white/30",
            Self::Minimal => "border-photon-primary",
        }
    }
}

impl ComponentSize {
    /// Padding, min-height and type scale for buttons.
    pub fn button_classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 min-h-8 text-sm",
            Self::Md => "px-4 py-2 min-h-10 text-base",
            Self::Lg => "px-6 py-3 min-h-12 text-lg",
            Self::Xl => "px-8 py-4 min-h-14 text-xl",
        }
    }

    /// Padding, min-height and type scale for text fields.
    pub fn field_classes(self) -> &'static str {
        match self {
            Self::Sm => "px-3 py-1.5 min-h-8 text-sm",
            Self::Md => "px-4 py-2 min-h-10 text-base",
            Self::Lg => "px-5 py-3 min-h-12 text-lg",
            Self::Xl => "px-6 py-4 min-h-14 text-xl",
        }
    }

    /// Inner padding for surfaces.
    pub fn padding_classes(self) -> &'static str {
        match self {
            Self::Sm => "p-4",
            Self::Md => "p-6",
            Self::Lg => "p-8",
            Self::Xl => "p-10",
        }
    }

    /// Icon box matching the size's type scale.
    pub fn icon_classes(self) -> &'static str {
        match self {
            Self::Sm => "size-3.5",
            Self::Md => "size-4",
            Self::Lg => "size-5",
            Self::Xl => "size-6",
        }
    }
}

impl ModalSize {
    /// Max-width constraint for the modal panel.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "max-w-sm",
            Self::Md => "max-w-lg",
            Self::Lg => "max-w-2xl",
            Self::Xl => "max-w-4xl",
            Self::Full => "max-w-full h-full rounded-none",
        }
    }
}

impl Backdrop {
    /// Fill and filter classes for the modal backdrop.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Blur => "bg-black/50 backdrop-blur-sm",
            Self::Dark => "bg-black/70",
            Self::Transparent => "bg-transparent",
        }
    }
}

impl HoverStyle {
    /// Hover-only classes; empty for [`HoverStyle::None`].
    pub fn classes(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Lift => "hover:-translate-y-0.5",
            Self::Float => "hover:-translate-y-2 hover:shadow-xl",
            Self::Glow => "hover:shadow-glow-lg",
            Self::Scale => "hover:scale-105",
        }
    }
}

impl AnimationSpeed {
    /// Transition duration class.
    pub fn duration_class(self) -> &'static str {
        match self {
            Self::Slow => "duration-700",
            Self::Normal => "duration-300",
            Self::Fast => "duration-150",
            Self::Lightspeed => "duration-75",
        }
    }

    /// Duration in milliseconds, exported to the theme's CSS variables.
    pub fn millis(self) -> u16 {
        match self {
            Self::Slow => 700,
            Self::Normal => 300,
            Self::Fast => 150,
            Self::Lightspeed => 75,
        }
    }
}

/// Transition classes for a mounted element.
///
/// Modals mount and unmount immediately, so only the settled enter frame is modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionClasses {
    /// Transition property, duration and easing.
    pub enter: &'static str,
    /// Settled frame once mounted.
    pub enter_to: &'static str,
}

impl TransitionClasses {
    /// Classes for an element that has finished entering.
    pub fn entered(&self) -> String {
        format!("{} {}", self.enter, self.enter_to)
    }
}

const BACKDROP_FADE: TransitionClasses = TransitionClasses {
    enter: "transition-opacity duration-300",
    enter_to: "opacity-100",
};

impl ModalAnimation {
    /// Transition classes for the modal panel.
    pub fn panel_transition(self) -> TransitionClasses {
        match self {
            Self::Fade => BACKDROP_FADE,
            Self::Slide => TransitionClasses {
                enter: "transition-all duration-300",
                enter_to: "translate-y-0 opacity-100",
            },
            Self::Zoom => TransitionClasses {
                enter: "transition-all duration-300 ease-out",
                enter_to: "scale-100 opacity-100",
            },
            Self::Quantum => TransitionClasses {
                enter: "transition-all duration-500 ease-out",
                enter_to: "scale-100 rotate-0 blur-0 opacity-100",
            },
        }
    }

    /// Transition classes for the backdrop; every animation fades it.
    pub fn backdrop_transition(self) -> TransitionClasses {
        BACKDROP_FADE
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tokens::Token;

    #[test]
    fn every_button_variant_carries_background_and_border_markers() {
        for variant in ButtonVariant::ALL {
            let classes = variant.classes();
            let tokens: Vec<&str> = classes.split_whitespace().collect();
            assert!(
                tokens.contains(&format!("bg-photon-{}", variant.token()).as_str()),
                "{variant} missing background marker in `{classes}`"
            );
            assert!(
                tokens.contains(&format!("border-photon-{}", variant.token()).as_str()),
                "{variant} missing border marker in `{classes}`"
            );
        }
    }

    #[test]
    fn every_size_carries_padding_and_min_height_markers() {
        for size in ComponentSize::ALL {
            for classes in [size.button_classes(), size.field_classes()] {
                assert!(classes.split_whitespace().any(|c| c.starts_with("px-")));
                assert!(classes.split_whitespace().any(|c| c.starts_with("py-")));
                assert!(classes.split_whitespace().any(|c| c.starts_with("min-h-")));
            }
            assert!(size.padding_classes().starts_with("p-"));
        }
    }

    #[test]
    fn surface_and_field_rows_are_non_empty() {
        for variant in SurfaceVariant::ALL {
            assert!(!variant.classes().is_empty());
        }
        for variant in FieldVariant::ALL {
            assert!(!variant.classes().is_empty());
            assert!(!variant.focus_classes().is_empty());
        }
    }

    #[test]
    fn hover_none_contributes_nothing() {
        assert_eq!(HoverStyle::None.classes(), "");
        assert_eq!(HoverStyle::Scale.classes(), "hover:scale-105");
    }

    #[test]
    fn entered_combines_enter_and_enter_to() {
        assert_eq!(
            ModalAnimation::Slide.panel_transition().entered(),
            "transition-all duration-300 translate-y-0 opacity-100"
        );
        assert_eq!(
            ModalAnimation::Quantum.backdrop_transition(),
            ModalAnimation::Fade.panel_transition()
        );
    }

    #[test]
    fn every_panel_transition_settles_opaque() {
        for animation in ModalAnimation::ALL {
            let transition = animation.panel_transition();
            assert!(transition.enter.starts_with("transition-"));
            assert!(transition.entered().ends_with("opacity-100"));
        }
    }

    #[test]
    fn speed_duration_matches_millis() {
        for speed in AnimationSpeed::ALL {
            assert_eq!(
                speed.duration_class(),
                format!("duration-{}", speed.millis())
            );
        }
    }
}
