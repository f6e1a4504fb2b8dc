use serde::{Deserialize, Serialize};

use super::ClassList;
use crate::tokens::{Glow, HoverStyle};

/// Independent visual treatments layered over a variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectFlags {
    /// Halo intensity.
    pub glow: Glow,
    /// Press ripple.
    pub ripple: bool,
    /// Ambient particle layer.
    pub particles: bool,
    /// Pending action; also disables the element and hides icons.
    pub loading: bool,
    /// Pointer-hover treatment.
    pub hover: HoverStyle,
    /// Stretch to the container width.
    pub full_width: bool,
}

impl Glow {
    /// Shadow classes for this intensity; empty when off.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Off => "",
            Self::Subtle => "shadow-glow-sm",
            Self::Normal => "shadow-glow",
            Self::Intense => "shadow-glow-lg",
            Self::Quantum => "shadow-glow-quantum animate-glow-pulse",
        }
    }
}

const RIPPLE: &str = "photon-ripple overflow-hidden";
const PARTICLES: &str = "photon-particles overflow-visible";
const LOADING: &str = "photon-loading cursor-wait opacity-80";
const FULL_WIDTH: &str = "w-full";

impl EffectFlags {
    /// Composes the effect fragment.
    ///
    /// Order: glow, ripple, particles, loading, hover, full width.
    pub fn compose(&self) -> String {
        let mut classes = ClassList::new();
        self.extend(&mut classes);
        classes.finish()
    }

    pub(crate) fn extend(&self, classes: &mut ClassList) {
        classes
            .push(self.glow.classes())
            .push_if(self.ripple, RIPPLE)
            .push_if(self.particles, PARTICLES)
            .push_if(self.loading, LOADING)
            .push(self.hover.classes())
            .push_if(self.full_width, FULL_WIDTH);
    }

    /// Whether the element must behave as disabled.
    pub fn suppresses_interaction(&self) -> bool {
        self.loading
    }

    /// Whether leading/trailing icons must be omitted.
    pub fn suppresses_icons(&self) -> bool {
        self.loading
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn no_flags_compose_to_empty_fragment() {
        assert_eq!(EffectFlags::default().compose(), "");
    }

    #[test]
    fn flags_compose_in_fixed_order() {
        let flags = EffectFlags {
            glow: Glow::Intense,
            ripple: true,
            particles: true,
            loading: true,
            hover: HoverStyle::Lift,
            full_width: true,
        };

        assert_eq!(
            flags.compose(),
            "shadow-glow-lg photon-ripple overflow-hidden photon-particles overflow-visible \
             photon-loading cursor-wait opacity-80 hover:-translate-y-0.5 w-full"
        );
    }

    #[test]
    fn duplicate_classes_collapse_to_first_occurrence() {
        let flags = EffectFlags {
            glow: Glow::Normal,
            hover: HoverStyle::Glow,
            ..EffectFlags::default()
        };
        let mut classes = ClassList::new();
        classes.push("shadow-glow");
        flags.extend(&mut classes);

        assert_eq!(classes.finish(), "shadow-glow hover:shadow-glow-lg");
    }

    #[test]
    fn loading_is_cross_cutting() {
        let idle = EffectFlags::default();
        let loading = EffectFlags {
            loading: true,
            ..idle
        };

        assert!(!idle.suppresses_interaction());
        assert!(!idle.suppresses_icons());
        assert!(loading.suppresses_interaction());
        assert!(loading.suppresses_icons());
    }

    #[test]
    fn effect_flags_deserialize_with_defaults() {
        let flags: EffectFlags =
            serde_json::from_str(r#"{"glow": true, "hover": "scale"}"#).unwrap();

        assert_eq!(
            flags,
            EffectFlags {
                glow: Glow::Normal,
                hover: HoverStyle::Scale,
                ..EffectFlags::default()
            }
        );
    }
}
