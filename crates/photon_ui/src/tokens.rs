//! Closed token sets selectable on Photon components.
//!
//! Every token has a stable lowercase string form used for the `data-ui-*` DOM contract,
//! `FromStr`, and serde. Typed props reject unknown values at compile time. Strings supplied at
//! runtime go through [`parse_token`] (strict) or [`parse_token_or_default`] (lossy, used by
//! serde), so a bad theme or config document never fails a render.

use std::fmt;
use std::str::FromStr;

use leptos::logging;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TokenError;

/// Shared contract for closed token enums.
pub trait Token: Copy + Default + 'static {
    /// Family name used in error messages.
    const KIND: &'static str;
    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Stable lowercase string form.
    fn token(self) -> &'static str;
}

/// Parses a token strictly, ignoring surrounding whitespace and ASCII case.
///
/// # Errors
///
/// Returns [`TokenError::Unknown`] when `raw` names no member of `T`.
pub fn parse_token<T: Token>(raw: &str) -> Result<T, TokenError> {
    let needle = raw.trim();
    T::ALL
        .iter()
        .copied()
        .find(|candidate| candidate.token().eq_ignore_ascii_case(needle))
        .ok_or_else(|| TokenError::Unknown {
            kind: T::KIND,
            value: raw.to_string(),
        })
}

/// Parses a token, falling back to `T::default()` with a warning.
pub fn parse_token_or_default<T: Token>(raw: &str) -> T {
    parse_token(raw).unwrap_or_else(|err| {
        let fallback = T::default();
        logging::warn!("{err}; falling back to `{}`", fallback.token());
        fallback
    })
}

macro_rules! token_traits {
    ($($ty:ty),* $(,)?) => {$(
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.token())
            }
        }

        impl FromStr for $ty {
            type Err = TokenError;

            fn from_str(raw: &str) -> Result<Self, Self::Err> {
                parse_token(raw)
            }
        }

        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.token())
            }
        }
    )*};
}

macro_rules! lossy_deserialize {
    ($($ty:ty),* $(,)?) => {$(
        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                Ok(parse_token_or_default(&raw))
            }
        }
    )*};
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Semantic button variants.
pub enum ButtonVariant {
    /// Photon blue, the default action.
    Primary,
    /// Quantum violet.
    Secondary,
    /// Particle-tinted gradient.
    Quantum,
    /// Animated plasma gradient.
    Plasma,
    /// Pulsing laser border.
    Laser,
    /// Inner photon glow.
    Photon,
    /// Positive outcome.
    Success,
    /// Destructive action.
    Danger,
    /// Cautionary action.
    Warning,
    /// Deep dark surface.
    Dark,
    /// Bright light surface.
    Light,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl Token for ButtonVariant {
    const KIND: &'static str = "variant";
    const ALL: &'static [Self] = &[
        Self::Primary,
        Self::Secondary,
        Self::Quantum,
        Self::Plasma,
        Self::Laser,
        Self::Photon,
        Self::Success,
        Self::Danger,
        Self::Warning,
        Self::Dark,
        Self::Light,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Quantum => "quantum",
            Self::Plasma => "plasma",
            Self::Laser => "laser",
            Self::Photon => "photon",
            Self::Success => "success",
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Surface variants shared by cards and modal panels.
pub enum SurfaceVariant {
    /// Solid default surface.
    Standard,
    /// Frosted translucent surface.
    Glass,
    /// Dark gradient surface with a quantum border.
    Quantum,
    /// Borderless flat surface.
    Minimal,
    /// Raised surface with a deep shadow.
    Elevated,
}

impl Default for SurfaceVariant {
    fn default() -> Self {
        Self::Standard
    }
}

impl Token for SurfaceVariant {
    const KIND: &'static str = "surface variant";
    const ALL: &'static [Self] = &[
        Self::Standard,
        Self::Glass,
        Self::Quantum,
        Self::Minimal,
        Self::Elevated,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Standard => "default",
            Self::Glass => "glass",
            Self::Quantum => "quantum",
            Self::Minimal => "minimal",
            Self::Elevated => "elevated",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Input field variants.
pub enum FieldVariant {
    /// Standard bordered field.
    Primary,
    /// Dark field with a quantum accent.
    Quantum,
    /// Translucent field.
    Glass,
    /// Underline-only field.
    Minimal,
}

impl Default for FieldVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl Token for FieldVariant {
    const KIND: &'static str = "field variant";
    const ALL: &'static [Self] = &[Self::Primary, Self::Quantum, Self::Glass, Self::Minimal];

    fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Quantum => "quantum",
            Self::Glass => "glass",
            Self::Minimal => "minimal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Component sizing tokens.
pub enum ComponentSize {
    /// Dense.
    Sm,
    /// Default.
    Md,
    /// Large.
    Lg,
    /// Extra large.
    Xl,
}

impl Default for ComponentSize {
    fn default() -> Self {
        Self::Md
    }
}

impl Token for ComponentSize {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Glow intensity. A bare `true` flag means [`Glow::Normal`].
pub enum Glow {
    /// No glow.
    Off,
    /// Faint halo.
    Subtle,
    /// Standard halo.
    Normal,
    /// Strong halo.
    Intense,
    /// Pulsing multi-color halo.
    Quantum,
}

impl Default for Glow {
    fn default() -> Self {
        Self::Off
    }
}

impl From<bool> for Glow {
    fn from(enabled: bool) -> Self {
        if enabled {
            Self::Normal
        } else {
            Self::Off
        }
    }
}

impl Glow {
    /// Whether any glow is applied.
    pub fn is_on(self) -> bool {
        self != Self::Off
    }
}

impl Token for Glow {
    const KIND: &'static str = "glow";
    const ALL: &'static [Self] = &[
        Self::Off,
        Self::Subtle,
        Self::Normal,
        Self::Intense,
        Self::Quantum,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Subtle => "subtle",
            Self::Normal => "normal",
            Self::Intense => "intense",
            Self::Quantum => "quantum",
        }
    }
}

impl<'de> Deserialize<'de> for Glow {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum GlowRepr {
            Flag(bool),
            Level(String),
        }

        Ok(match GlowRepr::deserialize(deserializer)? {
            GlowRepr::Flag(enabled) => Self::from(enabled),
            GlowRepr::Level(raw) => parse_token_or_default(&raw),
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Pointer-hover treatment.
pub enum HoverStyle {
    /// No hover treatment.
    None,
    /// Small upward shift.
    Lift,
    /// Larger upward shift with shadow.
    Float,
    /// Glow on hover.
    Glow,
    /// Slight scale-up.
    Scale,
}

impl Default for HoverStyle {
    fn default() -> Self {
        Self::None
    }
}

impl Token for HoverStyle {
    const KIND: &'static str = "hover style";
    const ALL: &'static [Self] = &[
        Self::None,
        Self::Lift,
        Self::Float,
        Self::Glow,
        Self::Scale,
    ];

    fn token(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Lift => "lift",
            Self::Float => "float",
            Self::Glow => "glow",
            Self::Scale => "scale",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Modal enter animation.
pub enum ModalAnimation {
    /// Opacity fade.
    Fade,
    /// Fade while sliding up.
    Slide,
    /// Fade while scaling up.
    Zoom,
    /// Scale, rotate and unblur.
    Quantum,
}

impl Default for ModalAnimation {
    fn default() -> Self {
        Self::Fade
    }
}

impl Token for ModalAnimation {
    const KIND: &'static str = "animation";
    const ALL: &'static [Self] = &[Self::Fade, Self::Slide, Self::Zoom, Self::Quantum];

    fn token(self) -> &'static str {
        match self {
            Self::Fade => "fade",
            Self::Slide => "slide",
            Self::Zoom => "zoom",
            Self::Quantum => "quantum",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Modal backdrop treatment.
pub enum Backdrop {
    /// Dimmed and blurred.
    Blur,
    /// Dimmed only.
    Dark,
    /// Invisible but still clickable.
    Transparent,
}

impl Default for Backdrop {
    fn default() -> Self {
        Self::Blur
    }
}

impl Token for Backdrop {
    const KIND: &'static str = "backdrop";
    const ALL: &'static [Self] = &[Self::Blur, Self::Dark, Self::Transparent];

    fn token(self) -> &'static str {
        match self {
            Self::Blur => "blur",
            Self::Dark => "dark",
            Self::Transparent => "transparent",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Modal panel width.
pub enum ModalSize {
    /// Narrow dialog.
    Sm,
    /// Default dialog.
    Md,
    /// Wide dialog.
    Lg,
    /// Extra wide dialog.
    Xl,
    /// Fills the viewport.
    Full,
}

impl Default for ModalSize {
    fn default() -> Self {
        Self::Md
    }
}

impl Token for ModalSize {
    const KIND: &'static str = "modal size";
    const ALL: &'static [Self] = &[Self::Sm, Self::Md, Self::Lg, Self::Xl, Self::Full];

    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Full => "full",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Transition speed shared by animated components.
pub enum AnimationSpeed {
    /// Unhurried transitions.
    Slow,
    /// Standard transitions.
    Normal,
    /// Snappy transitions.
    Fast,
    /// Near-instant transitions.
    Lightspeed,
}

impl Default for AnimationSpeed {
    fn default() -> Self {
        Self::Fast
    }
}

impl Token for AnimationSpeed {
    const KIND: &'static str = "animation speed";
    const ALL: &'static [Self] = &[Self::Slow, Self::Normal, Self::Fast, Self::Lightspeed];

    fn token(self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Normal => "normal",
            Self::Fast => "fast",
            Self::Lightspeed => "lightspeed",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Backdrop-filter strength used by translucent surfaces.
pub enum BlurLevel {
    /// Light blur.
    Subtle,
    /// Standard blur.
    Normal,
    /// Heavy blur.
    Strong,
}

impl Default for BlurLevel {
    fn default() -> Self {
        Self::Normal
    }
}

impl Token for BlurLevel {
    const KIND: &'static str = "blur";
    const ALL: &'static [Self] = &[Self::Subtle, Self::Normal, Self::Strong];

    fn token(self) -> &'static str {
        match self {
            Self::Subtle => "subtle",
            Self::Normal => "normal",
            Self::Strong => "strong",
        }
    }
}

token_traits!(
    ButtonVariant,
    SurfaceVariant,
    FieldVariant,
    ComponentSize,
    Glow,
    HoverStyle,
    ModalAnimation,
    Backdrop,
    ModalSize,
    AnimationSpeed,
    BlurLevel,
);

lossy_deserialize!(
    ButtonVariant,
    SurfaceVariant,
    FieldVariant,
    ComponentSize,
    HoverStyle,
    ModalAnimation,
    Backdrop,
    ModalSize,
    AnimationSpeed,
    BlurLevel,
);

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
