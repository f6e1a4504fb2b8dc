//! Photon UI: themeable Leptos components with variant, size and effect tokens.
//!
//! Styling is resolved by pure functions (`*Style::resolve*`) into ordered, de-duplicated
//! utility class strings, and each component binds a pure render plan (`*Parts::project`)
//! to native elements. Every component root carries the `data-ui-*` DOM contract so CSS
//! layers and tests can target state without parsing class names.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod error;
mod icon;
mod primitives;
mod render;
mod state;
mod style;
mod theme;
mod tokens;

pub use error::{ThemeError, TokenError};
pub use icon::{Icon, IconName};
pub use primitives::{Button, Card, Input, Modal, ParticleLayer, Spinner};
pub use render::{
    select_message, ButtonParts, CardParts, FieldContent, FieldMessage, FieldParts, MessageKind,
    ModalContent, ModalParts,
};
pub use state::{
    use_disclosure, DisclosureConfig, DisclosureHandle, DisclosureState, DismissReason,
    FocusState,
};
pub use style::{
    ButtonStyle, CardStyle, ClassList, EffectFlags, FieldStatus, FieldStyle, ModalStyle,
    TransitionClasses,
};
pub use theme::{
    use_theme, PhotonDefaults, PhotonTheme, ThemeAnimations, ThemeColors, ThemeEffects,
    ThemeProvider, ThemeSpacing, PHOTON_DEFAULTS, PHOTON_VERSION,
};
pub use tokens::{
    parse_token, parse_token_or_default, AnimationSpeed, Backdrop, BlurLevel, ButtonVariant,
    ComponentSize, FieldVariant, Glow, HoverStyle, ModalAnimation, ModalSize, SurfaceVariant,
    Token,
};

/// Convenience imports for application crates composing Photon components.
pub mod prelude {
    pub use crate::{
        use_disclosure, use_theme, AnimationSpeed, Backdrop, Button, ButtonVariant, Card,
        ComponentSize, DisclosureHandle, FieldVariant, Glow, HoverStyle, Icon, IconName, Input,
        Modal, ModalAnimation, ModalSize, PhotonTheme, Spinner, SurfaceVariant, ThemeProvider,
    };
}
