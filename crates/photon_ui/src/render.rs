//! Pure projections from style config plus interaction state to what a component renders.
//!
//! Components only bind these values to the DOM, so every conditional-rendering rule (icons
//! hidden while loading, message precedence, modal content gating) is tested here.

use crate::icon::IconName;
use crate::state::{DisclosureConfig, FocusState};
use crate::style::{ButtonStyle, CardStyle, FieldStatus, FieldStyle, ModalStyle};

/// Render plan for one button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonParts {
    /// Final class string.
    pub class: String,
    /// Native `disabled` attribute; true while disabled or loading.
    pub disabled: bool,
    /// `aria-busy`; true while loading.
    pub busy: bool,
    /// Icon before the label, omitted while loading.
    pub leading_icon: Option<IconName>,
    /// Icon after the label, omitted while loading.
    pub trailing_icon: Option<IconName>,
    /// Spinner node present.
    pub spinner: bool,
    /// Particle layer present.
    pub particle_layer: bool,
    /// `data-ui-state` token.
    pub state: &'static str,
}

impl ButtonParts {
    /// Projects a button's style and icon props.
    pub fn project(
        style: &ButtonStyle,
        leading_icon: Option<IconName>,
        trailing_icon: Option<IconName>,
    ) -> Self {
        let loading = style.effects.loading;
        let hide_icons = style.effects.suppresses_icons();
        let state = if loading {
            "loading"
        } else if style.disabled {
            "disabled"
        } else {
            "idle"
        };

        Self {
            class: style.resolve(),
            disabled: !style.is_interactive(),
            busy: loading,
            leading_icon: leading_icon.filter(|_| !hide_icons),
            trailing_icon: trailing_icon.filter(|_| !hide_icons),
            spinner: loading,
            particle_layer: style.effects.particles && !loading,
            state,
        }
    }

    /// Runs `notify` only when the button accepts clicks. Returns whether it ran.
    pub fn dispatch_click(&self, notify: impl FnOnce()) -> bool {
        if self.disabled {
            return false;
        }
        notify();
        true
    }
}

/// Kind of the single message line under a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// Validation failure.
    Error,
    /// Validation success.
    Success,
    /// Neutral guidance.
    Help,
}

impl MessageKind {
    /// Classes for the message line.
    pub fn classes(self) -> &'static str {
        match self {
            Self::Error => "photon-field-message text-xs text-photon-danger",
            Self::Success => "photon-field-message text-xs text-photon-success",
            Self::Help => "photon-field-message text-xs text-photon-gray",
        }
    }

    /// ARIA role; errors are announced.
    pub fn role(self) -> Option<&'static str> {
        match self {
            Self::Error => Some("alert"),
            Self::Success => Some("status"),
            Self::Help => None,
        }
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
            Self::Help => "help",
        }
    }
}

/// The message line shown under a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldMessage {
    /// Message kind.
    pub kind: MessageKind,
    /// Message text.
    pub text: String,
}

/// Picks the one message to show. Error beats success beats help; blank strings count as absent.
pub fn select_message(
    error: Option<&str>,
    success: Option<&str>,
    help: Option<&str>,
) -> Option<FieldMessage> {
    fn present(text: Option<&str>) -> Option<&str> {
        text.filter(|text| !text.trim().is_empty())
    }

    [
        (MessageKind::Error, present(error)),
        (MessageKind::Success, present(success)),
        (MessageKind::Help, present(help)),
    ]
    .into_iter()
    .find_map(|(kind, text)| {
        text.map(|text| FieldMessage {
            kind,
            text: text.to_string(),
        })
    })
}

/// Caller-supplied content for a field render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldContent<'a> {
    /// Error message.
    pub error: Option<&'a str>,
    /// Success message.
    pub success: Option<&'a str>,
    /// Help text.
    pub help: Option<&'a str>,
    /// Icon in the left gutter.
    pub leading_icon: Option<IconName>,
    /// Icon in the right gutter.
    pub trailing_icon: Option<IconName>,
}

/// Render plan for one text field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldParts {
    /// Wrapper classes.
    pub wrapper_class: &'static str,
    /// Input element classes.
    pub input_class: String,
    /// Message line, if any.
    pub message: Option<FieldMessage>,
    /// Derived validation outcome.
    pub status: FieldStatus,
    /// `aria-invalid`.
    pub invalid: bool,
    /// Left gutter icon.
    pub leading_icon: Option<IconName>,
    /// Right gutter icon.
    pub trailing_icon: Option<IconName>,
    /// `data-ui-state` token.
    pub state: &'static str,
}

impl FieldParts {
    /// Projects a field's style, content and focus state.
    pub fn project(style: &FieldStyle, content: &FieldContent<'_>, focus: FocusState) -> Self {
        let message = select_message(content.error, content.success, content.help);
        let status = match message.as_ref().map(|message| message.kind) {
            Some(MessageKind::Error) => FieldStatus::Error,
            Some(MessageKind::Success) => FieldStatus::Success,
            Some(MessageKind::Help) | None => FieldStatus::Neutral,
        };
        let resolved = FieldStyle {
            status,
            leading_icon: content.leading_icon.is_some(),
            trailing_icon: content.trailing_icon.is_some(),
            ..style.clone()
        };

        Self {
            wrapper_class: resolved.wrapper_classes(),
            input_class: resolved.resolve_input(focus),
            message,
            status,
            invalid: status == FieldStatus::Error,
            leading_icon: content.leading_icon,
            trailing_icon: content.trailing_icon,
            state: focus.token(),
        }
    }
}

/// Render plan for one card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardParts {
    /// Final class string.
    pub class: String,
    /// Header region present.
    pub header: bool,
    /// Title text.
    pub title: Option<String>,
    /// Subtitle text.
    pub subtitle: Option<String>,
    /// Footer region present.
    pub footer: bool,
    /// `role="button"` and `tabindex="0"` for clickable cards.
    pub activatable: bool,
}

impl CardParts {
    /// Projects a card's style and content.
    pub fn project(
        style: &CardStyle,
        title: Option<&str>,
        subtitle: Option<&str>,
        has_footer: bool,
    ) -> Self {
        let title = non_blank(title);
        let subtitle = non_blank(subtitle);

        Self {
            class: style.resolve(),
            header: title.is_some() || subtitle.is_some(),
            title,
            subtitle,
            footer: has_footer,
            activatable: style.interactive,
        }
    }
}

/// Render plan for an open modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalParts {
    /// Full-viewport container classes.
    pub container_class: String,
    /// Backdrop classes.
    pub backdrop_class: String,
    /// Panel classes.
    pub panel_class: String,
    /// Title text.
    pub title: Option<String>,
    /// Subtitle text.
    pub subtitle: Option<String>,
    /// Footer region present.
    pub footer: bool,
    /// Close affordance present.
    pub close_button: bool,
    /// Dismissal rules in effect.
    pub dismissal: DisclosureConfig,
}

/// Static modal content props.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalContent<'a> {
    /// Title text.
    pub title: Option<&'a str>,
    /// Subtitle text.
    pub subtitle: Option<&'a str>,
    /// A footer was supplied.
    pub has_footer: bool,
    /// Render the close affordance.
    pub show_close_button: bool,
}

impl ModalParts {
    /// Projects a modal. Returns `None` while closed, meaning nothing is mounted.
    pub fn project(
        style: &ModalStyle,
        dismissal: DisclosureConfig,
        content: &ModalContent<'_>,
        is_open: bool,
    ) -> Option<Self> {
        if !is_open {
            return None;
        }

        Some(Self {
            container_class: style.resolve_container(),
            backdrop_class: style.resolve_backdrop(),
            panel_class: style.resolve_panel(),
            title: non_blank(content.title),
            subtitle: non_blank(content.subtitle),
            footer: content.has_footer,
            close_button: content.show_close_button,
            dismissal,
        })
    }
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}
