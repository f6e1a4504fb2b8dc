//! Per-instance interaction state and the modal dismissal rules.

use leptos::*;
use serde::{Deserialize, Serialize};

/// Focus state of an input-like component. Starts blurred.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FocusState {
    /// The element does not hold focus.
    #[default]
    Blurred,
    /// The element holds focus.
    Focused,
}

impl FocusState {
    /// Transition for a native `focus` event.
    pub fn on_focus(self) -> Self {
        Self::Focused
    }

    /// Transition for a native `blur` event.
    pub fn on_blur(self) -> Self {
        Self::Blurred
    }

    /// Whether the element holds focus.
    pub fn is_focused(self) -> bool {
        self == Self::Focused
    }

    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Blurred => "blurred",
            Self::Focused => "focused",
        }
    }
}

/// Open/closed state of a disclosure component. Starts closed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DisclosureState {
    /// Content is not mounted.
    #[default]
    Closed,
    /// Content is mounted.
    Open,
}

impl DisclosureState {
    /// Transition for an open request.
    pub fn open(self) -> Self {
        Self::Open
    }

    /// Transition for a close request.
    pub fn close(self) -> Self {
        Self::Closed
    }

    /// Flips between open and closed.
    pub fn toggle(self) -> Self {
        match self {
            Self::Closed => Self::Open,
            Self::Open => Self::Closed,
        }
    }

    /// Whether content is mounted.
    pub fn is_open(self) -> bool {
        self == Self::Open
    }
}

/// What asked a disclosure component to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DismissReason {
    /// The explicit close affordance.
    CloseButton,
    /// A click on the backdrop outside the panel.
    Backdrop,
    /// The Escape key.
    Escape,
}

impl DismissReason {
    /// Maps a `keydown` key to the dismissal it requests, if any.
    pub fn from_key(key: &str) -> Option<Self> {
        matches!(key, "Escape" | "Esc").then_some(Self::Escape)
    }
}

/// Which dismissal paths a modal honors. The close button is always honored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisclosureConfig {
    /// Backdrop clicks close the modal.
    pub close_on_backdrop: bool,
    /// The Escape key closes the modal.
    pub close_on_escape: bool,
}

impl Default for DisclosureConfig {
    fn default() -> Self {
        Self {
            close_on_backdrop: true,
            close_on_escape: true,
        }
    }
}

impl DisclosureConfig {
    /// Whether `reason` should close a modal whose open flag is `is_open`.
    pub fn should_dismiss(&self, is_open: bool, reason: DismissReason) -> bool {
        if !is_open {
            return false;
        }
        match reason {
            DismissReason::CloseButton => true,
            DismissReason::Backdrop => self.close_on_backdrop,
            DismissReason::Escape => self.close_on_escape,
        }
    }

    /// Whether a window-level key listener is needed for a modal whose open flag is `is_open`.
    pub fn listens_for_escape(&self, is_open: bool) -> bool {
        is_open && self.close_on_escape
    }

    /// Calls `notify` once when the dismissal is accepted and reports whether it was.
    pub fn dismiss(&self, is_open: bool, reason: DismissReason, notify: impl FnOnce()) -> bool {
        let accepted = self.should_dismiss(is_open, reason);
        if accepted {
            notify();
        }
        accepted
    }
}

/// Caller-owned open flag for a disclosure component.
///
/// The modal only reads [`DisclosureHandle::is_open`]; closing it is always the owner's call,
/// typically from the modal's `on_close` callback.
#[derive(Debug, Clone, Copy)]
pub struct DisclosureHandle {
    state: RwSignal<DisclosureState>,
}

impl DisclosureHandle {
    /// Requests the open state.
    pub fn open(&self) {
        self.state.update(|state| *state = state.open());
    }

    /// Requests the closed state.
    pub fn close(&self) {
        self.state.update(|state| *state = state.close());
    }

    /// Flips the state.
    pub fn toggle(&self) {
        self.state.update(|state| *state = state.toggle());
    }

    /// Current state, tracked.
    pub fn state(&self) -> DisclosureState {
        self.state.get()
    }

    /// Reactive open flag suitable for a modal's `is_open` prop.
    pub fn is_open(&self) -> Signal<bool> {
        let state = self.state;
        Signal::derive(move || state.get().is_open())
    }
}

/// Creates a [`DisclosureHandle`] owned by the calling component.
pub fn use_disclosure(initially_open: bool) -> DisclosureHandle {
    let initial = if initially_open {
        DisclosureState::Open
    } else {
        DisclosureState::Closed
    };
    DisclosureHandle {
        state: create_rw_signal(initial),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn focus_transitions() {
        let state = FocusState::default();
        assert_eq!(state, FocusState::Blurred);
        let state = state.on_focus();
        assert!(state.is_focused());
        assert_eq!(state.on_focus(), FocusState::Focused);
        assert_eq!(state.on_blur(), FocusState::Blurred);
        assert_eq!(FocusState::Blurred.on_blur(), FocusState::Blurred);
    }

    #[test]
    fn disclosure_transitions() {
        let state = DisclosureState::default();
        assert!(!state.is_open());
        assert_eq!(state.open(), DisclosureState::Open);
        assert_eq!(state.open().close(), DisclosureState::Closed);
        assert_eq!(state.toggle().toggle(), DisclosureState::Closed);
    }

    #[test]
    fn closed_modal_never_dismisses() {
        let config = DisclosureConfig::default();
        for reason in [
            DismissReason::CloseButton,
            DismissReason::Backdrop,
            DismissReason::Escape,
        ] {
            assert!(!config.should_dismiss(false, reason));
        }
    }

    #[test]
    fn dismissal_flags_gate_backdrop_and_escape_only() {
        let locked = DisclosureConfig {
            close_on_backdrop: false,
            close_on_escape: false,
        };
        assert!(locked.should_dismiss(true, DismissReason::CloseButton));
        assert!(!locked.should_dismiss(true, DismissReason::Backdrop));
        assert!(!locked.should_dismiss(true, DismissReason::Escape));

        let open = DisclosureConfig::default();
        assert!(open.should_dismiss(true, DismissReason::Backdrop));
        assert!(open.should_dismiss(true, DismissReason::Escape));
    }

    #[test]
    fn accepted_dismissal_notifies_exactly_once() {
        let calls = Cell::new(0);
        let config = DisclosureConfig::default();

        assert!(config.dismiss(true, DismissReason::CloseButton, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);

        let locked = DisclosureConfig {
            close_on_backdrop: false,
            ..config
        };
        assert!(!locked.dismiss(true, DismissReason::Backdrop, || calls.set(calls.get() + 1)));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn escape_listener_only_while_open_and_enabled() {
        let config = DisclosureConfig::default();
        assert!(config.listens_for_escape(true));
        assert!(!config.listens_for_escape(false));

        let no_escape = DisclosureConfig {
            close_on_escape: false,
            ..config
        };
        assert!(!no_escape.listens_for_escape(true));
    }

    #[test]
    fn only_escape_keys_request_dismissal() {
        assert_eq!(DismissReason::from_key("Escape"), Some(DismissReason::Escape));
        assert_eq!(DismissReason::from_key("Esc"), Some(DismissReason::Escape));
        assert_eq!(DismissReason::from_key("Enter"), None);
        assert_eq!(DismissReason::from_key("escape"), None);
    }

    #[test]
    fn disclosure_config_defaults_to_both_paths() {
        let config: DisclosureConfig =
            serde_json::from_str(r#"{"close_on_escape": false}"#).unwrap();
        assert_eq!(
            config,
            DisclosureConfig {
                close_on_backdrop: true,
                close_on_escape: false,
            }
        );
    }

    #[test]
    fn disclosure_handle_drives_open_signal() {
        let runtime = create_runtime();

        let handle = use_disclosure(false);
        let is_open = handle.is_open();
        assert!(!is_open.get());
        handle.open();
        assert!(is_open.get());
        assert_eq!(handle.state(), DisclosureState::Open);
        handle.toggle();
        assert!(!is_open.get());
        handle.open();
        handle.close();
        assert_eq!(handle.state(), DisclosureState::Closed);

        runtime.dispose();
    }
}
