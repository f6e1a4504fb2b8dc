//! Centralized stroke icon set used by component icon slots.

use leptos::*;

use crate::tokens::ComponentSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Icons available to `leading_icon` / `trailing_icon` slots.
pub enum IconName {
    /// Right-pointing arrow.
    ArrowRight,
    /// Left-pointing arrow.
    ArrowLeft,
    /// Check mark.
    Check,
    /// Cross, used by the modal close affordance.
    Close,
    /// Magnifier.
    Search,
    /// Envelope.
    Mail,
    /// Padlock.
    Lock,
    /// Person silhouette.
    User,
    /// Five-point star.
    Star,
    /// Lightning bolt.
    Bolt,
    /// Circled "i".
    Info,
    /// Warning triangle.
    Alert,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
            Self::Check => "check",
            Self::Close => "close",
            Self::Search => "search",
            Self::Mail => "mail",
            Self::Lock => "lock",
            Self::User => "user",
            Self::Star => "star",
            Self::Bolt => "bolt",
            Self::Info => "info",
            Self::Alert => "alert",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::ArrowRight => &["M5 12h14", "M13 5l7 7-7 7"],
            Self::ArrowLeft => &["M19 12H5", "M11 19l-7-7 7-7"],
            Self::Check => &["M5 13l4 4L19 7"],
            Self::Close => &["M6 6l12 12", "M18 6L6 18"],
            Self::Search => &["M11 18a7 7 0 1 0 0-14 7 7 0 0 0 0 14z", "M21 21l-4.35-4.35"],
            Self::Mail => &["M3 6h18v12H3z", "M3 6l9 7 9-7"],
            Self::Lock => &["M6 11h12v10H6z", "M8 11V7a4 4 0 0 1 8 0v4"],
            Self::User => &["M12 12a4 4 0 1 0 0-8 4 4 0 0 0 0 8z", "M4 21a8 8 0 0 1 16 0"],
            Self::Star => {
                &["M12 3l2.8 5.7 6.2.9-4.5 4.4 1 6.2L12 17.3 6.5 20.2l1-6.2L3 9.6l6.2-.9z"]
            }
            Self::Bolt => &["M13 2L4 14h7l-1 8 9-12h-7z"],
            Self::Info => &["M12 21a9 9 0 1 0 0-18 9 9 0 0 0 0 18z", "M12 11v5", "M12 8h.01"],
            Self::Alert => &["M12 3l9.5 17h-19z", "M12 10v4", "M12 17h.01"],
        }
    }
}

#[component]
/// Decorative stroke icon. Always `aria-hidden`; label the owning control instead.
pub fn Icon(
    icon: IconName,
    #[prop(default = ComponentSize::Md)] size: ComponentSize,
) -> impl IntoView {
    let paths = icon
        .paths()
        .iter()
        .map(|d| view! { <path d={*d}></path> })
        .collect_view();

    view! {
        <svg
            class=format!("photon-icon shrink-0 {}", size.icon_classes())
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            data-ui-icon=icon.token()
        >
            {paths}
        </svg>
    }
}
