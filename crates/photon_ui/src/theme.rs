//! Theme document, CSS custom-property rendering, and the theme context.
//!
//! A [`PhotonTheme`] is plain serde data so hosts can ship it as JSON. [`ThemeProvider`] renders
//! it as `--photon-*` custom properties on a wrapper element and makes it available to
//! descendants through [`use_theme`].

use leptos::logging;
use leptos::*;
use serde::{Deserialize, Serialize};

use crate::error::ThemeError;
use crate::primitives::merge_layout_class;
use crate::tokens::{AnimationSpeed, BlurLevel, Glow};

/// Library version.
pub const PHOTON_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library-wide defaults used when no theme overrides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhotonDefaults {
    /// Transition speed.
    pub speed: AnimationSpeed,
    /// Glow applied by the theme's effect defaults.
    pub glow: Glow,
    /// Particle layers enabled.
    pub particles: bool,
}

/// Default values shipped with the library.
pub const PHOTON_DEFAULTS: PhotonDefaults = PhotonDefaults {
    speed: AnimationSpeed::Fast,
    glow: Glow::Normal,
    particles: true,
};

/// Color slots rendered as `--photon-<slot>` properties.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColors {
    /// Default action color.
    pub primary: String,
    /// Secondary accent.
    pub secondary: String,
    /// Quantum accent.
    pub quantum: String,
    /// Plasma gradient start.
    pub plasma: String,
    /// Laser border color.
    pub laser: String,
    /// Photon glow color.
    pub photon: String,
    /// Positive outcome color.
    pub success: String,
    /// Destructive color.
    pub danger: String,
    /// Cautionary color.
    pub warning: String,
    /// Dark surface color.
    pub dark: String,
    /// Light surface color.
    pub light: String,
    /// Neutral border and help-text color.
    pub gray: String,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            primary: "#3b82f6".to_string(),
            secondary: "#8b5cf6".to_string(),
            quantum: "#06b6d4".to_string(),
            plasma: "#ec4899".to_string(),
            laser: "#ef4444".to_string(),
            photon: "#facc15".to_string(),
            success: "#10b981".to_string(),
            danger: "#ef4444".to_string(),
            warning: "#f59e0b".to_string(),
            dark: "#0f172a".to_string(),
            light: "#f8fafc".to_string(),
            gray: "#94a3b8".to_string(),
        }
    }
}

impl ThemeColors {
    fn slots(&self) -> [(&'static str, &'static str, &str); 12] {
        [
            ("primary", "colors.primary", &self.primary),
            ("secondary", "colors.secondary", &self.secondary),
            ("quantum", "colors.quantum", &self.quantum),
            ("plasma", "colors.plasma", &self.plasma),
            ("laser", "colors.laser", &self.laser),
            ("photon", "colors.photon", &self.photon),
            ("success", "colors.success", &self.success),
            ("danger", "colors.danger", &self.danger),
            ("warning", "colors.warning", &self.warning),
            ("dark", "colors.dark", &self.dark),
            ("light", "colors.light", &self.light),
            ("gray", "colors.gray", &self.gray),
        ]
    }
}

/// Effect defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeEffects {
    /// Glow intensity exported as `--photon-glow`.
    pub glow: Glow,
    /// Backdrop blur strength.
    pub blur: BlurLevel,
    /// Particle layers enabled; `false` suppresses them everywhere.
    pub particles: bool,
}

impl Default for ThemeEffects {
    fn default() -> Self {
        Self {
            glow: PHOTON_DEFAULTS.glow,
            blur: BlurLevel::Normal,
            particles: PHOTON_DEFAULTS.particles,
        }
    }
}

/// Animation defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeAnimations {
    /// Transition speed for components without an explicit speed.
    pub speed: AnimationSpeed,
    /// CSS easing function.
    pub easing: String,
}

impl Default for ThemeAnimations {
    fn default() -> Self {
        Self {
            speed: PHOTON_DEFAULTS.speed,
            easing: "cubic-bezier(0.4, 0, 0.2, 1)".to_string(),
        }
    }
}

/// Spacing scale exported as `--photon-spacing-<size>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeSpacing {
    /// `--photon-spacing-sm`.
    pub sm: String,
    /// `--photon-spacing-md`.
    pub md: String,
    /// `--photon-spacing-lg`.
    pub lg: String,
    /// `--photon-spacing-xl`.
    pub xl: String,
}

impl Default for ThemeSpacing {
    fn default() -> Self {
        Self {
            sm: "0.5rem".to_string(),
            md: "1rem".to_string(),
            lg: "1.5rem".to_string(),
            xl: "2rem".to_string(),
        }
    }
}

/// Complete theme document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhotonTheme {
    /// Color palette.
    pub colors: ThemeColors,
    /// Effect defaults.
    pub effects: ThemeEffects,
    /// Animation defaults.
    pub animations: ThemeAnimations,
    /// Spacing scale.
    pub spacing: ThemeSpacing,
}

impl BlurLevel {
    /// Blur radius for `backdrop-filter`.
    pub fn css_value(self) -> &'static str {
        match self {
            Self::Subtle => "4px",
            Self::Normal => "12px",
            Self::Strong => "24px",
        }
    }
}

impl PhotonTheme {
    /// Parses and validates a JSON theme document. Missing fields take defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::Parse`] for malformed JSON and [`ThemeError::UnsafeValue`] when a
    /// value could escape its custom-property declaration.
    pub fn from_json(raw: &str) -> Result<Self, ThemeError> {
        let theme: Self = serde_json::from_str(raw)?;
        theme.validate()?;
        Ok(theme)
    }

    /// Like [`PhotonTheme::from_json`], logging the failure and returning the default theme.
    pub fn from_json_or_default(raw: &str) -> Self {
        match Self::from_json(raw) {
            Ok(theme) => theme,
            Err(err) => {
                logging::warn!("theme load failed, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Checks every free-form string value.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError::UnsafeValue`] for the first empty value or value containing
    /// `;`, `{`, `}`, `<` or `>`.
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (slot, value) in self.string_slots() {
            let unsafe_value =
                value.trim().is_empty() || value.contains([';', '{', '}', '<', '>']);
            if unsafe_value {
                return Err(ThemeError::UnsafeValue {
                    slot,
                    value: value.to_string(),
                });
            }
        }
        Ok(())
    }

    fn string_slots(&self) -> Vec<(&'static str, &str)> {
        let mut slots: Vec<(&'static str, &str)> = self
            .colors
            .slots()
            .into_iter()
            .map(|(_, path, value)| (path, value))
            .collect();
        slots.extend([
            ("animations.easing", self.animations.easing.as_str()),
            ("spacing.sm", self.spacing.sm.as_str()),
            ("spacing.md", self.spacing.md.as_str()),
            ("spacing.lg", self.spacing.lg.as_str()),
            ("spacing.xl", self.spacing.xl.as_str()),
        ]);
        slots
    }

    /// Renders the theme as an inline `style` value of custom properties.
    pub fn to_css_variables(&self) -> String {
        let mut declarations: Vec<String> = self
            .colors
            .slots()
            .into_iter()
            .map(|(name, _, value)| format!("--photon-{name}: {value};"))
            .collect();
        declarations.push(format!("--photon-glow: {};", self.effects.glow));
        declarations.push(format!("--photon-blur: {};", self.effects.blur.css_value()));
        declarations.push(format!(
            "--photon-duration: {}ms;",
            self.animations.speed.millis()
        ));
        declarations.push(format!("--photon-easing: {};", self.animations.easing));
        declarations.push(format!("--photon-spacing-sm: {};", self.spacing.sm));
        declarations.push(format!("--photon-spacing-md: {};", self.spacing.md));
        declarations.push(format!("--photon-spacing-lg: {};", self.spacing.lg));
        declarations.push(format!("--photon-spacing-xl: {};", self.spacing.xl));
        declarations.join(" ")
    }
}

/// Current theme from context, or the default theme outside a [`ThemeProvider`].
pub fn use_theme() -> PhotonTheme {
    use_context::<PhotonTheme>().unwrap_or_default()
}

#[component]
/// Scopes a theme to its children and renders it as CSS custom properties.
pub fn ThemeProvider(
    #[prop(optional)] theme: Option<PhotonTheme>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let theme = theme.unwrap_or_default();
    let style = theme.to_css_variables();
    provide_context(theme);

    view! {
        <div
            class=merge_layout_class("photon-theme", layout_class)
            style=style
            data-ui-primitive="true"
            data-ui-kind="theme"
        >
            {children()}
        </div>
    }
}
