#![forbid(unsafe_code)]

//! Resolution contexts: where the current axis values come from.
//!
//! A [`ResolutionContext`] reports the display brightness, the accessibility
//! contrast setting and the surface elevation level. Every accessor returns an
//! `Option`: a context is free to not know an axis, and the resolver decides
//! what to do about it (default in lenient mode, fail in strict mode).
//!
//! # Example
//! ```
//! use shade_style::context::{Brightness, ResolutionContext, StaticContext};
//!
//! let ctx = StaticContext::new()
//!     .named("settings-sheet")
//!     .with_brightness(Brightness::Dark);
//! assert_eq!(ctx.brightness(), Some(Brightness::Dark));
//! assert_eq!(ctx.high_contrast_enabled(), None);
//! ```

use std::env;
use std::fmt;

/// Display brightness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Brightness {
    /// Normal (light) appearance.
    #[default]
    Light,
    /// Dark appearance.
    Dark,
}

impl Brightness {
    /// Whether this is the dark appearance.
    #[inline]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

impl fmt::Display for Brightness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Light => "light",
            Self::Dark => "dark",
        })
    }
}

/// Surface elevation level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ElevationLevel {
    /// Base layer (the window background).
    #[default]
    Base,
    /// Elevated layer (sheets, popovers, modal content).
    Elevated,
}

impl ElevationLevel {
    /// Whether this is the elevated layer.
    #[inline]
    pub const fn is_elevated(self) -> bool {
        matches!(self, Self::Elevated)
    }
}

impl fmt::Display for ElevationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Base => "base",
            Self::Elevated => "elevated",
        })
    }
}

/// Read-only source of the current axis values.
///
/// Implemented by whatever owns the environment (a theme scope, a window, a
/// test harness). Resolution only borrows the context and keeps a weak
/// handle to it for diagnostics, so implementors must be shareable across
/// threads.
pub trait ResolutionContext: Send + Sync {
    /// Current display brightness, if known.
    fn brightness(&self) -> Option<Brightness>;

    /// Whether the high-contrast accessibility setting is on, if known.
    fn high_contrast_enabled(&self) -> Option<bool>;

    /// Current surface elevation, if known.
    fn elevation_level(&self) -> Option<ElevationLevel>;

    /// Name shown in diagnostics as "resolved by".
    fn debug_name(&self) -> String {
        String::from("context")
    }
}

/// Environment variable read for the high-contrast flag.
pub const HIGH_CONTRAST_ENV: &str = "SHADE_HIGH_CONTRAST";

/// A context holding fixed, optionally unknown, axis values.
///
/// This is the plain-data context used by tests, headless rendering and
/// configuration files.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StaticContext {
    /// Name shown in diagnostics.
    pub name: Option<String>,
    /// Reported brightness.
    pub brightness: Option<Brightness>,
    /// Reported high-contrast flag.
    pub high_contrast: Option<bool>,
    /// Reported elevation level.
    pub elevation: Option<ElevationLevel>,
}

impl StaticContext {
    /// A context that reports nothing.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            name: None,
            brightness: None,
            high_contrast: None,
            elevation: None,
        }
    }

    /// Set the diagnostic name.
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Report a brightness.
    #[must_use]
    pub const fn with_brightness(mut self, brightness: Brightness) -> Self {
        self.brightness = Some(brightness);
        self
    }

    /// Report the high-contrast flag.
    #[must_use]
    pub const fn with_high_contrast(mut self, enabled: bool) -> Self {
        self.high_contrast = Some(enabled);
        self
    }

    /// Report an elevation level.
    #[must_use]
    pub const fn with_elevation(mut self, level: ElevationLevel) -> Self {
        self.elevation = Some(level);
        self
    }

    /// Build a context from the process environment.
    ///
    /// Brightness comes from `COLORFGBG`, high contrast from
    /// [`HIGH_CONTRAST_ENV`]. Elevation is a property of the surface being
    /// painted, not of the process, so it is left unknown.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_values(
            env::var("COLORFGBG").ok().as_deref(),
            env::var(HIGH_CONTRAST_ENV).ok().as_deref(),
        )
    }

    fn from_env_values(colorfgbg: Option<&str>, high_contrast: Option<&str>) -> Self {
        Self {
            name: Some(String::from("environment")),
            brightness: brightness_from_colorfgbg(colorfgbg),
            high_contrast: parse_flag(high_contrast),
            elevation: None,
        }
    }
}

/// Brightness implied by a `COLORFGBG` value.
///
/// The format is `fg;bg` (sometimes with extra fields) where values are ANSI
/// color indices; the last field is the background. Backgrounds 7 and 15 are
/// light, any other index is dark, anything unparsable is unknown.
fn brightness_from_colorfgbg(colorfgbg: Option<&str>) -> Option<Brightness> {
    let bg = colorfgbg?.split(';').next_back()?.trim().parse::<u8>().ok()?;
    if bg == 7 || bg == 15 {
        Some(Brightness::Light)
    } else {
        Some(Brightness::Dark)
    }
}

fn parse_flag(value: Option<&str>) -> Option<bool> {
    match value?.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

impl ResolutionContext for StaticContext {
    fn brightness(&self) -> Option<Brightness> {
        self.brightness
    }

    fn high_contrast_enabled(&self) -> Option<bool> {
        self.high_contrast
    }

    fn elevation_level(&self) -> Option<ElevationLevel> {
        self.elevation
    }

    fn debug_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        fn show<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| String::from("?"), |v| v.to_string())
        }
        format!(
            "StaticContext(brightness: {}, high contrast: {}, elevation: {})",
            show(self.brightness),
            show(self.high_contrast),
            show(self.elevation)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_reports_nothing() {
        let ctx = StaticContext::new();
        assert_eq!(ctx.brightness(), None);
        assert_eq!(ctx.high_contrast_enabled(), None);
        assert_eq!(ctx.elevation_level(), None);
        assert_eq!(ctx, StaticContext::default());
    }

    #[test]
    fn setters_chain() {
        let ctx = StaticContext::new()
            .with_brightness(Brightness::Dark)
            .with_high_contrast(true)
            .with_elevation(ElevationLevel::Elevated);
        assert_eq!(ctx.brightness(), Some(Brightness::Dark));
        assert_eq!(ctx.high_contrast_enabled(), Some(true));
        assert_eq!(ctx.elevation_level(), Some(ElevationLevel::Elevated));
    }

    #[test]
    fn debug_name_prefers_explicit_name() {
        let ctx = StaticContext::new().named("popover");
        assert_eq!(ctx.debug_name(), "popover");
    }

    #[test]
    fn debug_name_summarizes_unnamed_context() {
        let ctx = StaticContext::new().with_brightness(Brightness::Dark);
        assert_eq!(
            ctx.debug_name(),
            "StaticContext(brightness: dark, high contrast: ?, elevation: ?)"
        );
    }

    #[test]
    fn colorfgbg_dark_background() {
        assert_eq!(brightness_from_colorfgbg(Some("15;0")), Some(Brightness::Dark));
    }

    #[test]
    fn colorfgbg_light_backgrounds() {
        assert_eq!(brightness_from_colorfgbg(Some("0;15")), Some(Brightness::Light));
        assert_eq!(brightness_from_colorfgbg(Some("0;7")), Some(Brightness::Light));
    }

    #[test]
    fn colorfgbg_uses_last_field() {
        assert_eq!(
            brightness_from_colorfgbg(Some("0;default;15")),
            Some(Brightness::Light)
        );
        assert_eq!(brightness_from_colorfgbg(Some("0; 15 ")), Some(Brightness::Light));
    }

    #[test]
    fn colorfgbg_unknown_when_missing_or_malformed() {
        assert_eq!(brightness_from_colorfgbg(None), None);
        assert_eq!(brightness_from_colorfgbg(Some("")), None);
        assert_eq!(brightness_from_colorfgbg(Some("0;abc")), None);
    }

    #[test]
    fn flag_parsing() {
        assert_eq!(parse_flag(Some("1")), Some(true));
        assert_eq!(parse_flag(Some(" TRUE ")), Some(true));
        assert_eq!(parse_flag(Some("off")), Some(false));
        assert_eq!(parse_flag(Some("maybe")), None);
        assert_eq!(parse_flag(None), None);
    }

    #[test]
    fn env_values_never_set_elevation() {
        let ctx = StaticContext::from_env_values(Some("0;0"), Some("yes"));
        assert_eq!(ctx.brightness(), Some(Brightness::Dark));
        assert_eq!(ctx.high_contrast_enabled(), Some(true));
        assert_eq!(ctx.elevation_level(), None);
        assert_eq!(ctx.debug_name(), "environment");
    }

    #[test]
    fn from_env_does_not_panic() {
        let _ = StaticContext::from_env();
    }

    #[test]
    fn defaults_are_light_and_base() {
        assert_eq!(Brightness::default(), Brightness::Light);
        assert_eq!(ElevationLevel::default(), ElevationLevel::Base);
        assert!(Brightness::Dark.is_dark());
        assert!(ElevationLevel::Elevated.is_elevated());
    }
}
