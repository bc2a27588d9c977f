#![forbid(unsafe_code)]

//! Diagnostic introspection for dynamic colors.
//!
//! Diagnostics only list variants that matter: a variant is shown when every
//! axis it is distinguished by is one the color actually depends on. The
//! variant(s) equal to the effective value are bracketed so it is obvious
//! which stored value is in use.
//!
//! ```text
//! systemBlue(color = Color(0xFF007AFF), [darkColor = Color(0xFF0A84FF)], highContrastColor = ..., resolved by: window)
//! ```

use std::fmt;

use shade_core::ColorValue;

use crate::dynamic::DynamicColor;

/// Shown in place of a context name for never-resolved colors.
pub const UNRESOLVED: &str = "UNRESOLVED";
/// Shown when the resolving context no longer exists.
pub const DROPPED_CONTEXT: &str = "(dropped)";

/// Value carried by a [`DiagnosticProperty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticValue {
    /// A stored color variant.
    Color(ColorValue),
    /// Free-form text (labels, context names).
    Text(String),
}

impl fmt::Display for DiagnosticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(value) => fmt::Display::fmt(value, f),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// One named entry in a dynamic color's diagnostic listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticProperty {
    /// Property name (`debugLabel`, a variant name, or `last resolved`).
    pub name: &'static str,
    /// Property value.
    pub value: DiagnosticValue,
    /// True for variants equal to the effective value.
    pub effective: bool,
}

impl fmt::Display for DiagnosticProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.effective {
            write!(f, "[{} = {}]", self.name, self.value)
        } else {
            write!(f, "{} = {}", self.name, self.value)
        }
    }
}

impl DynamicColor {
    /// Variants that are not redundant given the dependency flags, in
    /// diagnostic order.
    #[must_use]
    pub fn visible_variants(&self) -> Vec<(&'static str, ColorValue)> {
        let brightness = self.is_brightness_dependent();
        let contrast = self.is_contrast_dependent();
        let elevation = self.is_elevation_dependent();
        let gates = [
            true,
            brightness,
            contrast,
            brightness && contrast,
            elevation,
            brightness && elevation,
            contrast && elevation,
            brightness && contrast && elevation,
        ];

        self.variants
            .named()
            .into_iter()
            .zip(gates)
            .filter_map(|(entry, shown)| shown.then_some(entry))
            .collect()
    }

    /// Describe which context produced this color.
    #[must_use]
    pub fn resolution_source(&self) -> String {
        match &self.resolved_by {
            None => String::from(UNRESOLVED),
            Some(handle) => handle
                .upgrade()
                .map_or_else(|| String::from(DROPPED_CONTEXT), |ctx| ctx.debug_name()),
        }
    }

    /// Structured diagnostic listing: the label (if any), the visible
    /// variants, and the resolving context (if resolved).
    #[must_use]
    pub fn debug_properties(&self) -> Vec<DiagnosticProperty> {
        let mut properties = Vec::with_capacity(10);
        if let Some(label) = self.debug_label() {
            properties.push(DiagnosticProperty {
                name: "debugLabel",
                value: DiagnosticValue::Text(label.to_string()),
                effective: false,
            });
        }
        properties.extend(self.visible_variants().into_iter().map(|(name, value)| {
            DiagnosticProperty {
                name,
                value: DiagnosticValue::Color(value),
                effective: value == self.effective,
            }
        }));
        if self.is_resolved() {
            properties.push(DiagnosticProperty {
                name: "last resolved",
                value: DiagnosticValue::Text(self.resolution_source()),
                effective: false,
            });
        }
        properties
    }

    /// One-line description, e.g.
    /// `label(color = Color(0xFF000000), [darkColor = Color(0xFFFFFFFF)], resolved by: ctx)`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.debug_label().unwrap_or("DynamicColor"))?;
        for (name, value) in self.visible_variants() {
            let entry = DiagnosticProperty {
                name,
                value: DiagnosticValue::Color(value),
                effective: value == self.effective,
            };
            write!(f, "{entry}, ")?;
        }
        write!(f, "resolved by: {})", self.resolution_source())
    }
}
