#![forbid(unsafe_code)]

//! Context-dependent colors.
//!
//! A [`DynamicColor`] stores eight precomputed [`ColorValue`]s, one per
//! combination of three binary axes (brightness, contrast, elevation), and
//! picks one of them when resolved against a [`ResolutionContext`].
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use shade_core::ColorValue;
//! use shade_style::context::{Brightness, StaticContext};
//! use shade_style::dynamic::DynamicColor;
//!
//! let gray = DynamicColor::with_brightness(
//!     ColorValue::new(0xFF99_9999),
//!     ColorValue::new(0xFF75_7575),
//! )
//! .labeled("inactiveGray");
//!
//! let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Dark));
//! let resolved = gray.resolve(&ctx, true).unwrap();
//! assert_eq!(resolved.effective(), ColorValue::new(0xFF75_7575));
//! ```

use std::borrow::Cow;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

use shade_core::{Axis, ColorError, ColorValue};

use crate::context::{Brightness, ElevationLevel, ResolutionContext};

/// The eight variants of a dynamic color.
///
/// Field names spell out the axis values they are selected for; anything not
/// named is the normal value of that axis (light, normal contrast, base
/// elevation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variants {
    /// Light, normal contrast, base.
    pub color: ColorValue,
    /// Dark, normal contrast, base.
    pub dark_color: ColorValue,
    /// Light, high contrast, base.
    pub high_contrast_color: ColorValue,
    /// Dark, high contrast, base.
    pub dark_high_contrast_color: ColorValue,
    /// Light, normal contrast, elevated.
    pub elevated_color: ColorValue,
    /// Dark, normal contrast, elevated.
    pub dark_elevated_color: ColorValue,
    /// Light, high contrast, elevated.
    pub high_contrast_elevated_color: ColorValue,
    /// Dark, high contrast, elevated.
    pub dark_high_contrast_elevated_color: ColorValue,
}

impl Variants {
    /// All eight variants set to the same value.
    #[must_use]
    pub const fn uniform(color: ColorValue) -> Self {
        Self {
            color,
            dark_color: color,
            high_contrast_color: color,
            dark_high_contrast_color: color,
            elevated_color: color,
            dark_elevated_color: color,
            high_contrast_elevated_color: color,
            dark_high_contrast_elevated_color: color,
        }
    }

    /// The variant stored for the given axis values.
    #[must_use]
    pub const fn select(
        &self,
        brightness: Brightness,
        high_contrast: bool,
        elevation: ElevationLevel,
    ) -> ColorValue {
        match (brightness, high_contrast, elevation) {
            (Brightness::Light, false, ElevationLevel::Base) => self.color,
            (Brightness::Light, true, ElevationLevel::Base) => self.high_contrast_color,
            (Brightness::Light, false, ElevationLevel::Elevated) => self.elevated_color,
            (Brightness::Light, true, ElevationLevel::Elevated) => {
                self.high_contrast_elevated_color
            }
            (Brightness::Dark, false, ElevationLevel::Base) => self.dark_color,
            (Brightness::Dark, true, ElevationLevel::Base) => self.dark_high_contrast_color,
            (Brightness::Dark, false, ElevationLevel::Elevated) => self.dark_elevated_color,
            (Brightness::Dark, true, ElevationLevel::Elevated) => {
                self.dark_high_contrast_elevated_color
            }
        }
    }

    /// The eight variants with their display names, in diagnostic order.
    #[must_use]
    pub const fn named(&self) -> [(&'static str, ColorValue); 8] {
        [
            ("color", self.color),
            ("darkColor", self.dark_color),
            ("highContrastColor", self.high_contrast_color),
            ("darkHighContrastColor", self.dark_high_contrast_color),
            ("elevatedColor", self.elevated_color),
            ("darkElevatedColor", self.dark_elevated_color),
            ("highContrastElevatedColor", self.high_contrast_elevated_color),
            (
                "darkHighContrastElevatedColor",
                self.dark_high_contrast_elevated_color,
            ),
        ]
    }

    /// Whether any two variants differing only in brightness are unequal.
    #[must_use]
    pub fn is_brightness_dependent(&self) -> bool {
        self.color != self.dark_color
            || self.elevated_color != self.dark_elevated_color
            || self.high_contrast_color != self.dark_high_contrast_color
            || self.high_contrast_elevated_color != self.dark_high_contrast_elevated_color
    }

    /// Whether any two variants differing only in contrast are unequal.
    #[must_use]
    pub fn is_contrast_dependent(&self) -> bool {
        self.color != self.high_contrast_color
            || self.dark_color != self.dark_high_contrast_color
            || self.elevated_color != self.high_contrast_elevated_color
            || self.dark_elevated_color != self.dark_high_contrast_elevated_color
    }

    /// Whether any two variants differing only in elevation are unequal.
    #[must_use]
    pub fn is_elevation_dependent(&self) -> bool {
        self.color != self.elevated_color
            || self.dark_color != self.dark_elevated_color
            || self.high_contrast_color != self.high_contrast_elevated_color
            || self.dark_high_contrast_color != self.dark_high_contrast_elevated_color
    }

    /// Whether the given variant is stored in any slot.
    #[must_use]
    pub fn contains(&self, value: ColorValue) -> bool {
        self.named().iter().any(|(_, v)| *v == value)
    }
}

/// A color whose concrete value depends on the rendering environment.
///
/// Instances are immutable. [`DynamicColor::resolve`] returns a new instance
/// whose effective value is the selected variant; the receiver stays
/// unresolved (or keeps its previous resolution).
///
/// Equality compares the effective value and all eight variants. The debug
/// label and the resolving context are ignored.
#[derive(Clone)]
pub struct DynamicColor {
    pub(crate) variants: Variants,
    pub(crate) effective: ColorValue,
    pub(crate) debug_label: Option<Cow<'static, str>>,
    pub(crate) resolved_by: Option<Weak<dyn ResolutionContext>>,
}

/// Per-axis answers gathered from a context before selection.
///
/// `None` means the axis is relevant to this color but the context could not
/// report it.
struct AxisQuery {
    brightness: Option<Brightness>,
    high_contrast: Option<bool>,
    elevation: Option<ElevationLevel>,
}

impl AxisQuery {
    fn first_missing(&self) -> Option<Axis> {
        if self.brightness.is_none() {
            Some(Axis::Brightness)
        } else if self.high_contrast.is_none() {
            Some(Axis::Contrast)
        } else if self.elevation.is_none() {
            Some(Axis::Elevation)
        } else {
            None
        }
    }
}

impl DynamicColor {
    /// Build from all eight variants.
    #[must_use]
    pub const fn from_variants(variants: Variants) -> Self {
        Self {
            variants,
            effective: variants.color,
            debug_label: None,
            resolved_by: None,
        }
    }

    /// Start a builder that requires every variant to be supplied.
    #[must_use]
    pub fn builder() -> DynamicColorBuilder {
        DynamicColorBuilder::default()
    }

    /// A color that varies with brightness and contrast but not elevation.
    ///
    /// Each elevated variant equals its base counterpart.
    #[must_use]
    pub const fn with_brightness_and_contrast(
        color: ColorValue,
        dark_color: ColorValue,
        high_contrast_color: ColorValue,
        dark_high_contrast_color: ColorValue,
    ) -> Self {
        Self::from_variants(Variants {
            color,
            dark_color,
            high_contrast_color,
            dark_high_contrast_color,
            elevated_color: color,
            dark_elevated_color: dark_color,
            high_contrast_elevated_color: high_contrast_color,
            dark_high_contrast_elevated_color: dark_high_contrast_color,
        })
    }

    /// A color that varies with brightness only.
    #[must_use]
    pub const fn with_brightness(color: ColorValue, dark_color: ColorValue) -> Self {
        Self::with_brightness_and_contrast(color, dark_color, color, dark_color)
    }

    /// Attach a debug label.
    #[must_use]
    pub fn labeled(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    /// The debug label, if any.
    #[must_use]
    pub fn debug_label(&self) -> Option<&str> {
        self.debug_label.as_deref()
    }

    /// The stored variants.
    #[inline]
    pub const fn variants(&self) -> &Variants {
        &self.variants
    }

    /// The value selected by the most recent resolution, or the base variant
    /// if this color was never resolved.
    #[inline]
    pub const fn effective(&self) -> ColorValue {
        self.effective
    }

    /// Packed `0xAARRGGBB` of the effective value.
    #[inline]
    pub const fn value(&self) -> u32 {
        self.effective.value()
    }

    /// The variant stored for the given axis values, ignoring resolution.
    #[must_use]
    pub const fn variant(
        &self,
        brightness: Brightness,
        high_contrast: bool,
        elevation: ElevationLevel,
    ) -> ColorValue {
        self.variants.select(brightness, high_contrast, elevation)
    }

    /// Whether brightness changes the stored value.
    #[must_use]
    pub fn is_brightness_dependent(&self) -> bool {
        self.variants.is_brightness_dependent()
    }

    /// Whether the high-contrast setting changes the stored value.
    #[must_use]
    pub fn is_contrast_dependent(&self) -> bool {
        self.variants.is_contrast_dependent()
    }

    /// Whether elevation changes the stored value.
    #[must_use]
    pub fn is_elevation_dependent(&self) -> bool {
        self.variants.is_elevation_dependent()
    }

    /// Whether this instance was produced by a resolution.
    #[must_use]
    pub const fn is_resolved(&self) -> bool {
        self.resolved_by.is_some()
    }

    /// The context that produced this instance, if it is still alive.
    #[must_use]
    pub fn resolved_by(&self) -> Option<Arc<dyn ResolutionContext>> {
        self.resolved_by.as_ref().and_then(Weak::upgrade)
    }

    /// Resolve against `context`.
    ///
    /// Only axes this color depends on are read from the context. When a
    /// relevant axis is unavailable, `allow_missing_context` decides: `true`
    /// falls back to light / normal contrast / base, `false` fails with
    /// [`ColorError::MissingDependency`] naming the first such axis.
    ///
    /// The returned instance keeps every variant and the label, and holds a
    /// weak handle to `context` for diagnostics.
    pub fn resolve<C>(&self, context: &Arc<C>, allow_missing_context: bool) -> Result<Self, ColorError>
    where
        C: ResolutionContext + 'static,
    {
        let context: Arc<dyn ResolutionContext> = context.clone();
        self.resolve_dyn(&context, allow_missing_context)
    }

    /// [`DynamicColor::resolve`] for a type-erased context, such as the one
    /// returned by [`DynamicColor::resolved_by`].
    pub fn resolve_dyn(
        &self,
        context: &Arc<dyn ResolutionContext>,
        allow_missing_context: bool,
    ) -> Result<Self, ColorError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dynamic_color_resolve",
            label = self.debug_label().unwrap_or("unlabeled"),
            strict = !allow_missing_context
        )
        .entered();

        let query = self.query(context.as_ref());
        if !allow_missing_context && let Some(axis) = query.first_missing() {
            #[cfg(feature = "tracing")]
            tracing::debug!(axis = axis.as_str(), "strict resolution missing context axis");
            return Err(ColorError::MissingDependency { axis });
        }
        Ok(self.finish(&query, context))
    }

    /// Resolve against `context`, defaulting any unavailable axis.
    ///
    /// Equivalent to `resolve(context, true)`, which cannot fail.
    #[must_use]
    pub fn resolve_lenient<C>(&self, context: &Arc<C>) -> Self
    where
        C: ResolutionContext + 'static,
    {
        let context: Arc<dyn ResolutionContext> = context.clone();
        self.resolve_lenient_dyn(&context)
    }

    /// [`DynamicColor::resolve_lenient`] for a type-erased context.
    #[must_use]
    pub fn resolve_lenient_dyn(&self, context: &Arc<dyn ResolutionContext>) -> Self {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "dynamic_color_resolve",
            label = self.debug_label().unwrap_or("unlabeled"),
            strict = false
        )
        .entered();

        let query = self.query(context.as_ref());
        self.finish(&query, context)
    }

    fn query(&self, context: &dyn ResolutionContext) -> AxisQuery {
        AxisQuery {
            brightness: if self.is_brightness_dependent() {
                context.brightness()
            } else {
                Some(Brightness::Light)
            },
            high_contrast: if self.is_contrast_dependent() {
                context.high_contrast_enabled()
            } else {
                Some(false)
            },
            elevation: if self.is_elevation_dependent() {
                context.elevation_level()
            } else {
                Some(ElevationLevel::Base)
            },
        }
    }

    fn finish(&self, query: &AxisQuery, context: &Arc<dyn ResolutionContext>) -> Self {
        #[cfg(feature = "tracing")]
        for axis in Axis::ALL {
            let missing = match axis {
                Axis::Brightness => query.brightness.is_none(),
                Axis::Contrast => query.high_contrast.is_none(),
                Axis::Elevation => query.elevation.is_none(),
            };
            if missing {
                tracing::trace!(axis = axis.as_str(), "context axis unavailable, using default");
            }
        }

        let selected = self.variants.select(
            query.brightness.unwrap_or_default(),
            query.high_contrast.unwrap_or(false),
            query.elevation.unwrap_or_default(),
        );
        Self {
            variants: self.variants,
            effective: selected,
            debug_label: self.debug_label.clone(),
            resolved_by: Some(Arc::downgrade(context)),
        }
    }
}

impl PartialEq for DynamicColor {
    fn eq(&self, other: &Self) -> bool {
        self.effective == other.effective && self.variants == other.variants
    }
}

impl Eq for DynamicColor {}

impl Hash for DynamicColor {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.effective.hash(state);
        self.variants.hash(state);
    }
}

impl fmt::Debug for DynamicColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicColor")
            .field("debug_label", &self.debug_label)
            .field("effective", &self.effective)
            .field("variants", &self.variants)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

/// Builder for a fully specified [`DynamicColor`].
///
/// Every variant is mandatory; [`DynamicColorBuilder::build`] reports the
/// first one left unset.
#[derive(Debug, Clone, Default)]
pub struct DynamicColorBuilder {
    debug_label: Option<Cow<'static, str>>,
    color: Option<ColorValue>,
    dark_color: Option<ColorValue>,
    high_contrast_color: Option<ColorValue>,
    dark_high_contrast_color: Option<ColorValue>,
    elevated_color: Option<ColorValue>,
    dark_elevated_color: Option<ColorValue>,
    high_contrast_elevated_color: Option<ColorValue>,
    dark_high_contrast_elevated_color: Option<ColorValue>,
}

impl DynamicColorBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the debug label.
    pub fn debug_label(mut self, label: impl Into<Cow<'static, str>>) -> Self {
        self.debug_label = Some(label.into());
        self
    }

    /// Set the light, normal contrast, base variant.
    pub fn color(mut self, color: ColorValue) -> Self {
        self.color = Some(color);
        self
    }

    /// Set the dark, normal contrast, base variant.
    pub fn dark_color(mut self, color: ColorValue) -> Self {
        self.dark_color = Some(color);
        self
    }

    /// Set the light, high contrast, base variant.
    pub fn high_contrast_color(mut self, color: ColorValue) -> Self {
        self.high_contrast_color = Some(color);
        self
    }

    /// Set the dark, high contrast, base variant.
    pub fn dark_high_contrast_color(mut self, color: ColorValue) -> Self {
        self.dark_high_contrast_color = Some(color);
        self
    }

    /// Set the light, normal contrast, elevated variant.
    pub fn elevated_color(mut self, color: ColorValue) -> Self {
        self.elevated_color = Some(color);
        self
    }

    /// Set the dark, normal contrast, elevated variant.
    pub fn dark_elevated_color(mut self, color: ColorValue) -> Self {
        self.dark_elevated_color = Some(color);
        self
    }

    /// Set the light, high contrast, elevated variant.
    pub fn high_contrast_elevated_color(mut self, color: ColorValue) -> Self {
        self.high_contrast_elevated_color = Some(color);
        self
    }

    /// Set the dark, high contrast, elevated variant.
    pub fn dark_high_contrast_elevated_color(mut self, color: ColorValue) -> Self {
        self.dark_high_contrast_elevated_color = Some(color);
        self
    }

    /// Build the color, failing if any variant was left unset.
    pub fn build(self) -> Result<DynamicColor, ColorError> {
        fn required(name: &str, value: Option<ColorValue>) -> Result<ColorValue, ColorError> {
            value.ok_or_else(|| ColorError::invalid_argument(format!("{name} is required")))
        }

        let variants = Variants {
            color: required("color", self.color)?,
            dark_color: required("darkColor", self.dark_color)?,
            high_contrast_color: required("highContrastColor", self.high_contrast_color)?,
            dark_high_contrast_color: required(
                "darkHighContrastColor",
                self.dark_high_contrast_color,
            )?,
            elevated_color: required("elevatedColor", self.elevated_color)?,
            dark_elevated_color: required("darkElevatedColor", self.dark_elevated_color)?,
            high_contrast_elevated_color: required(
                "highContrastElevatedColor",
                self.high_contrast_elevated_color,
            )?,
            dark_high_contrast_elevated_color: required(
                "darkHighContrastElevatedColor",
                self.dark_high_contrast_elevated_color,
            )?,
        };

        let mut color = DynamicColor::from_variants(variants);
        color.debug_label = self.debug_label;
        Ok(color)
    }
}
