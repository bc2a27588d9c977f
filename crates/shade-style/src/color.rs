//! Uniform handling of static and context-dependent colors.

use std::fmt;
use std::sync::Arc;

use shade_core::{ColorError, ColorValue};

use crate::context::ResolutionContext;
use crate::dynamic::DynamicColor;

/// A color that is either fixed or depends on the rendering environment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Color {
    /// A fixed color that never changes with context.
    Static(ColorValue),
    /// A color resolved per context.
    Dynamic(DynamicColor),
}

impl Color {
    /// Create a fixed color.
    #[inline]
    pub const fn fixed(value: ColorValue) -> Self {
        Self::Static(value)
    }

    /// The current concrete value: the static value, or the dynamic color's
    /// effective value.
    #[must_use]
    pub const fn value(&self) -> ColorValue {
        match self {
            Self::Static(value) => *value,
            Self::Dynamic(color) => color.effective(),
        }
    }

    /// Check if this color depends on context.
    #[inline]
    pub const fn is_dynamic(&self) -> bool {
        matches!(self, Self::Dynamic(_))
    }

    /// The dynamic color, if this is one.
    #[must_use]
    pub const fn as_dynamic(&self) -> Option<&DynamicColor> {
        match self {
            Self::Dynamic(color) => Some(color),
            Self::Static(_) => None,
        }
    }

    /// Resolve against `context`. Static colors pass through unchanged.
    pub fn resolve<C>(&self, context: &Arc<C>, allow_missing_context: bool) -> Result<Self, ColorError>
    where
        C: ResolutionContext + 'static,
    {
        let context: Arc<dyn ResolutionContext> = context.clone();
        self.resolve_dyn(&context, allow_missing_context)
    }

    /// [`Color::resolve`] for a type-erased context.
    pub fn resolve_dyn(
        &self,
        context: &Arc<dyn ResolutionContext>,
        allow_missing_context: bool,
    ) -> Result<Self, ColorError> {
        match self {
            Self::Static(value) => Ok(Self::Static(*value)),
            Self::Dynamic(color) => color
                .resolve_dyn(context, allow_missing_context)
                .map(Self::Dynamic),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Static(ColorValue::TRANSPARENT)
    }
}

impl From<ColorValue> for Color {
    fn from(value: ColorValue) -> Self {
        Self::Static(value)
    }
}

impl From<DynamicColor> for Color {
    fn from(color: DynamicColor) -> Self {
        Self::Dynamic(color)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Static(value) => fmt::Display::fmt(value, f),
            Self::Dynamic(color) => fmt::Display::fmt(color, f),
        }
    }
}

/// Resolve any color against `context`.
///
/// Static colors are returned unchanged; dynamic colors delegate to
/// [`DynamicColor::resolve`]. Callers can treat every color uniformly
/// whether or not it varies with context.
pub fn resolve_color<C>(
    color: &Color,
    context: &Arc<C>,
    allow_missing_context: bool,
) -> Result<Color, ColorError>
where
    C: ResolutionContext + 'static,
{
    color.resolve(context, allow_missing_context)
}
