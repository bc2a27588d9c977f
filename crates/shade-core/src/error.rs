use std::fmt;

/// One of the three independent binary dimensions a dynamic color can vary
/// along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Display brightness (light or dark).
    Brightness,
    /// Accessibility contrast (normal or high).
    Contrast,
    /// Surface elevation (base or elevated).
    Elevation,
}

impl Axis {
    /// All axes in resolution order.
    pub const ALL: [Self; 3] = [Self::Brightness, Self::Contrast, Self::Elevation];

    /// Lowercase axis name used in diagnostics.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Contrast => "contrast",
            Self::Elevation => "elevation",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while constructing or resolving colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Malformed construction input (missing variant, out-of-range channel,
    /// unparsable hex string).
    InvalidArgument { reason: String },
    /// A dependent axis could not be read from the resolution context and
    /// strict resolution was requested.
    MissingDependency { axis: Axis },
}

impl ColorError {
    /// Build an [`ColorError::InvalidArgument`] with the given reason.
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            reason: reason.into(),
        }
    }

    /// The unresolved axis, if this is a missing-dependency error.
    #[must_use]
    pub const fn missing_axis(&self) -> Option<Axis> {
        match self {
            Self::MissingDependency { axis } => Some(*axis),
            Self::InvalidArgument { .. } => None,
        }
    }
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::MissingDependency { axis } => write!(
                f,
                "missing dependency: resolution context does not provide {axis}"
            ),
        }
    }
}

impl std::error::Error for ColorError {}
