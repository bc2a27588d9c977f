#![forbid(unsafe_code)]

//! shade public facade crate.
//!
//! Re-exports the packed color value from `shade-core` and the dynamic color
//! machinery from `shade-style`, plus a small prelude for day-to-day use.
//!
//! ```
//! use std::sync::Arc;
//! use shade::prelude::*;
//!
//! let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Dark));
//! let label = shade::palette::system_colors::label();
//! assert_eq!(label.resolve(&ctx, true)?.effective(), ColorValue::WHITE);
//! # Ok::<(), shade::Error>(())
//! ```

// --- Core re-exports -------------------------------------------------------

pub use shade_core::{Axis, ColorValue};

// --- Style re-exports ------------------------------------------------------

pub use shade_style::{
    Brightness, Color, DiagnosticProperty, DiagnosticValue, DynamicColor, DynamicColorBuilder,
    ElevationLevel, Palette, PaletteBuilder, ResolutionContext, ResolvedPalette, StaticContext,
    Variants, resolve_color,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for shade APIs.
pub use shade_core::ColorError as Error;

/// Standard result type for shade APIs.
pub type Result<T> = std::result::Result<T, Error>;

/// The built-in system palette.
pub fn system_palette() -> &'static Palette {
    shade_style::palette::system()
}

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Brightness, Color, ColorValue, DynamicColor, ElevationLevel, Error, Palette,
        ResolutionContext, Result, StaticContext, resolve_color,
    };

    pub use crate::{core, style};
}

pub use shade_core as core;
pub use shade_style as style;
pub use shade_style::palette;
