#![forbid(unsafe_code)]

//! Context-dependent colors for shade.
//!
//! # Role in shade
//! `shade-style` turns fixed [`ColorValue`]s into colors that follow the
//! rendering environment: display brightness, the high-contrast
//! accessibility setting and surface elevation.
//!
//! # This crate provides
//! - [`DynamicColor`]: eight precomputed variants plus resolution.
//! - [`Color`] and [`resolve_color`] for treating static and dynamic colors
//!   uniformly.
//! - [`ResolutionContext`] and the plain-data [`StaticContext`].
//! - Diagnostic listings that show which variant is in effect.
//! - The built-in system [`Palette`].
//!
//! # How it fits in the system
//! Theming code owns the contexts and calls `resolve` at paint time; this
//! crate only reads the context and never mutates a color in place, so the
//! same palette can be resolved concurrently for different surfaces.

/// Static and dynamic colors behind one type.
pub mod color;
/// Resolution contexts and axis values.
pub mod context;
/// Diagnostic listings for dynamic colors.
pub mod diagnostics;
/// Dynamic colors and their resolution.
pub mod dynamic;
/// Named palettes and the system palette.
pub mod palette;

pub use color::{Color, resolve_color};
pub use context::{Brightness, ElevationLevel, ResolutionContext, StaticContext};
pub use diagnostics::{DiagnosticProperty, DiagnosticValue};
pub use dynamic::{DynamicColor, DynamicColorBuilder, Variants};
pub use palette::{Palette, PaletteBuilder, ResolvedPalette};
pub use shade_core::{Axis, ColorError, ColorValue};
