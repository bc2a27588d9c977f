#![forbid(unsafe_code)]

//! Core value types for shade.
//!
//! # Role in shade
//! `shade-core` is the leaf of the workspace. It owns the packed
//! [`ColorValue`] every other crate passes around, plus the error vocabulary
//! ([`ColorError`], [`Axis`]) shared by construction and resolution code.
//!
//! # How it fits in the system
//! `shade-style` builds context-dependent colors on top of these values and
//! the `shade` facade re-exports both. Nothing here knows about contexts or
//! palettes, which keeps the packed representation reusable on its own.

/// Packed ARGB color values.
pub mod color;
/// Error and axis types.
pub mod error;

pub use color::ColorValue;
pub use error::{Axis, ColorError};
