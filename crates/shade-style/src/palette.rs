#![forbid(unsafe_code)]

//! Named color palettes.
//!
//! A [`Palette`] maps names to [`Color`]s. Palettes are immutable once
//! built; [`PaletteBuilder`] assembles custom ones and [`system`] returns the
//! built-in system palette, constructed once on first use.
//!
//! # Example
//! ```
//! use std::sync::Arc;
//! use shade_style::context::{Brightness, StaticContext};
//! use shade_style::palette;
//!
//! let ctx = Arc::new(StaticContext::new().with_brightness(Brightness::Dark));
//! let resolved = palette::system().resolve_all(&ctx, true).unwrap();
//! let label = resolved.get("label").unwrap();
//! assert_eq!(label.value(), 0xFFFF_FFFF);
//! ```

use std::collections::BTreeMap;
use std::sync::{Arc, LazyLock};

use shade_core::{ColorError, ColorValue};

use crate::color::Color;
use crate::context::ResolutionContext;
use crate::dynamic::DynamicColor;

/// An immutable name → color table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, Color>,
}

impl Palette {
    /// Create a new palette builder.
    pub fn builder() -> PaletteBuilder {
        PaletteBuilder::new()
    }

    /// Look up a color by name.
    pub fn get(&self, name: &str) -> Option<&Color> {
        self.colors.get(name)
    }

    /// Check if a color with the given name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.colors.contains_key(name)
    }

    /// Number of named colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All names, sorted.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.colors.keys().map(String::as_str)
    }

    /// All entries, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Color)> {
        self.colors.iter().map(|(name, color)| (name.as_str(), color))
    }

    /// Resolve every color against `context`.
    ///
    /// Fails atomically: the first color that cannot be resolved in strict
    /// mode aborts the whole palette.
    pub fn resolve_all<C>(
        &self,
        context: &Arc<C>,
        allow_missing_context: bool,
    ) -> Result<ResolvedPalette, ColorError>
    where
        C: ResolutionContext + 'static,
    {
        let context: Arc<dyn ResolutionContext> = context.clone();
        self.resolve_all_dyn(&context, allow_missing_context)
    }

    /// [`Palette::resolve_all`] for a type-erased context.
    pub fn resolve_all_dyn(
        &self,
        context: &Arc<dyn ResolutionContext>,
        allow_missing_context: bool,
    ) -> Result<ResolvedPalette, ColorError> {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "palette_resolve",
            colors = self.colors.len(),
            strict = !allow_missing_context
        )
        .entered();

        let colors = self
            .colors
            .iter()
            .map(|(name, color)| {
                color
                    .resolve_dyn(context, allow_missing_context)
                    .map(|resolved| (name.clone(), resolved.value()))
            })
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(ResolvedPalette { colors })
    }
}

/// A palette with every color flattened to a concrete value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedPalette {
    colors: BTreeMap<String, ColorValue>,
}

impl ResolvedPalette {
    /// Look up a resolved value by name.
    pub fn get(&self, name: &str) -> Option<ColorValue> {
        self.colors.get(name).copied()
    }

    /// Number of resolved colors.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the resolved palette is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// All entries, sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, ColorValue)> {
        self.colors.iter().map(|(name, value)| (name.as_str(), *value))
    }
}

/// Builder for creating palettes.
#[derive(Debug, Clone, Default)]
pub struct PaletteBuilder {
    colors: BTreeMap<String, Color>,
}

impl PaletteBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing palette.
    pub fn from_palette(palette: Palette) -> Self {
        Self {
            colors: palette.colors,
        }
    }

    /// Define a named color. An existing entry with the same name is replaced.
    pub fn define(mut self, name: impl Into<String>, color: impl Into<Color>) -> Self {
        self.colors.insert(name.into(), color.into());
        self
    }

    /// Build the palette.
    pub fn build(self) -> Palette {
        Palette {
            colors: self.colors,
        }
    }
}

static SYSTEM: LazyLock<Palette> = LazyLock::new(system_colors::palette);

/// The built-in system palette.
pub fn system() -> &'static Palette {
    &SYSTEM
}

/// Built-in system colors.
///
/// Each function builds a fresh value; [`system`] holds the shared table.
pub mod system_colors {
    use super::*;

    const fn argb(a: u8, r: u8, g: u8, b: u8) -> ColorValue {
        ColorValue::from_argb(a, r, g, b)
    }

    fn brightness_and_contrast(
        label: &'static str,
        color: ColorValue,
        dark: ColorValue,
        high_contrast: ColorValue,
        dark_high_contrast: ColorValue,
    ) -> DynamicColor {
        DynamicColor::with_brightness_and_contrast(color, dark, high_contrast, dark_high_contrast)
            .labeled(label)
    }

    #[allow(clippy::too_many_arguments)]
    fn full(
        label: &'static str,
        color: ColorValue,
        dark: ColorValue,
        high_contrast: ColorValue,
        dark_high_contrast: ColorValue,
        elevated: ColorValue,
        dark_elevated: ColorValue,
        high_contrast_elevated: ColorValue,
        dark_high_contrast_elevated: ColorValue,
    ) -> DynamicColor {
        DynamicColor::from_variants(crate::dynamic::Variants {
            color,
            dark_color: dark,
            high_contrast_color: high_contrast,
            dark_high_contrast_color: dark_high_contrast,
            elevated_color: elevated,
            dark_elevated_color: dark_elevated,
            high_contrast_elevated_color: high_contrast_elevated,
            dark_high_contrast_elevated_color: dark_high_contrast_elevated,
        })
        .labeled(label)
    }

    /// Full-variant color whose elevated variants match the base ones.
    fn flat(
        label: &'static str,
        color: ColorValue,
        dark: ColorValue,
        high_contrast: ColorValue,
        dark_high_contrast: ColorValue,
    ) -> DynamicColor {
        full(
            label,
            color,
            dark,
            high_contrast,
            dark_high_contrast,
            color,
            dark,
            high_contrast,
            dark_high_contrast,
        )
    }

    // Static colors

    /// Opaque white.
    pub const WHITE: ColorValue = ColorValue::new(0xFFFF_FFFF);
    /// Opaque black.
    pub const BLACK: ColorValue = ColorValue::new(0xFF00_0000);
    /// Light background gray.
    pub const LIGHT_BACKGROUND_GRAY: ColorValue = ColorValue::new(0xFFE5_E5EA);
    /// Extra light background gray.
    pub const EXTRA_LIGHT_BACKGROUND_GRAY: ColorValue = ColorValue::new(0xFFEF_EFF4);
    /// Dark background gray.
    pub const DARK_BACKGROUND_GRAY: ColorValue = ColorValue::new(0xFF17_1717);

    /// Gray for inactive controls.
    #[must_use]
    pub fn inactive_gray() -> DynamicColor {
        DynamicColor::with_brightness(ColorValue::new(0xFF99_9999), ColorValue::new(0xFF75_7575))
            .labeled("inactiveGray")
    }

    // Brightness and contrast dependent tints

    /// System blue.
    #[must_use]
    pub fn system_blue() -> DynamicColor {
        brightness_and_contrast(
            "systemBlue",
            argb(255, 0, 122, 255),
            argb(255, 10, 132, 255),
            argb(255, 0, 64, 221),
            argb(255, 64, 156, 255),
        )
    }

    /// System green.
    #[must_use]
    pub fn system_green() -> DynamicColor {
        brightness_and_contrast(
            "systemGreen",
            argb(255, 52, 199, 89),
            argb(255, 48, 209, 88),
            argb(255, 36, 138, 61),
            argb(255, 48, 219, 91),
        )
    }

    /// System indigo.
    #[must_use]
    pub fn system_indigo() -> DynamicColor {
        brightness_and_contrast(
            "systemIndigo",
            argb(255, 88, 86, 214),
            argb(255, 94, 92, 230),
            argb(255, 54, 52, 163),
            argb(255, 125, 122, 255),
        )
    }

    /// System orange.
    #[must_use]
    pub fn system_orange() -> DynamicColor {
        brightness_and_contrast(
            "systemOrange",
            argb(255, 255, 149, 0),
            argb(255, 255, 159, 10),
            argb(255, 201, 52, 0),
            argb(255, 255, 179, 64),
        )
    }

    /// System pink.
    #[must_use]
    pub fn system_pink() -> DynamicColor {
        brightness_and_contrast(
            "systemPink",
            argb(255, 255, 45, 85),
            argb(255, 255, 55, 95),
            argb(255, 211, 15, 69),
            argb(255, 255, 100, 130),
        )
    }

    /// System purple.
    #[must_use]
    pub fn system_purple() -> DynamicColor {
        brightness_and_contrast(
            "systemPurple",
            argb(255, 175, 82, 222),
            argb(255, 191, 90, 242),
            argb(255, 137, 68, 171),
            argb(255, 218, 143, 255),
        )
    }

    /// System red.
    #[must_use]
    pub fn system_red() -> DynamicColor {
        brightness_and_contrast(
            "systemRed",
            argb(255, 255, 59, 48),
            argb(255, 255, 69, 58),
            argb(255, 215, 0, 21),
            argb(255, 255, 105, 97),
        )
    }

    /// System teal.
    #[must_use]
    pub fn system_teal() -> DynamicColor {
        brightness_and_contrast(
            "systemTeal",
            argb(255, 90, 200, 250),
            argb(255, 100, 210, 255),
            argb(255, 0, 113, 164),
            argb(255, 112, 215, 255),
        )
    }

    /// System yellow.
    #[must_use]
    pub fn system_yellow() -> DynamicColor {
        brightness_and_contrast(
            "systemYellow",
            argb(255, 255, 204, 0),
            argb(255, 255, 214, 10),
            argb(255, 160, 90, 0),
            argb(255, 255, 212, 38),
        )
    }

    /// Base system gray.
    #[must_use]
    pub fn system_grey() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey",
            argb(255, 142, 142, 147),
            argb(255, 142, 142, 147),
            argb(255, 108, 108, 112),
            argb(255, 174, 174, 178),
        )
    }

    /// Second-level system gray.
    #[must_use]
    pub fn system_grey2() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey2",
            argb(255, 174, 174, 178),
            argb(255, 99, 99, 102),
            argb(255, 142, 142, 147),
            argb(255, 124, 124, 128),
        )
    }

    /// Third-level system gray.
    #[must_use]
    pub fn system_grey3() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey3",
            argb(255, 199, 199, 204),
            argb(255, 72, 72, 74),
            argb(255, 174, 174, 178),
            argb(255, 84, 84, 86),
        )
    }

    /// Fourth-level system gray.
    #[must_use]
    pub fn system_grey4() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey4",
            argb(255, 209, 209, 214),
            argb(255, 58, 58, 60),
            argb(255, 188, 188, 192),
            argb(255, 68, 68, 70),
        )
    }

    /// Fifth-level system gray.
    #[must_use]
    pub fn system_grey5() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey5",
            argb(255, 229, 229, 234),
            argb(255, 44, 44, 46),
            argb(255, 216, 216, 220),
            argb(255, 54, 54, 56),
        )
    }

    /// Sixth-level system gray.
    #[must_use]
    pub fn system_grey6() -> DynamicColor {
        brightness_and_contrast(
            "systemGrey6",
            argb(255, 242, 242, 247),
            argb(255, 28, 28, 30),
            argb(255, 235, 235, 240),
            argb(255, 36, 36, 38),
        )
    }

    // Label colors

    /// Primary text.
    #[must_use]
    pub fn label() -> DynamicColor {
        flat(
            "label",
            argb(255, 0, 0, 0),
            argb(255, 255, 255, 255),
            argb(255, 0, 0, 0),
            argb(255, 255, 255, 255),
        )
    }

    /// Secondary text.
    #[must_use]
    pub fn secondary_label() -> DynamicColor {
        flat(
            "secondaryLabel",
            argb(153, 60, 60, 67),
            argb(153, 235, 235, 245),
            argb(173, 60, 60, 67),
            argb(173, 235, 235, 245),
        )
    }

    /// Tertiary text.
    #[must_use]
    pub fn tertiary_label() -> DynamicColor {
        flat(
            "tertiaryLabel",
            argb(76, 60, 60, 67),
            argb(76, 235, 235, 245),
            argb(96, 60, 60, 67),
            argb(96, 235, 235, 245),
        )
    }

    /// Quaternary text.
    #[must_use]
    pub fn quaternary_label() -> DynamicColor {
        flat(
            "quaternaryLabel",
            argb(45, 60, 60, 67),
            argb(40, 235, 235, 245),
            argb(66, 60, 60, 67),
            argb(61, 235, 235, 245),
        )
    }

    // Fills

    /// Fill for thin and small shapes.
    #[must_use]
    pub fn system_fill() -> DynamicColor {
        flat(
            "systemFill",
            argb(51, 120, 120, 128),
            argb(91, 120, 120, 128),
            argb(71, 120, 120, 128),
            argb(112, 120, 120, 128),
        )
    }

    /// Fill for medium-size shapes.
    #[must_use]
    pub fn secondary_system_fill() -> DynamicColor {
        flat(
            "secondarySystemFill",
            argb(40, 120, 120, 128),
            argb(81, 120, 120, 128),
            argb(61, 120, 120, 128),
            argb(102, 120, 120, 128),
        )
    }

    /// Fill for large shapes.
    #[must_use]
    pub fn tertiary_system_fill() -> DynamicColor {
        flat(
            "tertiarySystemFill",
            argb(30, 118, 118, 128),
            argb(61, 118, 118, 128),
            argb(51, 118, 118, 128),
            argb(81, 118, 118, 128),
        )
    }

    /// Fill for large areas containing complex content.
    #[must_use]
    pub fn quaternary_system_fill() -> DynamicColor {
        flat(
            "quaternarySystemFill",
            argb(20, 116, 116, 128),
            argb(45, 118, 118, 128),
            argb(40, 116, 116, 128),
            argb(66, 118, 118, 128),
        )
    }

    /// Placeholder text in controls.
    #[must_use]
    pub fn placeholder_text() -> DynamicColor {
        flat(
            "placeholderText",
            argb(76, 60, 60, 67),
            argb(76, 235, 235, 245),
            argb(96, 60, 60, 67),
            argb(96, 235, 235, 245),
        )
    }

    // Backgrounds (elevation dependent in dark mode)

    /// Main background.
    #[must_use]
    pub fn system_background() -> DynamicColor {
        full(
            "systemBackground",
            argb(255, 255, 255, 255),
            argb(255, 0, 0, 0),
            argb(255, 255, 255, 255),
            argb(255, 0, 0, 0),
            argb(255, 255, 255, 255),
            argb(255, 28, 28, 30),
            argb(255, 255, 255, 255),
            argb(255, 36, 36, 38),
        )
    }

    /// Content layered on the main background.
    #[must_use]
    pub fn secondary_system_background() -> DynamicColor {
        full(
            "secondarySystemBackground",
            argb(255, 242, 242, 247),
            argb(255, 28, 28, 30),
            argb(255, 235, 235, 240),
            argb(255, 36, 36, 38),
            argb(255, 242, 242, 247),
            argb(255, 44, 44, 46),
            argb(255, 235, 235, 240),
            argb(255, 54, 54, 56),
        )
    }

    /// Content layered on secondary backgrounds.
    #[must_use]
    pub fn tertiary_system_background() -> DynamicColor {
        full(
            "tertiarySystemBackground",
            argb(255, 255, 255, 255),
            argb(255, 44, 44, 46),
            argb(255, 255, 255, 255),
            argb(255, 54, 54, 56),
            argb(255, 255, 255, 255),
            argb(255, 58, 58, 60),
            argb(255, 255, 255, 255),
            argb(255, 68, 68, 70),
        )
    }

    /// Background of grouped content.
    #[must_use]
    pub fn system_grouped_background() -> DynamicColor {
        full(
            "systemGroupedBackground",
            argb(255, 242, 242, 247),
            argb(255, 0, 0, 0),
            argb(255, 235, 235, 240),
            argb(255, 0, 0, 0),
            argb(255, 242, 242, 247),
            argb(255, 28, 28, 30),
            argb(255, 235, 235, 240),
            argb(255, 36, 36, 38),
        )
    }

    /// Content layered on the grouped background.
    #[must_use]
    pub fn secondary_system_grouped_background() -> DynamicColor {
        full(
            "secondarySystemGroupedBackground",
            argb(255, 255, 255, 255),
            argb(255, 28, 28, 30),
            argb(255, 255, 255, 255),
            argb(255, 36, 36, 38),
            argb(255, 255, 255, 255),
            argb(255, 44, 44, 46),
            argb(255, 255, 255, 255),
            argb(255, 54, 54, 56),
        )
    }

    /// Content layered on secondary grouped backgrounds.
    #[must_use]
    pub fn tertiary_system_grouped_background() -> DynamicColor {
        full(
            "tertiarySystemGroupedBackground",
            argb(255, 242, 242, 247),
            argb(255, 44, 44, 46),
            argb(255, 235, 235, 240),
            argb(255, 54, 54, 56),
            argb(255, 242, 242, 247),
            argb(255, 58, 58, 60),
            argb(255, 235, 235, 240),
            argb(255, 68, 68, 70),
        )
    }

    // Separators and links

    /// Thin divider that lets content show through.
    #[must_use]
    pub fn separator() -> DynamicColor {
        flat(
            "separator",
            argb(73, 60, 60, 67),
            argb(153, 84, 84, 88),
            argb(94, 60, 60, 67),
            argb(173, 84, 84, 88),
        )
    }

    /// Divider that hides underlying content.
    #[must_use]
    pub fn opaque_separator() -> DynamicColor {
        flat(
            "opaqueSeparator",
            argb(255, 198, 198, 200),
            argb(255, 56, 56, 58),
            argb(255, 198, 198, 200),
            argb(255, 56, 56, 58),
        )
    }

    /// Link text.
    #[must_use]
    pub fn link() -> DynamicColor {
        flat(
            "link",
            argb(255, 0, 122, 255),
            argb(255, 9, 132, 255),
            argb(255, 0, 122, 255),
            argb(255, 9, 132, 255),
        )
    }

    /// The full system table, including aliases.
    #[must_use]
    pub fn palette() -> Palette {
        Palette::builder()
            .define("white", WHITE)
            .define("black", BLACK)
            .define("lightBackgroundGray", LIGHT_BACKGROUND_GRAY)
            .define("extraLightBackgroundGray", EXTRA_LIGHT_BACKGROUND_GRAY)
            .define("darkBackgroundGray", DARK_BACKGROUND_GRAY)
            .define("inactiveGray", inactive_gray())
            .define("systemBlue", system_blue())
            .define("systemGreen", system_green())
            .define("systemIndigo", system_indigo())
            .define("systemOrange", system_orange())
            .define("systemPink", system_pink())
            .define("systemPurple", system_purple())
            .define("systemRed", system_red())
            .define("systemTeal", system_teal())
            .define("systemYellow", system_yellow())
            .define("systemGrey", system_grey())
            .define("systemGrey2", system_grey2())
            .define("systemGrey3", system_grey3())
            .define("systemGrey4", system_grey4())
            .define("systemGrey5", system_grey5())
            .define("systemGrey6", system_grey6())
            .define("activeBlue", system_blue())
            .define("activeGreen", system_green())
            .define("activeOrange", system_orange())
            .define("destructiveRed", system_red())
            .define("label", label())
            .define("secondaryLabel", secondary_label())
            .define("tertiaryLabel", tertiary_label())
            .define("quaternaryLabel", quaternary_label())
            .define("systemFill", system_fill())
            .define("secondarySystemFill", secondary_system_fill())
            .define("tertiarySystemFill", tertiary_system_fill())
            .define("quaternarySystemFill", quaternary_system_fill())
            .define("placeholderText", placeholder_text())
            .define("systemBackground", system_background())
            .define("secondarySystemBackground", secondary_system_background())
            .define("tertiarySystemBackground", tertiary_system_background())
            .define("systemGroupedBackground", system_grouped_background())
            .define(
                "secondarySystemGroupedBackground",
                secondary_system_grouped_background(),
            )
            .define(
                "tertiarySystemGroupedBackground",
                tertiary_system_grouped_background(),
            )
            .define("separator", separator())
            .define("opaqueSeparator", opaque_separator())
            .define("link", link())
            .build()
    }
}
