//! Shared foreground/background color selection.
//!
//! Every screen draws with exactly two pens: `primary` for text, shapes and
//! highlighted rows, `secondary` for backgrounds and inverted text. Both are
//! indices into a fixed list of named colors so the settings screen can offer
//! them by name.

use embedded_graphics::pixelcolor::Rgb565;

use crate::colors::{BLACK, BLUE, CYAN, GREEN, MAGENTA, RED, WHITE, YELLOW};

/// Number of colors in the standard palette.
pub const PALETTE_LEN: usize = 8;

/// Named colors offered on the COLORS screen, in menu order.
pub const PALETTE_COLORS: [(&str, Rgb565); PALETTE_LEN] = [
    ("BLACK", BLACK),
    ("WHITE", WHITE),
    ("RED", RED),
    ("YELLOW", YELLOW),
    ("GREEN", GREEN),
    ("CYAN", CYAN),
    ("BLUE", BLUE),
    ("MAGENTA", MAGENTA),
];

/// Default primary index (GREEN).
pub const DEFAULT_PRIMARY: usize = 4;

/// Default secondary index (BLACK).
pub const DEFAULT_SECONDARY: usize = 0;

/// Primary/secondary pen selection over a fixed color list.
///
/// Indices are clamped on every write, so `primary()` and `secondary()`
/// never go out of bounds.
#[derive(Clone, Copy, Debug)]
pub struct Palette {
    colors: &'static [(&'static str, Rgb565)],
    primary: usize,
    secondary: usize,
}

impl Palette {
    /// Create a palette over `colors`. Panics at compile time in const
    /// contexts if `colors` is empty.
    pub const fn new(
        colors: &'static [(&'static str, Rgb565)],
        primary: usize,
        secondary: usize,
    ) -> Self {
        assert!(!colors.is_empty(), "palette needs at least one color");
        let last = colors.len() - 1;
        Self {
            colors,
            primary: if primary > last { last } else { primary },
            secondary: if secondary > last { last } else { secondary },
        }
    }

    /// The standard eight-color palette, green on black.
    pub const fn standard() -> Self { Self::new(&PALETTE_COLORS, DEFAULT_PRIMARY, DEFAULT_SECONDARY) }

    /// Foreground color.
    #[inline]
    pub fn primary(&self) -> Rgb565 { self.colors[self.primary].1 }

    /// Background color.
    #[inline]
    pub fn secondary(&self) -> Rgb565 { self.colors[self.secondary].1 }

    /// Index of the foreground color.
    #[inline]
    pub const fn primary_index(&self) -> usize { self.primary }

    /// Index of the background color.
    #[inline]
    pub const fn secondary_index(&self) -> usize { self.secondary }

    /// Select the foreground color, clamping to the last valid index.
    pub fn set_primary(
        &mut self,
        index: usize,
    ) {
        self.primary = self.clamp(index);
    }

    /// Select the background color, clamping to the last valid index.
    pub fn set_secondary(
        &mut self,
        index: usize,
    ) {
        self.secondary = self.clamp(index);
    }

    /// All named colors of this palette.
    pub const fn colors(&self) -> &'static [(&'static str, Rgb565)] { self.colors }

    fn clamp(
        &self,
        index: usize,
    ) -> usize {
        index.min(self.colors.len() - 1)
    }
}

impl Default for Palette {
    fn default() -> Self { Self::standard() }
}
