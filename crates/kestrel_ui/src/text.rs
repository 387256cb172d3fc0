//! Text measurement seam.
//!
//! Glyph rasterization belongs to the host's font backend. The widget core
//! only needs the measured extent of a string, which it asks for through
//! [`TextMetrics`].

use crate::error::{UiError, UiResult};

/// Measured size of a run of text.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextExtent {
    /// Sum of glyph advances.
    pub width: f32,
    /// Distance from the baseline to the highest glyph top.
    pub ascent: f32,
    /// Distance from the baseline to the lowest glyph bottom.
    pub descent: f32,
}

impl TextExtent {
    /// Returns the total line height.
    #[inline]
    #[must_use]
    pub fn height(&self) -> f32 {
        self.ascent + self.descent
    }
}

/// Measures text for layout.
pub trait TextMetrics {
    /// Measures `text` rendered at `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::GlyphUnavailable`] if the font cannot provide a
    /// glyph for some character.
    fn measure(&self, text: &str, scale: f32) -> UiResult<TextExtent>;
}

/// Fixed-advance metrics, as produced by a monospace terminal font.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMetrics {
    /// Advance of every glyph at scale 1.
    pub advance: f32,
    /// Ascent at scale 1.
    pub ascent: f32,
    /// Descent at scale 1.
    pub descent: f32,
}

impl MonospaceMetrics {
    /// Metrics of a 48px monospace face.
    pub const DEFAULT: Self = Self {
        advance: 24.0,
        ascent: 34.0,
        descent: 10.0,
    };

    /// Creates metrics with the given glyph advance and vertical extents.
    #[must_use]
    pub const fn new(advance: f32, ascent: f32, descent: f32) -> Self {
        Self {
            advance,
            ascent,
            descent,
        }
    }
}

impl Default for MonospaceMetrics {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TextMetrics for MonospaceMetrics {
    #[allow(clippy::cast_precision_loss)]
    fn measure(&self, text: &str, scale: f32) -> UiResult<TextExtent> {
        let mut glyphs = 0_usize;
        for ch in text.chars() {
            if ch.is_control() {
                return Err(UiError::GlyphUnavailable(ch));
            }
            glyphs += 1;
        }

        if glyphs == 0 {
            return Ok(TextExtent::default());
        }

        Ok(TextExtent {
            width: glyphs as f32 * self.advance * scale,
            ascent: self.ascent * scale,
            descent: self.descent * scale,
        })
    }
}
