/// 70 caractères — Paul Bourke extended, lightest → darkest.
pub const ASCII_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Lookup table mapping luminance [0..255] → glyph.
///
/// Pre-computed at startup for O(1) per-pixel cost. Index formula is
/// `sample * (len - 1) / 255` with truncating integer division, so
/// luminance 0 always maps to the first (lightest) glyph and 255 to the
/// last (darkest), monotonically in between.
///
/// # Example
/// ```
/// use gc_core::charset::GlyphRamp;
/// let ramp = GlyphRamp::new(" .:#@");
/// assert_eq!(ramp.map(0), ' ');
/// assert_eq!(ramp.map(255), '@');
/// ```
pub struct GlyphRamp {
    lut: [char; 256],
}

impl GlyphRamp {
    /// Build a LUT from a charset ordered lightest→densest.
    ///
    /// # Example
    /// ```
    /// use gc_core::charset::GlyphRamp;
    /// let ramp = GlyphRamp::new(" .:#@");
    /// assert_eq!(ramp.map(128), ':');
    /// ```
    #[must_use]
    pub fn new(charset: &str) -> Self {
        let chars: Vec<char> = charset.chars().collect();
        if chars.len() < 2 {
            // Fallback: if charset is too short, use a minimal default.
            log::warn!("Charset has fewer than 2 glyphs, using minimal fallback");
            return Self::new(" @");
        }
        let len = chars.len();
        let mut lut = [' '; 256];
        for (i, slot) in lut.iter_mut().enumerate() {
            *slot = chars[i * (len - 1) / 255];
        }
        Self { lut }
    }

    /// Map a luminance value [0..255] to a glyph.
    #[inline(always)]
    #[must_use]
    pub fn map(&self, luminance: u8) -> char {
        self.lut[luminance as usize]
    }
}

impl Default for GlyphRamp {
    fn default() -> Self {
        Self::new(ASCII_RAMP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ramp_has_seventy_glyphs() {
        assert_eq!(ASCII_RAMP.chars().count(), 70);
    }

    #[test]
    fn ramp_maps_extremes() {
        let ramp = GlyphRamp::new(ASCII_RAMP);
        assert_eq!(ramp.map(0), ' ');
        assert_eq!(ramp.map(255), '$');
    }

    #[test]
    fn ramp_monotonic() {
        let ramp = GlyphRamp::new(ASCII_RAMP);
        let chars: Vec<char> = ASCII_RAMP.chars().collect();
        let mut prev_idx = 0usize;
        for i in 0..=255u8 {
            let ch = ramp.map(i);
            let idx = chars.iter().position(|&c| c == ch).unwrap();
            assert!(idx >= prev_idx, "ramp not monotonic at luminance {i}");
            prev_idx = idx;
        }
    }

    #[test]
    fn short_charset_falls_back() {
        let ramp = GlyphRamp::new("x");
        assert_eq!(ramp.map(0), ' ');
        assert_eq!(ramp.map(255), '@');
    }
}
