use gc_core::charset::GlyphRamp;
use gc_core::frame::LuminanceFrame;

use crate::dither::floyd_steinberg;

/// Render one frame to terminal text.
///
/// Dithers the frame in place, then maps every sample of every other
/// row through the glyph ramp. The vertical step of 2 compensates for
/// terminal cells being roughly twice as tall as wide, approximating a
/// square aspect ratio.
///
/// Output is `⌈height/2⌉` lines of exactly `width` glyphs each, with a
/// `\n` terminating every line.
///
/// # Example
/// ```
/// use gc_core::charset::GlyphRamp;
/// use gc_core::frame::LuminanceFrame;
/// use gc_ascii::render::render_frame;
///
/// let mut frame = LuminanceFrame::new(4, 4);
/// let ramp = GlyphRamp::default();
/// let text = render_frame(&mut frame, &ramp);
/// assert_eq!(text.lines().count(), 2);
/// ```
#[must_use]
pub fn render_frame(frame: &mut LuminanceFrame, ramp: &GlyphRamp) -> String {
    let width = frame.width as usize;
    let height = frame.height as usize;

    floyd_steinberg(&mut frame.data, width, height);

    // Capacity hint: one byte per glyph plus the newline. The 70-char
    // ramp is pure ASCII, so this is exact for the default charset.
    let mut text = String::with_capacity(height.div_ceil(2) * (width + 1));

    for y in (0..height).step_by(2) {
        for x in 0..width {
            text.push(ramp.map(frame.data[y * width + x]));
        }
        text.push('\n');
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use gc_core::charset::ASCII_RAMP;

    #[test]
    fn row_count_is_ceil_half_height() {
        let ramp = GlyphRamp::default();
        for height in [1u32, 2, 3, 4, 5, 8, 9] {
            let mut frame = LuminanceFrame::new(6, height);
            let text = render_frame(&mut frame, &ramp);
            assert_eq!(
                text.lines().count(),
                (height as usize).div_ceil(2),
                "height {height}"
            );
        }
    }

    #[test]
    fn rows_have_exactly_width_glyphs() {
        let ramp = GlyphRamp::default();
        let mut frame = LuminanceFrame::new(7, 4);
        let text = render_frame(&mut frame, &ramp);
        for line in text.lines() {
            assert_eq!(line.chars().count(), 7);
        }
    }

    #[test]
    fn binary_frames_use_only_extreme_glyphs() {
        let ramp = GlyphRamp::default();
        let first = ASCII_RAMP.chars().next().unwrap();
        let last = ASCII_RAMP.chars().last().unwrap();

        let mut frame = LuminanceFrame::new(8, 8);
        for (i, s) in frame.data.iter_mut().enumerate() {
            *s = (i % 7 * 36) as u8;
        }
        let text = render_frame(&mut frame, &ramp);
        assert!(
            text.chars()
                .all(|c| c == first || c == last || c == '\n')
        );
    }

    #[test]
    fn all_black_input_renders_dark_glyphs() {
        let ramp = GlyphRamp::default();
        let mut frame = LuminanceFrame::new(4, 2);
        frame.data.fill(255);
        let text = render_frame(&mut frame, &ramp);
        assert_eq!(text, "$$$$\n");
    }

    #[test]
    fn empty_frame_renders_empty_text() {
        let ramp = GlyphRamp::default();
        let mut frame = LuminanceFrame::new(0, 0);
        assert_eq!(render_frame(&mut frame, &ramp), "");
    }
}
