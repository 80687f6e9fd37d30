//! Floyd–Steinberg error diffusion.
//!
//! Quantizes each sample to {0, 255} in strict raster order and pushes
//! the rounding error onto the not-yet-processed neighbors, preserving
//! perceived luminance density.

/// Neighbor weights, sixteenths: right 7, below-left 3, below 5, below-right 1.
const W_RIGHT: i32 = 7;
const W_BELOW_LEFT: i32 = 3;
const W_BELOW: i32 = 5;
const W_BELOW_RIGHT: i32 = 1;

/// Dither `data` in place to a binary {0, 255} buffer.
///
/// Scan order is left-to-right, top-to-bottom; the quantized value is
/// written back before the error is distributed, and each neighbor is
/// clamped to [0, 255] after addition. Error fractions use truncating
/// integer division (`error * k / 16`). Out-of-bounds neighbors are
/// skipped; there is no wraparound and no normalization pass. The
/// sequential dependency chain makes the pass order-sensitive: it must
/// not be split per-row.
///
/// A zero-size buffer is a no-op. Caller guarantees
/// `data.len() == width * height`.
///
/// # Example
/// ```
/// use gc_ascii::dither::floyd_steinberg;
/// let mut data = vec![100u8; 4];
/// floyd_steinberg(&mut data, 2, 2);
/// assert!(data.iter().all(|&v| v == 0 || v == 255));
/// ```
pub fn floyd_steinberg(data: &mut [u8], width: usize, height: usize) {
    debug_assert_eq!(data.len(), width * height, "buffer/dimension mismatch");

    for y in 0..height {
        for x in 0..width {
            let idx = y * width + x;
            let old = data[idx];
            let new = if old < 128 { 0u8 } else { 255u8 };
            data[idx] = new;
            let error = i32::from(old) - i32::from(new);

            if x + 1 < width {
                spread(&mut data[idx + 1], error * W_RIGHT / 16);
            }
            if y + 1 < height {
                let below = idx + width;
                if x > 0 {
                    spread(&mut data[below - 1], error * W_BELOW_LEFT / 16);
                }
                spread(&mut data[below], error * W_BELOW / 16);
                if x + 1 < width {
                    spread(&mut data[below + 1], error * W_BELOW_RIGHT / 16);
                }
            }
        }
    }
}

/// Add a signed error share to a sample, clamped to [0, 255].
#[inline(always)]
fn spread(sample: &mut u8, share: i32) {
    *sample = (i32::from(*sample) + share).clamp(0, 255) as u8;
}
