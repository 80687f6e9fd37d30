use crate::error::CoreError;

/// Single-channel 8-bit frame buffer, row-major.
///
/// Owned by the renderer for the duration of one frame's processing,
/// mutated in place by the dithering pass, then discarded. Frames carry
/// no history and share no state with each other.
///
/// # Example
/// ```
/// use gc_core::frame::LuminanceFrame;
/// let frame = LuminanceFrame::new(10, 10);
/// assert_eq!(frame.data.len(), 100);
/// ```
#[derive(Debug)]
pub struct LuminanceFrame {
    /// Luminance samples, row-major, 1 byte per pixel.
    pub data: Vec<u8>,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl LuminanceFrame {
    /// Create a zero-filled frame with the given dimensions.
    ///
    /// # Example
    /// ```
    /// use gc_core::frame::LuminanceFrame;
    /// let frame = LuminanceFrame::new(100, 50);
    /// assert_eq!(frame.width, 100);
    /// assert_eq!(frame.height, 50);
    /// ```
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: vec![0u8; (width * height) as usize],
            width,
            height,
        }
    }

    /// Wrap a decoded raw buffer.
    ///
    /// # Errors
    /// Returns `CoreError::InvalidDimensions` if `data.len()` does not
    /// equal `width * height`.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() != (width as usize) * (height as usize) {
            return Err(CoreError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Sample at (x, y).
    ///
    /// # Example
    /// ```
    /// use gc_core::frame::LuminanceFrame;
    /// let frame = LuminanceFrame::new(10, 10);
    /// assert_eq!(frame.sample(0, 0), 0);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn sample(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "sample out of bounds");
        self.data[(y * self.width + x) as usize]
    }
}
