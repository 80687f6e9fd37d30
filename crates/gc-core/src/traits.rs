use crate::frame::LuminanceFrame;

/// Supplies ordered frames to the playback loop.
///
/// The frame ordering is established once at construction (lexicographic
/// by source filename) and is immutable for the session. Frames are
/// decoded on demand, one index at a time.
///
/// # Example
/// ```
/// use gc_core::traits::FrameSource;
/// use gc_core::frame::LuminanceFrame;
///
/// struct DummySource;
/// impl FrameSource for DummySource {
///     fn frame_count(&self) -> usize { 0 }
///     fn load_frame(&mut self, _index: usize) -> anyhow::Result<LuminanceFrame> {
///         anyhow::bail!("empty")
///     }
/// }
/// ```
pub trait FrameSource {
    /// Number of frames in the fixed schedule.
    fn frame_count(&self) -> usize;

    /// Decode the frame at `index`.
    ///
    /// # Errors
    /// Returns an error when the underlying file cannot be decoded.
    /// The scheduler treats this as a silent skip, never a crash.
    fn load_frame(&mut self, index: usize) -> anyhow::Result<LuminanceFrame>;

    /// `true` when the schedule contains no frames.
    fn is_empty(&self) -> bool {
        self.frame_count() == 0
    }
}

/// One-shot audio playback trigger.
///
/// The player fires `start()` exactly once, immediately before capturing
/// the frame clock baseline. There is no feedback channel: the audio
/// device plays on its own thread and the visual loop never reads its
/// progress.
///
/// # Example
/// ```
/// use gc_core::traits::AudioService;
///
/// struct Silent;
/// impl AudioService for Silent {
///     fn start(&mut self) -> anyhow::Result<()> { Ok(()) }
/// }
/// ```
pub trait AudioService {
    /// Begin playback. Fire-and-forget.
    ///
    /// # Errors
    /// Returns an error if the underlying device refuses to start.
    fn start(&mut self) -> anyhow::Result<()>;
}
