use thiserror::Error;

/// Errors originating from the audio module.
#[derive(Error, Debug)]
pub enum AudioError {
    /// No audio output device found.
    #[error("No audio output device found")]
    NoOutputDevice,

    /// Audio stream error.
    #[error("Audio stream error: {0}")]
    StreamError(String),

    /// The decoded track contains no samples.
    #[error("Audio track is empty: {path}")]
    EmptyTrack {
        /// Path of the offending file.
        path: String,
    },
}
