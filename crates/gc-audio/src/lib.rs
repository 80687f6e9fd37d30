/// Audio decode and playback for glyphcast.

pub mod decode;
pub mod error;
pub mod playback;

pub use error::AudioError;
pub use playback::AudioPlayer;
