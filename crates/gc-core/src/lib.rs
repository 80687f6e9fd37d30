/// Configuration, types, and shared structures for glyphcast.
///
/// This crate contains all shared types, traits, and configuration logic
/// used across the glyphcast workspace.

pub mod charset;
pub mod clock;
pub mod config;
pub mod error;
pub mod frame;
pub mod traits;

pub use charset::GlyphRamp;
pub use clock::PlaybackClock;
pub use config::PlayerConfig;
pub use error::CoreError;
pub use frame::LuminanceFrame;
pub use traits::{AudioService, FrameSource};
