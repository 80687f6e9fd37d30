use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::charset::ASCII_RAMP;
use crate::error::CoreError;

/// Playback configuration.
///
/// Serializable as TOML. Every field has a sane default; missing fields
/// in the file fall back to it. Paths are resolved against the current
/// working directory rather than baked into the player.
///
/// # Example
/// ```
/// use gc_core::config::PlayerConfig;
/// let config = PlayerConfig::default();
/// assert_eq!(config.target_fps, 30);
/// ```
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct PlayerConfig {
    /// Directory containing the pre-extracted frame images.
    pub frames_dir: PathBuf,
    /// Audio track played alongside the frames.
    pub audio_path: PathBuf,
    /// Target frame rate. The frame period is `1000 / target_fps` ms.
    pub target_fps: u32,
    /// Glyph ramp, lightest → darkest.
    pub charset: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            frames_dir: PathBuf::from("frames"),
            audio_path: PathBuf::from("bad_apple.wav"),
            target_fps: 30,
            charset: ASCII_RAMP.to_string(),
        }
    }
}

impl PlayerConfig {
    /// Fixed frame period derived from `target_fps`.
    ///
    /// Whole milliseconds, truncating: 30 fps → 33 ms.
    ///
    /// # Errors
    /// Returns `CoreError::Config` if `target_fps` is zero.
    pub fn frame_period(&self) -> Result<Duration, CoreError> {
        if self.target_fps == 0 {
            return Err(CoreError::Config("target_fps must be > 0".to_string()));
        }
        Ok(Duration::from_millis(u64::from(1000 / self.target_fps)))
    }
}

/// TOML file shape: every field optional.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    frames_dir: Option<PathBuf>,
    audio_path: Option<PathBuf>,
    target_fps: Option<u32>,
    charset: Option<String>,
}

/// Load a configuration file, falling back to defaults for absent fields.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: &Path) -> Result<PlayerConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read {}", path.display()))?;

    let file: ConfigFile = toml::from_str(&content)
        .with_context(|| format!("TOML parse error in {}", path.display()))?;

    let mut config = PlayerConfig::default();
    if let Some(v) = file.frames_dir {
        config.frames_dir = v;
    }
    if let Some(v) = file.audio_path {
        config.audio_path = v;
    }
    if let Some(v) = file.target_fps {
        config.target_fps = v;
    }
    if let Some(v) = file.charset {
        config.charset = v;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_period_is_33ms() {
        let config = PlayerConfig::default();
        assert_eq!(config.frame_period().unwrap(), Duration::from_millis(33));
    }

    #[test]
    fn zero_fps_is_rejected() {
        let config = PlayerConfig {
            target_fps: 0,
            ..PlayerConfig::default()
        };
        assert!(config.frame_period().is_err());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let file: ConfigFile = toml::from_str("target_fps = 60").unwrap();
        let mut config = PlayerConfig::default();
        if let Some(v) = file.target_fps {
            config.target_fps = v;
        }
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.frames_dir, PathBuf::from("frames"));
    }
}
