use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use gc_core::traits::AudioService;

use crate::decode;
use crate::error::AudioError;

/// One-shot audio playback over the default output device.
///
/// The whole track is decoded at construction and the device stream is
/// built paused; `start()` is the single trigger the player fires right
/// before it captures its frame clock baseline. Past the last sample
/// the device callback emits silence; playback is single-pass.
///
/// Dropping the player drops the cpal stream, which releases the device
/// on every exit path, early termination included.
///
/// # Example
/// ```no_run
/// use gc_audio::playback::AudioPlayer;
/// use gc_core::traits::AudioService;
///
/// let mut audio = AudioPlayer::new("bad_apple.wav".as_ref()).unwrap();
/// audio.start().unwrap();
/// ```
pub struct AudioPlayer {
    stream: cpal::Stream,
}

impl AudioPlayer {
    /// Decode `path` and open a paused stream on the default output device.
    ///
    /// # Errors
    /// Any failure here is a fatal initialization error: unreadable or
    /// undecodable file, no output device, stream construction failure.
    pub fn new(path: &Path) -> Result<Self> {
        let (samples, sample_rate) = decode::decode_file(path)?;

        if samples.is_empty() {
            return Err(AudioError::EmptyTrack {
                path: path.display().to_string(),
            }
            .into());
        }

        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or(AudioError::NoOutputDevice)?;

        let config = cpal::StreamConfig {
            channels: 2, // mono source duplicated to stereo
            sample_rate: cpal::SampleRate(sample_rate),
            buffer_size: cpal::BufferSize::Default,
        };

        let samples = Arc::new(samples);
        let pos = Arc::new(AtomicUsize::new(0));
        let callback_samples = Arc::clone(&samples);
        let callback_pos = Arc::clone(&pos);

        let stream = device
            .build_output_stream(
                &config,
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    let total = callback_samples.len();
                    let mut p = callback_pos.load(Ordering::Relaxed);

                    for frame in data.chunks_mut(2) {
                        let sample = if p < total { callback_samples[p] } else { 0.0 };
                        frame[0] = sample;
                        if frame.len() > 1 {
                            frame[1] = sample;
                        }
                        if p < total {
                            p += 1;
                        }
                    }
                    callback_pos.store(p, Ordering::Relaxed);
                },
                |err| {
                    log::error!("Audio output error: {err}");
                },
                None,
            )
            .map_err(|e| AudioError::StreamError(e.to_string()))?;

        // Some hosts start streams eagerly; hold the trigger for start().
        stream
            .pause()
            .map_err(|e| AudioError::StreamError(e.to_string()))?;

        log::info!("Audio device ready @ {sample_rate}Hz for {}", path.display());

        Ok(Self { stream })
    }
}

impl AudioService for AudioPlayer {
    fn start(&mut self) -> Result<()> {
        self.stream
            .play()
            .map_err(|e| AudioError::StreamError(e.to_string()))?;
        log::info!("Audio playback started");
        Ok(())
    }
}
