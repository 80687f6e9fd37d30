use std::io::Write;
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::cursor::MoveTo;
use crossterm::terminal::{Clear, ClearType};
use crossterm::{execute, queue};
use gc_ascii::render::render_frame;
use gc_core::charset::GlyphRamp;
use gc_core::clock::PlaybackClock;
use gc_core::traits::{AudioService, FrameSource};

/// Run the playback loop to completion.
///
/// Single-threaded: one pass over the fixed frame schedule, paced by
/// absolute deadlines from a baseline captured right after the audio
/// trigger. The audio device plays on its own callback thread; the two
/// streams are synchronized exactly once, at that capture.
///
/// Per-frame decode failures are skipped silently (a `debug` log aside):
/// the slot's wall time is still consumed, so a bad frame shows as a
/// momentary gap and never compresses the schedule. The final frame
/// holds its slot before the function returns, so an N-frame schedule
/// spans N × period of wall time.
///
/// An empty schedule still fires the audio trigger once, writes no
/// frame text, and returns cleanly.
///
/// # Errors
/// Returns an error on terminal I/O failure or if the audio trigger
/// refuses to fire.
pub fn play<W: Write>(
    source: &mut dyn FrameSource,
    audio: &mut dyn AudioService,
    ramp: &GlyphRamp,
    period: Duration,
    out: &mut W,
) -> Result<()> {
    let frame_count = source.frame_count();
    log::info!(
        "Starting playback: {frame_count} frames @ {}ms period",
        period.as_millis()
    );

    // Full clear once; per-frame output only homes the cursor to avoid
    // whole-screen flicker.
    execute!(out, Clear(ClearType::All)).context("Cannot clear terminal")?;

    audio.start().context("Audio trigger failed")?;
    let clock = PlaybackClock::start(period);

    for index in 0..frame_count {
        clock.wait_for(index);

        match source.load_frame(index) {
            Ok(mut frame) => {
                let text = render_frame(&mut frame, ramp);
                queue!(out, MoveTo(0, 0)).context("Cannot home cursor")?;
                out.write_all(text.as_bytes())
                    .context("Cannot write frame")?;
                out.flush().context("Cannot flush frame")?;
            }
            Err(e) => {
                // Slot time is still consumed by the next wait.
                log::debug!("Skipping frame {index}: {e:#}");
            }
        }
    }

    // Hold the last frame through its slot.
    clock.wait_for(frame_count);

    log::info!("Playback finished after {:?}", clock.elapsed());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gc_core::frame::LuminanceFrame;
    use std::time::Instant;

    /// In-memory source: `Some` decodes, `None` simulates a corrupt frame.
    struct MemorySource {
        frames: Vec<Option<Vec<u8>>>,
        width: u32,
        height: u32,
    }

    impl FrameSource for MemorySource {
        fn frame_count(&self) -> usize {
            self.frames.len()
        }

        fn load_frame(&mut self, index: usize) -> Result<LuminanceFrame> {
            match &self.frames[index] {
                Some(data) => {
                    Ok(LuminanceFrame::from_raw(data.clone(), self.width, self.height)?)
                }
                None => anyhow::bail!("corrupt frame {index}"),
            }
        }
    }

    struct CountingAudio {
        starts: usize,
    }

    impl AudioService for CountingAudio {
        fn start(&mut self) -> Result<()> {
            self.starts += 1;
            Ok(())
        }
    }

    fn count_cursor_homes(output: &[u8]) -> usize {
        // crossterm MoveTo(0, 0) emits ESC [ 1 ; 1 H
        let needle = b"\x1b[1;1H";
        output
            .windows(needle.len())
            .filter(|w| w == needle)
            .count()
    }

    #[test]
    fn empty_schedule_triggers_audio_and_writes_no_frames() {
        let mut source = MemorySource {
            frames: vec![],
            width: 0,
            height: 0,
        };
        let mut audio = CountingAudio { starts: 0 };
        let ramp = GlyphRamp::default();
        let mut out = Vec::new();

        play(
            &mut source,
            &mut audio,
            &ramp,
            Duration::from_millis(1),
            &mut out,
        )
        .unwrap();

        assert_eq!(audio.starts, 1);
        assert_eq!(count_cursor_homes(&out), 0);
    }

    #[test]
    fn corrupt_frame_is_skipped_without_compressing_the_schedule() {
        let frame = Some(vec![100u8; 4]);
        let mut source = MemorySource {
            frames: vec![frame.clone(), frame.clone(), None, frame.clone(), frame],
            width: 2,
            height: 2,
        };
        let mut audio = CountingAudio { starts: 0 };
        let ramp = GlyphRamp::default();
        let mut out = Vec::new();
        let period = Duration::from_millis(5);

        let begin = Instant::now();
        play(&mut source, &mut audio, &ramp, period, &mut out).unwrap();
        let elapsed = begin.elapsed();

        assert_eq!(audio.starts, 1);
        assert_eq!(count_cursor_homes(&out), 4);
        // Five slots at 5ms each, skip included.
        assert!(elapsed >= period * 5, "schedule compressed to {elapsed:?}");
    }

    #[test]
    fn plays_a_directory_of_frames_end_to_end() {
        use gc_source::directory::DirectoryFrameSource;
        use image::{GrayImage, Luma};

        let dir = tempfile::tempdir().unwrap();
        for (name, value) in [("frame_001.png", 0u8), ("frame_003.png", 255)] {
            let img = GrayImage::from_pixel(2, 2, Luma([value]));
            img.save(dir.path().join(name)).unwrap();
        }
        // Sorts between the two valid frames, fails to decode, gets skipped.
        std::fs::write(dir.path().join("frame_002.png"), b"not a png").unwrap();

        let mut source = DirectoryFrameSource::new(dir.path()).unwrap();
        let mut audio = CountingAudio { starts: 0 };
        let ramp = GlyphRamp::default();
        let mut out = Vec::new();

        play(
            &mut source,
            &mut audio,
            &ramp,
            Duration::from_millis(1),
            &mut out,
        )
        .unwrap();

        assert_eq!(audio.starts, 1);
        assert_eq!(count_cursor_homes(&out), 2);
        let text = String::from_utf8_lossy(&out);
        assert!(text.contains("  \n"));
        assert!(text.contains("$$\n"));
    }

    #[test]
    fn frames_are_rendered_in_schedule_order() {
        let mut source = MemorySource {
            frames: vec![Some(vec![0u8; 2]), Some(vec![255u8; 2])],
            width: 2,
            height: 1,
        };
        let mut audio = CountingAudio { starts: 0 };
        let ramp = GlyphRamp::default();
        let mut out = Vec::new();

        play(
            &mut source,
            &mut audio,
            &ramp,
            Duration::from_millis(1),
            &mut out,
        )
        .unwrap();

        let text = String::from_utf8_lossy(&out);
        let light = text.find("  \n").unwrap();
        let dark = text.find("$$\n").unwrap();
        assert!(light < dark);
    }
}
