use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use gc_core::frame::LuminanceFrame;
use gc_core::traits::FrameSource;

/// Recognized image extensions.
const IMAGE_EXTS: &[&str] = &["png", "jpg", "jpeg", "bmp", "gif"];

/// Frame source backed by a flat directory of image files.
///
/// Files are enumerated once at construction and ordered
/// lexicographically by path; the ordering is immutable for the
/// session. Frames are decoded on demand, one per `load_frame` call.
///
/// # Example
/// ```no_run
/// use std::path::Path;
/// use gc_source::directory::DirectoryFrameSource;
/// let source = DirectoryFrameSource::new(Path::new("frames")).unwrap();
/// ```
pub struct DirectoryFrameSource {
    files: Vec<PathBuf>,
}

impl DirectoryFrameSource {
    /// Enumerate `dir` and build the fixed frame schedule.
    ///
    /// A directory with no recognized images yields an empty schedule,
    /// which is valid; a missing or unreadable directory is an error.
    ///
    /// # Errors
    /// Returns an error if `dir` cannot be read.
    pub fn new(dir: &Path) -> Result<Self> {
        let entries = fs::read_dir(dir)
            .with_context(|| format!("Cannot read frames directory {}", dir.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.is_dir() {
                continue;
            }
            if let Some(ext) = path.extension().and_then(|s| s.to_str()) {
                if IMAGE_EXTS.contains(&ext.to_lowercase().as_str()) {
                    files.push(path);
                }
            }
        }
        files.sort();

        log::info!("Enumerated {} frames in {}", files.len(), dir.display());
        Ok(Self { files })
    }

    /// Path of the frame at `index`, if in range.
    #[must_use]
    pub fn path(&self, index: usize) -> Option<&Path> {
        self.files.get(index).map(PathBuf::as_path)
    }
}

impl FrameSource for DirectoryFrameSource {
    fn frame_count(&self) -> usize {
        self.files.len()
    }

    fn load_frame(&mut self, index: usize) -> Result<LuminanceFrame> {
        let path = self
            .files
            .get(index)
            .with_context(|| format!("Frame index {index} out of range"))?;

        let img = image::open(path)
            .with_context(|| format!("Cannot decode frame {}", path.display()))?;
        let luma = img.to_luma8();
        let (width, height) = luma.dimensions();

        LuminanceFrame::from_raw(luma.into_raw(), width, height)
            .with_context(|| format!("Bad frame buffer for {}", path.display()))
    }
}
