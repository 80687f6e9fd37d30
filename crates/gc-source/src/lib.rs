/// Frame sources for glyphcast.

pub mod directory;

pub use directory::DirectoryFrameSource;
