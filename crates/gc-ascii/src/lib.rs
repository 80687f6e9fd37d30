/// ASCII conversion for glyphcast: error-diffusion dithering and
/// frame-to-text rendering.

pub mod dither;
pub mod render;

pub use dither::floyd_steinberg;
pub use render::render_frame;
