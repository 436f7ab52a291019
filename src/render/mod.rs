//! Drawing surface
//!
//! Scenes draw through the [`Frame`] trait. The game uses [`Screen`], which
//! forwards to macroquad with textures from the [`MediaCache`]; tests use a
//! recording frame instead, so no GPU context is needed to check a scene's
//! output.

mod media;
mod screen;

pub use media::MediaCache;
pub use screen::Screen;

use macroquad::color::Color;

/// Per-frame draw target
pub trait Frame {
    /// Logical size in pixels
    fn size(&self) -> (f32, f32);

    /// Fill the whole frame
    fn clear(&mut self, color: Color);

    /// Draw the image stored under `key`, scaled to a `size`×`size` square
    /// with its top-left corner at (x, y). Unknown keys draw nothing.
    fn image(&mut self, key: &str, x: f32, y: f32, size: f32);

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color);

    fn circle(&mut self, center: (f32, f32), radius: f32, color: Color);

    /// Draw text with its first line's top-left corner at (x, y).
    /// Newlines start a new line below.
    fn text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color);
}
