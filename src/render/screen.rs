//! macroquad-backed frame

use macroquad::prelude::*;

use super::{Frame, MediaCache};

/// Draws straight to the window
pub struct Screen<'a> {
    media: &'a MediaCache,
}

impl<'a> Screen<'a> {
    pub fn new(media: &'a MediaCache) -> Self {
        Self { media }
    }
}

impl Frame for Screen<'_> {
    fn size(&self) -> (f32, f32) {
        (screen_width(), screen_height())
    }

    fn clear(&mut self, color: Color) {
        clear_background(color);
    }

    fn image(&mut self, key: &str, x: f32, y: f32, size: f32) {
        let Some(texture) = self.media.texture(key) else {
            log::trace!("Image {} not uploaded yet", key);
            return;
        };
        draw_texture_ex(
            texture,
            x,
            y,
            WHITE,
            DrawTextureParams {
                dest_size: Some(vec2(size, size)),
                ..Default::default()
            },
        );
    }

    fn line(&mut self, from: (f32, f32), to: (f32, f32), thickness: f32, color: Color) {
        draw_line(from.0, from.1, to.0, to.1, thickness, color);
    }

    fn circle(&mut self, center: (f32, f32), radius: f32, color: Color) {
        draw_circle(center.0, center.1, radius, color);
    }

    fn text(&mut self, text: &str, x: f32, y: f32, font_size: f32, color: Color) {
        // draw_text positions the baseline; shift down one line so (x, y) is the top
        let line_height = font_size * 1.2;
        for (i, line) in text.lines().enumerate() {
            let baseline = y + font_size + i as f32 * line_height;
            draw_text(line, x, baseline, font_size, color);
        }
    }
}
