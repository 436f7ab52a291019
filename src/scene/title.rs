//! Title screen

use macroquad::color::Color;

use super::{HelloScene, Scene, SceneEnv, SceneError, SceneSwitch};
use crate::asset::AssetError;
use crate::render::Frame;

const BACKGROUND: Color = Color::new(0.86, 0.70, 0.42, 1.0);
const GRID: Color = Color::new(0.20, 0.13, 0.05, 1.0);
const INK: Color = Color::new(0.10, 0.07, 0.03, 1.0);

/// Ticks per half-period of the blinking prompt
const BLINK_TICKS: u64 = 30;

/// Title screen: loads the stone assets and shows an empty board
pub struct TitleScene {
    ticks: u64,
    board_size: u32,
}

impl Default for TitleScene {
    fn default() -> Self {
        Self::new()
    }
}

impl TitleScene {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            board_size: 9,
        }
    }

    /// Board placement for a frame: (left, top, spacing between lines)
    fn board_geometry(&self, (width, height): (f32, f32)) -> (f32, f32, f32) {
        let side = width.min(height) * 0.6;
        let spacing = side / (self.board_size - 1) as f32;
        let left = (width - side) / 2.0;
        let top = height * 0.25;
        (left, top, spacing)
    }

    /// Decorative stones: (column, row, image key)
    fn showcase(&self) -> [(u32, u32, &'static str); 4] {
        let near = self.board_size / 4;
        let far = self.board_size - 1 - near;
        [
            (near, near, "black_n"),
            (far, far, "white_n"),
            (near, far, "white_s"),
            (far, near, "black_s"),
        ]
    }
}

impl Scene for TitleScene {
    fn name(&self) -> &'static str {
        "title"
    }

    fn init(&mut self, env: &mut SceneEnv) -> Result<(), AssetError> {
        self.board_size = env.config.board_size;
        let loaded = env.assets.load_manifest(env.source, &env.config.assets)?;
        log::info!("Title screen loaded {} assets", loaded);
        env.playback.play("set_stone");
        Ok(())
    }

    fn update(&mut self, switch: &mut SceneSwitch) -> Result<(), SceneError> {
        self.ticks += 1;

        if switch.input().confirm {
            switch.transition(Box::new(HelloScene::new()))?;
            switch.env().playback.play("force_stone");
        }
        Ok(())
    }

    fn draw(&self, frame: &mut dyn Frame) {
        let size = frame.size();
        frame.clear(BACKGROUND);
        frame.text("Magnet Go!", size.0 / 2.0 - 90.0, size.1 * 0.08, 40.0, INK);

        let (left, top, spacing) = self.board_geometry(size);
        let last = (self.board_size - 1) as f32 * spacing;
        for i in 0..self.board_size {
            let offset = i as f32 * spacing;
            frame.line((left, top + offset), (left + last, top + offset), 1.5, GRID);
            frame.line((left + offset, top), (left + offset, top + last), 1.5, GRID);
        }

        // Star point in the middle of odd boards
        if self.board_size % 2 == 1 {
            let center = (self.board_size / 2) as f32 * spacing;
            frame.circle((left + center, top + center), 3.0, GRID);
        }

        let stone = spacing * 0.9;
        for (col, row, key) in self.showcase() {
            let x = left + col as f32 * spacing - stone / 2.0;
            let y = top + row as f32 * spacing - stone / 2.0;
            frame.image(key, x, y, stone);
        }

        if (self.ticks / BLINK_TICKS) % 2 == 0 {
            frame.text("Press Enter", size.0 / 2.0 - 55.0, size.1 * 0.9, 24.0, INK);
        }
    }
}
