//! Hello screen: tick counter and the sample JSON, drifting across the window

use macroquad::color::{Color, WHITE};

use super::{Scene, SceneEnv, SceneError, SceneSwitch, TitleScene};
use crate::asset::AssetError;
use crate::render::Frame;
use crate::storage::read_file;

const BACKGROUND: Color = Color::new(0.0, 64.0 / 255.0, 64.0 / 255.0, 1.0);

/// Text wraps around within this area
const DRIFT_WIDTH: u64 = 640;
const DRIFT_HEIGHT: u64 = 360;

/// Shown when the sample file cannot be read
const UNAVAILABLE: &str = "<unavailable>";

pub struct HelloScene {
    ticks: u64,
    sample_path: String,
    sample: String,
}

impl Default for HelloScene {
    fn default() -> Self {
        Self::new()
    }
}

impl HelloScene {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            sample_path: String::new(),
            sample: String::new(),
        }
    }

    fn message(&self) -> String {
        format!(
            "Hello, wasmgame!\nTicks = {}\nThe content of {} is: {}",
            self.ticks, self.sample_path, self.sample
        )
    }
}

/// JSON is shown compact; anything else as text
fn display_sample(bytes: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(bytes) {
        Ok(value) => value.to_string(),
        Err(_) => String::from_utf8_lossy(bytes).trim().to_string(),
    }
}

impl Scene for HelloScene {
    fn name(&self) -> &'static str {
        "hello"
    }

    fn init(&mut self, env: &mut SceneEnv) -> Result<(), AssetError> {
        self.sample_path = env.config.sample_path.clone();
        // The sample is decoration; a missing file is not fatal
        self.sample = match read_file(env.source, &self.sample_path) {
            Ok(bytes) => display_sample(&bytes),
            Err(e) => {
                log::warn!("{}", e);
                UNAVAILABLE.to_string()
            }
        };
        Ok(())
    }

    fn update(&mut self, switch: &mut SceneSwitch) -> Result<(), SceneError> {
        self.ticks += 1;

        if switch.input().back {
            switch.transition(Box::new(TitleScene::new()))?;
        }
        Ok(())
    }

    fn draw(&self, frame: &mut dyn Frame) {
        frame.clear(BACKGROUND);
        let x = (self.ticks % DRIFT_WIDTH) as f32;
        let y = (self.ticks % DRIFT_HEIGHT) as f32;
        frame.text(&self.message(), x, y, 16.0, WHITE);
    }
}
