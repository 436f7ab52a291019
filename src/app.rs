//! Game state and tick pacing
//!
//! `Game` owns everything scenes work with (byte source, asset store,
//! playback queue, config) plus the scene container, and hands the pieces
//! out as a `SceneEnv` on every call. `TickClock` turns frame times into a
//! fixed number of ticks. Presses seen on a frame that runs no tick are
//! held until the next tick.

use crate::asset::{AssetError, AssetStore, Playback};
use crate::config::GameConfig;
use crate::input::InputState;
use crate::render::Frame;
use crate::scene::{Scene, SceneContainer, SceneEnv, SceneError};
use crate::storage::ByteSource;

/// The running game
pub struct Game {
    config: GameConfig,
    source: Box<dyn ByteSource>,
    assets: AssetStore,
    playback: Playback,
    scenes: SceneContainer,
    /// Presses not yet seen by a tick
    held: InputState,
}

impl Game {
    /// Build the game and request `initial` (its init runs now)
    pub fn new(
        config: GameConfig,
        source: Box<dyn ByteSource>,
        initial: Box<dyn Scene>,
    ) -> Result<Self, AssetError> {
        let mut game = Self {
            config,
            source,
            assets: AssetStore::new(),
            playback: Playback::new(),
            scenes: SceneContainer::new(),
            held: InputState::default(),
        };

        let mut env = SceneEnv {
            source: &*game.source,
            assets: &mut game.assets,
            playback: &mut game.playback,
            config: &game.config,
        };
        game.scenes.request_transition(initial, &mut env)?;
        Ok(game)
    }

    /// Run `ticks` updates for one frame.
    ///
    /// `polled` is merged into the held presses; the first tick consumes
    /// them, later ticks in the same frame see no presses.
    pub fn run_frame(&mut self, ticks: u32, polled: InputState) -> Result<(), SceneError> {
        self.held = self.held.merge(polled);
        for _ in 0..ticks {
            let input = std::mem::take(&mut self.held);
            self.tick(input)?;
        }
        Ok(())
    }

    /// One fixed update step
    pub fn tick(&mut self, input: InputState) -> Result<(), SceneError> {
        let env = SceneEnv {
            source: &*self.source,
            assets: &mut self.assets,
            playback: &mut self.playback,
            config: &self.config,
        };
        self.scenes.update(env, input)
    }

    pub fn draw(&self, frame: &mut dyn Frame) {
        self.scenes.draw(frame);
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn assets(&self) -> &AssetStore {
        &self.assets
    }

    pub fn playback_mut(&mut self) -> &mut Playback {
        &mut self.playback
    }

    pub fn scenes(&self) -> &SceneContainer {
        &self.scenes
    }
}

/// Most ticks run in one frame; time beyond that is dropped
const MAX_TICKS_PER_FRAME: u32 = 4;

/// Fixed-step accumulator
#[derive(Debug, Clone)]
pub struct TickClock {
    step: f64,
    accumulator: f64,
    started: bool,
}

impl TickClock {
    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            step: 1.0 / ticks_per_second.max(1) as f64,
            accumulator: 0.0,
            started: false,
        }
    }

    /// Ticks to run for a frame that took `frame_time` seconds.
    ///
    /// The first frame always gets one tick so the initial scene is active
    /// before anything is drawn.
    pub fn advance(&mut self, frame_time: f64) -> u32 {
        if !self.started {
            self.started = true;
            return 1;
        }

        self.accumulator += frame_time.max(0.0);
        let mut ticks = 0;
        while self.accumulator >= self.step && ticks < MAX_TICKS_PER_FRAME {
            self.accumulator -= self.step;
            ticks += 1;
        }
        if ticks == MAX_TICKS_PER_FRAME {
            // Fell behind; don't try to catch up later
            self.accumulator = self.accumulator.min(self.step);
        }
        ticks
    }
}
