//! Scenes and scene switching
//!
//! A scene is one screen of the game (title, hello, ...). The
//! [`SceneContainer`] owns the active scene and at most one pending scene.
//!
//! ```text
//! request_transition(s) ──▶ s.init() ──▶ pending = s
//! update()              ──▶ pending? → active ──▶ active.update(switch)
//! draw()                ──▶ active.draw(frame)
//! ```
//!
//! `init` runs when a scene is requested, one tick before it becomes
//! active. While updating, a scene only gets a [`SceneSwitch`]: it can stage
//! the next scene but cannot reach the active slot.

mod container;
mod hello;
mod title;

pub use container::SceneContainer;
pub use hello::HelloScene;
pub use title::TitleScene;

use crate::asset::{AssetError, AssetStore, Playback};
use crate::config::GameConfig;
use crate::input::InputState;
use crate::render::Frame;
use crate::storage::ByteSource;

/// Errors a tick can fail with
#[derive(Debug, thiserror::Error)]
pub enum SceneError {
    /// A scene requested during the tick failed to initialize
    #[error("loading scene: {0}")]
    Load(#[from] AssetError),
    /// Nothing was ever requested
    #[error("no active scene")]
    NoActiveScene,
}

/// Services a scene can use
pub struct SceneEnv<'a> {
    pub source: &'a dyn ByteSource,
    pub assets: &'a mut AssetStore,
    pub playback: &'a mut Playback,
    pub config: &'a GameConfig,
}

/// One screen of the game
pub trait Scene {
    /// Name for logs
    fn name(&self) -> &'static str;

    /// Runs once, when the scene is requested
    fn init(&mut self, env: &mut SceneEnv) -> Result<(), AssetError>;

    /// Runs every tick while the scene is active
    fn update(&mut self, switch: &mut SceneSwitch) -> Result<(), SceneError>;

    /// Runs every frame while the scene is active
    fn draw(&self, frame: &mut dyn Frame);
}

/// What an updating scene gets: this tick's input, the env, and the right
/// to stage the next scene.
pub struct SceneSwitch<'a> {
    pending: &'a mut Option<Box<dyn Scene>>,
    env: SceneEnv<'a>,
    input: InputState,
}

impl<'a> SceneSwitch<'a> {
    /// Stage `scene` as the next scene; it becomes active on the next tick.
    ///
    /// The scene's `init` runs now. If it fails nothing is staged.
    pub fn transition(&mut self, scene: Box<dyn Scene>) -> Result<(), AssetError> {
        stage(&mut *self.pending, scene, &mut self.env)
    }

    pub fn input(&self) -> InputState {
        self.input
    }

    pub fn env(&mut self) -> &mut SceneEnv<'a> {
        &mut self.env
    }
}

/// Initialize `scene` and put it in the pending slot
fn stage(
    pending: &mut Option<Box<dyn Scene>>,
    mut scene: Box<dyn Scene>,
    env: &mut SceneEnv,
) -> Result<(), AssetError> {
    log::debug!("Initializing scene {}", scene.name());
    scene.init(env)?;

    if let Some(previous) = pending.replace(scene) {
        log::debug!("Pending scene {} replaced before it became active", previous.name());
    }
    Ok(())
}
