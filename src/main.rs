//! Magnet Go!: a Go board game scaffold
//!
//! Scenes, stone and sound assets, and a hello-world screen, running on
//! macroquad on the desktop and in the browser:
//! - Title screen loads the stone images and sound effects
//! - Hello screen shows a tick counter and the sample JSON file
//! - Files come from disk, from an HTTP server, or (in the browser) are
//!   fetched up front

/// Version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

mod app;
mod asset;
mod config;
mod input;
mod render;
mod scene;
mod storage;

use macroquad::prelude::*;

use app::{Game, TickClock};
use config::GameConfig;
use input::InputState;
use render::{MediaCache, Screen};
use scene::TitleScene;

fn window_conf() -> Conf {
    // Errors are reported again (and are fatal) once logging is up in main
    let window = GameConfig::load_for_host()
        .map(|config| config.window)
        .unwrap_or_default();

    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        window_resizable: false,
        high_dpi: true,
        ..Default::default()
    }
}

/// Log and stop. Native builds exit with status 1.
fn fatal(err: &dyn std::fmt::Display) -> ! {
    log::error!("{}", err);
    #[cfg(not(target_arch = "wasm32"))]
    std::process::exit(1);
    #[cfg(target_arch = "wasm32")]
    panic!("{}", err);
}

#[macroquad::main(window_conf)]
async fn main() {
    // Initialize crash logging FIRST (before any other code)
    #[cfg(not(target_arch = "wasm32"))]
    crashlog::setup!(crashlog::cargo_metadata!().capitalized(), false);

    #[cfg(not(target_arch = "wasm32"))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!("=== Magnet Go! v{} ===", VERSION);

    let config = match GameConfig::load_for_host() {
        Ok(config) => config,
        Err(e) => fatal(&e),
    };

    let source = storage::open_source(&config).await;
    let mut game = match Game::new(config, source, Box::new(TitleScene::new())) {
        Ok(game) => game,
        Err(e) => fatal(&e),
    };
    let mut clock = TickClock::new(game.config().ticks_per_second);
    let mut media = MediaCache::new();

    loop {
        let ticks = clock.advance(get_frame_time() as f64);
        if let Err(e) = game.run_frame(ticks, InputState::poll()) {
            fatal(&e);
        }

        if let Err(e) = media.sync(game.assets()).await {
            fatal(&e);
        }
        media.play(game.playback_mut());

        game.draw(&mut Screen::new(&media));

        next_frame().await;
    }
}
