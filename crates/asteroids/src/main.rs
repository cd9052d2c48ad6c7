//! Asteroids game entry point

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use arcade_engine::backends::macroquad::{run, window_conf};
use arcade_engine::config::{Config, Format};
use arcade_engine::foundation::logging;
use arcade_engine::{Engine, ExitReason};
use asteroids::{AsteroidsGame, GameConfig};
use macroquad::prelude::Conf;

const DEFAULT_CONFIG: &str = "asteroids.toml";

/// Loaded once; the window setup and the game share it
static CONFIG: OnceLock<GameConfig> = OnceLock::new();

/// Config file named on the command line, else the default file
fn config_path() -> PathBuf {
    std::env::args_os()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG), PathBuf::from)
}

fn load_config(path: &Path) -> GameConfig {
    match GameConfig::load_or_default(path) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("Could not load {}: {}; using defaults", path.display(), err);
            GameConfig::default()
        }
    }
}

fn game_config() -> &'static GameConfig {
    CONFIG.get_or_init(|| {
        let config = load_config(&config_path());
        if let Ok(text) = config.to_string_with_format(Format::Toml) {
            log::debug!("Effective configuration:\n{}", text);
        }
        config
    })
}

fn macroquad_conf() -> Conf {
    logging::init();

    match window_conf(&game_config().engine_config().window) {
        Ok(conf) => conf,
        Err(err) => {
            log::warn!("{}; using the default window", err);
            Conf {
                window_title: "Asteroids".to_owned(),
                ..Default::default()
            }
        }
    }
}

#[macroquad::main(macroquad_conf)]
async fn main() {
    std::process::exit(play().await);
}

/// Run one round; returns the process exit code
async fn play() -> i32 {
    log::info!("Starting Asteroids...");

    let config = game_config().clone();
    let mut engine = match Engine::new(config.engine_config()) {
        Ok(engine) => engine,
        Err(err) => {
            log::error!("Failed to start engine: {}", err);
            return 2;
        }
    };
    let mut game = match AsteroidsGame::new(config) {
        Ok(game) => game,
        Err(err) => {
            log::error!("Failed to create game: {}", err);
            return 2;
        }
    };

    match run(&mut engine, &mut game).await {
        Ok(ExitReason::WindowClosed) => {
            log::info!("Window closed");
            0
        }
        Ok(ExitReason::GameOver) => {
            println!("Game over!");
            1
        }
        Err(err) => {
            log::error!("Game error: {}", err);
            2
        }
    }
}
