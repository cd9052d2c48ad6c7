//! Application trait and lifecycle management

use crate::config::ConfigError;
use crate::input::InputState;
use crate::render::Surface;
use thiserror::Error;

/// What the frame driver should do after an update
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep running
    Continue,

    /// The game reached a terminal state
    GameOver,
}

/// Application lifecycle trait
///
/// Implement this trait to create your game using the engine.
pub trait Application {
    /// Update the application
    ///
    /// Called every frame, before drawing.
    ///
    /// # Arguments
    /// * `input` - Keys held this frame
    /// * `delta_time` - Duration of the previous frame in seconds
    fn update(&mut self, input: &InputState, delta_time: f32) -> Result<Flow, AppError>;

    /// Draw the current state
    ///
    /// Called after update on a surface that has already been cleared.
    fn draw(&self, surface: &mut dyn Surface);

    /// Cleanup the application
    ///
    /// Called once when the frame loop ends, whatever the reason.
    fn cleanup(&mut self) {}
}

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Game logic error
    #[error("Game logic error: {0}")]
    GameLogic(String),
}
