//! Core engine implementation

use crate::{
    application::{AppError, Application, Flow},
    config::ConfigError,
    foundation::time::{FrameLimiter, Timer},
    input::InputState,
    render::{Color, DrawQueue, Surface},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why the frame loop stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The window was closed
    WindowClosed,

    /// The application reported a terminal game state
    GameOver,
}

/// Frame loop state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// Frames are being produced
    Running,

    /// The loop has ended; no further frames are produced
    Terminated(ExitReason),
}

/// Main engine struct
///
/// The engine owns frame timing and the draw queue and runs the fixed
/// per-frame sequence. Backends feed it input and present what it recorded.
pub struct Engine {
    /// Commands recorded for the current frame
    queue: DrawQueue,

    /// Frame timing
    timer: Timer,

    /// Frame pacing
    limiter: FrameLimiter,

    /// Engine configuration
    config: EngineConfig,

    state: EngineState,
}

impl Engine {
    /// Create a new engine instance
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        log::info!(
            "Initializing engine: {}x{} @ {} fps",
            config.window.width,
            config.window.height,
            config.target_fps
        );

        Ok(Self {
            queue: DrawQueue::new(),
            timer: Timer::new(),
            limiter: FrameLimiter::new(config.target_fps),
            config,
            state: EngineState::Running,
        })
    }

    /// Run one frame: input check, clear, update, draw
    ///
    /// A close request ends the loop before the application sees the frame;
    /// a game over ends it before anything is drawn. Once terminated, further
    /// calls are no-ops.
    pub fn step<T: Application + ?Sized>(
        &mut self,
        app: &mut T,
        input: &InputState,
        delta_time: f32,
    ) -> Result<EngineState, EngineError> {
        if self.state != EngineState::Running {
            return Ok(self.state);
        }

        if input.close_requested() {
            log::info!("Window close requested");
            self.state = EngineState::Terminated(ExitReason::WindowClosed);
            return Ok(self.state);
        }

        self.queue.reset();
        self.queue.clear(self.config.clear_color);

        match app.update(input, delta_time)? {
            Flow::Continue => {}
            Flow::GameOver => {
                log::info!("Game over after {} frames", self.timer.frame_count());
                self.state = EngineState::Terminated(ExitReason::GameOver);
                return Ok(self.state);
            }
        }

        app.draw(&mut self.queue);
        Ok(self.state)
    }

    /// Pace the frame and measure it
    ///
    /// Call after the frame has been presented. Returns the delta time to
    /// feed into the next [`Engine::step`].
    pub fn end_frame(&mut self) -> f32 {
        self.limiter.wait(self.timer.frame_start());
        self.timer.tick()
    }

    /// Commands recorded by the last [`Engine::step`]
    pub fn draw_queue(&self) -> &DrawQueue {
        &self.queue
    }

    /// Current loop state
    pub fn state(&self) -> EngineState {
        self.state
    }

    /// Engine configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Frame timer
    pub fn timer(&self) -> &Timer {
        &self.timer
    }
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Target frames per second (0 = unlimited)
    pub target_fps: u32,

    /// Color the frame is cleared to
    pub clear_color: Color,
}

impl EngineConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::Invalid(format!(
                "window size must be non-zero, got {}x{}",
                self.window.width, self.window.height
            )));
        }
        Ok(())
    }
}

/// Window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Window width
    pub width: u32,

    /// Window height
    pub height: u32,

    /// Whether window is resizable
    pub resizable: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            window: WindowConfig::default(),
            target_fps: 60,
            clear_color: Color::BLACK,
        }
    }
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Arcade Engine Application".to_string(),
            width: 1280,
            height: 720,
            resizable: false,
        }
    }
}

/// Engine-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Initialization error
    #[error("Engine initialization failed: {0}")]
    InitializationFailed(String),

    /// Application error
    #[error("Application error: {0}")]
    ApplicationError(#[from] AppError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}
