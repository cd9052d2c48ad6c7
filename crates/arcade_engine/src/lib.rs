//! # Arcade Engine
//!
//! A small 2D engine for vector-drawn arcade games.
//!
//! ## Features
//!
//! - **Flat Vector Rendering**: Outlined circles and polygons recorded into a
//!   draw queue and flushed by a backend
//! - **Arena Entity Store**: Generational handles with tag-based queries
//! - **Frame Driver**: Fixed-order poll/update/draw/present loop with pacing
//! - **Configuration**: TOML and RON config files through serde
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use arcade_engine::prelude::*;
//!
//! struct MyApp;
//!
//! impl Application for MyApp {
//!     fn update(&mut self, input: &InputState, delta_time: f32) -> Result<Flow, AppError> {
//!         // Update game logic
//!         Ok(Flow::Continue)
//!     }
//!
//!     fn draw(&self, surface: &mut dyn Surface) {
//!         // Draw the current state
//!     }
//! }
//!
//! #[macroquad::main("My Game")]
//! async fn main() {
//!     let mut engine = Engine::new(EngineConfig::default()).expect("valid config");
//!     let mut app = MyApp;
//!     arcade_engine::backends::macroquad::run(&mut engine, &mut app).await.ok();
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod backends;
pub mod config;
pub mod ecs;
pub mod foundation;
pub mod input;
pub mod physics;
pub mod render;

mod application;
mod engine;

pub use application::{AppError, Application, Flow};
pub use engine::{Engine, EngineConfig, EngineError, EngineState, ExitReason, WindowConfig};

/// Common imports for engine users
pub mod prelude {
    pub use crate::{
        config::{Config, ConfigError},
        ecs::{EntityId, World},
        foundation::{
            math::{Vec2, Vec2Ext},
            time::{FrameLimiter, Timer},
        },
        input::{InputState, KeyCode},
        physics::{Bounds, Circle, Collider},
        render::{Color, DrawCommand, DrawQueue, Surface},
        AppError, Application, Engine, EngineConfig, EngineError, EngineState, ExitReason, Flow,
        WindowConfig,
    };
}
