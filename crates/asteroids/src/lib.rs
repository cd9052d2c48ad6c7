//! # Asteroids
//!
//! Classic vector arcade game on top of `arcade_engine`: a triangular ship
//! shoots at asteroids that drift in from the screen edges and break into
//! smaller pieces when hit. The round ends the moment an asteroid touches the
//! ship.
//!
//! The game logic is independent of any window; [`AsteroidsGame`] can be
//! driven frame by frame with [`AsteroidsGame::tick`] or through the engine's
//! [`Application`](arcade_engine::Application) trait.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::cast_precision_loss)]

pub mod config;
pub mod controls;
pub mod entities;
pub mod game;

#[cfg(test)]
mod tests;

pub use config::GameConfig;
pub use controls::ShipControls;
pub use game::{AsteroidsGame, GamePhase};
