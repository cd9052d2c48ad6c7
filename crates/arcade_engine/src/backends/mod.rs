//! Platform backends
//!
//! A backend polls the platform into an [`InputState`](crate::input::InputState),
//! replays the engine's [`DrawQueue`](crate::render::DrawQueue) and presents
//! the frame.

pub mod macroquad;
