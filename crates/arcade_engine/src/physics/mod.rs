//! Physics module
//!
//! Collision primitives for circle-shaped bodies.

pub mod collision;

pub use collision::{Bounds, Circle, Collider};
