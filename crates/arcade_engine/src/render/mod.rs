//! Rendering front end
//!
//! The game never talks to a graphics API directly. It draws onto a
//! [`Surface`]; the usual surface is a [`DrawQueue`] that records
//! [`DrawCommand`]s for a backend to replay once per frame.
//!
//! # Design Philosophy
//!
//! The renderer should be a passive library that:
//! - Accepts fully computed screen-space geometry
//! - Only handles drawing (no lifecycle, input, or timing)

mod color;
mod queue;

pub use color::Color;
pub use queue::{DrawCommand, DrawQueue};

use crate::foundation::math::Vec2;

/// Immediate-mode drawing target for flat vector shapes
pub trait Surface {
    /// Fill the whole surface with `color`
    fn clear(&mut self, color: Color);

    /// Draw the outline of a circle
    fn circle_outline(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color);

    /// Draw a closed polygon outline through `points` in order
    fn polygon_outline(&mut self, points: &[Vec2], line_width: f32, color: Color);
}
