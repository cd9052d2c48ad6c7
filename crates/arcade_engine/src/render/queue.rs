use super::{Color, Surface};
use crate::foundation::math::Vec2;

/// A single recorded draw call
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Fill the frame with a solid color
    Clear {
        /// Fill color
        color: Color,
    },

    /// Outlined circle
    Circle {
        /// Center in screen space
        center: Vec2,
        /// Radius in pixels
        radius: f32,
        /// Outline thickness in pixels
        line_width: f32,
        /// Outline color
        color: Color,
    },

    /// Closed outlined polygon
    Polygon {
        /// Vertices in drawing order
        points: Vec<Vec2>,
        /// Outline thickness in pixels
        line_width: f32,
        /// Outline color
        color: Color,
    },
}

/// Frame-local list of draw commands, replayed by a backend in order
#[derive(Debug, Default)]
pub struct DrawQueue {
    commands: Vec<DrawCommand>,
}

impl DrawQueue {
    /// Create an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every recorded command, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Recorded commands in submission order
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of recorded commands
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether nothing has been recorded
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Surface for DrawQueue {
    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn circle_outline(&mut self, center: Vec2, radius: f32, line_width: f32, color: Color) {
        self.commands.push(DrawCommand::Circle {
            center,
            radius,
            line_width,
            color,
        });
    }

    fn polygon_outline(&mut self, points: &[Vec2], line_width: f32, color: Color) {
        self.commands.push(DrawCommand::Polygon {
            points: points.to_vec(),
            line_width,
            color,
        });
    }
}
