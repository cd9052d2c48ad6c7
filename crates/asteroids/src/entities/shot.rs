//! Projectiles fired by the ship

use arcade_engine::foundation::math::Vec2;
use arcade_engine::render::Surface;

use super::{Body, CircleShape, UpdateContext};
use crate::config::GraphicsConfig;

/// A projectile flying in a straight line at constant velocity
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    shape: CircleShape,
}

impl Shot {
    /// Fire a shot from `position`
    pub fn new(position: Vec2, radius: f32, velocity: Vec2) -> Self {
        Self {
            shape: CircleShape::new(position, radius).with_velocity(velocity),
        }
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    /// Velocity in pixels per second
    pub fn velocity(&self) -> Vec2 {
        self.shape.velocity
    }
}

impl Body for Shot {
    fn shape(&self) -> &CircleShape {
        &self.shape
    }

    fn shape_mut(&mut self) -> &mut CircleShape {
        &mut self.shape
    }

    fn update(&mut self, delta_time: f32, _ctx: &mut UpdateContext<'_>) {
        self.shape.integrate(delta_time);
    }

    fn draw(&self, surface: &mut dyn Surface, graphics: &GraphicsConfig) {
        surface.circle_outline(self.shape.position, self.shape.radius, graphics.line_width, graphics.foreground);
    }
}
