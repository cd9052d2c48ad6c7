//! Drifting, splitting asteroids

use arcade_engine::foundation::math::{Vec2, Vec2Ext};
use arcade_engine::render::Surface;
use rand::Rng;

use super::{Body, CircleShape, UpdateContext};
use crate::config::{AsteroidConfig, GraphicsConfig};

/// An asteroid drifting in a straight line
#[derive(Debug, Clone, PartialEq)]
pub struct Asteroid {
    shape: CircleShape,
}

impl Asteroid {
    /// New asteroid at `position` moving with `velocity`
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

    /// Current radius
    pub fn radius(&self) -> f32 {
        self.shape.radius
    }

    /// Destroy this asteroid, breaking it into two smaller ones when it is
    /// still above the minimum size
    ///
    /// The children share the parent's position, are one size tier smaller
    /// and fly off at a random angle to either side of the parent's heading,
    /// slightly faster than the parent.
    pub fn split<R: Rng + ?Sized>(&mut self, config: &AsteroidConfig, rng: &mut R) -> Option<[Asteroid; 2]> {
        self.shape.kill();

        if self.shape.radius <= config.min_radius {
            log::debug!("Asteroid destroyed at ({:.0}, {:.0})", self.shape.position.x, self.shape.position.y);
            return None;
        }

        let angle = rng.gen_range(config.split_angle_min..=config.split_angle_max);
        let radius = self.shape.radius - config.min_radius;
        let velocity = self.shape.velocity;
        let child = |degrees: f32| {
            Asteroid::new(
                self.shape.position,
                radius,
                velocity.rotate_degrees(degrees) * config.split_speed_multiplier,
            )
        };

        log::debug!("Asteroid split: radius {} -> 2 x {}, angle {:.1}", self.shape.radius, radius, angle);
        Some([child(angle), child(-angle)])
    }
}

impl Body for Asteroid {
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
