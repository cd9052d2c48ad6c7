//! Circular body shared by every entity

use arcade_engine::foundation::math::Vec2;
use arcade_engine::physics::{Circle, Collider};
use arcade_engine::render::Surface;

use super::UpdateContext;
use crate::config::GraphicsConfig;

/// Position, velocity and radius of a circular entity
#[derive(Debug, Clone, PartialEq)]
pub struct CircleShape {
    /// Center in screen space
    pub position: Vec2,

    /// Pixels per second
    pub velocity: Vec2,

    /// Collision and drawing radius
    pub radius: f32,

    alive: bool,
}

impl CircleShape {
    /// A resting shape at `position`
    pub fn new(position: Vec2, radius: f32) -> Self {
        Self {
            position,
            velocity: Vec2::zeros(),
            radius,
            alive: true,
        }
    }

    /// Builder-style velocity setter
    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    /// Advance the position by `velocity * dt`
    pub fn integrate(&mut self, delta_time: f32) {
        self.position += self.velocity * delta_time;
    }

    /// Whether the shape is still in play
    pub fn is_alive(&self) -> bool {
        self.alive
    }

    /// Mark the shape for removal at the end of the frame
    pub fn kill(&mut self) {
        self.alive = false;
    }
}

impl Collider for CircleShape {
    fn bounds(&self) -> Circle {
        Circle::new(self.position, self.radius)
    }
}

/// Behavior shared by everything that moves, draws and collides
pub trait Body {
    /// Underlying circle
    fn shape(&self) -> &CircleShape;

    /// Mutable access to the underlying circle
    fn shape_mut(&mut self) -> &mut CircleShape;

    /// Advance one frame
    fn update(&mut self, delta_time: f32, ctx: &mut UpdateContext<'_>);

    /// Draw as flat outlines
    fn draw(&self, surface: &mut dyn Surface, graphics: &GraphicsConfig);

    /// Whether the entity is still in play
    fn is_alive(&self) -> bool {
        self.shape().is_alive()
    }

    /// Mark for removal at the end of the frame
    fn kill(&mut self) {
        self.shape_mut().kill();
    }

    /// Strict circle overlap; touching bodies do not collide
    fn collides_with(&self, other: &dyn Body) -> bool {
        self.shape().collides_with(other.shape())
    }
}
