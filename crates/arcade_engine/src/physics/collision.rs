//! Primitive collision shapes and intersection tests

use crate::foundation::math::{Vec2, Vec2Ext};

/// A bounding circle for collision detection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    /// The center position of the circle in screen space
    pub center: Vec2,
    /// The radius of the circle
    pub radius: f32,
}

impl Circle {
    /// Creates a new circle with the given center and radius
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Check if this circle overlaps another
    ///
    /// Circles that only touch (distance equal to the radius sum) do not
    /// overlap.
    pub fn intersects(&self, other: &Circle) -> bool {
        self.center.distance_to(&other.center) < self.radius + other.radius
    }
}

/// Anything that occupies a circle in the play area
pub trait Collider {
    /// Current bounding circle
    fn bounds(&self) -> Circle;

    /// True iff the two bounding circles overlap
    fn collides_with(&self, other: &dyn Collider) -> bool {
        self.bounds().intersects(&other.bounds())
    }
}

impl Collider for Circle {
    fn bounds(&self) -> Circle {
        *self
    }
}

/// Axis-aligned rectangle used for play-area tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Minimum X coordinate
    pub min_x: f32,
    /// Maximum X coordinate
    pub max_x: f32,
    /// Minimum Y coordinate
    pub min_y: f32,
    /// Maximum Y coordinate
    pub max_y: f32,
}

impl Bounds {
    /// Rectangle from the origin to `(width, height)`
    pub fn from_size(width: f32, height: f32) -> Self {
        Self {
            min_x: 0.0,
            max_x: width,
            min_y: 0.0,
            max_y: height,
        }
    }

    /// Grow the rectangle by `margin` on every side
    pub fn expanded(&self, margin: f32) -> Self {
        Self {
            min_x: self.min_x - margin,
            max_x: self.max_x + margin,
            min_y: self.min_y - margin,
            max_y: self.max_y + margin,
        }
    }

    /// Whether any part of `circle` lies inside the rectangle
    pub fn overlaps(&self, circle: &Circle) -> bool {
        circle.center.x + circle.radius >= self.min_x
            && circle.center.x - circle.radius <= self.max_x
            && circle.center.y + circle.radius >= self.min_y
            && circle.center.y - circle.radius <= self.max_y
    }
}
