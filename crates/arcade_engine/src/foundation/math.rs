//! Math utilities and types
//!
//! Provides the 2D vector type used for positions and velocities, plus the
//! handful of operations arcade physics needs on top of nalgebra.

pub use nalgebra::Vector2;

/// 2D vector type
pub type Vec2 = Vector2<f32>;

/// Math constants
pub mod constants {
    /// Pi constant
    pub const PI: f32 = std::f32::consts::PI;

    /// Degrees to radians conversion factor
    pub const DEG_TO_RAD: f32 = PI / 180.0;
}

/// Math utility functions
pub mod utils {
    use super::constants;

    /// Convert degrees to radians
    pub fn deg_to_rad(degrees: f32) -> f32 {
        degrees * constants::DEG_TO_RAD
    }
}

/// Extension trait for [`Vec2`] with the operations nalgebra does not name
/// the way game code wants them.
pub trait Vec2Ext {
    /// Rotate counter-clockwise by `degrees` using the standard rotation
    /// matrix `[cos -sin; sin cos]`.
    fn rotate_degrees(&self, degrees: f32) -> Vec2;

    /// Euclidean distance to `other`.
    fn distance_to(&self, other: &Vec2) -> f32;
}

impl Vec2Ext for Vec2 {
    fn rotate_degrees(&self, degrees: f32) -> Vec2 {
        let (sin, cos) = utils::deg_to_rad(degrees).sin_cos();
        Vec2::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }

    fn distance_to(&self, other: &Vec2) -> f32 {
        (self - other).magnitude()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EPSILON: f32 = 1e-5;

    #[test]
    fn test_rotate_quarter_turn_is_counter_clockwise() {
        let rotated = Vec2::new(1.0, 0.0).rotate_degrees(90.0);
        assert_relative_eq!(rotated, Vec2::new(0.0, 1.0), epsilon = EPSILON);

        let back = rotated.rotate_degrees(-90.0);
        assert_relative_eq!(back, Vec2::new(1.0, 0.0), epsilon = EPSILON);
    }

    #[test]
    fn test_rotate_preserves_length() {
        let v = Vec2::new(3.0, -4.0);
        for degrees in [-270.0, -33.0, 0.0, 12.5, 181.0, 720.0] {
            assert_relative_eq!(v.rotate_degrees(degrees).magnitude(), 5.0, epsilon = EPSILON);
        }
    }

    #[test]
    fn test_rotate_zero_vector_stays_zero() {
        assert_eq!(Vec2::zeros().rotate_degrees(37.0), Vec2::zeros());
    }

    #[test]
    fn test_distance_to() {
        let a = Vec2::new(1.0, 1.0);
        let b = Vec2::new(4.0, 5.0);
        assert_relative_eq!(a.distance_to(&b), 5.0, epsilon = EPSILON);
        assert_relative_eq!(b.distance_to(&a), 5.0, epsilon = EPSILON);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_degree_conversion() {
        assert_relative_eq!(utils::deg_to_rad(180.0), constants::PI, epsilon = EPSILON);
        assert_relative_eq!(utils::deg_to_rad(-90.0), -constants::PI / 2.0, epsilon = EPSILON);
    }
}
