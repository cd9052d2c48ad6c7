//! Player ship

use arcade_engine::foundation::math::{Vec2, Vec2Ext};
use arcade_engine::render::Surface;

use super::{Body, CircleShape, GameObject, Shot, UpdateContext};
use crate::config::{GraphicsConfig, PlayerConfig};

/// The player-controlled triangular ship
///
/// Rotation is in degrees and unbounded; at rotation 0 the ship faces
/// `(0, 1)`, which points down the screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    shape: CircleShape,
    rotation: f32,
    /// Seconds until the next shot is allowed; may go negative
    cooldown: f32,
    params: PlayerConfig,
    shot_radius: f32,
}

impl Player {
    /// New ship at rest at `position`
    pub fn new(position: Vec2, params: &PlayerConfig, shot_radius: f32) -> Self {
        Self {
            shape: CircleShape::new(position, params.radius),
            rotation: 0.0,
            cooldown: 0.0,
            params: params.clone(),
            shot_radius,
        }
    }

    /// Position in screen space
    pub fn position(&self) -> Vec2 {
        self.shape.position
    }

    /// Teleport the ship
    pub fn set_position(&mut self, position: Vec2) {
        self.shape.position = position;
    }

    /// Heading in degrees
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    /// Seconds left before the ship may fire again
    pub fn cooldown(&self) -> f32 {
        self.cooldown
    }

    /// Unit vector the ship faces
    pub fn forward(&self) -> Vec2 {
        Vec2::new(0.0, 1.0).rotate_degrees(self.rotation)
    }

    /// Turn by `delta_time * turn_speed` degrees; negative turns the other way
    pub fn rotate(&mut self, delta_time: f32) {
        self.rotation += delta_time * self.params.turn_speed;
    }

    /// Move along the facing direction; negative moves backwards
    pub fn move_by(&mut self, delta_time: f32) {
        self.shape.position += self.forward() * self.params.speed * delta_time;
    }

    /// Fire a shot if the cooldown has elapsed
    pub fn shoot(&mut self) -> Option<Shot> {
        if self.cooldown > 0.0 {
            return None;
        }

        self.cooldown = self.params.shoot_cooldown;
        Some(Shot::new(
            self.shape.position,
            self.shot_radius,
            self.forward() * self.params.shoot_speed,
        ))
    }

    /// Tip, left corner and right corner of the hull
    pub fn triangle(&self) -> [Vec2; 3] {
        let forward = self.forward();
        let right = Vec2::new(0.0, 1.0).rotate_degrees(self.rotation + 90.0) * (self.shape.radius / 1.5);
        let position = self.shape.position;
        let radius = self.shape.radius;

        [
            position + forward * radius,
            position - forward * radius - right,
            position - forward * radius + right,
        ]
    }
}

impl Body for Player {
    fn shape(&self) -> &CircleShape {
        &self.shape
    }

    fn shape_mut(&mut self) -> &mut CircleShape {
        &mut self.shape
    }

    fn update(&mut self, delta_time: f32, ctx: &mut UpdateContext<'_>) {
        self.cooldown -= delta_time;

        let controls = ctx.controls;
        if controls.rotate_left {
            self.rotate(-delta_time);
        }
        if controls.rotate_right {
            self.rotate(delta_time);
        }
        if controls.forward {
            self.move_by(delta_time);
        }
        if controls.backward {
            self.move_by(-delta_time);
        }
        if controls.fire {
            if let Some(shot) = self.shoot() {
                ctx.spawn(GameObject::Shot(shot));
            }
        }
    }

    fn draw(&self, surface: &mut dyn Surface, graphics: &GraphicsConfig) {
        surface.polygon_outline(&self.triangle(), graphics.line_width, graphics.foreground);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::controls::ShipControls;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn ship() -> Player {
        let config = GameConfig::default();
        Player::new(Vec2::new(640.0, 360.0), &config.player, config.shot.radius)
    }

    #[test]
    fn test_fresh_ship_faces_down_screen() {
        let player = ship();
        assert_eq!(player.rotation(), 0.0);
        assert_relative_eq!(player.forward(), Vec2::new(0.0, 1.0));
    }

    #[test]
    fn test_shot_leaves_straight_ahead() {
        let mut player = ship();
        let shot = player.shoot().unwrap();

        assert_eq!(shot.position(), Vec2::new(640.0, 360.0));
        assert_relative_eq!(shot.velocity(), Vec2::new(0.0, 500.0), epsilon = 1e-4);
        assert_relative_eq!(shot.shape().radius, 5.0);
        assert_relative_eq!(player.cooldown(), 0.3);
    }

    #[test]
    fn test_cooldown_limits_fire_rate() {
        let mut config = GameConfig::default();
        config.player.shoot_cooldown = 0.25;
        let mut player = Player::new(Vec2::new(640.0, 360.0), &config.player, config.shot.radius);
        let mut rng = StdRng::seed_from_u64(0);
        let mut spawned = Vec::new();
        let controls = ShipControls {
            fire: true,
            ..Default::default()
        };

        // 0.125 s frames with fire held for a full second
        for _ in 0..8 {
            let mut ctx = UpdateContext::new(controls, &config, &mut rng, &mut spawned);
            player.update(0.125, &mut ctx);
        }

        // Fires on frames 1, 3, 5 and 7: the cooldown reaches exactly zero every other frame
        assert_eq!(spawned.len(), 4);
        assert!(spawned.iter().all(|object| matches!(object, GameObject::Shot(_))));
    }

    #[test]
    fn test_no_second_shot_within_cooldown() {
        let mut player = ship();
        assert!(player.shoot().is_some());
        assert!(player.shoot().is_none());
    }

    #[test]
    fn test_rotation_and_movement() {
        let mut player = ship();

        player.rotate(0.3);
        assert_relative_eq!(player.rotation(), 90.0, epsilon = 1e-4);
        // Facing (-1, 0) after a quarter turn counter-clockwise
        assert_relative_eq!(player.forward(), Vec2::new(-1.0, 0.0), epsilon = 1e-5);

        player.move_by(0.5);
        assert_relative_eq!(player.position(), Vec2::new(540.0, 360.0), epsilon = 1e-3);

        player.move_by(-0.5);
        assert_relative_eq!(player.position(), Vec2::new(640.0, 360.0), epsilon = 1e-3);
    }

    #[test]
    fn test_held_keys_drive_the_ship() {
        let config = GameConfig::default();
        let mut player = ship();
        let mut rng = StdRng::seed_from_u64(0);
        let mut spawned = Vec::new();
        let controls = ShipControls {
            forward: true,
            rotate_right: true,
            ..Default::default()
        };

        let mut ctx = UpdateContext::new(controls, &config, &mut rng, &mut spawned);
        player.update(0.1, &mut ctx);

        assert_relative_eq!(player.rotation(), 30.0, epsilon = 1e-4);
        // Rotation is applied before the move
        let expected = Vec2::new(640.0, 360.0) + Vec2::new(0.0, 1.0).rotate_degrees(30.0) * 20.0;
        assert_relative_eq!(player.position(), expected, epsilon = 1e-3);
        assert!(spawned.is_empty());
    }

    #[test]
    fn test_triangle_geometry() {
        let player = ship();
        let [tip, left, right] = player.triangle();

        let half_base = 20.0 / 1.5;
        assert_relative_eq!(tip, Vec2::new(640.0, 380.0), epsilon = 1e-4);
        assert_relative_eq!(left, Vec2::new(640.0 + half_base, 340.0), epsilon = 1e-4);
        assert_relative_eq!(right, Vec2::new(640.0 - half_base, 340.0), epsilon = 1e-4);
    }
}
