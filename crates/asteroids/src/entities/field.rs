//! Asteroid spawner
//!
//! Asteroids enter from a random screen edge, just far enough outside that
//! even the largest one starts fully off screen, and head roughly inward.

use arcade_engine::foundation::math::{Vec2, Vec2Ext};
use rand::Rng;

use super::{Asteroid, GameObject, UpdateContext};
use crate::config::GameConfig;

/// Screen edge an asteroid enters from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    /// Enters from the left, moving right
    Left,
    /// Enters from the right, moving left
    Right,
    /// Enters from the top, moving down
    Top,
    /// Enters from the bottom, moving up
    Bottom,
}

impl Edge {
    /// Every edge
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Right, Edge::Top, Edge::Bottom];

    /// Unit vector pointing into the screen
    pub fn inward(self) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(1.0, 0.0),
            Edge::Right => Vec2::new(-1.0, 0.0),
            Edge::Top => Vec2::new(0.0, 1.0),
            Edge::Bottom => Vec2::new(0.0, -1.0),
        }
    }

    /// Spawn point at `fraction` (0..=1) along the edge, `offset` outside it
    pub fn spawn_point(self, fraction: f32, width: f32, height: f32, offset: f32) -> Vec2 {
        match self {
            Edge::Left => Vec2::new(-offset, fraction * height),
            Edge::Right => Vec2::new(width + offset, fraction * height),
            Edge::Top => Vec2::new(fraction * width, -offset),
            Edge::Bottom => Vec2::new(fraction * width, height + offset),
        }
    }
}

/// Spawns one asteroid every `spawn_interval` seconds
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AsteroidField {
    timer: f32,
}

impl AsteroidField {
    /// Spawner with an empty timer
    pub fn new() -> Self {
        Self::default()
    }

    /// Seconds accumulated toward the next spawn
    pub fn timer(&self) -> f32 {
        self.timer
    }

    /// Advance the timer, returning an asteroid when the interval is reached
    ///
    /// At most one asteroid is produced per call, however large the step.
    pub fn tick<R: Rng + ?Sized>(&mut self, delta_time: f32, config: &GameConfig, rng: &mut R) -> Option<Asteroid> {
        self.timer += delta_time;
        if self.timer < config.asteroid.spawn_interval {
            return None;
        }
        self.timer = 0.0;

        Some(Self::random_asteroid(config, rng))
    }

    /// Advance one frame, queueing any new asteroid on the context
    pub fn update(&mut self, delta_time: f32, ctx: &mut UpdateContext<'_>) {
        if let Some(asteroid) = self.tick(delta_time, ctx.config, &mut *ctx.rng) {
            ctx.spawn(GameObject::Asteroid(asteroid));
        }
    }

    fn random_asteroid<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Asteroid {
        let params = &config.asteroid;

        let edge = Edge::ALL[rng.gen_range(0..Edge::ALL.len())];
        let speed = rng.gen_range(params.spawn_speed_min..=params.spawn_speed_max) as f32;
        let deviation = rng.gen_range(-params.spawn_angle_deviation..=params.spawn_angle_deviation) as f32;
        let velocity = (edge.inward() * speed).rotate_degrees(deviation);

        let position = edge.spawn_point(
            rng.gen_range(0.0..=1.0),
            config.screen.width as f32,
            config.screen.height as f32,
            params.max_radius(),
        );
        let kind = rng.gen_range(1..=params.kinds);
        let radius = params.min_radius * kind as f32;

        log::debug!(
            "Spawning asteroid from {:?}: radius {}, speed {}, at ({:.0}, {:.0})",
            edge,
            radius,
            speed,
            position.x,
            position.y
        );
        Asteroid::new(position, radius, velocity)
    }
}
