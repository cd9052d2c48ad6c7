//! Entity variants stored in the world

use arcade_engine::physics::{Bounds, Circle, Collider};
use arcade_engine::render::Surface;
use rand::rngs::StdRng;

use super::{Asteroid, AsteroidField, Body, Player, Shot};
use crate::config::{GameConfig, GraphicsConfig};
use crate::controls::ShipControls;

bitflags::bitflags! {
    /// Collections an entity belongs to
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ObjectTags: u8 {
        /// Updated every frame
        const UPDATABLE = 1 << 0;
        /// Drawn every frame
        const DRAWABLE = 1 << 1;
        /// Collides with the player and with shots
        const ASTEROID = 1 << 2;
        /// Collides with asteroids
        const SHOT = 1 << 3;
        /// The ship
        const PLAYER = 1 << 4;
    }
}

/// Everything an entity may touch while updating
pub struct UpdateContext<'a> {
    /// Actions requested this frame
    pub controls: ShipControls,

    /// Game tuning
    pub config: &'a GameConfig,

    /// Shared random source
    pub rng: &'a mut StdRng,

    spawned: &'a mut Vec<GameObject>,
}

impl<'a> UpdateContext<'a> {
    /// Context collecting new entities into `spawned`
    pub fn new(
        controls: ShipControls,
        config: &'a GameConfig,
        rng: &'a mut StdRng,
        spawned: &'a mut Vec<GameObject>,
    ) -> Self {
        Self {
            controls,
            config,
            rng,
            spawned,
        }
    }

    /// Queue an entity for insertion once the update pass is over
    pub fn spawn(&mut self, object: GameObject) {
        self.spawned.push(object);
    }
}

/// Any entity in the world
#[derive(Debug, Clone, PartialEq)]
pub enum GameObject {
    /// A drifting asteroid
    Asteroid(Asteroid),
    /// A projectile
    Shot(Shot),
    /// The ship
    Player(Player),
    /// The asteroid spawner
    Field(AsteroidField),
}

impl GameObject {
    /// Collections this variant belongs to
    pub fn tags(&self) -> ObjectTags {
        match self {
            GameObject::Asteroid(_) => ObjectTags::UPDATABLE | ObjectTags::DRAWABLE | ObjectTags::ASTEROID,
            GameObject::Shot(_) => ObjectTags::UPDATABLE | ObjectTags::DRAWABLE | ObjectTags::SHOT,
            GameObject::Player(_) => ObjectTags::UPDATABLE | ObjectTags::DRAWABLE | ObjectTags::PLAYER,
            GameObject::Field(_) => ObjectTags::UPDATABLE,
        }
    }

    /// The physical body, if this variant has one
    pub fn body(&self) -> Option<&dyn Body> {
        match self {
            GameObject::Asteroid(asteroid) => Some(asteroid),
            GameObject::Shot(shot) => Some(shot),
            GameObject::Player(player) => Some(player),
            GameObject::Field(_) => None,
        }
    }

    /// Mutable physical body, if this variant has one
    pub fn body_mut(&mut self) -> Option<&mut dyn Body> {
        match self {
            GameObject::Asteroid(asteroid) => Some(asteroid),
            GameObject::Shot(shot) => Some(shot),
            GameObject::Player(player) => Some(player),
            GameObject::Field(_) => None,
        }
    }

    /// Bounding circle, if this variant has a body
    pub fn bounds(&self) -> Option<Circle> {
        self.body().map(|body| body.shape().bounds())
    }

    /// Advance one frame
    pub fn update(&mut self, delta_time: f32, ctx: &mut UpdateContext<'_>) {
        match self {
            GameObject::Field(field) => field.update(delta_time, ctx),
            other => {
                if let Some(body) = other.body_mut() {
                    body.update(delta_time, ctx);
                }
            }
        }
    }

    /// Draw the body, if any
    pub fn draw(&self, surface: &mut dyn Surface, graphics: &GraphicsConfig) {
        if let Some(body) = self.body() {
            body.draw(surface, graphics);
        }
    }

    /// Whether the entity stays in the world
    pub fn is_alive(&self) -> bool {
        self.body().map_or(true, |body| body.is_alive())
    }

    /// Whether the entity still counts as in play inside `area`
    ///
    /// Only shots and asteroids can leave the play area.
    pub fn is_within(&self, area: &Bounds) -> bool {
        match self {
            GameObject::Asteroid(_) | GameObject::Shot(_) => {
                self.bounds().map_or(true, |circle| area.overlaps(&circle))
            }
            GameObject::Player(_) | GameObject::Field(_) => true,
        }
    }
}
