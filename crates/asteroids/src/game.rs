//! Asteroids game state and frame logic

use arcade_engine::ecs::{EntityId, World};
use arcade_engine::foundation::math::Vec2;
use arcade_engine::input::InputState;
use arcade_engine::physics::{Bounds, Collider};
use arcade_engine::render::Surface;
use arcade_engine::{AppError, Application, Flow};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::config::GameConfig;
use crate::controls::ShipControls;
use crate::entities::{AsteroidField, Body, GameObject, ObjectTags, Player, UpdateContext};

/// Whether the round is still going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// The ship is flying
    Playing,

    /// The ship was hit; terminal
    GameOver,
}

/// Main game application
pub struct AsteroidsGame {
    config: GameConfig,
    world: World<GameObject, ObjectTags>,
    rng: StdRng,
    player: EntityId,
    phase: GamePhase,
    /// Area outside which shots and asteroids are removed
    play_area: Bounds,
}

impl AsteroidsGame {
    /// Create a new round: the ship in the middle of the screen and an
    /// empty asteroid field
    pub fn new(config: GameConfig) -> Result<Self, AppError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => {
                log::info!("Using RNG seed {}", seed);
                StdRng::seed_from_u64(seed)
            }
            None => StdRng::from_entropy(),
        };

        let width = config.screen.width as f32;
        let height = config.screen.height as f32;
        let play_area = Bounds::from_size(width, height).expanded(config.cleanup.margin);

        let mut world = World::new();
        let ship = GameObject::Player(Player::new(
            Vec2::new(width / 2.0, height / 2.0),
            &config.player,
            config.shot.radius,
        ));
        let tags = ship.tags();
        let player = world.spawn(ship, tags);
        let field = GameObject::Field(AsteroidField::new());
        let tags = field.tags();
        world.spawn(field, tags);

        log::info!("Asteroids game created ({}x{})", config.screen.width, config.screen.height);

        Ok(Self {
            config,
            world,
            rng,
            player,
            phase: GamePhase::Playing,
            play_area,
        })
    }

    /// Game tuning
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Every entity currently in play
    pub fn world(&self) -> &World<GameObject, ObjectTags> {
        &self.world
    }

    /// Current phase
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// The ship
    pub fn player(&self) -> Option<&Player> {
        match self.world.get(self.player) {
            Some(GameObject::Player(player)) => Some(player),
            _ => None,
        }
    }

    /// Mutable access to the ship
    pub fn player_mut(&mut self) -> Option<&mut Player> {
        match self.world.get_mut(self.player) {
            Some(GameObject::Player(player)) => Some(player),
            _ => None,
        }
    }

    /// Add an entity to the world
    pub fn spawn(&mut self, object: GameObject) -> EntityId {
        let tags = object.tags();
        self.world.spawn(object, tags)
    }

    /// Number of asteroids in play
    pub fn asteroid_count(&self) -> usize {
        self.world.count(ObjectTags::ASTEROID)
    }

    /// Number of shots in play
    pub fn shot_count(&self) -> usize {
        self.world.count(ObjectTags::SHOT)
    }

    /// Advance the round by one frame
    ///
    /// Updates every entity, resolves collisions and removes what died or
    /// left the play area. Returns the phase after the frame.
    pub fn tick(&mut self, controls: ShipControls, delta_time: f32) -> Result<GamePhase, AppError> {
        if self.phase == GamePhase::GameOver {
            return Ok(self.phase);
        }
        if !self.world.contains(self.player) {
            return Err(AppError::GameLogic("player entity missing from world".to_string()));
        }

        self.update_entities(controls, delta_time);

        if self.resolve_collisions() {
            log::info!("Ship destroyed, game over");
            self.phase = GamePhase::GameOver;
            return Ok(self.phase);
        }

        self.remove_dead();
        Ok(self.phase)
    }

    fn update_entities(&mut self, controls: ShipControls, delta_time: f32) {
        let mut spawned = Vec::new();
        let mut ctx = UpdateContext::new(controls, &self.config, &mut self.rng, &mut spawned);

        for (_, object) in self.world.query_mut(ObjectTags::UPDATABLE) {
            object.update(delta_time, &mut ctx);
        }

        for object in spawned {
            self.spawn(object);
        }
    }

    /// Returns true when an asteroid hit the ship
    fn resolve_collisions(&mut self) -> bool {
        let ship = self.world.get(self.player).and_then(GameObject::bounds);
        let shots = self.world.ids(ObjectTags::SHOT);
        let mut fragments = Vec::new();

        for asteroid_id in self.world.ids(ObjectTags::ASTEROID) {
            let Some(rock) = self.world.get(asteroid_id).and_then(GameObject::bounds) else {
                continue;
            };

            if ship.is_some_and(|ship| rock.intersects(&ship)) {
                return true;
            }

            // Every shot touching the asteroid is spent; the asteroid splits once
            let mut hit = false;
            for &shot_id in &shots {
                if let Some(GameObject::Shot(shot)) = self.world.get_mut(shot_id) {
                    if shot.is_alive() && shot.shape().bounds().intersects(&rock) {
                        shot.kill();
                        hit = true;
                    }
                }
            }
            if !hit {
                continue;
            }

            if let Some(GameObject::Asteroid(asteroid)) = self.world.get_mut(asteroid_id) {
                if let Some(children) = asteroid.split(&self.config.asteroid, &mut self.rng) {
                    fragments.extend(children.map(GameObject::Asteroid));
                }
            }
        }

        for fragment in fragments {
            self.spawn(fragment);
        }
        false
    }

    fn remove_dead(&mut self) {
        let cleanup = self.config.cleanup.enabled;
        let area = self.play_area;
        let before = self.world.len();

        self.world
            .retain(|_, object| object.is_alive() && (!cleanup || object.is_within(&area)));

        let removed = before - self.world.len();
        if removed > 0 {
            log::trace!("Removed {} entities, {} remain", removed, self.world.len());
        }
    }
}

impl Application for AsteroidsGame {
    fn update(&mut self, input: &InputState, delta_time: f32) -> Result<Flow, AppError> {
        let controls = ShipControls::from_input(&self.config.controls, input);
        match self.tick(controls, delta_time)? {
            GamePhase::Playing => Ok(Flow::Continue),
            GamePhase::GameOver => Ok(Flow::GameOver),
        }
    }

    fn draw(&self, surface: &mut dyn Surface) {
        for (_, object) in self.world.query(ObjectTags::DRAWABLE) {
            object.draw(surface, &self.config.graphics);
        }
    }

    fn cleanup(&mut self) {
        log::info!(
            "Shutting down with {} asteroids and {} shots in play",
            self.asteroid_count(),
            self.shot_count()
        );
    }
}
