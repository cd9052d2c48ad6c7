//! Whole-game scenarios driven frame by frame

mod frame_loop;

use arcade_engine::foundation::math::Vec2;

use crate::config::GameConfig;
use crate::entities::{Asteroid, GameObject, ObjectTags, Shot};
use crate::game::AsteroidsGame;

/// Seeded game with default tuning
fn seeded_game(seed: u64) -> AsteroidsGame {
    let config = GameConfig {
        seed: Some(seed),
        ..GameConfig::default()
    };
    AsteroidsGame::new(config).unwrap()
}

fn asteroids(game: &AsteroidsGame) -> Vec<Asteroid> {
    game.world()
        .query(ObjectTags::ASTEROID)
        .filter_map(|(_, object)| match object {
            GameObject::Asteroid(asteroid) => Some(asteroid.clone()),
            _ => None,
        })
        .collect()
}

fn still_shot(position: Vec2) -> GameObject {
    GameObject::Shot(Shot::new(position, 5.0, Vec2::zeros()))
}

fn still_asteroid(position: Vec2, radius: f32) -> GameObject {
    GameObject::Asteroid(Asteroid::new(position, radius, Vec2::zeros()))
}
