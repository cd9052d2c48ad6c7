use approx::assert_relative_eq;
use arcade_engine::foundation::math::Vec2;
use arcade_engine::input::{InputState, KeyCode};
use arcade_engine::render::{Color, DrawCommand};
use arcade_engine::{Application, Engine, EngineState, ExitReason};

use super::{asteroids, seeded_game, still_asteroid};
use crate::config::GameConfig;
use crate::controls::ShipControls;
use crate::entities::{Body, GameObject, ObjectTags};
use crate::game::{AsteroidsGame, GamePhase};

const FIRE: ShipControls = ShipControls {
    rotate_left: false,
    rotate_right: false,
    forward: false,
    backward: false,
    fire: true,
};

#[test]
fn test_new_round_layout() {
    let game = seeded_game(1);

    assert_eq!(game.phase(), GamePhase::Playing);
    assert_eq!(game.world().len(), 2);
    assert_eq!(game.asteroid_count(), 0);
    assert_eq!(game.player().unwrap().position(), Vec2::new(640.0, 360.0));
}

#[test]
fn test_invalid_config_is_rejected() {
    let mut config = GameConfig::default();
    config.asteroid.kinds = 0;
    assert!(AsteroidsGame::new(config).is_err());
}

#[test]
fn test_spawner_runs_on_accumulated_time() {
    let mut whole = seeded_game(7);
    whole.tick(ShipControls::default(), 0.8).unwrap();
    assert_eq!(whole.asteroid_count(), 1);

    let mut halves = seeded_game(7);
    halves.tick(ShipControls::default(), 0.4).unwrap();
    assert_eq!(halves.asteroid_count(), 0);
    halves.tick(ShipControls::default(), 0.4).unwrap();
    assert_eq!(halves.asteroid_count(), 1);
}

#[test]
fn test_first_shot_from_center() {
    let mut game = seeded_game(1);
    game.tick(FIRE, 0.0).unwrap();

    let shots: Vec<_> = game
        .world()
        .query(ObjectTags::SHOT)
        .filter_map(|(_, object)| match object {
            GameObject::Shot(shot) => Some(shot.clone()),
            _ => None,
        })
        .collect();

    assert_eq!(shots.len(), 1);
    assert_eq!(shots[0].position(), Vec2::new(640.0, 360.0));
    assert_relative_eq!(shots[0].velocity(), Vec2::new(0.0, 500.0), epsilon = 1e-4);
}

#[test]
fn test_holding_fire_respects_cooldown() {
    let mut game = seeded_game(1);

    game.tick(FIRE, 0.0).unwrap();
    game.tick(FIRE, 0.1).unwrap();
    game.tick(FIRE, 0.1).unwrap();
    assert_eq!(game.shot_count(), 1);

    // 0.35 s after the first shot the cooldown has run out
    game.tick(FIRE, 0.15).unwrap();
    assert_eq!(game.shot_count(), 2);
}

#[test]
fn test_shots_leaving_the_screen_are_removed() {
    let mut game = seeded_game(1);
    game.tick(FIRE, 0.0).unwrap();
    assert_eq!(game.shot_count(), 1);

    // 500 px down from the center clears the 120 px margin below the screen
    game.tick(ShipControls::default(), 1.0).unwrap();
    assert_eq!(game.shot_count(), 0);
}

#[test]
fn test_cleanup_can_be_disabled() {
    let mut config = GameConfig {
        seed: Some(1),
        ..GameConfig::default()
    };
    config.cleanup.enabled = false;
    let mut game = AsteroidsGame::new(config).unwrap();

    game.tick(FIRE, 0.0).unwrap();
    game.tick(ShipControls::default(), 1.0).unwrap();
    game.tick(ShipControls::default(), 1.0).unwrap();
    assert_eq!(game.shot_count(), 1);
}

#[test]
fn test_fresh_spawns_survive_cleanup() {
    let mut game = seeded_game(9);
    for _ in 0..20 {
        game.tick(ShipControls::default(), 0.8).unwrap();
        if game.phase() == GamePhase::GameOver {
            break;
        }
    }
    // Each 0.8 s frame spawns one asteroid just outside the screen
    assert!(game.asteroid_count() > 0);
}

#[test]
fn test_keyboard_moves_the_ship() {
    let mut game = seeded_game(1);
    let input = InputState::with_keys([KeyCode::W]);

    game.update(&input, 0.5).unwrap();

    // Facing down the screen at rotation 0
    assert_relative_eq!(game.player().unwrap().position(), Vec2::new(640.0, 460.0), epsilon = 1e-3);
}

#[test]
fn test_same_seed_same_round() {
    let mut a = seeded_game(123);
    let mut b = seeded_game(123);

    for _ in 0..5 {
        a.tick(FIRE, 0.8).unwrap();
        b.tick(FIRE, 0.8).unwrap();
    }

    assert_eq!(asteroids(&a), asteroids(&b));
    assert_eq!(a.phase(), b.phase());
}

#[test]
fn test_engine_frame_draws_every_entity() {
    let mut game = seeded_game(1);
    let mut engine = Engine::new(game.config().engine_config()).unwrap();
    game.spawn(still_asteroid(Vec2::new(100.0, 100.0), 40.0));

    let state = engine
        .step(&mut game, &InputState::with_keys([KeyCode::Space]), 0.0)
        .unwrap();
    assert_eq!(state, EngineState::Running);

    let commands = engine.draw_queue().commands();
    assert_eq!(commands[0], DrawCommand::Clear { color: Color::BLACK });

    let triangle = game.player().unwrap().triangle().to_vec();
    assert!(commands.iter().any(|command| matches!(
        command,
        DrawCommand::Polygon { points, line_width, color }
            if *points == triangle && *line_width == 2.0 && *color == Color::WHITE
    )));

    let circles: Vec<f32> = commands
        .iter()
        .filter_map(|command| match command {
            DrawCommand::Circle { radius, .. } => Some(*radius),
            _ => None,
        })
        .collect();
    assert_eq!(circles.len(), 2);
    assert!(circles.contains(&40.0) && circles.contains(&5.0));
}

#[test]
fn test_engine_stops_on_game_over() {
    let mut game = seeded_game(1);
    let mut engine = Engine::new(game.config().engine_config()).unwrap();
    let center = game.player().unwrap().shape().position;
    game.spawn(still_asteroid(center + Vec2::new(30.0, 0.0), 20.0));

    let state = engine.step(&mut game, &InputState::new(), 0.0).unwrap();

    assert_eq!(state, EngineState::Terminated(ExitReason::GameOver));
    assert_eq!(game.phase(), GamePhase::GameOver);
}
