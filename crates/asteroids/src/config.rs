//! Game configuration
//!
//! Every gameplay constant lives here. Defaults reproduce the classic tuning;
//! any subset can be overridden from a TOML or RON file.

use arcade_engine::config::{Config, ConfigError};
use arcade_engine::input::KeyCode;
use arcade_engine::render::Color;
use arcade_engine::{EngineConfig, WindowConfig};
use serde::{Deserialize, Serialize};

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed RNG seed; `None` seeds from entropy
    pub seed: Option<u64>,

    /// Screen and frame pacing
    pub screen: ScreenConfig,

    /// Asteroid spawning and splitting
    pub asteroid: AsteroidConfig,

    /// Player ship
    pub player: PlayerConfig,

    /// Projectiles
    pub shot: ShotConfig,

    /// Off-screen cleanup
    pub cleanup: CleanupConfig,

    /// Key bindings
    pub controls: ControlsConfig,

    /// Colors and line widths
    pub graphics: GraphicsConfig,
}

/// Screen configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Window width in pixels
    pub width: u32,

    /// Window height in pixels
    pub height: u32,

    /// Frame rate cap
    pub target_fps: u32,
}

/// Asteroid configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AsteroidConfig {
    /// Radius of the smallest asteroid; every size is a multiple of it
    pub min_radius: f32,

    /// Number of size tiers
    pub kinds: u32,

    /// Seconds between spawns
    pub spawn_interval: f32,

    /// Slowest spawn speed (pixels per second)
    pub spawn_speed_min: u32,

    /// Fastest spawn speed (pixels per second)
    pub spawn_speed_max: u32,

    /// Maximum deviation from the inward direction, in whole degrees
    pub spawn_angle_deviation: i32,

    /// Smallest split deflection in degrees
    pub split_angle_min: f32,

    /// Largest split deflection in degrees
    pub split_angle_max: f32,

    /// Speed multiplier applied to split children
    pub split_speed_multiplier: f32,
}

/// Player configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    /// Collision and drawing radius
    pub radius: f32,

    /// Degrees per second
    pub turn_speed: f32,

    /// Pixels per second
    pub speed: f32,

    /// Speed of fired shots
    pub shoot_speed: f32,

    /// Seconds between shots
    pub shoot_cooldown: f32,
}

/// Shot configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShotConfig {
    /// Collision and drawing radius
    pub radius: f32,
}

/// Off-screen cleanup configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanupConfig {
    /// Remove shots and asteroids that leave the play area
    pub enabled: bool,

    /// Distance beyond the screen edge before an entity is removed
    pub margin: f32,
}

/// Key bindings; an action fires if any of its keys is held
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Turn counter-clockwise
    pub rotate_left: Vec<KeyCode>,

    /// Turn clockwise
    pub rotate_right: Vec<KeyCode>,

    /// Move along the facing direction
    pub forward: Vec<KeyCode>,

    /// Move against the facing direction
    pub backward: Vec<KeyCode>,

    /// Shoot
    pub fire: Vec<KeyCode>,
}

/// Graphics configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphicsConfig {
    /// Background color
    pub background: Color,

    /// Outline color of every entity
    pub foreground: Color,

    /// Outline thickness in pixels
    pub line_width: f32,
}

impl GameConfig {
    /// Engine settings derived from this configuration
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            window: WindowConfig {
                title: "Asteroids".to_string(),
                width: self.screen.width,
                height: self.screen.height,
                resizable: false,
            },
            target_fps: self.screen.target_fps,
            clear_color: self.graphics.background,
        }
    }

    /// Validate the configuration
    ///
    /// Comparisons are written so that NaN fails them.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.screen.width == 0 || self.screen.height == 0 {
            return invalid("screen size must be non-zero");
        }
        if self.screen.target_fps == 0 {
            return invalid("screen.target_fps must be at least 1");
        }

        let asteroid = &self.asteroid;
        if !(asteroid.min_radius > 0.0) {
            return invalid("asteroid.min_radius must be positive");
        }
        if asteroid.kinds == 0 {
            return invalid("asteroid.kinds must be at least 1");
        }
        if !(asteroid.spawn_interval > 0.0) {
            return invalid("asteroid.spawn_interval must be positive");
        }
        if asteroid.spawn_speed_min > asteroid.spawn_speed_max {
            return invalid("asteroid.spawn_speed_min exceeds spawn_speed_max");
        }
        if asteroid.spawn_angle_deviation < 0 {
            return invalid("asteroid.spawn_angle_deviation must not be negative");
        }
        if !(asteroid.split_angle_min <= asteroid.split_angle_max) {
            return invalid("asteroid.split_angle_min exceeds split_angle_max");
        }
        if !(asteroid.split_speed_multiplier >= 0.0) || asteroid.split_speed_multiplier.is_infinite() {
            return invalid("asteroid.split_speed_multiplier must be finite and not negative");
        }

        let player = &self.player;
        if !(player.radius > 0.0) || !(self.shot.radius > 0.0) {
            return invalid("player and shot radii must be positive");
        }
        if ![player.turn_speed, player.speed, player.shoot_speed].iter().all(|v| v.is_finite()) {
            return invalid("player speeds must be finite");
        }
        if !(player.shoot_cooldown >= 0.0) {
            return invalid("player.shoot_cooldown must not be negative");
        }
        if !(self.cleanup.margin >= 0.0) {
            return invalid("cleanup.margin must not be negative");
        }
        if !(self.graphics.line_width > 0.0) {
            return invalid("graphics.line_width must be positive");
        }

        Ok(())
    }
}

fn invalid(message: &str) -> Result<(), ConfigError> {
    Err(ConfigError::Invalid(message.to_string()))
}

impl AsteroidConfig {
    /// Radius of the largest tier
    pub fn max_radius(&self) -> f32 {
        self.min_radius * self.kinds as f32
    }
}

impl Config for GameConfig {}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            screen: ScreenConfig::default(),
            asteroid: AsteroidConfig::default(),
            player: PlayerConfig::default(),
            shot: ShotConfig::default(),
            cleanup: CleanupConfig::default(),
            controls: ControlsConfig::default(),
            graphics: GraphicsConfig::default(),
        }
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            target_fps: 60,
        }
    }
}

impl Default for AsteroidConfig {
    fn default() -> Self {
        Self {
            min_radius: 20.0,
            kinds: 3,
            spawn_interval: 0.8,
            spawn_speed_min: 40,
            spawn_speed_max: 100,
            spawn_angle_deviation: 30,
            split_angle_min: 20.0,
            split_angle_max: 50.0,
            split_speed_multiplier: 1.2,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            radius: 20.0,
            turn_speed: 300.0,
            speed: 200.0,
            shoot_speed: 500.0,
            shoot_cooldown: 0.3,
        }
    }
}

impl Default for ShotConfig {
    fn default() -> Self {
        Self { radius: 5.0 }
    }
}

impl Default for CleanupConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            // Twice the largest default asteroid radius
            margin: 120.0,
        }
    }
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            rotate_left: vec![KeyCode::A, KeyCode::Left],
            rotate_right: vec![KeyCode::D, KeyCode::Right],
            forward: vec![KeyCode::W, KeyCode::Up],
            backward: vec![KeyCode::S, KeyCode::Down],
            fire: vec![KeyCode::Space],
        }
    }
}

impl Default for GraphicsConfig {
    fn default() -> Self {
        Self {
            background: Color::BLACK,
            foreground: Color::WHITE,
            line_width: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arcade_engine::config::Format;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        config.validate().unwrap();
        assert_eq!(config.asteroid.max_radius(), 60.0);
    }

    #[test]
    fn test_engine_config_follows_screen() {
        let mut config = GameConfig::default();
        config.screen.width = 800;
        config.screen.target_fps = 30;

        let engine = config.engine_config();
        assert_eq!(engine.window.width, 800);
        assert_eq!(engine.window.height, 720);
        assert_eq!(engine.target_fps, 30);
        assert_eq!(engine.clear_color, Color::BLACK);
    }

    #[test]
    fn test_partial_toml_overrides() {
        let text = r#"
            seed = 7

            [asteroid]
            min_radius = 10.0
            kinds = 4

            [controls]
            fire = ["Enter"]
        "#;

        let config = GameConfig::from_str_with_format(text, Format::Toml).unwrap();
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.asteroid.max_radius(), 40.0);
        assert_eq!(config.asteroid.spawn_interval, 0.8);
        assert_eq!(config.controls.fire, vec![KeyCode::Enter]);
        assert_eq!(config.controls.forward, vec![KeyCode::W, KeyCode::Up]);
        assert_eq!(config.player, PlayerConfig::default());
    }

    #[test]
    fn test_round_trip_through_toml() {
        let mut config = GameConfig::default();
        config.seed = Some(99);
        config.cleanup.enabled = false;

        let text = config.to_string_with_format(Format::Toml).unwrap();
        let parsed = GameConfig::from_str_with_format(&text, Format::Toml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_validation_failures() {
        let cases: Vec<fn(&mut GameConfig)> = vec![
            |c| c.screen.width = 0,
            |c| c.screen.target_fps = 0,
            |c| c.asteroid.min_radius = 0.0,
            |c| c.asteroid.kinds = 0,
            |c| c.asteroid.spawn_interval = -1.0,
            |c| c.asteroid.spawn_speed_min = 200,
            |c| c.asteroid.spawn_angle_deviation = -5,
            |c| c.asteroid.split_angle_min = 60.0,
            |c| c.shot.radius = 0.0,
            |c| c.player.shoot_cooldown = -0.1,
            |c| c.cleanup.margin = -1.0,
            |c| c.asteroid.split_speed_multiplier = -1.0,
            |c| c.player.speed = f32::INFINITY,
            |c| c.graphics.line_width = 0.0,
        ];

        for break_config in cases {
            let mut config = GameConfig::default();
            break_config(&mut config);
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }

    #[test]
    fn test_nan_values_are_rejected() {
        let cases: Vec<fn(&mut GameConfig)> = vec![
            |c| c.asteroid.min_radius = f32::NAN,
            |c| c.asteroid.spawn_interval = f32::NAN,
            |c| c.asteroid.split_angle_min = f32::NAN,
            |c| c.asteroid.split_angle_max = f32::NAN,
            |c| c.asteroid.split_speed_multiplier = f32::NAN,
            |c| c.player.radius = f32::NAN,
            |c| c.player.turn_speed = f32::NAN,
            |c| c.player.shoot_cooldown = f32::NAN,
            |c| c.shot.radius = f32::NAN,
            |c| c.cleanup.margin = f32::NAN,
            |c| c.graphics.line_width = f32::NAN,
        ];

        for break_config in cases {
            let mut config = GameConfig::default();
            break_config(&mut config);
            assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
        }
    }
}
