use serde::{Deserialize, Serialize};

/// Gravity unit (pixels/tick^2 at full ramp).
pub const GRAVITY: f32 = 1.0;
/// Horizontal walk speed in pixels per tick.
pub const PLAYER_VEL: f32 = 5.0;
/// Jump impulse as a multiple of gravity.
pub const JUMP_MULTIPLIER: f32 = 8.0;
/// Double-jump cap.
pub const MAX_JUMPS: u8 = 2;
/// Ticks each animation frame is held.
pub const ANIMATION_DELAY: u32 = 3;
/// Simulation rate in Hz.
pub const TICK_RATE: u32 = 60;
/// Viewport size.
pub const WIDTH: i32 = 800;
pub const HEIGHT: i32 = 600;
/// Edge length of a terrain block.
pub const BLOCK_SIZE: i32 = 96;
/// World x of the goal; platforms, fires and coins stop before it.
pub const LEVEL_END_X: i32 = 4000;
pub const STARTING_LIVES: u32 = 3;
pub const COIN_REWARD: u32 = 10;

/// Kinematics and animation timing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_multiplier: f32,
    pub max_jumps: u8,
    pub animation_delay: u32,
    pub hazard_animation_delay: u32,
    pub tick_rate: u32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: GRAVITY,
            move_speed: PLAYER_VEL,
            jump_multiplier: JUMP_MULTIPLIER,
            max_jumps: MAX_JUMPS,
            animation_delay: ANIMATION_DELAY,
            hazard_animation_delay: ANIMATION_DELAY,
            tick_rate: TICK_RATE,
        }
    }
}

impl PhysicsConfig {
    /// Horizontal distance the walk probe looks ahead.
    pub fn probe_distance(&self) -> i32 {
        (self.move_speed * 2.0) as i32
    }
}

/// Procedural level layout. All x ranges are half-open and end at
/// `level_end_x`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub viewport_width: i32,
    pub viewport_height: i32,
    pub block_size: i32,
    pub level_end_x: i32,
    /// Floor spans block indices `floor_first_block..floor_last_block`.
    pub floor_first_block: i32,
    pub floor_last_block: i32,
    pub platform_start_x: i32,
    pub platform_period: i32,
    /// Platform heights in blocks above the viewport bottom.
    pub platform_tiers: Vec<i32>,
    pub fire_start_x: i32,
    pub fire_period: i32,
    /// Source frame size of the fire strip before the 2x upscale.
    pub fire_frame_width: u32,
    pub fire_frame_height: u32,
    pub coin_start_x: i32,
    pub coin_period: i32,
    pub coin_radius: i32,
    /// Coin rows, in blocks above the viewport bottom.
    pub coin_tiers: Vec<i32>,
    /// Extra lift above the tier surface.
    pub coin_lift: i32,
    /// Trophy height above the floor surface.
    pub goal_lift: i32,
    pub spawn_x: i32,
    pub spawn_y: i32,
    /// Fixed layout seed; `None` draws a fresh one per run.
    pub seed: Option<u64>,
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            viewport_width: WIDTH,
            viewport_height: HEIGHT,
            block_size: BLOCK_SIZE,
            level_end_x: LEVEL_END_X,
            floor_first_block: -10,
            floor_last_block: 200,
            platform_start_x: 300,
            platform_period: 600,
            platform_tiers: vec![2, 3, 4],
            fire_start_x: 500,
            fire_period: 500,
            fire_frame_width: 16,
            fire_frame_height: 32,
            coin_start_x: 250,
            coin_period: 400,
            coin_radius: 12,
            coin_tiers: vec![1, 2, 3],
            coin_lift: 60,
            goal_lift: 100,
            spawn_x: 100,
            spawn_y: 100,
            seed: None,
        }
    }
}

/// Hurtbox insets from the player's full rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Default for Insets {
    fn default() -> Self {
        Self {
            left: 2,
            right: 2,
            top: 5,
            bottom: 5,
        }
    }
}

/// Lives, scoring and damage rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    pub starting_lives: u32,
    pub coin_reward: u32,
    /// Invulnerability after a hit, in seconds (scaled by the tick rate).
    pub invulnerability_secs: u32,
    pub hurtbox: Insets,
    /// Distance past the visible area that counts as falling out.
    pub out_of_bounds_margin: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            coin_reward: COIN_REWARD,
            invulnerability_secs: 2,
            hurtbox: Insets::default(),
            out_of_bounds_margin: 300,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Width of the dead-zone band at each viewport edge.
    pub scroll_band: i32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self { scroll_band: 200 }
    }
}

/// Top-level game configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlatformerConfig {
    pub physics: PhysicsConfig,
    pub level: LevelConfig,
    pub rules: RulesConfig,
    pub camera: CameraConfig,
    /// How long the victory banner stays up, in milliseconds.
    pub win_display_ms: u64,
}

impl Default for PlatformerConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsConfig::default(),
            level: LevelConfig::default(),
            rules: RulesConfig::default(),
            camera: CameraConfig::default(),
            win_display_ms: 1500,
        }
    }
}

impl PlatformerConfig {
    /// Load config from a TOML file. Falls back to defaults if the file is missing
    /// or unparseable.
    pub fn load() -> Self {
        let path = std::env::var("TERRALEAP_CONFIG")
            .unwrap_or_else(|_| "config/terraleap.toml".to_string());
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_toml(&content).unwrap_or_else(|e| {
                tracing::warn!("Failed to parse {path}: {e}, using defaults");
                PlatformerConfig::default()
            }),
            Err(_) => {
                tracing::debug!("No config at {path}, using defaults");
                PlatformerConfig::default()
            },
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Invulnerability window after a hit, in ticks.
    pub fn invulnerable_ticks(&self) -> u32 {
        self.physics.tick_rate * self.rules.invulnerability_secs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = PlatformerConfig::default();
        assert_eq!(cfg.physics.probe_distance(), 10);
        assert_eq!(cfg.invulnerable_ticks(), 120);
        assert_eq!(cfg.level.viewport_width, 800);
        assert_eq!(cfg.rules.starting_lives, 3);
        assert!(cfg.level.seed.is_none());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let cfg = PlatformerConfig::from_toml(
            r#"
            win_display_ms = 10

            [level]
            seed = 7
            platform_tiers = [3]

            [rules.hurtbox]
            top = 8
            "#,
        )
        .unwrap();
        assert_eq!(cfg.win_display_ms, 10);
        assert_eq!(cfg.level.seed, Some(7));
        assert_eq!(cfg.level.platform_tiers, vec![3]);
        assert_eq!(cfg.level.block_size, BLOCK_SIZE);
        assert_eq!(cfg.rules.hurtbox.top, 8);
        assert_eq!(cfg.rules.hurtbox.left, 2);
        assert_eq!(cfg.physics.tick_rate, TICK_RATE);
    }

    #[test]
    fn shipped_config_matches_defaults() {
        let cfg = PlatformerConfig::from_toml(include_str!("../../../../config/terraleap.toml"))
            .unwrap();
        let defaults = PlatformerConfig::default();
        assert_eq!(cfg.level.platform_tiers, defaults.level.platform_tiers);
        assert_eq!(cfg.level.seed, None);
        assert_eq!(cfg.rules.hurtbox, defaults.rules.hurtbox);
        assert_eq!(cfg.invulnerable_ticks(), defaults.invulnerable_ticks());
        assert_eq!(cfg.camera.scroll_band, defaults.camera.scroll_band);
        assert_eq!(cfg.win_display_ms, defaults.win_display_ms);
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(PlatformerConfig::from_toml("physics = 3").is_err());
    }
}
