pub mod animation;
pub mod camera;
pub mod collision;
pub mod config;
pub mod hazards;
pub mod level_gen;
pub mod physics;
pub mod pickups;
pub mod render;
pub mod session;
pub mod sprites;

use std::time::Duration;

use rand::Rng;
use serde::{Deserialize, Serialize};

use terraleap_core::asset::{AssetError, AssetStore};
use terraleap_core::game_trait::{Game, GameEvent, GameMetadata, LifeLossCause, Outcome};
use terraleap_core::input::TickInput;
use terraleap_core::render::Renderer;

use animation::update_sprite;
use camera::is_out_of_bounds;
use collision::{probe_horizontal, resolve_vertical};
use config::PlatformerConfig;
use hazards::apply_hazard_damage;
use level_gen::{Level, generate_level};
use physics::PlayerState;
use pickups::collect_coins;
use render::Scene;
use session::SessionState;
use sprites::GameSprites;

/// Serializable view of a running session, for logs and summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub seed: u64,
    pub player: PlayerState,
    pub session: SessionState,
    pub coins_collected: usize,
}

/// The TerraLeap platformer.
pub struct TerraLeap {
    config: PlatformerConfig,
    sprites: GameSprites,
    level: Level,
    player: PlayerState,
    session: SessionState,
}

impl TerraLeap {
    /// Load every asset and build the level. Fails before any play state
    /// exists if an asset is missing.
    pub fn new(config: PlatformerConfig, assets: &mut dyn AssetStore) -> Result<Self, AssetError> {
        let sprites = GameSprites::load(assets, &config.level)?;

        let seed = config.level.seed.unwrap_or_else(|| rand::rng().random());
        let level = generate_level(
            &config.level,
            seed,
            sprites.fire_size(),
            sprites.trophy_size(),
        );
        tracing::info!(
            seed,
            blocks = level.blocks.len(),
            hazards = level.hazards.len(),
            coins = level.coins.len(),
            "level generated"
        );

        let (w, h) = sprites.player.frame_size();
        let player = PlayerState::new(level.spawn_x, level.spawn_y, w, h);
        let session = SessionState::new(config.rules.starting_lives);

        Ok(Self {
            config,
            sprites,
            level,
            player,
            session,
        })
    }

    pub fn config(&self) -> &PlatformerConfig {
        &self.config
    }

    pub fn level(&self) -> &Level {
        &self.level
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn session(&self) -> &SessionState {
        &self.session
    }

    pub fn sprites(&self) -> &GameSprites {
        &self.sprites
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            seed: self.level.seed,
            player: self.player.clone(),
            session: self.session.clone(),
            coins_collected: self.level.coins.iter().filter(|c| c.collected).count(),
        }
    }

    /// Start over on the same level: full lives, no score, every coin back.
    pub fn restart(&mut self) {
        self.session.reset(self.config.rules.starting_lives);
        self.player.respawn(self.level.spawn_x, self.level.spawn_y);
        self.level.reset_coins();
        tracing::info!(seed = self.level.seed, "session restarted");
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            level: &self.level,
            player: &self.player,
            session: &self.session,
            sprites: &self.sprites,
            config: &self.config,
        }
    }

    /// Movement and collision for one tick. Returns the damage and pickup
    /// events it caused.
    fn simulate(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let physics = &self.config.physics;

        self.player.step(physics, self.config.invulnerable_ticks());
        update_sprite(&mut self.player, &self.sprites.player, physics);
        for hazard in &mut self.level.hazards {
            hazard.advance();
        }

        let mask = self.sprites.player.current(&self.player).mask();
        let colliders = self.level.colliders(
            self.sprites.tile.mask(),
            &self.sprites.fire,
            physics.hazard_animation_delay,
        );

        // Horizontal intent is all-or-nothing per tick
        self.player.vx = 0.0;
        let probe = physics.probe_distance();
        let blocked_left = probe_horizontal(self.player.rect, mask, -probe, &colliders).is_some();
        let blocked_right = probe_horizontal(self.player.rect, mask, probe, &colliders).is_some();
        if input.left && !blocked_left {
            self.player.move_left(physics.move_speed);
        }
        if input.right && !blocked_right {
            self.player.move_right(physics.move_speed);
        }

        let dy = self.player.vy;
        let contacts = resolve_vertical(&mut self.player, mask, dy, &colliders);

        let mut events = apply_hazard_damage(
            &mut self.player,
            &self.level.hazards,
            &contacts,
            &mut self.session,
            &self.config.rules,
        );
        events.extend(collect_coins(
            &mut self.level.coins,
            self.player.rect,
            &mut self.session,
            self.config.rules.coin_reward,
        ));
        events
    }

    fn check_bounds(&mut self) -> Vec<GameEvent> {
        let level = &self.config.level;
        if self.session.game_over
            || !is_out_of_bounds(
                self.player.rect,
                &self.session.camera,
                level.viewport_width,
                level.viewport_height,
                self.config.rules.out_of_bounds_margin,
            )
        {
            return Vec::new();
        }

        let events = self.session.lose_life(LifeLossCause::OutOfBounds);
        if !self.session.game_over {
            self.player.respawn(self.level.spawn_x, self.level.spawn_y);
            self.session.camera.reset();
        }
        events
    }

    fn check_goal(&mut self) -> Vec<GameEvent> {
        if self.session.game_over || !self.player.rect.intersects(&self.level.goal) {
            return Vec::new();
        }
        let mut events = vec![GameEvent::GoalReached];
        events.extend(self.session.finish(Outcome::Won));
        events
    }
}

impl Game for TerraLeap {
    fn metadata(&self) -> GameMetadata {
        GameMetadata {
            title: "TerraLeap".to_string(),
            window_width: self.config.level.viewport_width.max(0) as u32,
            window_height: self.config.level.viewport_height.max(0) as u32,
        }
    }

    fn tick_rate(&self) -> u32 {
        self.config.physics.tick_rate
    }

    fn update(&mut self, input: &TickInput) -> Vec<GameEvent> {
        let mut events = Vec::new();

        if input.jump && !self.session.game_over && self.player.jump(&self.config.physics) {
            events.push(GameEvent::Jumped {
                jump_count: self.player.jump_count,
            });
        }
        if input.restart && self.session.game_over {
            self.restart();
            events.push(GameEvent::Restarted);
        }
        if self.session.game_over {
            return events;
        }

        events.extend(self.simulate(input));
        events.extend(self.check_bounds());
        events.extend(self.check_goal());

        let vx = self.player.vx;
        self.session.camera.follow(
            self.player.rect,
            vx,
            self.config.level.viewport_width,
            self.config.camera.scroll_band,
        );

        events
    }

    fn render(&self, renderer: &mut dyn Renderer) {
        self.scene().draw(renderer);
    }

    fn render_win_banner(&self, renderer: &mut dyn Renderer) {
        self.scene().draw_win_banner(renderer);
    }

    fn win_display_delay(&self) -> Duration {
        Duration::from_millis(self.config.win_display_ms)
    }

    fn is_game_over(&self) -> bool {
        self.session.game_over
    }
}
