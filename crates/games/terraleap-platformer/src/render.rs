//! Draw pass. World objects are culled against the viewport and shifted by
//! the camera offset; the HUD is drawn in screen space on top.

use terraleap_core::geometry::Rect;
use terraleap_core::render::{Color, Renderer, TextAlign, TextStyle};

use crate::config::PlatformerConfig;
use crate::level_gen::Level;
use crate::physics::PlayerState;
use crate::session::SessionState;
use crate::sprites::GameSprites;

/// Horizontal spacing of the life hearts.
const HEART_SPACING: i32 = 45;
const HUD_MARGIN: i32 = 10;

const SCORE_STYLE: TextStyle = TextStyle {
    size: 30,
    color: Color::WHITE,
    align: TextAlign::Right,
};
const BANNER_STYLE: TextStyle = TextStyle {
    size: 60,
    color: Color::WHITE,
    align: TextAlign::Center,
};
const HINT_STYLE: TextStyle = TextStyle {
    size: 30,
    color: Color::WHITE,
    align: TextAlign::Center,
};
const WIN_STYLE: TextStyle = TextStyle {
    size: 60,
    color: Color::YELLOW,
    align: TextAlign::Center,
};

/// Everything a frame needs, borrowed from the game.
pub struct Scene<'a> {
    pub level: &'a Level,
    pub player: &'a PlayerState,
    pub session: &'a SessionState,
    pub sprites: &'a GameSprites,
    pub config: &'a PlatformerConfig,
}

impl Scene<'_> {
    pub fn draw(&self, r: &mut dyn Renderer) {
        self.draw_background(r);
        self.draw_world(r);
        self.draw_hud(r);
        if self.session.game_over {
            self.draw_game_over(r);
        }
    }

    fn draw_background(&self, r: &mut dyn Renderer) {
        let bg = &self.sprites.background;
        let (w, h) = (bg.width().max(1) as i32, bg.height().max(1) as i32);
        let cols = self.config.level.viewport_width / w + 1;
        let rows = self.config.level.viewport_height / h + 1;
        for i in 0..cols {
            for j in 0..rows {
                r.draw_frame(bg, i * w, j * h);
            }
        }
    }

    fn draw_world(&self, r: &mut dyn Renderer) {
        let cam = &self.session.camera;
        let vw = self.config.level.viewport_width;

        for block in self.level.blocks.iter().filter(|b| cam.is_visible(**b, vw)) {
            r.draw_frame(&self.sprites.tile, cam.to_screen_x(block.x), block.y);
        }

        let fire = &self.sprites.fire;
        let delay = self.config.physics.hazard_animation_delay;
        for hazard in self.level.hazards.iter().filter(|h| cam.is_visible(h.rect, vw)) {
            let frame = &fire[hazard.frame_index(delay, fire.len())];
            r.draw_frame(frame, cam.to_screen_x(hazard.rect.x), hazard.rect.y);
        }

        for coin in &self.level.coins {
            if !coin.collected && cam.is_visible(coin.rect(), vw) {
                r.draw_frame(&self.sprites.coin, cam.to_screen_x(coin.x), coin.y);
            }
        }

        let goal = self.level.goal;
        if cam.is_visible(goal, vw) {
            r.draw_frame(&self.sprites.trophy, cam.to_screen_x(goal.x), goal.y);
        }

        let frame = self.sprites.player.current(self.player);
        r.draw_frame(frame, cam.to_screen_x(self.player.rect.x), self.player.rect.y);
    }

    fn draw_hud(&self, r: &mut dyn Renderer) {
        for i in 0..self.session.lives as i32 {
            r.draw_frame(&self.sprites.heart, HUD_MARGIN + i * HEART_SPACING, HUD_MARGIN);
        }
        r.draw_text(
            &format!("Score: {}", self.session.score),
            self.config.level.viewport_width - HUD_MARGIN,
            HUD_MARGIN,
            SCORE_STYLE,
        );
    }

    fn draw_game_over(&self, r: &mut dyn Renderer) {
        let (w, h) = (self.config.level.viewport_width, self.config.level.viewport_height);
        r.draw_rect(Rect::new(0, 0, w, h), Color::SHADE);
        r.draw_text("GAME OVER", w / 2, h / 2 - 40, BANNER_STYLE);
        r.draw_text("Press R to Restart", w / 2, h / 2 + 20, HINT_STYLE);
    }

    pub fn draw_win_banner(&self, r: &mut dyn Renderer) {
        let (w, h) = (self.config.level.viewport_width, self.config.level.viewport_height);
        r.draw_text("YOU WIN!", w / 2, h / 2, WIN_STYLE);
    }
}
