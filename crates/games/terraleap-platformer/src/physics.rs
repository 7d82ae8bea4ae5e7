use serde::{Deserialize, Serialize};

use terraleap_core::geometry::Rect;

use crate::animation::AnimState;
use crate::config::{Insets, PhysicsConfig};

/// Horizontal facing of the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn suffix(self) -> &'static str {
        match self {
            Facing::Left => "left",
            Facing::Right => "right",
        }
    }
}

/// Kinematic state of the player.
///
/// Position is an integer pixel rectangle; velocity is fractional and is
/// truncated toward zero when applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub rect: Rect,
    pub vx: f32,
    pub vy: f32,
    pub facing: Facing,
    /// Jumps used since the last landing.
    pub jump_count: u8,
    /// Ticks since the last landing (or first jump); drives the gravity ramp.
    pub fall_count: u32,
    pub hit: bool,
    /// Ticks since the last hit, while `hit` is set.
    pub hit_count: u32,
    /// Animation clock; only a facing flip resets it.
    pub animation_count: u32,
    pub anim_state: AnimState,
    pub frame_index: usize,
}

impl PlayerState {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            vx: 0.0,
            vy: 0.0,
            facing: Facing::Left,
            jump_count: 0,
            fall_count: 0,
            hit: false,
            hit_count: 0,
            animation_count: 0,
            anim_state: AnimState::Idle,
            frame_index: 0,
        }
    }

    /// Ramp gravity in over the first second of a fall:
    /// `vy += min(1, fall_count / tick_rate * G)`.
    pub fn apply_gravity(&mut self, physics: &PhysicsConfig) {
        let ramp = self.fall_count as f32 / physics.tick_rate.max(1) as f32 * physics.gravity;
        self.vy += ramp.min(1.0);
    }

    /// Raw positional delta with no collision awareness.
    pub fn move_by(&mut self, dx: f32, dy: f32) {
        self.rect.x = (self.rect.x as f32 + dx) as i32;
        self.rect.y = (self.rect.y as f32 + dy) as i32;
    }

    /// One tick of integration: gravity, displacement by the current
    /// velocity, the hit timer and the fall counter.
    pub fn step(&mut self, physics: &PhysicsConfig, invulnerable_ticks: u32) {
        self.apply_gravity(physics);
        self.move_by(self.vx, self.vy);

        if self.hit {
            self.hit_count += 1;
            if self.hit_count > invulnerable_ticks {
                self.hit = false;
            }
        }

        self.fall_count += 1;
    }

    /// Launch upward if a jump remains. Returns `false` at the cap.
    pub fn jump(&mut self, physics: &PhysicsConfig) -> bool {
        if self.jump_count >= physics.max_jumps {
            return false;
        }
        self.vy = -physics.gravity * physics.jump_multiplier;
        self.jump_count += 1;
        if self.jump_count == 1 {
            self.fall_count = 0;
        }
        true
    }

    pub fn landed(&mut self) {
        self.fall_count = 0;
        self.vy = 0.0;
        self.jump_count = 0;
    }

    /// Ceiling contact bounces the player back down.
    pub fn hit_head(&mut self) {
        self.vy = -self.vy;
    }

    /// Start the invulnerability window.
    pub fn make_hit(&mut self) {
        self.hit = true;
        self.hit_count = 0;
    }

    pub fn move_left(&mut self, speed: f32) {
        self.vx = -speed;
        self.face(Facing::Left);
    }

    pub fn move_right(&mut self, speed: f32) {
        self.vx = speed;
        self.face(Facing::Right);
    }

    fn face(&mut self, facing: Facing) {
        if self.facing != facing {
            self.facing = facing;
            self.animation_count = 0;
        }
    }

    /// Inset rectangle used for hazard contact.
    pub fn hurtbox(&self, insets: &Insets) -> Rect {
        self.rect
            .inset(insets.left, insets.right, insets.top, insets.bottom)
    }

    /// Put the player back at `(x, y)` at rest.
    pub fn respawn(&mut self, x: i32, y: i32) {
        self.rect.x = x;
        self.rect.y = y;
        self.vx = 0.0;
        self.vy = 0.0;
        self.jump_count = 0;
        self.fall_count = 0;
        self.hit = false;
        self.hit_count = 0;
    }
}
