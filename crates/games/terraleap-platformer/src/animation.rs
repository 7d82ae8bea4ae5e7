use serde::{Deserialize, Serialize};

use terraleap_core::asset::{AssetError, ClipMap, Frame, require_clip};

use crate::config::PhysicsConfig;
use crate::physics::{Facing, PlayerState};

/// Visual state of the player, chosen from physics state each tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimState {
    Idle,
    Run,
    Jump,
    DoubleJump,
    Fall,
    Hit,
}

impl AnimState {
    pub const ALL: [AnimState; 6] = [
        AnimState::Idle,
        AnimState::Run,
        AnimState::Jump,
        AnimState::DoubleJump,
        AnimState::Fall,
        AnimState::Hit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AnimState::Idle => "idle",
            AnimState::Run => "run",
            AnimState::Jump => "jump",
            AnimState::DoubleJump => "double_jump",
            AnimState::Fall => "fall",
            AnimState::Hit => "hit",
        }
    }

    /// Pick the state for `player`. First match wins: hit, rising (jump or
    /// double jump), running, falling faster than `2G`, idle.
    pub fn select(player: &PlayerState, gravity: f32) -> Self {
        if player.hit {
            AnimState::Hit
        } else if player.vy < 0.0 {
            if player.jump_count > 1 {
                AnimState::DoubleJump
            } else {
                AnimState::Jump
            }
        } else if player.vx != 0.0 {
            AnimState::Run
        } else if player.vy > gravity * 2.0 {
            AnimState::Fall
        } else {
            AnimState::Idle
        }
    }

    fn slot(self, facing: Facing) -> usize {
        let row = match self {
            AnimState::Idle => 0,
            AnimState::Run => 1,
            AnimState::Jump => 2,
            AnimState::DoubleJump => 3,
            AnimState::Fall => 4,
            AnimState::Hit => 5,
        };
        let col = match facing {
            Facing::Left => 0,
            Facing::Right => 1,
        };
        row * 2 + col
    }
}

/// Clip name as registered by a mirrored asset load, e.g. `run_left`.
pub fn clip_name(state: AnimState, facing: Facing) -> String {
    format!("{}_{}", state.name(), facing.suffix())
}

/// `(counter / delay) % len`, tolerating a zero delay.
pub fn frame_index(counter: u32, delay: u32, len: usize) -> usize {
    (counter / delay.max(1)) as usize % len.max(1)
}

/// Player clips indexed by `(AnimState, Facing)`.
#[derive(Debug, Clone)]
pub struct PlayerSprites {
    clips: [Vec<Frame>; 12],
}

impl PlayerSprites {
    /// Pull all twelve clips out of a mirrored clip map.
    pub fn from_clips(map: &ClipMap) -> Result<Self, AssetError> {
        let mut clips: [Vec<Frame>; 12] = Default::default();
        for state in AnimState::ALL {
            for facing in [Facing::Left, Facing::Right] {
                let frames = require_clip(map, &clip_name(state, facing))?;
                clips[state.slot(facing)] = frames.to_vec();
            }
        }
        Ok(Self { clips })
    }

    pub fn clip(&self, state: AnimState, facing: Facing) -> &[Frame] {
        &self.clips[state.slot(facing)]
    }

    /// Frame the player is currently showing.
    pub fn current(&self, player: &PlayerState) -> &Frame {
        let clip = self.clip(player.anim_state, player.facing);
        &clip[player.frame_index.min(clip.len() - 1)]
    }

    /// Size of the idle frame; every player frame shares it.
    pub fn frame_size(&self) -> (i32, i32) {
        let f = &self.clip(AnimState::Idle, Facing::Right)[0];
        (f.width() as i32, f.height() as i32)
    }
}

/// Select the clip and frame for this tick, advance the animation clock and
/// resize the player rectangle to the frame, keeping its top-left corner.
pub fn update_sprite(player: &mut PlayerState, sprites: &PlayerSprites, physics: &PhysicsConfig) {
    let state = AnimState::select(player, physics.gravity);
    let clip = sprites.clip(state, player.facing);
    let index = frame_index(player.animation_count, physics.animation_delay, clip.len());
    player.anim_state = state;
    player.frame_index = index;
    player.animation_count += 1;

    let frame = &clip[index];
    player.rect.w = frame.width() as i32;
    player.rect.h = frame.height() as i32;
}
