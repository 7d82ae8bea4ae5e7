use terraleap_core::asset::{AssetError, AssetStore, Frame, require_clip};

use crate::animation::PlayerSprites;
use crate::config::LevelConfig;

/// Character sheet and its source frame size before the 2x upscale.
pub const CHARACTER: (&str, &str) = ("MainCharacters", "PinkMan");
pub const CHARACTER_FRAME: u32 = 32;
pub const FIRE: (&str, &str) = ("Traps", "Fire");
pub const FIRE_CLIP: &str = "on";

/// Every frame the game draws or collides with, loaded once at startup.
#[derive(Debug, Clone)]
pub struct GameSprites {
    pub player: PlayerSprites,
    pub fire: Vec<Frame>,
    pub tile: Frame,
    pub background: Frame,
    pub heart: Frame,
    pub coin: Frame,
    pub trophy: Frame,
}

impl GameSprites {
    pub fn load(store: &mut dyn AssetStore, level: &LevelConfig) -> Result<Self, AssetError> {
        let characters = store.load_animation_frames(
            CHARACTER.0,
            CHARACTER.1,
            CHARACTER_FRAME,
            CHARACTER_FRAME,
            true,
        )?;
        let player = PlayerSprites::from_clips(&characters)?;

        let traps = store.load_animation_frames(
            FIRE.0,
            FIRE.1,
            level.fire_frame_width,
            level.fire_frame_height,
            false,
        )?;
        let fire = require_clip(&traps, FIRE_CLIP)?.to_vec();

        // A non-positive block size becomes 0, which the store rejects.
        let tile_size = level.block_size.max(0) as u32;

        Ok(Self {
            player,
            fire,
            tile: store.load_tile(tile_size)?,
            background: store.load_image("Background", "Pink")?,
            heart: store.load_image("Items", "Heart")?,
            coin: store.load_image("Items", "Coin")?,
            trophy: store.load_image("Items", "Trophy")?,
        })
    }

    /// Size of a fire frame in world pixels.
    pub fn fire_size(&self) -> (i32, i32) {
        let f = &self.fire[0];
        (f.width() as i32, f.height() as i32)
    }

    pub fn trophy_size(&self) -> (i32, i32) {
        (self.trophy.width() as i32, self.trophy.height() as i32)
    }
}
