//! In-memory [`AssetStore`] that paints silhouettes instead of reading
//! sprite sheets from disk. Frame layout matches the shipped art (32x32
//! character strips, 16x32 fire strips, upscaled 2x at load).

use crate::asset::{AssetError, AssetStore, ClipMap, Frame, ImageId, RgbaImage, insert_clip};

/// Clip names and frame counts for the character sprite strips.
pub const CHARACTER_CLIPS: &[(&str, u32)] = &[
    ("idle", 11),
    ("run", 12),
    ("jump", 1),
    ("double_jump", 6),
    ("fall", 1),
    ("hit", 7),
];

/// Frame count of the looping fire clip.
pub const FIRE_FRAMES: u32 = 3;

const SKIN: [u8; 4] = [235, 120, 160, 255];
const FLAME: [u8; 4] = [255, 140, 20, 255];
const GOLD: [u8; 4] = [255, 215, 0, 255];
const TILE: [u8; 4] = [140, 90, 50, 255];
const SKY: [u8; 4] = [250, 200, 220, 255];
const HEART: [u8; 4] = [220, 30, 40, 255];

pub struct ProceduralAssets {
    next_image: ImageId,
}

impl ProceduralAssets {
    pub fn new() -> Self {
        Self { next_image: 1 }
    }

    fn alloc_image(&mut self) -> ImageId {
        let id = self.next_image;
        self.next_image += 1;
        id
    }

    fn frames_from_strip(
        &mut self,
        strip: &RgbaImage,
        frame_width: u32,
        frame_height: u32,
    ) -> Result<Vec<Frame>, AssetError> {
        strip
            .slice_strip(frame_width, frame_height)?
            .iter()
            .map(|px| Ok(Frame::from_rgba(self.alloc_image(), px)?.scale2x()))
            .collect()
    }
}

impl Default for ProceduralAssets {
    fn default() -> Self {
        Self::new()
    }
}

/// Character body: a column with transparent margins and feet on the
/// bottom row. Odd frames swing an arm out on the leading side.
fn paint_character(strip: &mut RgbaImage, frames: u32, fw: u32, fh: u32) {
    for i in 0..frames {
        let ox = i * fw;
        for y in fh / 8..fh {
            for x in fw * 3 / 16..fw * 13 / 16 {
                strip.put(ox + x, y, SKIN);
            }
        }
        if i % 2 == 1 {
            for y in fh / 2..fh / 2 + 3 {
                for x in fw * 13 / 16..fw * 15 / 16 {
                    strip.put(ox + x, y, SKIN);
                }
            }
        }
    }
}

/// Flame: a triangle widening toward the base. The tip flickers a pixel or
/// two below the top row, so a body resting on the fire stays flush.
fn paint_fire(strip: &mut RgbaImage, frames: u32, fw: u32, fh: u32) {
    for i in 0..frames {
        let ox = i * fw;
        let tip = i % 3;
        for y in tip..fh {
            let half = ((y - tip) * fw / 2 / (fh - tip)).max(1);
            let cx = fw / 2;
            for x in cx.saturating_sub(half)..(cx + half).min(fw) {
                strip.put(ox + x, y, FLAME);
            }
        }
    }
}

fn paint_disc(img: &mut RgbaImage, color: [u8; 4]) {
    let r = img.width.min(img.height) as i64 / 2;
    for y in 0..img.height {
        for x in 0..img.width {
            let (dx, dy) = (x as i64 - r, y as i64 - r);
            if dx * dx + dy * dy <= r * r {
                img.put(x, y, color);
            }
        }
    }
}

fn paint_fill(img: &mut RgbaImage, color: [u8; 4]) {
    for y in 0..img.height {
        for x in 0..img.width {
            img.put(x, y, color);
        }
    }
}

impl AssetStore for ProceduralAssets {
    fn load_animation_frames(
        &mut self,
        category: &str,
        name: &str,
        frame_width: u32,
        frame_height: u32,
        mirrored: bool,
    ) -> Result<ClipMap, AssetError> {
        if frame_width == 0 || frame_height == 0 {
            return Err(AssetError::BadFrameSize {
                width: frame_width,
                height: frame_height,
            });
        }
        let clips: &[(&str, u32)] = match category {
            "MainCharacters" => CHARACTER_CLIPS,
            "Traps" if name == "Fire" => &[("on", FIRE_FRAMES)],
            _ => {
                return Err(AssetError::UnknownAsset {
                    category: category.to_string(),
                    name: name.to_string(),
                });
            },
        };

        let mut map = ClipMap::new();
        for &(clip, count) in clips {
            let mut strip = RgbaImage::new(frame_width * count, frame_height);
            if category == "Traps" {
                paint_fire(&mut strip, count, frame_width, frame_height);
            } else {
                paint_character(&mut strip, count, frame_width, frame_height);
            }
            let frames = self.frames_from_strip(&strip, frame_width, frame_height)?;
            insert_clip(&mut map, clip, frames, mirrored);
        }
        tracing::debug!(category, name, clips = map.len(), "painted animation clips");
        Ok(map)
    }

    fn load_tile(&mut self, size: u32) -> Result<Frame, AssetError> {
        if size == 0 {
            return Err(AssetError::BadFrameSize {
                width: size,
                height: size,
            });
        }
        let mut img = RgbaImage::new(size, size);
        paint_fill(&mut img, TILE);
        Frame::from_rgba(self.alloc_image(), &img)
    }

    fn load_image(&mut self, category: &str, name: &str) -> Result<Frame, AssetError> {
        let img = match (category, name) {
            ("Background", _) => {
                let mut img = RgbaImage::new(64, 64);
                paint_fill(&mut img, SKY);
                img
            },
            ("Items", "Heart") => {
                // Shipped without alpha: painted on white, keyed out like the real file.
                let mut img = RgbaImage::new(40, 40);
                paint_fill(&mut img, [255, 255, 255, 255]);
                let mut disc = RgbaImage::new(40, 40);
                paint_disc(&mut disc, HEART);
                for y in 0..40 {
                    for x in 0..40 {
                        if disc.pixel(x, y)[3] > 0 {
                            img.put(x, y, HEART);
                        }
                    }
                }
                img.clear_light_background(180);
                img
            },
            ("Items", "Coin") => {
                let mut img = RgbaImage::new(24, 24);
                paint_disc(&mut img, GOLD);
                img
            },
            ("Items", "Trophy") => {
                let mut img = RgbaImage::new(64, 64);
                paint_fill(&mut img, GOLD);
                img
            },
            _ => {
                return Err(AssetError::UnknownAsset {
                    category: category.to_string(),
                    name: name.to_string(),
                });
            },
        };
        Frame::from_rgba(self.alloc_image(), &img)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_clips_are_mirrored_and_scaled() {
        let mut assets = ProceduralAssets::new();
        let map = assets
            .load_animation_frames("MainCharacters", "PinkMan", 32, 32, true)
            .unwrap();
        assert_eq!(map.len(), CHARACTER_CLIPS.len() * 2);
        let run = &map["run_right"];
        assert_eq!(run.len(), 12);
        assert_eq!((run[0].width(), run[0].height()), (64, 64));
        // Feet reach the bottom row so resting contact is flush
        assert!(run[0].mask().get(32, 63));
        // Side margins stay transparent
        assert!(!run[0].mask().get(0, 40));
        assert!(map["run_left"][0].flipped);
    }

    #[test]
    fn fire_clip_is_unmirrored() {
        let mut assets = ProceduralAssets::new();
        let map = assets
            .load_animation_frames("Traps", "Fire", 16, 32, false)
            .unwrap();
        let on = &map["on"];
        assert_eq!(on.len(), FIRE_FRAMES as usize);
        assert_eq!((on[0].width(), on[0].height()), (32, 64));
        assert!(on[0].mask().get(16, 63));
        assert!(on[0].mask().get(16, 0));
        assert!(!on[0].mask().get(0, 0));
        assert!(!on[2].mask().get(16, 0));
    }

    #[test]
    fn unknown_assets_are_errors() {
        let mut assets = ProceduralAssets::new();
        assert!(matches!(
            assets.load_animation_frames("Enemies", "Slime", 32, 32, true),
            Err(AssetError::UnknownAsset { .. })
        ));
        assert!(assets.load_image("Items", "Key").is_err());
        assert!(assets.load_tile(0).is_err());
    }

    #[test]
    fn heart_background_is_keyed_out() {
        let mut assets = ProceduralAssets::new();
        let heart = assets.load_image("Items", "Heart").unwrap();
        assert!(!heart.mask().get(0, 0));
        assert!(heart.mask().get(20, 20));
    }

    #[test]
    fn every_frame_gets_its_own_image() {
        let mut assets = ProceduralAssets::new();
        let a = assets.load_tile(96).unwrap();
        let b = assets.load_tile(96).unwrap();
        assert_ne!(a.image, b.image);
        assert_eq!(a.mask().count(), 96 * 96);
    }
}
