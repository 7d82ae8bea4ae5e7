use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use terraleap_core::asset::Frame;
use terraleap_core::geometry::Rect;
use terraleap_core::mask::Mask;

use crate::collision::{Collider, ColliderKind};
use crate::config::LevelConfig;
use crate::hazards::Hazard;
use crate::pickups::{Coin, reset_coins};

/// Static layout plus the few pieces of per-object state the session mutates.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Level {
    /// Terrain blocks, floor first.
    pub blocks: Vec<Rect>,
    pub hazards: Vec<Hazard>,
    pub coins: Vec<Coin>,
    pub goal: Rect,
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub seed: u64,
}

impl Level {
    /// Solid objects for this tick: blocks, then hazards with the mask of
    /// their current animation frame.
    pub fn colliders<'a>(
        &'a self,
        tile: &'a Mask,
        fire: &'a [Frame],
        hazard_delay: u32,
    ) -> Vec<Collider<'a>> {
        let blocks = self.blocks.iter().enumerate().map(|(i, rect)| Collider {
            kind: ColliderKind::Block(i),
            rect: *rect,
            mask: tile,
        });
        let hazards = self.hazards.iter().enumerate().map(|(i, h)| Collider {
            kind: ColliderKind::Hazard(i),
            rect: h.rect,
            mask: fire[h.frame_index(hazard_delay, fire.len())].mask(),
        });
        blocks.chain(hazards).collect()
    }

    pub fn reset_coins(&mut self) {
        reset_coins(&mut self.coins);
    }
}

fn pick_tier(rng: &mut StdRng, tiers: &[i32]) -> Option<i32> {
    if tiers.is_empty() {
        return None;
    }
    Some(tiers[rng.random_range(0..tiers.len())])
}

fn positions(start: i32, end: i32, period: i32) -> impl Iterator<Item = i32> {
    (start..end).step_by(period.max(1) as usize)
}

/// Build the level for `seed`. Only platform and coin heights are random;
/// everything else is a fixed pattern along the x axis.
///
/// `fire_size` and `goal_size` come from the loaded frames.
pub fn generate_level(
    cfg: &LevelConfig,
    seed: u64,
    fire_size: (i32, i32),
    goal_size: (i32, i32),
) -> Level {
    let mut rng = StdRng::seed_from_u64(seed);
    let bs = cfg.block_size;
    let floor_y = cfg.viewport_height - bs;

    let mut blocks: Vec<Rect> = (cfg.floor_first_block..cfg.floor_last_block)
        .map(|i| Rect::new(i * bs, floor_y, bs, bs))
        .collect();

    for x in positions(cfg.platform_start_x, cfg.level_end_x, cfg.platform_period) {
        if let Some(tier) = pick_tier(&mut rng, &cfg.platform_tiers) {
            blocks.push(Rect::new(x, cfg.viewport_height - bs * tier, bs, bs));
        }
    }

    let (fire_w, fire_h) = fire_size;
    let hazards = positions(cfg.fire_start_x, cfg.level_end_x, cfg.fire_period)
        .map(|x| Hazard::new(Rect::new(x, floor_y - fire_h, fire_w, fire_h)))
        .collect();

    let mut coins = Vec::new();
    for x in positions(cfg.coin_start_x, cfg.level_end_x, cfg.coin_period) {
        if let Some(tier) = pick_tier(&mut rng, &cfg.coin_tiers) {
            let y = cfg.viewport_height - bs * tier - cfg.coin_lift;
            coins.push(Coin::new(x, y, cfg.coin_radius));
        }
    }

    let goal = Rect::new(
        cfg.level_end_x,
        floor_y - cfg.goal_lift,
        goal_size.0,
        goal_size.1,
    );

    Level {
        blocks,
        hazards,
        coins,
        goal,
        spawn_x: cfg.spawn_x,
        spawn_y: cfg.spawn_y,
        seed,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(seed: u64) -> Level {
        generate_level(&LevelConfig::default(), seed, (32, 64), (64, 64))
    }

    #[test]
    fn deterministic_generation() {
        let a = level(42);
        let b = level(42);
        assert_eq!(a.blocks, b.blocks);
        assert_eq!(a.coins, b.coins);
        assert_eq!(a.hazards, b.hazards);
    }

    #[test]
    fn floor_spans_the_level() {
        let l = level(1);
        let floor: Vec<&Rect> = l.blocks.iter().filter(|b| b.y == 504).collect();
        assert_eq!(floor.len(), 210);
        assert_eq!(floor[0].x, -960);
        assert_eq!(floor[209].right(), 200 * 96);
    }

    #[test]
    fn platforms_on_tier_heights() {
        let l = level(7);
        let platforms = &l.blocks[210..];
        let xs: Vec<i32> = platforms.iter().map(|b| b.x).collect();
        assert_eq!(xs, vec![300, 900, 1500, 2100, 2700, 3300, 3900]);
        for p in platforms {
            assert!([408, 312, 216].contains(&p.y), "unexpected platform y {}", p.y);
        }
    }

    #[test]
    fn fires_sit_on_the_floor() {
        let l = level(3);
        let xs: Vec<i32> = l.hazards.iter().map(|h| h.rect.x).collect();
        assert_eq!(xs, vec![500, 1000, 1500, 2000, 2500, 3000, 3500]);
        assert!(l.hazards.iter().all(|h| h.rect.bottom() == 504));
        // Damage rectangle covers the whole upscaled sprite
        assert!(l.hazards.iter().all(|h| (h.rect.w, h.rect.h) == (32, 64)));
    }

    #[test]
    fn coins_and_goal_placement() {
        let l = level(9);
        assert_eq!(l.coins.len(), 10);
        assert_eq!(l.coins[0].x, 250);
        for c in &l.coins {
            assert!([444, 348, 252].contains(&c.y));
            assert!(!c.collected);
        }
        assert_eq!(l.goal, Rect::new(4000, 404, 64, 64));
        assert_eq!((l.spawn_x, l.spawn_y), (100, 100));
    }

    #[test]
    fn different_seeds_vary_heights() {
        let heights = |l: &Level| -> Vec<i32> { l.coins.iter().map(|c| c.y).collect() };
        let base = heights(&level(0));
        assert!((1..20).any(|s| heights(&level(s)) != base));
    }

    #[test]
    fn empty_tiers_skip_platforms() {
        let cfg = LevelConfig {
            platform_tiers: Vec::new(),
            ..LevelConfig::default()
        };
        let l = generate_level(&cfg, 1, (32, 64), (64, 64));
        assert_eq!(l.blocks.len(), 210);
    }

    #[test]
    fn colliders_cover_blocks_and_hazards() {
        let l = level(5);
        let tile = Mask::filled(96, 96);
        let fire = vec![Frame::new(1, Mask::filled(32, 64)); 3];
        let colliders = l.colliders(&tile, &fire, 3);
        assert_eq!(colliders.len(), l.blocks.len() + l.hazards.len());
        assert_eq!(colliders[0].kind, ColliderKind::Block(0));
        assert_eq!(
            colliders.last().map(|c| c.kind),
            Some(ColliderKind::Hazard(l.hazards.len() - 1))
        );
    }

    #[test]
    fn level_serializes() {
        let l = level(11);
        let json = serde_json::to_string(&l).unwrap();
        let back: Level = serde_json::from_str(&json).unwrap();
        assert_eq!(back.blocks, l.blocks);
        assert_eq!(back.seed, 11);
    }
}
