use serde::{Deserialize, Serialize};

use terraleap_core::game_trait::GameEvent;
use terraleap_core::geometry::Rect;

use crate::session::SessionState;

/// Collectible coin. Once collected it stays collected until restart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coin {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: i32, y: i32, radius: i32) -> Self {
        Self {
            x,
            y,
            radius,
            collected: false,
        }
    }

    /// Bounding square, `2r` on a side, anchored at the top-left.
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.radius * 2, self.radius * 2)
    }
}

/// Collect every uncollected coin overlapping `player`.
pub fn collect_coins(
    coins: &mut [Coin],
    player: Rect,
    session: &mut SessionState,
    reward: u32,
) -> Vec<GameEvent> {
    let mut events = Vec::new();
    for coin in coins.iter_mut().filter(|c| !c.collected) {
        if coin.rect().intersects(&player) {
            coin.collected = true;
            let score = session.add_score(reward);
            tracing::debug!(x = coin.x, y = coin.y, score, "coin collected");
            events.push(GameEvent::CoinCollected { score });
        }
    }
    events
}

pub fn reset_coins(coins: &mut [Coin]) {
    for coin in coins {
        coin.collected = false;
    }
}
