use serde::{Deserialize, Serialize};

use terraleap_core::geometry::Rect;

/// Horizontal scroll state. World x minus `offset` is screen x.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub offset: i32,
}

impl Camera {
    /// Scroll by `vx` when the player is inside the band at the edge it is
    /// moving toward.
    pub fn follow(&mut self, player: Rect, vx: f32, viewport_width: i32, band: i32) {
        let toward_right = player.right() - self.offset >= viewport_width - band && vx > 0.0;
        let toward_left = player.left() - self.offset <= band && vx < 0.0;
        if toward_right || toward_left {
            self.offset = (self.offset as f32 + vx) as i32;
        }
    }

    pub fn to_screen_x(&self, world_x: i32) -> i32 {
        world_x - self.offset
    }

    /// Whether a world rectangle shows up anywhere in the viewport.
    pub fn is_visible(&self, rect: Rect, viewport_width: i32) -> bool {
        let x = self.to_screen_x(rect.x);
        x + rect.w > 0 && x < viewport_width
    }

    pub fn reset(&mut self) {
        self.offset = 0;
    }
}

/// The player has left the playable area: more than `margin` pixels past
/// either horizontal edge of the view, or below the viewport.
pub fn is_out_of_bounds(
    player: Rect,
    camera: &Camera,
    viewport_width: i32,
    viewport_height: i32,
    margin: i32,
) -> bool {
    player.x < camera.offset - margin
        || player.x > camera.offset + viewport_width + margin
        || player.y > viewport_height + margin
}
