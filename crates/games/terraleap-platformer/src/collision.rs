//! Axis-separated collision between the player and static geometry.
//!
//! Broad phase is a rectangle overlap; narrow phase compares the opaque
//! pixel masks at their relative offset. The horizontal probe and the
//! vertical resolution are independent passes, so a diagonal contact is
//! never corrected along both axes at once.

use terraleap_core::geometry::Rect;
use terraleap_core::mask::Mask;

use crate::physics::PlayerState;

/// What a collider is, by index into the level's lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColliderKind {
    Block(usize),
    Hazard(usize),
}

/// Solid object as seen by the resolver for one tick.
#[derive(Debug, Clone, Copy)]
pub struct Collider<'a> {
    pub kind: ColliderKind,
    pub rect: Rect,
    pub mask: &'a Mask,
}

/// Pixel-accurate overlap of a body (rectangle + mask) with a collider.
pub fn intersects(rect: Rect, mask: &Mask, other: &Collider<'_>) -> bool {
    rect.intersects(&other.rect)
        && mask.overlaps(other.mask, other.rect.x - rect.x, other.rect.y - rect.y)
}

/// Test a horizontal step of `dx` without moving the body.
///
/// Returns the first collider the shifted body would intersect, including
/// one it already overlaps where it stands.
pub fn probe_horizontal(
    rect: Rect,
    mask: &Mask,
    dx: i32,
    colliders: &[Collider<'_>],
) -> Option<ColliderKind> {
    let shifted = rect.translated(dx, 0);
    colliders
        .iter()
        .find(|c| intersects(shifted, mask, c))
        .map(|c| c.kind)
}

/// Result of the vertical pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Contacts {
    /// Colliders the player was snapped on top of.
    pub landed_on: Vec<ColliderKind>,
}

impl Contacts {
    pub fn landed(&self) -> bool {
        !self.landed_on.is_empty()
    }

    pub fn is_resting_on(&self, kind: ColliderKind) -> bool {
        self.landed_on.contains(&kind)
    }
}

/// Resolve vertical penetration for a player moving with vertical velocity
/// `dy` this tick.
///
/// Moving down: snap the player's bottom to the collider's top and land.
/// Moving up: snap the player's top to the collider's bottom and bounce.
/// Each snap is visible to the colliders tested after it.
pub fn resolve_vertical(
    player: &mut PlayerState,
    mask: &Mask,
    dy: f32,
    colliders: &[Collider<'_>],
) -> Contacts {
    let mut contacts = Contacts::default();

    for c in colliders {
        if !intersects(player.rect, mask, c) {
            continue;
        }
        if dy > 0.0 {
            player.rect.set_bottom(c.rect.top());
            player.landed();
            contacts.landed_on.push(c.kind);
        } else if dy < 0.0 {
            player.rect.set_top(c.rect.bottom());
            player.hit_head();
        }
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn block(i: usize, x: i32, y: i32, mask: &Mask) -> Collider<'_> {
        Collider {
            kind: ColliderKind::Block(i),
            rect: Rect::new(x, y, mask.width() as i32, mask.height() as i32),
            mask,
        }
    }

    #[test]
    fn landing_snaps_bottom_to_top() {
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let floor = [block(0, 0, 504, &tile)];
        let mut p = PlayerState::new(10, 446, 64, 64);
        p.vy = 6.0;
        p.jump_count = 2;

        let dy = p.vy;
        let contacts = resolve_vertical(&mut p, &body, dy, &floor);

        assert_eq!(p.rect.bottom(), 504);
        assert_eq!(p.vy, 0.0);
        assert_eq!(p.jump_count, 0);
        assert!(contacts.landed());
        assert!(contacts.is_resting_on(ColliderKind::Block(0)));
    }

    #[test]
    fn ceiling_snaps_top_to_bottom_and_bounces() {
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let ceiling = [block(3, 0, 200, &tile)];
        let mut p = PlayerState::new(10, 290, 64, 64);
        p.vy = -7.0;

        let dy = p.vy;
        let contacts = resolve_vertical(&mut p, &body, dy, &ceiling);

        assert_eq!(p.rect.top(), 296);
        assert_eq!(p.vy, 7.0);
        assert!(!contacts.landed());
    }

    #[test]
    fn zero_velocity_overlap_is_left_in_place() {
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let floor = [block(0, 0, 504, &tile)];
        let mut p = PlayerState::new(10, 442, 64, 64);
        let contacts = resolve_vertical(&mut p, &body, 0.0, &floor);
        assert_eq!(p.rect.y, 442);
        assert!(!contacts.landed());
    }

    #[test]
    fn transparent_pixels_do_not_collide() {
        let tile = Mask::filled(96, 96);
        // Body whose bottom 4 rows are empty
        let body = Mask::from_fn(64, 64, |_, y| y < 60);
        let floor = [block(0, 0, 504, &tile)];
        let mut p = PlayerState::new(10, 443, 64, 64);
        p.vy = 2.0;
        let dy = p.vy;
        let contacts = resolve_vertical(&mut p, &body, dy, &floor);
        assert!(!contacts.landed());
        assert_eq!(p.rect.y, 443);
    }

    #[test]
    fn probe_detects_wall_without_moving() {
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let wall = [block(1, 200, 300, &tile)];
        let rect = Rect::new(130, 310, 64, 64);

        assert_eq!(
            probe_horizontal(rect, &body, 10, &wall),
            Some(ColliderKind::Block(1))
        );
        assert_eq!(probe_horizontal(rect, &body, -10, &wall), None);
    }

    #[test]
    fn sunk_body_is_blocked_on_either_side_of_a_seam() {
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let floor = [block(0, 0, 504, &tile), block(1, 96, 504, &tile)];
        // One pixel into the floor, well inside the first block
        assert_eq!(
            probe_horizontal(Rect::new(10, 441, 64, 64), &body, 10, &floor),
            Some(ColliderKind::Block(0))
        );
        // Shifted body crosses the seam at x = 96
        assert_eq!(
            probe_horizontal(Rect::new(30, 441, 64, 64), &body, 10, &floor),
            Some(ColliderKind::Block(0))
        );
        // Flush on top: free to walk
        assert_eq!(
            probe_horizontal(Rect::new(30, 440, 64, 64), &body, 10, &floor),
            None
        );
    }

    #[test]
    fn passes_are_decoupled_on_diagonal_contact() {
        // Player moving down-right into the corner of a block: the probe
        // only reports, the vertical pass only snaps vertically.
        let tile = Mask::filled(96, 96);
        let body = Mask::filled(64, 64);
        let b = [block(0, 300, 400, &tile)];
        let mut p = PlayerState::new(240, 340, 64, 64);
        p.vy = 4.0;

        let x_before = p.rect.x;
        assert_eq!(
            probe_horizontal(p.rect, &body, 10, &b),
            Some(ColliderKind::Block(0))
        );
        assert_eq!(p.rect.x, x_before);

        let dy = p.vy;
        let contacts = resolve_vertical(&mut p, &body, dy, &b);
        assert_eq!(p.rect.x, x_before);
        assert_eq!(p.rect.bottom(), 400);
        assert!(contacts.landed());
    }
}
