use serde::{Deserialize, Serialize};

use terraleap_core::game_trait::{GameEvent, LifeLossCause};
use terraleap_core::geometry::Rect;

use crate::animation::frame_index;
use crate::collision::{ColliderKind, Contacts};
use crate::config::RulesConfig;
use crate::physics::PlayerState;
use crate::session::SessionState;

/// A fire trap. Solid to the resolver and harmful to touch from the side
/// or below; standing on top of it is safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hazard {
    pub rect: Rect,
    /// Animation clock, advanced once per tick.
    pub animation_count: u32,
}

impl Hazard {
    pub fn new(rect: Rect) -> Self {
        Self {
            rect,
            animation_count: 0,
        }
    }

    pub fn advance(&mut self) {
        self.animation_count = self.animation_count.wrapping_add(1);
    }

    pub fn frame_index(&self, delay: u32, len: usize) -> usize {
        frame_index(self.animation_count, delay, len)
    }
}

/// Whether the player is standing on hazard `index` this tick.
fn is_standing_on(player: &PlayerState, hazard: &Hazard, index: usize, contacts: &Contacts) -> bool {
    player.rect.bottom() == hazard.rect.top() || contacts.is_resting_on(ColliderKind::Hazard(index))
}

/// Apply contact damage from the first hazard the hurtbox overlaps.
///
/// A hit costs one life, starts the invulnerability window and stops the
/// player dead. Nothing happens while already invulnerable.
pub fn apply_hazard_damage(
    player: &mut PlayerState,
    hazards: &[Hazard],
    contacts: &Contacts,
    session: &mut SessionState,
    rules: &RulesConfig,
) -> Vec<GameEvent> {
    if player.hit {
        return Vec::new();
    }
    let hurtbox = player.hurtbox(&rules.hurtbox);

    let struck = hazards
        .iter()
        .enumerate()
        .filter(|(i, h)| !is_standing_on(player, h, *i, contacts))
        .any(|(_, h)| hurtbox.intersects(&h.rect));
    if !struck {
        return Vec::new();
    }

    player.make_hit();
    player.vx = 0.0;
    player.vy = 0.0;
    session.lose_life(LifeLossCause::Hazard)
}

#[cfg(test)]
mod tests {
    use terraleap_core::game_trait::Outcome;

    use super::*;

    fn fire() -> Hazard {
        Hazard::new(Rect::new(500, 440, 32, 64))
    }

    fn rules() -> RulesConfig {
        RulesConfig::default()
    }

    #[test]
    fn side_contact_costs_a_life() {
        let hazards = [fire()];
        let mut session = SessionState::new(3);
        let mut p = PlayerState::new(470, 440, 64, 64);
        p.vx = 5.0;
        p.vy = 1.0;

        let events = apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());

        assert_eq!(session.lives, 2);
        assert!(p.hit);
        assert_eq!((p.vx, p.vy), (0.0, 0.0));
        assert_eq!(
            events,
            vec![GameEvent::LifeLost {
                cause: LifeLossCause::Hazard,
                lives_left: 2
            }]
        );
    }

    #[test]
    fn invulnerable_player_is_spared() {
        let hazards = [fire()];
        let mut session = SessionState::new(3);
        let mut p = PlayerState::new(470, 440, 64, 64);
        apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
        let events = apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
        assert!(events.is_empty());
        assert_eq!(session.lives, 2);
    }

    #[test]
    fn standing_on_top_is_safe() {
        let hazards = [fire()];
        let mut session = SessionState::new(3);
        // Bottom flush with the fire's top
        let mut p = PlayerState::new(490, 376, 64, 64);
        for _ in 0..10 {
            let events =
                apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
            assert!(events.is_empty());
        }
        assert_eq!(session.lives, 3);
    }

    #[test]
    fn landed_on_contact_is_safe() {
        let hazards = [fire()];
        let mut session = SessionState::new(3);
        let mut p = PlayerState::new(490, 390, 64, 64);
        let contacts = Contacts {
            landed_on: vec![ColliderKind::Hazard(0)],
        };
        assert!(apply_hazard_damage(&mut p, &hazards, &contacts, &mut session, &rules()).is_empty());
    }

    #[test]
    fn hurtbox_inset_forgives_grazes() {
        let hazards = [fire()];
        let mut session = SessionState::new(3);
        // Full rect overlaps the fire by 2px; hurtbox does not
        let mut p = PlayerState::new(438, 440, 64, 64);
        assert!(apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules()).is_empty());
    }

    #[test]
    fn one_life_per_tick_with_overlapping_hazards() {
        let hazards = [fire(), Hazard::new(Rect::new(520, 440, 32, 64))];
        let mut session = SessionState::new(3);
        let mut p = PlayerState::new(490, 440, 64, 64);
        apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
        assert_eq!(session.lives, 2);
    }

    #[test]
    fn last_life_ends_the_game() {
        let hazards = [fire()];
        let mut session = SessionState::new(1);
        let mut p = PlayerState::new(470, 440, 64, 64);
        let events = apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
        assert!(session.game_over);
        assert_eq!(session.outcome, Outcome::Lost);
        assert_eq!(events.len(), 2);
    }

    #[test]
    fn animation_cycles() {
        let mut h = fire();
        let frames: Vec<usize> = (0..9)
            .map(|_| {
                let i = h.frame_index(3, 3);
                h.advance();
                i
            })
            .collect();
        assert_eq!(frames, vec![0, 0, 0, 1, 1, 1, 2, 2, 2]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn resting_on_top_never_costs_a_life(
                x in 440i32..560,
                ticks in 1usize..300,
            ) {
                let hazards = [fire()];
                let mut session = SessionState::new(3);
                let mut p = PlayerState::new(x, 376, 64, 64);
                for _ in 0..ticks {
                    apply_hazard_damage(&mut p, &hazards, &Contacts::default(), &mut session, &rules());
                }
                prop_assert_eq!(session.lives, 3);
            }
        }
    }
}
