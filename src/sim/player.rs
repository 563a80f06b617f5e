//! The burger-eating monster

use glam::Vec2;

use super::hamburger::{Hamburger, HamburgerId};
use crate::config::PlayerConfig;

/// What the player is up to (also picks the sprite)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerState {
    #[default]
    Hungry,
    Eating,
    /// Digesting; turns hungry again once the digestion timer runs out
    Full,
}

/// The player, sliding along a fixed horizontal line
#[derive(Debug, Clone)]
pub struct Player {
    pos: Vec2,
    state: PlayerState,
    digestion_timer: u32,
    config: PlayerConfig,
}

impl Player {
    pub fn new(config: PlayerConfig) -> Self {
        Self {
            pos: Vec2::new(config.start_x, config.y),
            state: PlayerState::Hungry,
            digestion_timer: config.digestion_time,
            config,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn x(&self) -> f32 {
        self.pos.x
    }

    pub fn y(&self) -> f32 {
        self.pos.y
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn digestion_timer(&self) -> u32 {
        self.digestion_timer
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }

    pub fn move_left(&mut self) {
        if self.pos.x <= self.config.left_wall {
            self.pos.x = self.config.left_wall;
        } else {
            self.pos.x -= self.config.speed;
        }
    }

    pub fn move_right(&mut self) {
        if self.pos.x >= self.config.right_wall {
            self.pos.x = self.config.right_wall;
        } else {
            self.pos.x += self.config.speed;
        }
    }

    /// Bite the first burger in reach (collection order wins).
    ///
    /// Returns the id of the burger being eaten, if any. With nothing in
    /// reach an eating player becomes full, and a full player whose
    /// digestion has run out becomes hungry again.
    pub fn eat_burgers(&mut self, burgers: &mut [Hamburger]) -> Option<HamburgerId> {
        let reach = self.config.eat_distance;
        if let Some(burger) = burgers
            .iter_mut()
            .filter(|b| !b.is_on_floor())
            .find(|b| self.pos.distance(b.pos) <= reach)
        {
            self.state = PlayerState::Eating;
            burger.start_eating();
            return Some(burger.id);
        }

        match self.state {
            PlayerState::Eating => {
                self.state = PlayerState::Full;
                self.digestion_timer = self.config.digestion_time;
            }
            PlayerState::Full if self.digestion_timer == 0 => {
                self.state = PlayerState::Hungry;
            }
            PlayerState::Full | PlayerState::Hungry => {}
        }
        None
    }

    /// Tick the digestion timer down, stopping at zero
    pub fn update(&mut self) {
        self.digestion_timer = self.digestion_timer.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HamburgerConfig;
    use crate::sim::hamburger::HamburgerState;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(PlayerConfig::default())
    }

    fn burger_at(id: HamburgerId, pos: Vec2) -> Hamburger {
        let mut b = Hamburger::new(id, pos.x, HamburgerConfig::default());
        b.pos = pos;
        b
    }

    #[test]
    fn test_new_player_is_hungry_at_center() {
        let p = player();
        assert_eq!(p.state(), PlayerState::Hungry);
        assert_eq!(p.pos(), Vec2::new(320.0, 280.0));
        assert_eq!(p.digestion_timer(), 60);
    }

    #[test]
    fn test_move_steps_by_speed() {
        let mut p = player();
        p.move_left();
        assert_eq!(p.x(), 315.0);
        p.move_right();
        p.move_right();
        assert_eq!(p.x(), 325.0);
        assert_eq!(p.y(), 280.0);
    }

    #[test]
    fn test_move_left_snaps_to_wall() {
        let mut p = player();
        for _ in 0..200 {
            p.move_left();
        }
        assert_eq!(p.x(), 10.0);
    }

    #[test]
    fn test_move_right_snaps_to_wall() {
        let mut p = player();
        for _ in 0..200 {
            p.move_right();
        }
        assert_eq!(p.x(), 530.0);
    }

    #[test]
    fn test_both_directions_cancel_out() {
        let mut p = player();
        p.move_left();
        p.move_right();
        assert_eq!(p.x(), 320.0);
    }

    #[test]
    fn test_eats_burger_in_reach() {
        let mut p = player();
        let mut burgers = vec![burger_at(1, p.pos() + Vec2::new(0.0, -49.0))];
        assert_eq!(p.eat_burgers(&mut burgers), Some(1));
        assert_eq!(p.state(), PlayerState::Eating);
        assert_eq!(burgers[0].state, HamburgerState::Eating);
    }

    #[test]
    fn test_ignores_burger_out_of_reach() {
        let mut p = player();
        let mut burgers = vec![burger_at(1, p.pos() + Vec2::new(30.0, 41.0))];
        assert_eq!(p.eat_burgers(&mut burgers), None);
        assert_eq!(p.state(), PlayerState::Hungry);
        assert_eq!(burgers[0].state, HamburgerState::Delicious);
    }

    #[test]
    fn test_reach_is_inclusive() {
        let mut p = player();
        let mut burgers = vec![burger_at(1, p.pos() + Vec2::new(30.0, 40.0))];
        assert_eq!(p.eat_burgers(&mut burgers), Some(1));
    }

    #[test]
    fn test_first_match_wins() {
        let mut p = player();
        let mut burgers = vec![
            burger_at(1, p.pos() + Vec2::new(200.0, 0.0)),
            burger_at(2, p.pos() + Vec2::new(40.0, 0.0)),
            burger_at(3, p.pos()),
        ];
        assert_eq!(p.eat_burgers(&mut burgers), Some(2));
        assert_eq!(burgers[0].state, HamburgerState::Delicious);
        assert_eq!(burgers[1].state, HamburgerState::Eating);
        assert_eq!(burgers[2].state, HamburgerState::Delicious);
    }

    #[test]
    fn test_skips_floor_burgers() {
        let mut p = player();
        let mut floor_burger = burger_at(1, p.pos());
        floor_burger.state = HamburgerState::OnFloor;
        let mut burgers = vec![floor_burger, burger_at(2, p.pos())];
        assert_eq!(p.eat_burgers(&mut burgers), Some(2));
        assert!(burgers[0].is_on_floor());
    }

    #[test]
    fn test_eating_with_nothing_in_reach_becomes_full() {
        let mut p = player();
        p.state = PlayerState::Eating;
        p.digestion_timer = 3;
        assert_eq!(p.eat_burgers(&mut []), None);
        assert_eq!(p.state(), PlayerState::Full);
        assert_eq!(p.digestion_timer(), 60);
    }

    #[test]
    fn test_full_player_gets_hungry_after_digestion() {
        let mut p = player();
        p.state = PlayerState::Full;
        p.digestion_timer = 0;
        p.eat_burgers(&mut []);
        assert_eq!(p.state(), PlayerState::Hungry);
    }

    #[test]
    fn test_full_player_stays_full_while_digesting() {
        let mut p = player();
        p.state = PlayerState::Full;
        p.digestion_timer = 5;
        p.eat_burgers(&mut []);
        assert_eq!(p.state(), PlayerState::Full);
    }

    #[test]
    fn test_hungry_player_never_becomes_full_on_its_own() {
        let mut p = player();
        for _ in 0..200 {
            p.update();
            p.eat_burgers(&mut []);
            assert_eq!(p.state(), PlayerState::Hungry);
        }
    }

    #[test]
    fn test_digestion_timer_stops_at_zero() {
        let mut p = player();
        for _ in 0..100 {
            p.update();
        }
        assert_eq!(p.digestion_timer(), 0);
    }

    #[test]
    fn test_digestion_cycle() {
        let mut p = player();
        let mut burgers = vec![burger_at(1, p.pos())];
        p.eat_burgers(&mut burgers);
        burgers.clear();

        p.eat_burgers(&mut burgers);
        assert_eq!(p.state(), PlayerState::Full);

        for _ in 0..60 {
            p.update();
            p.eat_burgers(&mut burgers);
        }
        assert_eq!(p.digestion_timer(), 0);
        assert_eq!(p.state(), PlayerState::Hungry);
    }

    proptest! {
        #[test]
        fn prop_x_stays_between_walls(moves in proptest::collection::vec(any::<bool>(), 0..500)) {
            let mut p = player();
            let config = *p.config();
            for left in moves {
                if left {
                    p.move_left();
                } else {
                    p.move_right();
                }
                prop_assert!(p.x() >= config.left_wall && p.x() <= config.right_wall);
            }
        }
    }
}
