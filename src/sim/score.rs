//! Pass-through scoring

use super::entity::{Obstacle, Player};

/// Mark every obstacle whose right edge is strictly left of the player's left
/// edge as passed. Returns the ids newly passed this call, in obstacle order.
///
/// An obstacle is counted at most once no matter how long it lingers.
pub fn mark_passed(player: &Player, obstacles: &mut [Obstacle]) -> Vec<u32> {
    let player_left = player.rect().left();
    obstacles
        .iter_mut()
        .filter(|ob| !ob.passed && ob.right() < player_left)
        .map(|ob| {
            ob.passed = true;
            ob.id
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    #[test]
    fn test_pass_is_strict() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        // Right edge exactly at the player's left edge (80)
        let mut obstacles = vec![Obstacle::ground(1, 56.0, Vec2::new(24.0, 48.0), &tuning)];
        assert!(mark_passed(&player, &mut obstacles).is_empty());
        assert!(!obstacles[0].passed);

        obstacles[0].advance(0.5);
        assert_eq!(mark_passed(&player, &mut obstacles), vec![1]);
        assert!(obstacles[0].passed);
    }

    #[test]
    fn test_scored_once() {
        let tuning = Tuning::default();
        let player = Player::new(&tuning);
        let mut obstacles = vec![
            Obstacle::ground(1, 10.0, Vec2::new(24.0, 48.0), &tuning),
            Obstacle::ground(2, 400.0, Vec2::new(24.0, 48.0), &tuning),
        ];
        assert_eq!(mark_passed(&player, &mut obstacles), vec![1]);
        for _ in 0..5 {
            obstacles[0].advance(6.0);
            assert!(mark_passed(&player, &mut obstacles).is_empty());
        }
    }

    proptest! {
        #[test]
        fn passed_never_reverts(speeds in proptest::collection::vec(0.0f32..20.0, 1..200)) {
            let tuning = Tuning::default();
            let player = Player::new(&tuning);
            let mut obstacles = vec![Obstacle::ground(1, 820.0, Vec2::new(30.0, 56.0), &tuning)];
            let mut total = 0;
            let mut was_passed = false;
            for speed in speeds {
                obstacles[0].advance(speed);
                let newly = mark_passed(&player, &mut obstacles);
                total += newly.len();
                if was_passed {
                    prop_assert!(obstacles[0].passed);
                }
                if !newly.is_empty() {
                    prop_assert!(obstacles[0].right() < player.rect().left());
                }
                was_passed = obstacles[0].passed;
            }
            prop_assert!(total <= 1);
        }
    }
}
