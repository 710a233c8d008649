//! Player physics: gravity, ground clamp, jump
//!
//! Gravity is applied per tick, not per second.

use super::entity::Player;
use crate::tuning::Tuning;

/// Advance the player one tick under gravity.
///
/// `v' = v + g`, `y' = y + v'`; landing at or below the ground line clamps to it
/// and zeroes velocity.
pub fn step_player(player: &mut Player, tuning: &Tuning) {
    let ground = tuning.world.ground_line();

    player.vel_y += tuning.physics.gravity;
    player.pos.y += player.vel_y;

    if player.pos.y >= ground {
        player.pos.y = ground;
        player.vel_y = 0.0;
        player.on_ground = true;
    } else {
        player.on_ground = false;
    }
}

/// Start a jump if standing on the ground. Returns whether the jump happened.
///
/// Requests while airborne are dropped.
pub fn try_jump(player: &mut Player, tuning: &Tuning) -> bool {
    if !player.on_ground {
        return false;
    }
    player.vel_y = tuning.physics.jump_velocity;
    player.on_ground = false;
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_standing_stays_clamped() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        for _ in 0..10 {
            step_player(&mut player, &tuning);
            assert_eq!(player.pos.y, 320.0);
            assert_eq!(player.vel_y, 0.0);
            assert!(player.on_ground);
        }
    }

    #[test]
    fn test_jump_from_ground() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);

        assert!(try_jump(&mut player, &tuning));
        assert_eq!(player.vel_y, tuning.physics.jump_velocity);
        assert!(!player.on_ground);

        step_player(&mut player, &tuning);
        let expected_vel = tuning.physics.jump_velocity + tuning.physics.gravity;
        assert!((player.vel_y - expected_vel).abs() < 1e-5);
        assert!((player.pos.y - (320.0 + expected_vel)).abs() < 1e-4);
        assert!(!player.on_ground);
    }

    #[test]
    fn test_jump_while_airborne_is_ignored() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        try_jump(&mut player, &tuning);
        step_player(&mut player, &tuning);

        let before = player.clone();
        assert!(!try_jump(&mut player, &tuning));
        assert_eq!(player.vel_y, before.vel_y);
        assert_eq!(player.pos, before.pos);
    }

    #[test]
    fn test_full_jump_lands() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        try_jump(&mut player, &tuning);

        let mut apex = player.pos.y;
        let mut ticks = 0;
        loop {
            step_player(&mut player, &tuning);
            apex = apex.min(player.pos.y);
            ticks += 1;
            if player.on_ground || ticks > 200 {
                break;
            }
        }
        assert!(player.on_ground);
        assert_eq!(player.pos.y, 320.0);
        assert_eq!(player.vel_y, 0.0);
        // 15 / 0.8 ≈ 19 ticks up, about the same down
        assert!((30..45).contains(&ticks));
        assert!(apex < 320.0 - 100.0);
    }

    #[test]
    fn test_falls_from_start_height() {
        let tuning = Tuning::hugo();
        let mut player = Player::new(&tuning);
        assert!(!try_jump(&mut player, &tuning));
        for _ in 0..60 {
            step_player(&mut player, &tuning);
        }
        assert!(player.on_ground);
        assert_eq!(player.pos.y, tuning.world.ground_line());
    }

    proptest! {
        #[test]
        fn never_below_ground(
            y in 0.0f32..320.0,
            vel in -30.0f32..30.0,
            jumps in proptest::collection::vec(any::<bool>(), 1..120),
        ) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.pos.y = y;
            player.vel_y = vel;
            player.on_ground = false;

            for jump in jumps {
                if jump {
                    try_jump(&mut player, &tuning);
                }
                step_player(&mut player, &tuning);
                prop_assert!(player.pos.y <= 320.0);
                if player.pos.y == 320.0 {
                    prop_assert_eq!(player.vel_y, 0.0);
                    prop_assert!(player.on_ground);
                }
            }
        }

        #[test]
        fn jump_only_from_ground(on_ground in any::<bool>(), vel in -20.0f32..20.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.on_ground = on_ground;
            player.vel_y = vel;

            let jumped = try_jump(&mut player, &tuning);
            prop_assert_eq!(jumped, on_ground);
            if jumped {
                prop_assert_eq!(player.vel_y, tuning.physics.jump_velocity);
            } else {
                prop_assert_eq!(player.vel_y, vel);
            }
            prop_assert!(!player.on_ground);
        }
    }
}
