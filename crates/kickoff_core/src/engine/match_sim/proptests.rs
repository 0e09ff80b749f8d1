//! Invariants checked over random seeds and stretches of play.

use proptest::prelude::*;

use super::*;
use crate::engine::timestep::TICK_DT;

fn run_checked(seed: u64, ticks: usize) -> MatchState {
    let mut state = MatchState::with_seed(seed).unwrap();
    let mut last_score = state.score;

    for _ in 0..ticks {
        state = advance(&state, TICK_DT);

        for p in &state.players {
            assert!(field::contains(p.position), "{} left the pitch: {:?}", p.id, p.position);
        }
        assert!(field::contains(state.ball.position), "ball left the pitch: {:?}", state.ball.position);

        if let Some(owner) = state.ball.owner {
            assert!(state.players.iter().filter(|p| p.id == owner).count() <= 1);
        }

        assert!(state.score.home >= last_score.home);
        assert!(state.score.away >= last_score.away);
        last_score = state.score;

        let possession = state.stats.home.possession_time + state.stats.away.possession_time;
        assert!(possession <= state.clock + 1e-3, "possession {} > clock {}", possession, state.clock);
    }
    state
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_invariants_hold_during_play(seed in any::<u64>()) {
        run_checked(seed, 1200);
    }

    #[test]
    fn prop_same_seed_same_state(seed in any::<u64>()) {
        let a = run_checked(seed, 400);
        let b = run_checked(seed, 400);
        prop_assert_eq!(a.state_digest(), b.state_digest());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn prop_mental_state_stays_clamped(seed in any::<u64>()) {
        let state = run_checked(seed, 600);
        for p in &state.players {
            prop_assert!((0.0..=100.0).contains(&p.mental.fatigue));
            prop_assert!((0.0..=100.0).contains(&p.mental.morale));
        }
    }
}

#[test]
fn test_different_seeds_diverge() {
    let a = run_checked(1, 400);
    let b = run_checked(2, 400);
    assert_ne!(a.state_digest(), b.state_digest());
}
