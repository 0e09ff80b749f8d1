//! Shared builders for unit tests.

use super::formation::{assign_lanes, base_position};
use super::match_sim::MatchState;
use crate::models::{
    Formation, MentalState, Player, PlayerAction, PlayerAttributes, PlayerId, PlayerMatchStats, Role,
    TeamSide,
};

pub fn sample_player(id: u8, side: TeamSide, pos: (f32, f32)) -> Player {
    Player {
        id: PlayerId(id),
        number: id,
        name: format!("P{}", id),
        side,
        role: Role::MC,
        lane: 2,
        position: pos,
        velocity: (0.0, 0.0),
        base_position: pos,
        target: None,
        action: PlayerAction::Idle,
        action_timer: 0.0,
        claim_cooldown: 0.0,
        attributes: PlayerAttributes::default(),
        mental: MentalState::default(),
        stats: PlayerMatchStats::default(),
    }
}

/// Two 4-4-2 sides on their anchors: home slots 0..11, away 11..22.
pub fn two_teams() -> Vec<Player> {
    let roles = Formation::F442.roles();
    let lanes = assign_lanes(&roles);
    let mut out = Vec::with_capacity(22);
    for side in TeamSide::BOTH {
        for (slot, (&role, &lane)) in roles.iter().zip(lanes.iter()).enumerate() {
            let id = side.index() as u8 * 11 + slot as u8 + 1;
            let pos = base_position(role, lane, side);
            let mut p = sample_player(id, side, pos);
            p.number = slot as u8 + 1;
            p.role = role;
            p.lane = lane;
            out.push(p);
        }
    }
    out
}

/// Default match with the home kick-off already taken.
pub fn in_play_state(seed: u64) -> MatchState {
    let mut state = MatchState::with_seed(seed).expect("default setup is valid");
    state.take_kickoff(TeamSide::Home);
    state
}
