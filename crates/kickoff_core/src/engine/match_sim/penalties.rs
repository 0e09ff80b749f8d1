//! Penalty shootout
//!
//! Resolved kick by kick at a fixed interval, home first and alternating.
//! Conversion chance leans on the taker's finishing and composure against
//! the keeper's positioning and anticipation. Best of N, then sudden death.

use super::MatchState;
use crate::engine::match_phase::MatchPeriod;
use crate::engine::physics_constants::{field, goal};
use crate::models::{EventDetails, EventType, LogKind, PenaltyTally, TeamSide};

const PENALTY_SPOT_M: f32 = 11.0;
const BASE_CONVERSION: f32 = 0.75;
const CONVERSION_PER_POINT: f32 = 0.01;
const MIN_CONVERSION: f32 = 0.5;
const MAX_CONVERSION: f32 = 0.92;

/// Winner once the tally can no longer be overturned.
pub fn shootout_winner(t: &PenaltyTally, rounds: u8) -> Option<TeamSide> {
    let (h, a) = (t.home_scored, t.away_scored);
    let (ht, at) = (t.home_taken, t.away_taken);

    if ht <= rounds && at <= rounds {
        let home_left = rounds - ht;
        let away_left = rounds - at;
        if h > a + away_left {
            return Some(TeamSide::Home);
        }
        if a > h + home_left {
            return Some(TeamSide::Away);
        }
        return None;
    }
    // Sudden death: decided only after equal kicks
    if ht == at && h != a {
        return Some(if h > a { TeamSide::Home } else { TeamSide::Away });
    }
    None
}

pub fn conversion_chance(finishing: u8, composure: u8, keeper_positioning: u8, keeper_anticipation: u8) -> f32 {
    let edge = finishing as f32 + composure as f32 - keeper_positioning as f32 - keeper_anticipation as f32;
    (BASE_CONVERSION + CONVERSION_PER_POINT * edge).clamp(MIN_CONVERSION, MAX_CONVERSION)
}

impl MatchState {
    pub(crate) fn prepare_shootout(&mut self) {
        for p in &mut self.players {
            p.reset_to_base();
        }
        let spot = (field::LENGTH_M - PENALTY_SPOT_M, field::CENTER_Y);
        self.ball.place(spot);
        self.penalties = PenaltyTally {
            kick_timer: self.config.rules.penalty_interval,
            ..Default::default()
        };
        self.push_log(LogKind::Period, "penalty shootout".to_string());
    }

    /// Takers in finishing order, roster order breaking ties. Keeper kicks last.
    fn penalty_order(&self, side: TeamSide) -> Vec<usize> {
        let mut order: Vec<usize> = (0..self.players.len()).filter(|&i| self.players[i].side == side).collect();
        order.sort_by(|&a, &b| {
            let pa = &self.players[a];
            let pb = &self.players[b];
            pa.role
                .is_goalkeeper()
                .cmp(&pb.role.is_goalkeeper())
                .then(pb.attributes.finishing.cmp(&pa.attributes.finishing))
                .then(a.cmp(&b))
        });
        order
    }

    pub(crate) fn step_shootout(&mut self, dt: f32) {
        self.penalties.kick_timer -= dt;
        if self.penalties.kick_timer > 0.0 {
            return;
        }
        self.penalties.kick_timer = self.config.rules.penalty_interval;

        let side = self.penalties.next_kicker();
        let order = self.penalty_order(side);
        if order.is_empty() {
            log::warn!("{} has nobody to take a penalty", side);
            self.penalties.winner = Some(side.opponent());
            self.period = MatchPeriod::Finished;
            self.paused = true;
            return;
        }
        let taker = order[self.penalties.taken(side) as usize % order.len()];
        let keeper = self
            .players
            .iter()
            .find(|p| p.side == side.opponent() && p.role.is_goalkeeper());
        let (k_pos, k_ant) = keeper.map_or((10, 10), |k| (k.attributes.positioning, k.attributes.anticipation));

        let t = &self.players[taker];
        let p = conversion_chance(t.attributes.finishing, t.attributes.composure, k_pos, k_ant);
        let taker_id = t.id;
        let taker_name = t.name.clone();

        let converted = self.rng.chance(p);
        self.penalties.record(side, converted);

        let goal_x = goal::attack_goal_x(true);
        self.ball.place((goal_x - PENALTY_SPOT_M, field::CENTER_Y));

        let verdict = if converted { "scores" } else { "misses" };
        self.push_log(
            LogKind::Chance,
            format!(
                "penalty: {} ({}) {}. {}-{}",
                taker_name, side, verdict, self.penalties.home_scored, self.penalties.away_scored
            ),
        );
        let ev = self
            .event(EventType::PenaltyKick)
            .with_side(side)
            .with_player(Some(taker_id))
            .with_details(EventDetails {
                converted: Some(converted),
                ..Default::default()
            });
        self.events.push(ev);

        if let Some(winner) = shootout_winner(&self.penalties, self.config.rules.penalty_rounds) {
            self.penalties.winner = Some(winner);
            self.period = MatchPeriod::Finished;
            self.paused = true;
            let message = format!(
                "{} win {}-{} on penalties",
                self.team_names.get(winner),
                self.penalties.scored(winner),
                self.penalties.scored(winner.opponent())
            );
            log::info!("{}", message);
            self.push_log(LogKind::Period, message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tally(h: u8, ht: u8, a: u8, at: u8) -> PenaltyTally {
        PenaltyTally {
            home_scored: h,
            home_taken: ht,
            away_scored: a,
            away_taken: at,
            ..Default::default()
        }
    }

    #[test]
    fn test_early_decision_when_unreachable() {
        // 3-0 after three each: away can reach at most 2
        assert_eq!(shootout_winner(&tally(3, 3, 0, 3), 5), Some(TeamSide::Home));
        assert_eq!(shootout_winner(&tally(2, 3, 1, 3), 5), None);
    }

    #[test]
    fn test_decided_after_full_rounds() {
        assert_eq!(shootout_winner(&tally(4, 5, 3, 5), 5), Some(TeamSide::Home));
        assert_eq!(shootout_winner(&tally(4, 5, 4, 5), 5), None);
    }

    #[test]
    fn test_away_can_win_early_mid_round() {
        // home 0/4 can reach at most 1, away already has 3
        assert_eq!(shootout_winner(&tally(0, 4, 3, 3), 5), Some(TeamSide::Away));
    }

    #[test]
    fn test_sudden_death_waits_for_equal_kicks() {
        assert_eq!(shootout_winner(&tally(6, 6, 5, 5), 5), None);
        assert_eq!(shootout_winner(&tally(6, 6, 5, 6), 5), Some(TeamSide::Home));
        assert_eq!(shootout_winner(&tally(6, 6, 6, 6), 5), None);
    }

    #[test]
    fn test_conversion_chance_bounds() {
        assert_eq!(conversion_chance(10, 10, 10, 10), 0.75);
        assert_eq!(conversion_chance(20, 20, 1, 1), MAX_CONVERSION);
        assert_eq!(conversion_chance(1, 1, 20, 20), MIN_CONVERSION);
    }
}
