//! Possession claims
//!
//! Loose ball: every agent inside its reach radius (keepers reach further)
//! rolls `U(0, range) + first_touch × w (+ keeper bonus)` against a difficulty
//! proportional to ball speed. The nearest successful claimant takes it.
//! If everyone fails, the nearest one deflects the ball.
//!
//! Owned ball: opponents in a `Tackle` action contest the carrier, who rolls
//! with an extra owner bonus.

use super::MatchState;
use crate::engine::config::ResolutionConfig;
use crate::engine::steering::distance;
use crate::models::{EventType, LastKick, LogKind, PlayerAction, TeamSide};

impl MatchState {
    fn reach_of(&self, idx: usize) -> f32 {
        let res = &self.config.resolution;
        if self.players[idx].role.is_goalkeeper() {
            res.gk_reach
        } else {
            res.reach
        }
    }

    fn control_roll(&mut self, idx: usize) -> f32 {
        let res = &self.config.resolution;
        let p = &self.players[idx];
        let keeper = if p.role.is_goalkeeper() { res.gk_bonus } else { 0.0 };
        let base = p.attributes.first_touch as f32 * res.first_touch_weight + keeper;
        base + self.rng.range(0.0, res.roll_range)
    }

    pub(crate) fn resolve_possession(&mut self) {
        match self.ball.owner {
            None => self.resolve_loose_ball(),
            Some(_) => self.resolve_challenges(),
        }
    }

    fn resolve_loose_ball(&mut self) {
        let ball_pos = self.ball.position;
        let difficulty = self.ball.speed() * self.config.resolution.difficulty_per_speed;

        let mut winner: Option<(usize, f32)> = None;
        let mut nearest_fail: Option<(usize, f32)> = None;
        let mut failed = Vec::new();

        for i in 0..self.players.len() {
            if self.players[i].claim_cooldown > 0.0 {
                continue;
            }
            let d = distance(self.players[i].position, ball_pos);
            if d > self.reach_of(i) {
                continue;
            }
            if self.control_roll(i) > difficulty {
                if winner.map_or(true, |(_, bd)| d < bd) {
                    winner = Some((i, d));
                }
            } else {
                failed.push(i);
                if nearest_fail.map_or(true, |(_, bd)| d < bd) {
                    nearest_fail = Some((i, d));
                }
            }
        }

        if let Some((idx, _)) = winner {
            self.claim(idx);
            return;
        }
        let Some((idx, _)) = nearest_fail else {
            return;
        };

        let res = self.config.resolution.clone();
        for &i in &failed {
            let p = &mut self.players[i];
            p.claim_cooldown = res.deflect_cooldown;
            p.action_timer = p.action_timer.max(res.deflect_cooldown);
        }
        self.deflect(idx, &res);
    }

    /// Failed touch. Keepers parry hard and get a save credit.
    fn deflect(&mut self, idx: usize, res: &ResolutionConfig) {
        let side = self.players[idx].side;
        let keeper = self.players[idx].role.is_goalkeeper();
        let shot_from_opponent = matches!(self.ball.last_kick, LastKick::Shot { .. })
            && self.ball.last_touch == Some(side.opponent());

        let (vx, vy) = self.ball.velocity;
        if keeper {
            let spread = res.gk_deflect_spread;
            self.ball.velocity = (
                vx * 0.5 + self.rng.symmetric(spread),
                vy * 0.5 + self.rng.symmetric(spread),
            );
        } else {
            let spread = res.deflect_spread;
            self.ball.velocity = (vx + self.rng.symmetric(spread), vy + self.rng.symmetric(spread));
        }
        self.ball.last_touch = Some(side);
        self.ball.settled = false;

        if keeper && shot_from_opponent {
            self.credit_save(idx);
        }
        // 굴절 이후의 회수는 원래 킥과 무관
        self.ball.last_kick = LastKick::None;
        log::trace!("deflection by {}", self.players[idx].id);
    }

    fn credit_save(&mut self, idx: usize) {
        let side = self.players[idx].side;
        let id = self.players[idx].id;
        self.players[idx].stats.saves += 1;
        self.stats.get_mut(side).saves += 1;
        let ev = self.event(EventType::Save).with_side(side).with_player(Some(id));
        self.events.push(ev);
        let name = self.players[idx].name.clone();
        self.push_log(LogKind::Chance, format!("save by {} ({})", name, side));
    }

    /// Loose-ball claim with pass / interception / save crediting.
    fn claim(&mut self, idx: usize) {
        let side = self.players[idx].side;
        let id = self.players[idx].id;
        let last_kick = self.ball.last_kick;

        match self.ball.last_touch {
            Some(prev) if prev == side => {
                if let LastKick::Pass { passer } = last_kick {
                    let same_side = self.player_index(passer).map(|pi| self.players[pi].side) == Some(side);
                    if passer != id && same_side {
                        if let Some(pi) = self.player_index(passer) {
                            self.players[pi].stats.passes_completed += 1;
                        }
                        self.stats.get_mut(side).passes_completed += 1;
                        self.ball.pending_assist = Some(passer);
                    }
                }
            }
            Some(_) => {
                self.ball.pending_assist = None;
                let keeper = self.players[idx].role.is_goalkeeper();
                if keeper && matches!(last_kick, LastKick::Shot { .. }) {
                    self.credit_save(idx);
                } else if last_kick != LastKick::None {
                    self.players[idx].stats.interceptions += 1;
                    self.stats.get_mut(side).interceptions += 1;
                    let ev = self.event(EventType::Interception).with_side(side).with_player(Some(id));
                    self.events.push(ev);
                }
            }
            None => {}
        }

        self.ball.give_to(id, side);
        log::trace!("{} ({}) claims the ball", id, side);
    }

    /// Opponents in a tackle contest the carrier.
    fn resolve_challenges(&mut self) {
        let Some(owner_idx) = self.ball.owner.and_then(|id| self.player_index(id)) else {
            return;
        };
        let owner_side = self.players[owner_idx].side;
        let owner_pos = self.players[owner_idx].position;
        let ball_pos = self.ball.position;

        let challengers: Vec<usize> = (0..self.players.len())
            .filter(|&i| {
                let p = &self.players[i];
                p.side != owner_side
                    && p.action == PlayerAction::Tackle
                    && p.claim_cooldown <= 0.0
                    && distance(p.position, ball_pos) <= self.reach_of(i)
            })
            .collect();
        if challengers.is_empty() {
            return;
        }

        let difficulty = self.ball.speed() * self.config.resolution.difficulty_per_speed;
        let owner_roll = self.control_roll(owner_idx) + self.config.resolution.owner_bonus;
        let tackling_weight = self.config.resolution.tackling_weight;
        let cooldown = self.config.resolution.deflect_cooldown;

        let mut winner: Option<(usize, f32, f32)> = None;
        for &i in &challengers {
            let roll = self.control_roll(i) + self.players[i].attributes.tackling as f32 * tackling_weight;
            self.players[i].stats.tackles_attempted += 1;
            if roll <= owner_roll || roll <= difficulty {
                self.players[i].claim_cooldown = cooldown;
                continue;
            }
            let d = distance(self.players[i].position, owner_pos);
            let better = match winner {
                None => true,
                Some((_, best_roll, best_d)) => roll > best_roll || (roll == best_roll && d < best_d),
            };
            if better {
                winner = Some((i, roll, d));
            }
        }

        let Some((idx, _, _)) = winner else {
            return;
        };
        let side: TeamSide = self.players[idx].side;
        let id = self.players[idx].id;
        let loser = self.players[owner_idx].id;

        self.players[idx].stats.tackles_won += 1;
        self.stats.get_mut(side).tackles += 1;
        self.players[owner_idx].claim_cooldown = cooldown;
        self.ball.pending_assist = None;
        self.ball.give_to(id, side);

        let ev = self
            .event(EventType::Tackle)
            .with_side(side)
            .with_player(Some(id))
            .with_secondary(Some(loser));
        self.events.push(ev);
        log::trace!("{} tackles {}", id, loser);
    }
}
