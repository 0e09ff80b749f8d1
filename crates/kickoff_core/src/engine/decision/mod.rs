//! Decision Engine
//!
//! Single-ply utility scoring. For one agent whose action timer expired:
//! 1. build the candidate set for the situation (owner / opponent owns / loose)
//! 2. score = base × fatigue multiplier × (1 ± noise)
//! 3. stable sort descending, keep the top k, pick one weighted by score
//!
//! No candidates → explicit `Idle`.
//!
//! Keepers near their goal chase loose balls and may smother a carrier in
//! tackle range; they never press, contain or intercept.

pub mod scorers;

use serde::{Deserialize, Serialize};

use super::config::DecisionConfig;
use super::physics_constants::{field, goal};
use super::sim_rng::SimRng;
use super::sort_keys::compare_score_desc_stable;
use super::steering::distance;
use crate::models::{Ball, Player, PlayerAction, PlayerId, TeamTactics};

/// Everything a scorer may read. Built fresh per decision.
#[derive(Debug, Clone, Copy)]
pub struct DecisionContext<'a> {
    pub player: &'a Player,
    pub players: &'a [Player],
    pub ball: &'a Ball,
    pub tactics: &'a TeamTactics,
    pub cfg: &'a DecisionConfig,
}

/// Unscored candidate produced by a scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub action: PlayerAction,
    pub base: f32,
    pub target: Option<(f32, f32)>,
    pub receiver: Option<PlayerId>,
    pub power: Option<f32>,
}

/// Selected action.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActionChoice {
    pub action: PlayerAction,
    pub score: f32,
    pub target: Option<(f32, f32)>,
    pub receiver: Option<PlayerId>,
    pub power: Option<f32>,
}

impl ActionChoice {
    pub fn idle() -> Self {
        Self {
            action: PlayerAction::Idle,
            score: 0.0,
            target: None,
            receiver: None,
            power: None,
        }
    }
}

/// Situation the agent is deciding in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Situation {
    InPossession,
    OpponentHasBall,
    TeammateHasBall,
    LooseBall,
}

pub fn situation(ctx: &DecisionContext) -> Situation {
    match ctx.ball.owner {
        Some(id) if id == ctx.player.id => Situation::InPossession,
        Some(id) => match ctx.players.iter().find(|p| p.id == id) {
            Some(owner) if owner.side == ctx.player.side => Situation::TeammateHasBall,
            Some(_) => Situation::OpponentHasBall,
            // dangling owner id reads as a loose ball
            None => Situation::LooseBall,
        },
        None => Situation::LooseBall,
    }
}

/// Keepers only leave their shape when the ball is near their own goal.
fn keeper_engaged(ctx: &DecisionContext) -> bool {
    let own_goal = (goal::attack_goal_x(!ctx.player.side.attacks_right()), field::CENTER_Y);
    distance(ctx.ball.position, own_goal) <= ctx.cfg.keeper_engage_distance
}

/// Unscored candidates for the current situation.
pub fn candidates(ctx: &DecisionContext) -> Vec<Candidate> {
    use scorers::*;

    let mut out = Vec::with_capacity(5);
    let situation = situation(ctx);
    let keeper_on_line = ctx.player.role.is_goalkeeper() && !keeper_engaged(ctx);

    match situation {
        Situation::InPossession => {
            out.extend(score_pass_short(ctx));
            out.extend(score_pass_long(ctx));
            out.push(score_dribble(ctx));
            out.extend(score_shoot(ctx));
            out.push(score_hold(ctx));
        }
        // 골키퍼는 상대 소유 공에 태클(덮치기)만 한다
        Situation::OpponentHasBall if ctx.player.role.is_goalkeeper() && !keeper_on_line => {
            if distance(ctx.player.position, ctx.ball.position) < ctx.cfg.tackle_radius {
                out.push(score_tackle(ctx));
            }
            out.push(score_positioning(ctx));
        }
        Situation::OpponentHasBall if !keeper_on_line => {
            let dist = distance(ctx.player.position, ctx.ball.position);
            if dist < ctx.cfg.tackle_radius {
                out.push(score_tackle(ctx));
            }
            if dist < ctx.cfg.press_radius {
                out.push(score_press(ctx));
                out.push(score_contain(ctx));
            }
            out.push(score_intercept(ctx));
            out.push(score_positioning(ctx));
        }
        Situation::LooseBall if !keeper_on_line => {
            out.push(score_chase(ctx));
            out.push(score_positioning(ctx));
        }
        Situation::OpponentHasBall | Situation::LooseBall | Situation::TeammateHasBall => {
            out.push(score_positioning(ctx));
        }
    }
    out
}

/// Fatigue multiplier, clamped so tired agents still act.
#[inline]
pub fn fatigue_multiplier(player: &Player, cfg: &DecisionConfig) -> f32 {
    (player.mental.fatigue / 100.0).clamp(cfg.fatigue_floor, 1.0)
}

/// Apply fatigue and noise to each candidate.
pub fn score_candidates(
    player: &Player,
    cands: &[Candidate],
    cfg: &DecisionConfig,
    rng: &mut SimRng,
) -> Vec<ActionChoice> {
    let fatigue = fatigue_multiplier(player, cfg);
    cands
        .iter()
        .map(|c| {
            let noise = 1.0 + rng.symmetric(cfg.noise);
            ActionChoice {
                action: c.action,
                score: (c.base * fatigue * noise).max(0.0),
                target: c.target,
                receiver: c.receiver,
                power: c.power,
            }
        })
        .collect()
}

/// Sort, keep the top k, sample proportionally to score.
pub fn select(scored: Vec<ActionChoice>, top_k: usize, rng: &mut SimRng) -> ActionChoice {
    if scored.is_empty() {
        return ActionChoice::idle();
    }
    let mut indexed: Vec<(usize, ActionChoice)> = scored.into_iter().enumerate().collect();
    indexed.sort_by(|(ia, a), (ib, b)| compare_score_desc_stable(a.score, *ia, b.score, *ib));
    indexed.truncate(top_k.max(1));

    let total: f32 = indexed.iter().map(|(_, c)| c.score).sum();
    if !(total > 0.0) {
        return indexed[0].1;
    }
    let mut r = rng.unit() * total;
    for (_, c) in &indexed {
        r -= c.score;
        if r <= 0.0 {
            return *c;
        }
    }
    indexed[0].1
}

/// Full decision for one agent.
pub fn evaluate_actions(ctx: &DecisionContext, rng: &mut SimRng) -> ActionChoice {
    let cands = candidates(ctx);
    let scored = score_candidates(ctx.player, &cands, ctx.cfg, rng);
    let choice = select(scored, ctx.cfg.top_k, rng);
    log::trace!(
        "decision {} {} -> {} ({:.2})",
        ctx.player.id,
        ctx.player.role,
        choice.action.tag(),
        choice.score
    );
    choice
}
