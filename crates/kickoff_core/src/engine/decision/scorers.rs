//! Action scorers
//!
//! Each scorer returns a base score (weighted attribute sum × role bias ×
//! situation modifiers) plus the target the action would move or kick toward.
//! Fatigue and noise are applied afterwards in one place.

use super::{Candidate, DecisionContext};
use crate::engine::kicking::pass_power;
use crate::engine::physics_constants::{field, goal};
use crate::engine::positioning::target_for;
use crate::engine::steering::distance;
use crate::models::{Mentality, Player, PlayerAction, Pressing};

#[inline]
fn a(v: u8) -> f32 {
    v as f32
}

/// Attacking actions lean on mentality.
fn mentality_mod(m: Mentality) -> f32 {
    match m {
        Mentality::Defensive => 0.9,
        Mentality::Balanced => 1.0,
        Mentality::Attacking => 1.1,
    }
}

fn pressing_mod(p: Pressing) -> f32 {
    match p {
        Pressing::Low => 0.8,
        Pressing::Medium => 1.0,
        Pressing::High => 1.2,
    }
}

fn attacking_goal_center(p: &Player) -> (f32, f32) {
    (goal::attack_goal_x(p.side.attacks_right()), field::CENTER_Y)
}

/// Best receiver within [min, max] by forward progress. Ties keep roster order.
fn best_receiver<'a>(ctx: &DecisionContext<'a>, min: f32, max: f32) -> Option<&'a Player> {
    let me = ctx.player;
    let dir = me.side.direction();
    let mut best: Option<(&Player, f32)> = None;
    for mate in ctx.players.iter().filter(|p| p.side == me.side && p.id != me.id) {
        let d = distance(me.position, mate.position);
        if d < min || d > max {
            continue;
        }
        let progress = (mate.position.0 - me.position.0) * dir;
        if best.map_or(true, |(_, b)| progress > b) {
            best = Some((mate, progress));
        }
    }
    best.map(|(p, _)| p)
}

fn lead(receiver: &Player) -> (f32, f32) {
    field::clamp((
        receiver.position.0 + receiver.velocity.0 * 0.3,
        receiver.position.1 + receiver.velocity.1 * 0.3,
    ))
}

pub fn score_pass_short(ctx: &DecisionContext) -> Option<Candidate> {
    let p = ctx.player;
    let cfg = ctx.cfg;
    let receiver = best_receiver(ctx, cfg.short_pass_min, cfg.short_pass_max)?;
    let attrs = &p.attributes;
    let base = (a(attrs.passing) * 0.4 + a(attrs.technique) * 0.2 + a(attrs.vision) * 0.15)
        * (p.role.bias().creative / 10.0);
    let target = lead(receiver);
    Some(Candidate {
        action: PlayerAction::ShortPass,
        base,
        target: Some(target),
        receiver: Some(receiver.id),
        power: Some(pass_power(distance(p.position, target), cfg.short_pass_max)),
    })
}

pub fn score_pass_long(ctx: &DecisionContext) -> Option<Candidate> {
    let p = ctx.player;
    let cfg = ctx.cfg;
    let receiver = best_receiver(ctx, cfg.short_pass_max, cfg.long_pass_max)?;
    let attrs = &p.attributes;
    // Riskier
    let base = (a(attrs.passing) * 0.3 + a(attrs.vision) * 0.3 + a(attrs.technique) * 0.2)
        * 0.8
        * (p.role.bias().creative / 10.0);
    let target = lead(receiver);
    Some(Candidate {
        action: PlayerAction::LongPass,
        base,
        target: Some(target),
        receiver: Some(receiver.id),
        power: Some(pass_power(distance(p.position, target), cfg.long_pass_max)),
    })
}

pub fn score_dribble(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let base = (a(attrs.dribbling) * 0.4 + a(attrs.pace) * 0.2 + a(attrs.agility) * 0.2)
        * (p.role.bias().risk / 10.0)
        * mentality_mod(ctx.tactics.mentality);
    // 골라인까지 몰고 들어가지 않는다
    let x = (p.position.0 + p.side.direction() * ctx.cfg.dribble_step)
        .clamp(field::GOAL_AREA_DEPTH_M, field::LENGTH_M - field::GOAL_AREA_DEPTH_M);
    let target = field::clamp((x, p.position.1));
    Candidate {
        action: PlayerAction::Dribble,
        base,
        target: Some(target),
        receiver: None,
        power: None,
    }
}

/// 1.0 inside the full-score radius, linear down to the floor at max range.
pub fn shot_distance_factor(dist: f32, full: f32, max: f32, floor: f32) -> f32 {
    if dist <= full {
        1.0
    } else if dist >= max || max <= full {
        floor
    } else {
        1.0 - (1.0 - floor) * (dist - full) / (max - full)
    }
}

/// Space to shoot: nearest outfield opponent distance over the radius,
/// clamped to [floor, 1]. Keepers don't count.
pub fn shot_pressure_factor(ctx: &DecisionContext) -> f32 {
    let p = ctx.player;
    let radius = ctx.cfg.shot_pressure_radius;
    if radius <= 0.0 {
        return 1.0;
    }
    let nearest = ctx
        .players
        .iter()
        .filter(|q| q.side != p.side && !q.role.is_goalkeeper())
        .map(|q| distance(p.position, q.position))
        .fold(f32::INFINITY, f32::min);
    (nearest / radius).clamp(ctx.cfg.shot_pressure_floor.min(1.0), 1.0)
}

pub fn score_shoot(ctx: &DecisionContext) -> Option<Candidate> {
    let p = ctx.player;
    let cfg = ctx.cfg;
    let goal_center = attacking_goal_center(p);
    let dist = distance(p.position, goal_center);
    if dist > cfg.shoot_max_distance {
        return None;
    }
    let attrs = &p.attributes;
    let quality = shot_distance_factor(dist, cfg.shoot_full_score_distance, cfg.shoot_max_distance, cfg.shoot_min_factor)
        * shot_pressure_factor(ctx);
    let base = (a(attrs.finishing) * 0.4 + a(attrs.composure) * 0.3 + a(attrs.technique) * 0.2)
        * (p.role.bias().risk / 10.0)
        * mentality_mod(ctx.tactics.mentality)
        * cfg.shot_weight
        * quality
        * quality;

    // Aim inside the post away from the keeper
    let keeper_y = ctx
        .players
        .iter()
        .find(|q| q.side != p.side && q.role.is_goalkeeper())
        .map(|k| k.position.1)
        .unwrap_or(field::CENTER_Y);
    let aim_offset = goal::HALF_WIDTH_M * cfg.shot_aim_fraction;
    let aim_y = if keeper_y >= field::CENTER_Y {
        field::CENTER_Y - aim_offset
    } else {
        field::CENTER_Y + aim_offset
    };

    Some(Candidate {
        action: PlayerAction::Shoot,
        base,
        target: Some((goal_center.0, aim_y)),
        receiver: None,
        power: Some(1.0),
    })
}

pub fn score_hold(ctx: &DecisionContext) -> Candidate {
    let attrs = &ctx.player.attributes;
    let base = a(attrs.strength) * 0.4 + a(attrs.balance) * 0.3 + a(attrs.technique) * 0.2;
    Candidate {
        action: PlayerAction::Hold,
        base,
        target: None,
        receiver: None,
        power: None,
    }
}

pub fn score_tackle(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let base = (a(attrs.tackling) * 0.4 + a(attrs.strength) * 0.2 + a(attrs.aggression) * 0.2)
        * (p.role.bias().defensive / 10.0);
    Candidate {
        action: PlayerAction::Tackle,
        base,
        target: Some(ctx.ball.position),
        receiver: None,
        power: None,
    }
}

pub fn score_press(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let base = (a(attrs.work_rate) * 0.3 + a(attrs.stamina) * 0.2 + a(attrs.aggression) * 0.2)
        * (p.role.bias().defensive / 10.0)
        * pressing_mod(ctx.tactics.pressing);
    Candidate {
        action: PlayerAction::Press,
        base,
        target: Some(ctx.ball.position),
        receiver: None,
        power: None,
    }
}

/// Contain: hold a spot goal-side of the ball.
pub fn score_contain(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let base = (a(attrs.positioning) * 0.3 + a(attrs.concentration) * 0.3 + a(attrs.decisions) * 0.2)
        * (p.role.bias().defensive / 10.0);
    let own_goal = (goal::attack_goal_x(!p.side.attacks_right()), field::CENTER_Y);
    let ball = ctx.ball.position;
    let to_goal = (own_goal.0 - ball.0, own_goal.1 - ball.1);
    let len = (to_goal.0 * to_goal.0 + to_goal.1 * to_goal.1).sqrt().max(0.001);
    let step = CONTAIN_GAP_M.min(len);
    let target = field::clamp((ball.0 + to_goal.0 / len * step, ball.1 + to_goal.1 / len * step));
    Candidate {
        action: PlayerAction::Contain,
        base,
        target: Some(target),
        receiver: None,
        power: None,
    }
}

const CONTAIN_GAP_M: f32 = 3.0;

/// Intercept: step into the lane between the ball and the nearest attacker.
pub fn score_intercept(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let base = (a(attrs.anticipation) * 0.4 + a(attrs.acceleration) * 0.2 + a(attrs.decisions) * 0.2)
        * (p.role.bias().defensive / 10.0);
    let ball = ctx.ball.position;
    let owner = ctx.ball.owner;
    let lane_end = ctx
        .players
        .iter()
        .filter(|q| q.side != p.side && Some(q.id) != owner)
        .min_by(|x, y| distance(p.position, x.position).total_cmp(&distance(p.position, y.position)))
        .map(|q| q.position);
    let target = match lane_end {
        Some(end) => ((ball.0 + end.0) / 2.0, (ball.1 + end.1) / 2.0),
        None => ball,
    };
    Candidate {
        action: PlayerAction::Intercept,
        base,
        target: Some(target),
        receiver: None,
        power: None,
    }
}

/// Loose ball chase; closer agents want it more.
pub fn score_chase(ctx: &DecisionContext) -> Candidate {
    let p = ctx.player;
    let attrs = &p.attributes;
    let dist = distance(p.position, ctx.ball.position);
    let proximity = (1.5 - dist / 20.0).clamp(0.1, 1.5);
    let base = (a(attrs.acceleration) * 0.3 + a(attrs.pace) * 0.3 + a(attrs.determination) * 0.2)
        * (p.role.bias().roaming / 10.0)
        * proximity;
    Candidate {
        action: PlayerAction::Chase,
        base,
        target: Some(ctx.ball.position),
        receiver: None,
        power: None,
    }
}

pub fn score_positioning(ctx: &DecisionContext) -> Candidate {
    let attrs = &ctx.player.attributes;
    let base = a(attrs.positioning) * 0.4 + a(attrs.anticipation) * 0.3 + a(attrs.decisions) * 0.2;
    Candidate {
        action: PlayerAction::Move,
        base,
        target: Some(target_for(ctx.player, ctx.tactics, ctx.ball.position)),
        receiver: None,
        power: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::config::DecisionConfig;
    use crate::engine::test_fixtures::two_teams;
    use crate::models::{Ball, TeamSide, TeamTactics};

    fn striker_at(players: &mut [Player], pos: (f32, f32)) -> usize {
        let idx = players.iter().position(|p| p.side == TeamSide::Home && p.role.is_forward()).unwrap();
        players[idx].position = pos;
        idx
    }

    #[test]
    fn test_shot_distance_factor() {
        assert_eq!(shot_distance_factor(10.0, 18.0, 30.0, 0.2), 1.0);
        assert!((shot_distance_factor(24.0, 18.0, 30.0, 0.2) - 0.6).abs() < 1e-5);
        assert_eq!(shot_distance_factor(40.0, 18.0, 30.0, 0.2), 0.2);
    }

    #[test]
    fn test_pressure_shrinks_shot_score() {
        let mut players = two_teams();
        let me = striker_at(&mut players, (97.0, 34.0));
        // 공격수 주변을 비운다
        for p in players.iter_mut().filter(|p| p.side == TeamSide::Away && !p.role.is_goalkeeper()) {
            p.position = (60.0, p.position.1);
        }
        let mut ball = Ball::default();
        ball.give_to(players[me].id, TeamSide::Home);
        let tactics = TeamTactics::default();
        let cfg = DecisionConfig::default();

        let ctx = DecisionContext {
            player: &players[me],
            players: &players,
            ball: &ball,
            tactics: &tactics,
            cfg: &cfg,
        };
        assert_eq!(shot_pressure_factor(&ctx), 1.0);
        let open = score_shoot(&ctx).unwrap().base;

        let marker = players.iter().position(|p| p.side == TeamSide::Away && p.role.is_defender()).unwrap();
        players[marker].position = (98.0, 34.0);
        let ctx = DecisionContext {
            player: &players[me],
            players: &players,
            ball: &ball,
            tactics: &tactics,
            cfg: &cfg,
        };
        assert!((shot_pressure_factor(&ctx) - 0.125).abs() < 1e-5);
        let marked = score_shoot(&ctx).unwrap().base;
        assert!(marked < open * 0.05);
    }

    #[test]
    fn test_shot_aims_inside_far_post() {
        let mut players = two_teams();
        let me = striker_at(&mut players, (95.0, 30.0));
        let keeper = players.iter().position(|p| p.side == TeamSide::Away && p.role.is_goalkeeper()).unwrap();
        players[keeper].position = (104.0, 33.0);
        let mut ball = Ball::default();
        ball.give_to(players[me].id, TeamSide::Home);
        let tactics = TeamTactics::default();
        let cfg = DecisionConfig::default();
        let ctx = DecisionContext {
            player: &players[me],
            players: &players,
            ball: &ball,
            tactics: &tactics,
            cfg: &cfg,
        };
        let (x, y) = score_shoot(&ctx).unwrap().target.unwrap();
        assert_eq!(x, field::LENGTH_M);
        assert!(y > field::CENTER_Y && goal::within_mouth(y));
    }

    #[test]
    fn test_dribble_stops_short_of_goal_line() {
        let mut players = two_teams();
        let me = striker_at(&mut players, (99.0, 34.0));
        let mut ball = Ball::default();
        ball.give_to(players[me].id, TeamSide::Home);
        let tactics = TeamTactics::default();
        let cfg = DecisionConfig::default();
        let ctx = DecisionContext {
            player: &players[me],
            players: &players,
            ball: &ball,
            tactics: &tactics,
            cfg: &cfg,
        };
        let target = score_dribble(&ctx).target.unwrap();
        assert_eq!(target.0, field::LENGTH_M - field::GOAL_AREA_DEPTH_M);
    }
}
