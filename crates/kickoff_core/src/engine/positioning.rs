//! Tactical positioning: role zone/lane grid with an elastic pull toward the ball.
//!
//! ## 흐름
//! 1. role → (zone, lane) 셀 중심 (홈 기준 좌표)
//! 2. 팀 전술 보정 (mentality, defensive line, width)
//! 3. 원정팀은 양 축 미러링
//! 4. 공 방향으로 고무줄 당김 (x 30%, y 20%) 후 경기장 안으로 clamp
//! 5. 골키퍼는 격자 대신 공과 골문 중앙을 잇는 선 위에 선다
//!
//! No pathfinding: compact ball-side shape falls out of the pull.

use super::formation::{cell_center, to_side_frame};
use super::physics_constants::{field, goal, grid};
use super::steering::{length, normalize};
use crate::models::{Player, Role, TeamSide, TeamTactics, Width};

/// Keeper stays inside this depth from its own goal line.
const KEEPER_MAX_DEPTH_M: f32 = field::PENALTY_AREA_DEPTH_M;
const KEEPER_HALF_WIDTH_M: f32 = 20.16;

// 골키퍼 각도 좁히기: 공까지 거리의 15%, 1~6 m
const KEEPER_DEPTH_RATIO: f32 = 0.15;
const KEEPER_MIN_DEPTH_M: f32 = 1.0;
const KEEPER_MAX_SET_DEPTH_M: f32 = 6.0;

fn width_scale(width: Width) -> f32 {
    match width {
        Width::Narrow => grid::NARROW_WIDTH_SCALE,
        Width::Normal => 1.0,
        Width::Wide => grid::WIDE_WIDTH_SCALE,
    }
}

/// Shape anchor before the elastic pull, already in the side's frame.
pub fn shape_anchor(role: Role, lane: u8, side: TeamSide, tactics: &TeamTactics) -> (f32, f32) {
    let (zone, _) = role.grid_cell();
    let (mut x, mut y) = cell_center(zone, lane);

    if !role.is_goalkeeper() {
        x += tactics.mentality.sign() * grid::MENTALITY_SHIFT_M;
        y = field::CENTER_Y + (y - field::CENTER_Y) * width_scale(tactics.width);
    }
    if role.is_defender() {
        x += tactics.defensive_line.sign() * grid::LINE_SHIFT_M;
    }
    to_side_frame((x, y), side)
}

/// Where this role should stand given the ball position.
pub fn tactical_target(
    role: Role,
    lane: u8,
    side: TeamSide,
    tactics: &TeamTactics,
    ball_pos: (f32, f32),
) -> (f32, f32) {
    if role.is_goalkeeper() {
        return keeper_target(side, ball_pos);
    }
    let (bx, by) = shape_anchor(role, lane, side, tactics);
    let x = bx + (ball_pos.0 - bx) * grid::PULL_X;
    let y = by + (ball_pos.1 - by) * grid::PULL_Y;
    field::clamp((x, y))
}

/// Keeper sets up on the line from goal centre to the ball, coming off its
/// line as the ball gets further away.
pub fn keeper_target(side: TeamSide, ball_pos: (f32, f32)) -> (f32, f32) {
    let goal_x = goal::attack_goal_x(!side.attacks_right());
    let to_ball = (ball_pos.0 - goal_x, ball_pos.1 - field::CENTER_Y);
    let mut dir = normalize(to_ball);
    if dir == (0.0, 0.0) {
        dir = (side.direction(), 0.0);
    }
    let depth = (length(to_ball) * KEEPER_DEPTH_RATIO).clamp(KEEPER_MIN_DEPTH_M, KEEPER_MAX_SET_DEPTH_M);
    let spot = field::clamp((goal_x + dir.0 * depth, field::CENTER_Y + dir.1 * depth));
    keeper_box(side, spot)
}

/// Convenience wrapper for an agent.
pub fn target_for(player: &Player, tactics: &TeamTactics, ball_pos: (f32, f32)) -> (f32, f32) {
    tactical_target(player.role, player.lane, player.side, tactics, ball_pos)
}

fn keeper_box(side: TeamSide, (x, y): (f32, f32)) -> (f32, f32) {
    let x = if side.attacks_right() {
        x.min(KEEPER_MAX_DEPTH_M)
    } else {
        x.max(field::LENGTH_M - KEEPER_MAX_DEPTH_M)
    };
    let y = y.clamp(field::CENTER_Y - KEEPER_HALF_WIDTH_M, field::CENTER_Y + KEEPER_HALF_WIDTH_M);
    (x, y)
}
