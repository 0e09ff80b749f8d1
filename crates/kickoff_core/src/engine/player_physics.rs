//! Agent locomotion
//!
//! Exponential velocity blend toward a desired velocity, capped at the
//! attribute-derived max speed, position clamped to the pitch every step.

use super::config::PhysicsConfig;
use super::physics_constants::{field, player_inertia};
use super::player_motion_params::{motion_params, PlayerMotionParams};
use super::steering::{arrive, length, pursuit};
use crate::models::{Player, PlayerAction};

/// Integrate one step. Returns (position, velocity).
pub fn update_player_motion(
    pos: (f32, f32),
    vel: (f32, f32),
    desired_vel: (f32, f32),
    dt: f32,
    params: &PlayerMotionParams,
) -> ((f32, f32), (f32, f32)) {
    let blend = (params.accel * dt).clamp(0.0, 1.0);
    let mut v = (
        vel.0 + (desired_vel.0 - vel.0) * blend,
        vel.1 + (desired_vel.1 - vel.1) * blend,
    );

    let speed = length(v);
    if speed > params.max_speed && speed > 0.0 {
        let k = params.max_speed / speed;
        v = (v.0 * k, v.1 * k);
    }

    let next = field::clamp((pos.0 + v.0 * dt, pos.1 + v.1 * dt));
    // 경계에 닿으면 그 축 속도 제거
    if next.0 != pos.0 + v.0 * dt {
        v.0 = 0.0;
    }
    if next.1 != pos.1 + v.1 * dt {
        v.1 = 0.0;
    }
    (next, v)
}

/// Bleed velocity while planted (pass / shoot / hold).
pub fn damp_velocity(vel: (f32, f32), dt: f32, cfg: &PhysicsConfig) -> (f32, f32) {
    let k = (1.0 - cfg.stop_damping_per_s * dt).clamp(0.0, 1.0);
    (vel.0 * k, vel.1 * k)
}

/// Desired velocity for the agent's current action.
///
/// Ball-following actions steer toward the live ball, positional actions
/// arrive at the stored target.
pub fn desired_velocity(
    player: &Player,
    ball_pos: (f32, f32),
    ball_vel: (f32, f32),
    params: &PlayerMotionParams,
    cfg: &PhysicsConfig,
) -> (f32, f32) {
    match player.action {
        PlayerAction::Chase | PlayerAction::Tackle | PlayerAction::Press => pursuit(
            player.position,
            ball_pos,
            ball_vel,
            params.max_speed,
            player_inertia::PURSUIT_LOOKAHEAD_S,
        ),
        PlayerAction::Dribble => match player.target {
            Some(t) => arrive(player.position, t, params.max_speed * cfg.dribble_speed_mult, cfg.arrive_radius),
            None => (0.0, 0.0),
        },
        PlayerAction::Move | PlayerAction::Contain | PlayerAction::Intercept => match player.target {
            Some(t) => arrive(player.position, t, params.max_speed, cfg.arrive_radius),
            None => (0.0, 0.0),
        },
        PlayerAction::Idle
        | PlayerAction::Hold
        | PlayerAction::ShortPass
        | PlayerAction::LongPass
        | PlayerAction::Shoot => (0.0, 0.0),
    }
}

/// Move one agent for one step. Returns the distance travelled.
pub fn step_player(
    player: &mut Player,
    ball_pos: (f32, f32),
    ball_vel: (f32, f32),
    dt: f32,
    cfg: &PhysicsConfig,
) -> f32 {
    let mut params = motion_params(&player.attributes, &player.mental, cfg);
    if player.action == PlayerAction::Dribble {
        params.max_speed *= cfg.dribble_speed_mult;
    }

    let before = player.position;
    if player.action.is_stationary() {
        player.velocity = damp_velocity(player.velocity, dt, cfg);
        let next = field::clamp((
            player.position.0 + player.velocity.0 * dt,
            player.position.1 + player.velocity.1 * dt,
        ));
        player.position = next;
    } else {
        let desired = desired_velocity(player, ball_pos, ball_vel, &params, cfg);
        let (pos, vel) = update_player_motion(player.position, player.velocity, desired, dt, &params);
        player.position = pos;
        player.velocity = vel;
    }
    let travelled = length((player.position.0 - before.0, player.position.1 - before.1));
    player.stats.distance_covered += travelled;
    travelled
}
