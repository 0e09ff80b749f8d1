//! Kick resolution: direction, speed, angular error, launch height.
//!
//! Error perturbs the launch angle; there is no binary hit/miss roll.

use super::config::KickConfig;
use super::physics_constants::goal;
use super::sim_rng::SimRng;
use super::steering::{normalize, rotate};
use crate::models::{Player, PlayerAttributes};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KickKind {
    ShortPass,
    LongPass,
    Shot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KickOutcome {
    pub velocity: (f32, f32),
    pub height: f32,
    /// Launch angle error actually applied (rad)
    pub angle_error: f32,
    /// Shots only: launch ray meets the goal line inside the mouth
    pub on_target: bool,
}

/// Accuracy rating used for the error cone.
pub fn kick_accuracy(attrs: &PlayerAttributes, kind: KickKind) -> f32 {
    match kind {
        KickKind::ShortPass | KickKind::LongPass => {
            (attrs.passing as f32 + attrs.technique as f32 + attrs.vision as f32) / 3.0
        }
        KickKind::Shot => attrs.finishing as f32,
    }
}

/// Full width of the angular error range (rad).
pub fn error_range(accuracy: f32, kind: KickKind, cfg: &KickConfig) -> f32 {
    let coef = match kind {
        KickKind::Shot => cfg.shot_error_coef,
        KickKind::ShortPass | KickKind::LongPass => cfg.pass_error_coef,
    };
    ((20.0 - accuracy) * coef).max(0.0)
}

/// Launch speed before the power factor.
pub fn base_speed(attrs: &PlayerAttributes, kind: KickKind, cfg: &KickConfig) -> f32 {
    match kind {
        KickKind::ShortPass => cfg.pass_base_speed + attrs.passing as f32 * cfg.pass_speed_per_passing,
        KickKind::LongPass => {
            (cfg.pass_base_speed + attrs.passing as f32 * cfg.pass_speed_per_passing) * cfg.long_pass_mult
        }
        KickKind::Shot => cfg.shot_base_speed + attrs.strength as f32 * cfg.shot_speed_per_strength,
    }
}

/// Compute the released ball's motion. `power` is clamped into [0.5, 1.0].
pub fn kick_ball(
    kicker: &Player,
    from: (f32, f32),
    kind: KickKind,
    target: (f32, f32),
    power: f32,
    cfg: &KickConfig,
    rng: &mut SimRng,
) -> KickOutcome {
    let power = power.clamp(0.5, 1.0);
    let mut dir = normalize((target.0 - from.0, target.1 - from.1));
    if dir == (0.0, 0.0) {
        dir = (kicker.side.direction(), 0.0);
    }

    let range = error_range(kick_accuracy(&kicker.attributes, kind), kind, cfg);
    let angle_error = rng.symmetric(range / 2.0);
    let dir = rotate(dir, angle_error);

    let speed = base_speed(&kicker.attributes, kind, cfg) * (0.5 + 0.5 * power);
    let height = match kind {
        KickKind::ShortPass => 0.0,
        KickKind::LongPass => cfg.long_pass_height,
        KickKind::Shot => cfg.shot_height_per_power * power,
    };

    let on_target = match kind {
        KickKind::Shot => ray_hits_goal(from, dir, goal::attack_goal_x(kicker.side.attacks_right())),
        _ => false,
    };

    KickOutcome {
        velocity: (dir.0 * speed, dir.1 * speed),
        height,
        angle_error,
        on_target,
    }
}

/// Does the ray from `from` along `dir` cross `goal_x` inside the goal mouth?
pub fn ray_hits_goal(from: (f32, f32), dir: (f32, f32), goal_x: f32) -> bool {
    let dx = goal_x - from.0;
    if dir.0.abs() < 1e-6 || dx * dir.0 <= 0.0 {
        return false;
    }
    let t = dx / dir.0;
    goal::within_mouth(from.1 + dir.1 * t)
}

/// Kick strength suited to the distance of a pass.
pub fn pass_power(distance: f32, max_distance: f32) -> f32 {
    if max_distance <= 0.0 {
        return 1.0;
    }
    (0.5 + distance / (2.0 * max_distance)).clamp(0.5, 1.0)
}
