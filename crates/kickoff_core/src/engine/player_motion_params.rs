//! Ability → MotionParams
//!
//! Single place that turns `PlayerAttributes` into locomotion limits used by
//! `player_physics::update_player_motion`. No ad-hoc speed mapping elsewhere.

use super::config::PhysicsConfig;
use crate::models::{PlayerAttributes, MentalState};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlayerMotionParams {
    /// Top speed (m/s) - pace based
    pub max_speed: f32,
    /// Velocity blend rate (1/s) - acceleration based
    pub accel: f32,
}

#[inline]
fn n20(value: u8) -> f32 {
    (value as f32 / 20.0).clamp(0.0, 1.0)
}

/// Convert player attributes into base (fresh) locomotion parameters.
pub fn ability_to_motion_params(attrs: &PlayerAttributes, cfg: &PhysicsConfig) -> PlayerMotionParams {
    PlayerMotionParams {
        max_speed: cfg.max_speed_base + n20(attrs.pace) * cfg.max_speed_range,
        accel: cfg.accel_base + n20(attrs.acceleration) * cfg.accel_range,
    }
}

/// Apply runtime freshness scaling to base parameters.
pub fn scale_by_fatigue(base: PlayerMotionParams, mental: &MentalState, cfg: &PhysicsConfig) -> PlayerMotionParams {
    let fresh = mental.freshness01();
    let min = cfg.fatigue_min_mult.clamp(0.0, 1.0);
    let mult = min + (1.0 - min) * fresh;
    PlayerMotionParams {
        max_speed: base.max_speed * mult,
        accel: base.accel * mult,
    }
}

/// Effective parameters for the current tick.
pub fn motion_params(attrs: &PlayerAttributes, mental: &MentalState, cfg: &PhysicsConfig) -> PlayerMotionParams {
    scale_by_fatigue(ability_to_motion_params(attrs, cfg), mental, cfg)
}
