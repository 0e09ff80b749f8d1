//! Fatigue drain and recovery.
//!
//! `fatigue` is remaining freshness (100 = fresh). Running drains it,
//! sprinting drains it faster, standing still recovers a little.

use super::config::StaminaConfig;
use crate::models::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effort {
    Resting,
    Moving,
    Sprinting,
}

pub fn classify_effort(speed: f32, max_speed: f32, cfg: &StaminaConfig) -> Effort {
    if speed > max_speed * cfg.sprint_speed_threshold {
        Effort::Sprinting
    } else if speed > cfg.moving_speed {
        Effort::Moving
    } else {
        Effort::Resting
    }
}

/// Per-second change in freshness (negative = drain).
pub fn fatigue_rate(effort: Effort, stamina_attr: u8, cfg: &StaminaConfig) -> f32 {
    let attr_factor = (cfg.attr_base - stamina_attr as f32 / 20.0).max(0.1);
    match effort {
        Effort::Sprinting => -cfg.sprint_drain_per_s * attr_factor,
        Effort::Moving => -cfg.move_drain_per_s * attr_factor,
        Effort::Resting => cfg.recovery_per_s,
    }
}

/// Apply one step of drain / recovery; keeps the mental state clamped.
pub fn update_fatigue(player: &mut Player, max_speed: f32, dt: f32, cfg: &StaminaConfig) {
    let effort = classify_effort(player.speed(), max_speed, cfg);
    player.mental.fatigue += fatigue_rate(effort, player.attributes.stamina, cfg) * dt;
    player.mental.clamp();
}
