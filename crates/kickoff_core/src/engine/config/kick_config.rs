//! Kick speed / error parameters

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::kick;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KickConfig {
    pub pass_base_speed: f32,
    pub pass_speed_per_passing: f32,
    pub long_pass_mult: f32,
    pub shot_base_speed: f32,
    pub shot_speed_per_strength: f32,
    /// 패스 각도 오차 계수 (rad per missing point) (기본: 0.02)
    pub pass_error_coef: f32,
    /// 슛 각도 오차 계수 (기본: 0.05)
    pub shot_error_coef: f32,
    pub long_pass_height: f32,
    pub shot_height_per_power: f32,
}

impl Default for KickConfig {
    fn default() -> Self {
        Self {
            pass_base_speed: kick::PASS_BASE_SPEED,
            pass_speed_per_passing: kick::PASS_SPEED_PER_PASSING,
            long_pass_mult: kick::LONG_PASS_MULT,
            shot_base_speed: kick::SHOT_BASE_SPEED,
            shot_speed_per_strength: kick::SHOT_SPEED_PER_STRENGTH,
            pass_error_coef: kick::PASS_ERROR_COEF,
            shot_error_coef: kick::SHOT_ERROR_COEF,
            long_pass_height: kick::LONG_PASS_HEIGHT_M,
            shot_height_per_power: kick::SHOT_HEIGHT_PER_POWER,
        }
    }
}
