//! Possession claim, deflection and deadlock parameters

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::claim;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolutionConfig {
    pub reach: f32,
    pub gk_reach: f32,
    pub difficulty_per_speed: f32,
    pub roll_range: f32,
    pub first_touch_weight: f32,
    pub owner_bonus: f32,
    pub gk_bonus: f32,
    pub tackling_weight: f32,

    pub gk_deflect_spread: f32,
    pub deflect_spread: f32,
    pub deflect_cooldown: f32,

    pub deadlock_speed: f32,
    pub deadlock_threshold: f32,
    pub deadlock_chase: f32,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            reach: claim::REACH_M,
            gk_reach: claim::GK_REACH_M,
            difficulty_per_speed: claim::DIFFICULTY_PER_SPEED,
            roll_range: claim::ROLL_RANGE,
            first_touch_weight: claim::FIRST_TOUCH_WEIGHT,
            owner_bonus: claim::OWNER_BONUS,
            gk_bonus: claim::GK_BONUS,
            tackling_weight: claim::TACKLING_WEIGHT,

            gk_deflect_spread: claim::GK_DEFLECT_SPREAD,
            deflect_spread: claim::DEFLECT_SPREAD,
            deflect_cooldown: claim::DEFLECT_COOLDOWN_S,

            deadlock_speed: claim::DEADLOCK_SPEED,
            deadlock_threshold: claim::DEADLOCK_THRESHOLD_S,
            deadlock_chase: claim::DEADLOCK_CHASE_S,
        }
    }
}
