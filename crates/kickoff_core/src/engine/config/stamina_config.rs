//! Stamina drain / recovery

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::stamina;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StaminaConfig {
    /// 이동 중 감소율 (per second, 0..100 scale) (기본: 0.008)
    pub move_drain_per_s: f32,
    /// 스프린트 감소율 (기본: 0.03)
    pub sprint_drain_per_s: f32,
    /// 정지 시 회복율 (기본: 0.01)
    pub recovery_per_s: f32,
    /// drain *= attr_base - stamina/20
    pub attr_base: f32,
    /// 스프린트 판정 속도 비율 (max_speed의 몇 %) (기본: 0.8)
    pub sprint_speed_threshold: f32,
    pub moving_speed: f32,
}

impl Default for StaminaConfig {
    fn default() -> Self {
        Self {
            move_drain_per_s: stamina::MOVE_DRAIN_PER_S,
            sprint_drain_per_s: stamina::SPRINT_DRAIN_PER_S,
            recovery_per_s: stamina::RECOVERY_PER_S,
            attr_base: stamina::ATTR_BASE,
            sprint_speed_threshold: stamina::SPRINT_RATIO,
            moving_speed: stamina::MOVING_SPEED,
        }
    }
}
