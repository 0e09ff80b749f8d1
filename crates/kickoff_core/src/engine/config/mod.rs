//! # Engine Configuration
//!
//! 모든 튜닝 상수를 중앙에서 관리하는 설정 시스템.
//!
//! ## 목적
//! - 밸런스 조정 용이 (제어 흐름을 건드리지 않고 튜닝)
//! - 프리셋 지원 (Realistic, Arcade, Deterministic)
//! - YAML / JSON 파일 로딩, 생성 시점 검증
//!
//! ## 사용법
//! ```rust
//! use kickoff_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let arcade = EngineConfig::arcade();
//! assert!(arcade.validate().is_ok());
//! ```

mod decision_config;
mod kick_config;
mod physics_config;
mod resolution_config;
mod rules_config;
mod stamina_config;

pub use decision_config::{ActionDurations, DecisionConfig};
pub use kick_config::KickConfig;
pub use physics_config::PhysicsConfig;
pub use resolution_config::ResolutionConfig;
pub use rules_config::RulesConfig;
pub use stamina_config::StaminaConfig;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::engine::timestep::MAX_TICK_DT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub physics: PhysicsConfig,
    pub resolution: ResolutionConfig,
    pub kick: KickConfig,
    pub decision: DecisionConfig,
    pub rules: RulesConfig,
    pub stamina: StaminaConfig,
}

impl EngineConfig {
    /// 현실적인 시뮬레이션 (기본)
    pub fn realistic() -> Self {
        Self::default()
    }

    /// 아케이드 스타일 (빠른 공, 정확한 슛, 더 많은 골)
    pub fn arcade() -> Self {
        let mut cfg = Self::default();
        cfg.kick.shot_error_coef = 0.03;
        cfg.kick.shot_base_speed = 24.0;
        cfg.physics.max_speed_base = 7.5;
        cfg.decision.shoot_max_distance = 25.0;
        cfg.decision.shot_weight = 0.7;
        cfg.rules.celebration_duration = 2.0;
        cfg
    }

    /// 테스트용 (노이즈/오차 최소화)
    pub fn deterministic() -> Self {
        let mut cfg = Self::default();
        cfg.decision.noise = 0.0;
        cfg.kick.pass_error_coef = 0.0;
        cfg.kick.shot_error_coef = 0.0;
        cfg
    }

    pub fn from_yaml_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_yaml::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(text)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would break the tick (negative speeds, zero step, ...).
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dt = self.rules.tick_dt;
        if !(dt > 0.0 && dt <= MAX_TICK_DT) {
            return Err(out_of_range("rules.tick_dt", dt, "must be in (0, 0.25]"));
        }
        if self.rules.half_length_minutes == 0 {
            return Err(out_of_range("rules.half_length_minutes", 0.0, "must be positive"));
        }

        let non_negative = [
            ("physics.air_drag_per_s", self.physics.air_drag_per_s),
            ("physics.fall_rate", self.physics.fall_rate),
            ("physics.bounce_height_factor", self.physics.bounce_height_factor),
            ("physics.settle_speed", self.physics.settle_speed),
            ("physics.max_speed_range", self.physics.max_speed_range),
            ("physics.accel_range", self.physics.accel_range),
            ("physics.stop_damping_per_s", self.physics.stop_damping_per_s),
            ("resolution.difficulty_per_speed", self.resolution.difficulty_per_speed),
            ("resolution.deflect_spread", self.resolution.deflect_spread),
            ("resolution.gk_deflect_spread", self.resolution.gk_deflect_spread),
            ("resolution.deflect_cooldown", self.resolution.deflect_cooldown),
            ("resolution.deadlock_threshold", self.resolution.deadlock_threshold),
            ("kick.pass_error_coef", self.kick.pass_error_coef),
            ("kick.shot_error_coef", self.kick.shot_error_coef),
            ("decision.noise", self.decision.noise),
            ("decision.shot_weight", self.decision.shot_weight),
            ("decision.shot_aim_fraction", self.decision.shot_aim_fraction),
            ("decision.shot_pressure_radius", self.decision.shot_pressure_radius),
            ("decision.shot_pressure_floor", self.decision.shot_pressure_floor),
            ("stamina.move_drain_per_s", self.stamina.move_drain_per_s),
            ("stamina.sprint_drain_per_s", self.stamina.sprint_drain_per_s),
            ("stamina.recovery_per_s", self.stamina.recovery_per_s),
            ("rules.kickoff_duration", self.rules.kickoff_duration),
            ("rules.celebration_duration", self.rules.celebration_duration),
            ("rules.throw_in_duration", self.rules.throw_in_duration),
            ("rules.corner_duration", self.rules.corner_duration),
            ("rules.goal_kick_duration", self.rules.goal_kick_duration),
        ];
        for (field, value) in non_negative {
            if !(value >= 0.0) {
                return Err(out_of_range(field, value, "must be non-negative"));
            }
        }

        let positive = [
            ("physics.max_speed_base", self.physics.max_speed_base),
            ("physics.accel_base", self.physics.accel_base),
            ("resolution.reach", self.resolution.reach),
            ("resolution.gk_reach", self.resolution.gk_reach),
            ("kick.pass_base_speed", self.kick.pass_base_speed),
            ("kick.shot_base_speed", self.kick.shot_base_speed),
            ("rules.penalty_interval", self.rules.penalty_interval),
        ];
        for (field, value) in positive {
            if !(value > 0.0) {
                return Err(out_of_range(field, value, "must be positive"));
            }
        }

        let g = self.physics.grass_friction_per_frame;
        if !(g > 0.0 && g <= 1.0) {
            return Err(out_of_range("physics.grass_friction_per_frame", g, "must be in (0, 1]"));
        }
        if self.decision.noise >= 1.0 {
            return Err(out_of_range("decision.noise", self.decision.noise, "must be below 1"));
        }
        if self.decision.top_k == 0 {
            return Err(out_of_range("decision.top_k", 0.0, "must be at least 1"));
        }
        let floor = self.decision.fatigue_floor;
        if !(floor > 0.0 && floor <= 1.0) {
            return Err(out_of_range("decision.fatigue_floor", floor, "must be in (0, 1]"));
        }
        let min_duration = self.decision.actions.min();
        if !(min_duration > 0.0) {
            return Err(out_of_range("decision.actions", min_duration, "durations must be positive"));
        }
        if self.decision.short_pass_min > self.decision.short_pass_max
            || self.decision.short_pass_max > self.decision.long_pass_max
        {
            return Err(out_of_range(
                "decision.short_pass_max",
                self.decision.short_pass_max,
                "pass ranges must be ordered",
            ));
        }
        Ok(())
    }
}

fn out_of_range(field: &'static str, value: f32, reason: &'static str) -> ConfigError {
    ConfigError::OutOfRange { field, value, reason }
}

// ========== Tests ==========

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = EngineConfig::default();
        assert!((cfg.rules.tick_dt - 0.05).abs() < 1e-6);
        assert_eq!(cfg.decision.top_k, 3);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_presets_validate() {
        for cfg in [EngineConfig::realistic(), EngineConfig::arcade(), EngineConfig::deterministic()] {
            assert!(cfg.validate().is_ok());
        }
        assert_eq!(EngineConfig::deterministic().decision.noise, 0.0);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = "rules:\n  half_length_minutes: 10\n  allow_extra_time: true\nkick:\n  shot_base_speed: 22.0\n";
        let cfg = EngineConfig::from_yaml_str(yaml).unwrap();
        assert_eq!(cfg.rules.half_length_minutes, 10);
        assert!(cfg.rules.allow_extra_time);
        assert_eq!(cfg.kick.shot_base_speed, 22.0);
        assert_eq!(cfg.physics, PhysicsConfig::default());
    }

    #[test]
    fn test_json_roundtrip() {
        let cfg = EngineConfig::arcade();
        let text = serde_json::to_string(&cfg).unwrap();
        assert_eq!(EngineConfig::from_json_str(&text).unwrap(), cfg);
    }

    #[test]
    fn test_rejects_bad_tick() {
        let err = EngineConfig::from_json_str(r#"{"rules": {"tick_dt": 0.0}}"#).unwrap_err();
        assert!(err.to_string().contains("rules.tick_dt"));

        let err = EngineConfig::from_json_str(r#"{"rules": {"tick_dt": 1.0}}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { field: "rules.tick_dt", .. }));
    }

    #[test]
    fn test_rejects_negative_and_nan() {
        let mut cfg = EngineConfig::default();
        cfg.physics.air_drag_per_s = -0.1;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.resolution.reach = f32::NAN;
        assert!(cfg.validate().is_err());

        let mut cfg = EngineConfig::default();
        cfg.decision.top_k = 0;
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_malformed_yaml_is_error() {
        assert!(matches!(
            EngineConfig::from_yaml_str("rules: [1, 2"),
            Err(ConfigError::Yaml(_))
        ));
    }
}
