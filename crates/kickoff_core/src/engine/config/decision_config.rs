//! Decision engine parameters

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::kick;
use crate::models::PlayerAction;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecisionConfig {
    /// 곱셈 노이즈 폭 (±) (기본: 0.05)
    pub noise: f32,
    /// 가중 추첨 후보 수 (기본: 3)
    pub top_k: usize,
    /// 피로 배수 하한 (기본: 0.2)
    pub fatigue_floor: f32,

    pub tackle_radius: f32,
    pub press_radius: f32,

    pub short_pass_min: f32,
    pub short_pass_max: f32,
    pub long_pass_max: f32,
    pub shoot_max_distance: f32,
    pub shoot_full_score_distance: f32,
    pub shoot_min_factor: f32,
    /// Shot score is `base × weight × quality²`, quality = distance × pressure
    pub shot_weight: f32,
    pub shot_aim_fraction: f32,
    pub shot_pressure_radius: f32,
    pub shot_pressure_floor: f32,
    pub dribble_step: f32,

    /// Keepers leave their line only when the ball is this close to their goal
    pub keeper_engage_distance: f32,

    pub actions: ActionDurations,
}

/// Seconds an agent commits to each action before deciding again.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionDurations {
    pub short_pass: f32,
    pub long_pass: f32,
    pub shoot: f32,
    pub dribble: f32,
    pub hold: f32,
    pub tackle: f32,
    pub press: f32,
    pub contain: f32,
    pub intercept: f32,
    pub chase: f32,
    pub movement: f32,
    pub idle: f32,
}

impl Default for ActionDurations {
    fn default() -> Self {
        Self {
            short_pass: 0.5,
            long_pass: 0.8,
            shoot: 0.8,
            dribble: 0.4,
            hold: 0.4,
            tackle: 1.0,
            press: 0.3,
            contain: 0.3,
            intercept: 0.4,
            chase: 0.2,
            movement: 0.2,
            idle: 0.2,
        }
    }
}

impl ActionDurations {
    pub fn of(&self, action: PlayerAction) -> f32 {
        match action {
            PlayerAction::ShortPass => self.short_pass,
            PlayerAction::LongPass => self.long_pass,
            PlayerAction::Shoot => self.shoot,
            PlayerAction::Dribble => self.dribble,
            PlayerAction::Hold => self.hold,
            PlayerAction::Tackle => self.tackle,
            PlayerAction::Press => self.press,
            PlayerAction::Contain => self.contain,
            PlayerAction::Intercept => self.intercept,
            PlayerAction::Chase => self.chase,
            PlayerAction::Move => self.movement,
            PlayerAction::Idle => self.idle,
        }
    }

    fn all(&self) -> [f32; 12] {
        [
            self.short_pass,
            self.long_pass,
            self.shoot,
            self.dribble,
            self.hold,
            self.tackle,
            self.press,
            self.contain,
            self.intercept,
            self.chase,
            self.movement,
            self.idle,
        ]
    }

    pub fn min(&self) -> f32 {
        self.all().into_iter().fold(f32::INFINITY, f32::min)
    }
}

impl Default for DecisionConfig {
    fn default() -> Self {
        Self {
            noise: 0.05,
            top_k: 3,
            fatigue_floor: 0.2,
            tackle_radius: 5.0,
            press_radius: 15.0,
            short_pass_min: kick::SHORT_PASS_MIN_M,
            short_pass_max: kick::SHORT_PASS_MAX_M,
            long_pass_max: kick::LONG_PASS_MAX_M,
            shoot_max_distance: kick::SHOOT_MAX_M,
            shoot_full_score_distance: kick::SHOOT_FULL_SCORE_M,
            shoot_min_factor: kick::SHOOT_MIN_FACTOR,
            shot_weight: kick::SHOT_WEIGHT,
            shot_aim_fraction: kick::SHOT_AIM_FRACTION,
            shot_pressure_radius: kick::SHOT_PRESSURE_RADIUS_M,
            shot_pressure_floor: kick::SHOT_PRESSURE_FLOOR,
            dribble_step: kick::DRIBBLE_STEP_M,
            keeper_engage_distance: 16.5,
            actions: ActionDurations::default(),
        }
    }
}
