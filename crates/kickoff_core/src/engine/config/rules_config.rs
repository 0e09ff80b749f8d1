//! Clock, period and dead-ball timing

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::timers;
use crate::engine::timestep::TICK_DT;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Fixed simulation step (s)
    pub tick_dt: f32,
    pub half_length_minutes: u16,
    pub extra_time_half_minutes: u16,
    pub allow_extra_time: bool,
    pub allow_penalty_shootout: bool,

    pub kickoff_duration: f32,
    pub celebration_duration: f32,
    pub throw_in_duration: f32,
    pub corner_duration: f32,
    pub goal_kick_duration: f32,
    pub penalty_interval: f32,
    /// Best-of rounds before sudden death
    pub penalty_rounds: u8,

    pub goal_momentum: f32,
    pub momentum_decay_per_s: f32,
    pub goal_morale_swing: f32,
    pub goal_confidence_boost: f32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            tick_dt: TICK_DT,
            half_length_minutes: 45,
            extra_time_half_minutes: 15,
            allow_extra_time: false,
            allow_penalty_shootout: false,

            kickoff_duration: timers::KICKOFF_S,
            celebration_duration: timers::CELEBRATION_S,
            throw_in_duration: timers::THROW_IN_S,
            corner_duration: timers::CORNER_S,
            goal_kick_duration: timers::GOAL_KICK_S,
            penalty_interval: timers::PENALTY_INTERVAL_S,
            penalty_rounds: 5,

            goal_momentum: 10.0,
            momentum_decay_per_s: 0.1,
            goal_morale_swing: 5.0,
            goal_confidence_boost: 10.0,
        }
    }
}
