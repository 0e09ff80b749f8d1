//! Match clock periods and in-play phases.
//!
//! `MatchPeriod` is the clock (halves, breaks, extra time, shootout).
//! `PlayPhase` is the ball state inside a running period.

use serde::{Deserialize, Serialize};

use super::config::RulesConfig;
use crate::models::TeamSide;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPeriod {
    FirstHalf,
    HalfTime,
    SecondHalf,
    ExtraTimeFirstHalf,
    ExtraTimeHalfTime,
    ExtraTimeSecondHalf,
    PenaltyShootout,
    Finished,
}

impl MatchPeriod {
    /// Periods in which the ball is played and the clock runs.
    pub fn is_running(&self) -> bool {
        matches!(
            self,
            MatchPeriod::FirstHalf
                | MatchPeriod::SecondHalf
                | MatchPeriod::ExtraTimeFirstHalf
                | MatchPeriod::ExtraTimeSecondHalf
        )
    }

    pub fn is_break(&self) -> bool {
        matches!(self, MatchPeriod::HalfTime | MatchPeriod::ExtraTimeHalfTime)
    }

    pub fn label(&self) -> &'static str {
        match self {
            MatchPeriod::FirstHalf => "first half",
            MatchPeriod::HalfTime => "half-time",
            MatchPeriod::SecondHalf => "second half",
            MatchPeriod::ExtraTimeFirstHalf => "extra time, first half",
            MatchPeriod::ExtraTimeHalfTime => "extra time break",
            MatchPeriod::ExtraTimeSecondHalf => "extra time, second half",
            MatchPeriod::PenaltyShootout => "penalty shootout",
            MatchPeriod::Finished => "full-time",
        }
    }

    /// Clock second at which a running period ends.
    pub fn end_seconds(&self, rules: &RulesConfig) -> Option<f32> {
        let half = rules.half_length_minutes as f32 * 60.0;
        let et = rules.extra_time_half_minutes as f32 * 60.0;
        match self {
            MatchPeriod::FirstHalf => Some(half),
            MatchPeriod::SecondHalf => Some(2.0 * half),
            MatchPeriod::ExtraTimeFirstHalf => Some(2.0 * half + et),
            MatchPeriod::ExtraTimeSecondHalf => Some(2.0 * half + 2.0 * et),
            _ => None,
        }
    }
}

/// Advance to the next period after one ends.
///
/// `is_draw` reflects the score when the period ends.
pub fn next_period(current: MatchPeriod, rules: &RulesConfig, is_draw: bool) -> MatchPeriod {
    match current {
        MatchPeriod::FirstHalf => MatchPeriod::HalfTime,
        MatchPeriod::HalfTime => MatchPeriod::SecondHalf,
        MatchPeriod::SecondHalf => {
            if is_draw && rules.allow_extra_time {
                MatchPeriod::ExtraTimeFirstHalf
            } else if is_draw && rules.allow_penalty_shootout {
                MatchPeriod::PenaltyShootout
            } else {
                MatchPeriod::Finished
            }
        }
        MatchPeriod::ExtraTimeFirstHalf => MatchPeriod::ExtraTimeHalfTime,
        MatchPeriod::ExtraTimeHalfTime => MatchPeriod::ExtraTimeSecondHalf,
        MatchPeriod::ExtraTimeSecondHalf => {
            if is_draw && rules.allow_penalty_shootout {
                MatchPeriod::PenaltyShootout
            } else {
                MatchPeriod::Finished
            }
        }
        MatchPeriod::PenaltyShootout => MatchPeriod::Finished,
        MatchPeriod::Finished => MatchPeriod::Finished,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartKind {
    ThrowIn,
    Corner,
    GoalKick,
}

/// Ball state inside a running period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "phase", rename_all = "snake_case")]
pub enum PlayPhase {
    /// Agents frozen on their anchors, ball on the spot
    Kickoff { team: TeamSide },
    InPlay,
    /// Frozen after a goal; `conceded` kicks off next
    GoalCelebration { conceded: TeamSide },
    /// Dead ball; agents reposition, the ball waits
    Restart { kind: RestartKind, team: TeamSide },
}

impl PlayPhase {
    pub fn is_in_play(&self) -> bool {
        matches!(self, PlayPhase::InPlay)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PlayPhase::Kickoff { .. } => "kickoff",
            PlayPhase::InPlay => "in_play",
            PlayPhase::GoalCelebration { .. } => "goal_celebration",
            PlayPhase::Restart { kind: RestartKind::ThrowIn, .. } => "throw_in",
            PlayPhase::Restart { kind: RestartKind::Corner, .. } => "corner",
            PlayPhase::Restart { kind: RestartKind::GoalKick, .. } => "goal_kick",
        }
    }
}
