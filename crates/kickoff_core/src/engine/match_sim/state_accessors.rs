//! Read accessors for renderers and external control.

use serde::{Deserialize, Serialize};

use super::MatchState;
use crate::engine::match_phase::{MatchPeriod, PlayPhase};
use crate::models::{MatchEvent, MatchLog, PlayerId, Role, Score, TeamSide, TeamStats};

/// Render-facing agent snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub id: PlayerId,
    pub number: u8,
    pub name: String,
    pub side: TeamSide,
    pub role: Role,
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    pub action: String,
    pub has_ball: bool,
    pub fatigue: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallView {
    pub position: (f32, f32),
    pub height: f32,
    pub owner: Option<PlayerId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClockView {
    pub elapsed: f32,
    pub minute: u16,
    pub second: u8,
    pub period: MatchPeriod,
}

impl MatchState {
    pub fn score(&self) -> Score {
        self.score
    }

    pub fn clock(&self) -> ClockView {
        let whole = self.clock.max(0.0) as u32;
        ClockView {
            elapsed: self.clock,
            minute: (whole / 60) as u16,
            second: (whole % 60) as u8,
            period: self.period,
        }
    }

    pub fn phase(&self) -> PlayPhase {
        self.phase
    }

    pub fn period(&self) -> MatchPeriod {
        self.period
    }

    pub fn elapsed(&self) -> f32 {
        self.clock
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        self.paused = paused;
    }

    pub fn is_finished(&self) -> bool {
        self.period == MatchPeriod::Finished
    }

    pub fn players_view(&self) -> Vec<PlayerView> {
        self.players
            .iter()
            .map(|p| PlayerView {
                id: p.id,
                number: p.number,
                name: p.name.clone(),
                side: p.side,
                role: p.role,
                position: p.position,
                velocity: p.velocity,
                action: p.action.tag().to_string(),
                has_ball: self.ball.owner == Some(p.id),
                fatigue: p.mental.fatigue,
            })
            .collect()
    }

    pub fn ball_view(&self) -> BallView {
        BallView {
            position: self.ball.position,
            height: self.ball.height,
            owner: self.ball.owner,
        }
    }

    /// Newest last.
    pub fn logs(&self) -> &[MatchLog] {
        &self.logs
    }

    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    pub fn team_stats(&self, side: TeamSide) -> &TeamStats {
        self.stats.get(side)
    }

    pub fn team_name(&self, side: TeamSide) -> &str {
        self.team_names.get(side)
    }
}
