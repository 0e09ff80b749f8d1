use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::team::TeamSide;
use crate::engine::match_phase::MatchPeriod;

/// Play-by-play line kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    Info,
    Goal,
    Chance,
    Restart,
    Period,
}

/// Scrolling text log entry. The list is kept newest-last.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchLog {
    /// Elapsed simulated seconds
    pub time: f32,
    pub minute: u16,
    pub kind: LogKind,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvent {
    pub time: f32,
    pub minute: u16,
    #[serde(rename = "type")]
    pub event_type: EventType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub side: Option<TeamSide>,
    /// Primary actor (scorer, shooter, keeper, taker)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<PlayerId>,
    /// Secondary actor (assist provider)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secondary: Option<PlayerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<EventDetails>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventType {
    KickOff,
    Goal,
    /// Scored into the side's own net
    OwnGoal,
    Shot,
    Save,
    Tackle,
    Interception,
    Corner,
    ThrowIn,
    GoalKick,
    PeriodEnd,
    PenaltyKick,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EventDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_target: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub converted: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub period: Option<MatchPeriod>,
}

impl MatchEvent {
    pub fn new(time: f32, minute: u16, event_type: EventType) -> Self {
        Self {
            time,
            minute,
            event_type,
            side: None,
            player: None,
            secondary: None,
            details: None,
        }
    }

    pub fn with_side(mut self, side: TeamSide) -> Self {
        self.side = Some(side);
        self
    }

    pub fn with_player(mut self, player: Option<PlayerId>) -> Self {
        self.player = player;
        self
    }

    pub fn with_secondary(mut self, secondary: Option<PlayerId>) -> Self {
        self.secondary = secondary;
        self
    }

    pub fn with_details(mut self, details: EventDetails) -> Self {
        self.details = Some(details);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_serializes_snake_case_type() {
        let ev = MatchEvent::new(12.0, 0, EventType::ThrowIn).with_side(TeamSide::Away);
        let json = serde_json::to_value(&ev).unwrap();
        assert_eq!(json["type"], "throw_in");
        assert_eq!(json["side"], "away");
        assert!(json.get("player").is_none());
    }
}
