//! Post-match statistics: possession share, pass accuracy, player ratings,
//! and the summary handed to the JSON layer.

use serde::{Deserialize, Serialize};

use super::match_sim::MatchState;
use crate::models::{EventType, MatchEvent, PerSide, Player, PlayerId, Role, Score, TeamSide, TeamStats};

const BASE_RATING: f32 = 6.0;

/// Possession percentages; an untouched match reads 50 / 50.
pub fn possession_percent(stats: &PerSide<TeamStats>) -> PerSide<f32> {
    let total = stats.home.possession_time + stats.away.possession_time;
    if total <= 0.0 {
        return PerSide::new(50.0, 50.0);
    }
    let home = stats.home.possession_time / total * 100.0;
    PerSide::new(home, 100.0 - home)
}

pub fn pass_accuracy(stats: &TeamStats) -> f32 {
    if stats.passes == 0 {
        return 0.0;
    }
    stats.passes_completed as f32 / stats.passes as f32 * 100.0
}

/// 1..10 rating from the agent's counters.
pub fn player_rating(p: &Player) -> f32 {
    let s = &p.stats;
    let failed_passes = s.passes_attempted.saturating_sub(s.passes_completed) as f32;
    let mut rating = BASE_RATING
        + s.goals as f32 * 1.0
        + s.assists as f32 * 0.6
        + s.shots_on_target as f32 * 0.1
        + s.passes_completed as f32 * 0.02
        - failed_passes * 0.03
        + s.tackles_won as f32 * 0.1
        + s.interceptions as f32 * 0.1;
    if p.role.is_goalkeeper() {
        rating += s.saves as f32 * 0.3;
    }
    rating.clamp(1.0, 10.0)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerLine {
    pub id: PlayerId,
    pub number: u8,
    pub name: String,
    pub side: TeamSide,
    pub role: Role,
    pub rating: f32,
    pub goals: u16,
    pub assists: u16,
    pub passes_attempted: u16,
    pub passes_completed: u16,
    pub tackles_won: u16,
    pub saves: u16,
    pub distance_km: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalLine {
    pub minute: u16,
    pub side: TeamSide,
    pub scorer: Option<String>,
    pub assist: Option<String>,
    pub own_goal: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub home_name: String,
    pub away_name: String,
    pub score: Score,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalties: Option<(u8, u8)>,
    /// None for a draw
    pub winner: Option<TeamSide>,
    pub minutes_played: u16,
    pub possession: PerSide<f32>,
    pub pass_accuracy: PerSide<f32>,
    pub stats: PerSide<TeamStats>,
    pub goals: Vec<GoalLine>,
    pub players: Vec<PlayerLine>,
    pub events: Vec<MatchEvent>,
    /// SHA-256 of the final state
    pub digest: String,
}

pub fn summarize(state: &MatchState) -> MatchSummary {
    let name = |id: Option<PlayerId>| -> Option<String> {
        id.and_then(|id| state.players.iter().find(|p| p.id == id))
            .map(|p| p.name.clone())
    };

    let goals = state
        .events
        .iter()
        .filter(|e| matches!(e.event_type, EventType::Goal | EventType::OwnGoal))
        .filter_map(|e| {
            Some(GoalLine {
                minute: e.minute,
                side: e.side?,
                scorer: name(e.player),
                assist: name(e.secondary),
                own_goal: e.event_type == EventType::OwnGoal,
            })
        })
        .collect();

    let players = state
        .players
        .iter()
        .map(|p| PlayerLine {
            id: p.id,
            number: p.number,
            name: p.name.clone(),
            side: p.side,
            role: p.role,
            rating: player_rating(p),
            goals: p.stats.goals,
            assists: p.stats.assists,
            passes_attempted: p.stats.passes_attempted,
            passes_completed: p.stats.passes_completed,
            tackles_won: p.stats.tackles_won,
            saves: p.stats.saves,
            distance_km: p.stats.distance_covered / 1000.0,
        })
        .collect();

    let score = state.score;
    let shootout = state.penalties.home_taken + state.penalties.away_taken > 0;
    let winner = if score.home > score.away {
        Some(TeamSide::Home)
    } else if score.away > score.home {
        Some(TeamSide::Away)
    } else {
        state.penalties.winner
    };

    MatchSummary {
        home_name: state.team_names.home.clone(),
        away_name: state.team_names.away.clone(),
        score,
        penalties: shootout.then_some((state.penalties.home_scored, state.penalties.away_scored)),
        winner,
        minutes_played: (state.clock / 60.0).round() as u16,
        possession: possession_percent(&state.stats),
        pass_accuracy: PerSide::new(pass_accuracy(&state.stats.home), pass_accuracy(&state.stats.away)),
        stats: state.stats.clone(),
        goals,
        players,
        events: state.events.clone(),
        digest: state.state_digest(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::test_fixtures::sample_player;

    #[test]
    fn test_possession_split() {
        let mut stats = PerSide::<TeamStats>::default();
        assert_eq!(possession_percent(&stats), PerSide::new(50.0, 50.0));
        stats.home.possession_time = 30.0;
        stats.away.possession_time = 10.0;
        let pct = possession_percent(&stats);
        assert!((pct.home - 75.0).abs() < 1e-4);
        assert!((pct.home + pct.away - 100.0).abs() < 1e-4);
    }

    #[test]
    fn test_pass_accuracy() {
        let stats = TeamStats {
            passes: 40,
            passes_completed: 30,
            ..Default::default()
        };
        assert_eq!(pass_accuracy(&stats), 75.0);
        assert_eq!(pass_accuracy(&TeamStats::default()), 0.0);
    }

    #[test]
    fn test_rating_baseline_and_clamp() {
        let mut p = sample_player(9, TeamSide::Home, (50.0, 34.0));
        assert_eq!(player_rating(&p), BASE_RATING);
        p.stats.goals = 3;
        p.stats.assists = 2;
        assert!(player_rating(&p) > 8.0);
        p.stats.goals = 20;
        assert_eq!(player_rating(&p), 10.0);
        p.stats.goals = 0;
        p.stats.assists = 0;
        p.stats.passes_attempted = 300;
        assert_eq!(player_rating(&p), 1.0);
    }

    #[test]
    fn test_saves_only_count_for_keepers() {
        let mut p = sample_player(1, TeamSide::Away, (100.0, 34.0));
        p.stats.saves = 5;
        assert_eq!(player_rating(&p), BASE_RATING);
        p.role = Role::GK;
        assert!((player_rating(&p) - 7.5).abs() < 1e-4);
    }
}
