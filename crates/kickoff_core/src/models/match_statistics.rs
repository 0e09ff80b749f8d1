use serde::{Deserialize, Serialize};

use super::team::TeamSide;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub home: u8,
    pub away: u8,
}

impl Score {
    pub fn get(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.home,
            TeamSide::Away => self.away,
        }
    }

    pub fn add_goal(&mut self, side: TeamSide) {
        match side {
            TeamSide::Home => self.home = self.home.saturating_add(1),
            TeamSide::Away => self.away = self.away.saturating_add(1),
        }
    }

    pub fn is_draw(&self) -> bool {
        self.home == self.away
    }
}

/// Aggregate per-side counters.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamStats {
    /// Accumulated seconds of possession while in play
    pub possession_time: f32,
    pub shots: u16,
    pub shots_on_target: u16,
    pub passes: u16,
    pub passes_completed: u16,
    pub tackles: u16,
    pub interceptions: u16,
    pub saves: u16,
    pub corners: u16,
    pub throw_ins: u16,
    pub goal_kicks: u16,
    /// Fouls are not modelled; always 0.
    pub fouls: u16,
}

/// Shootout tally, kept apart from the match score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTally {
    pub home_scored: u8,
    pub away_scored: u8,
    pub home_taken: u8,
    pub away_taken: u8,
    /// Seconds until the next kick
    pub kick_timer: f32,
    pub winner: Option<TeamSide>,
}

impl PenaltyTally {
    pub fn scored(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.home_scored,
            TeamSide::Away => self.away_scored,
        }
    }

    pub fn taken(&self, side: TeamSide) -> u8 {
        match side {
            TeamSide::Home => self.home_taken,
            TeamSide::Away => self.away_taken,
        }
    }

    /// Home kicks first; the side with fewer attempts is next.
    pub fn next_kicker(&self) -> TeamSide {
        if self.home_taken <= self.away_taken {
            TeamSide::Home
        } else {
            TeamSide::Away
        }
    }

    pub fn record(&mut self, side: TeamSide, converted: bool) {
        match side {
            TeamSide::Home => {
                self.home_taken += 1;
                if converted {
                    self.home_scored += 1;
                }
            }
            TeamSide::Away => {
                self.away_taken += 1;
                if converted {
                    self.away_scored += 1;
                }
            }
        }
    }
}
