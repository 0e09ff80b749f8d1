use serde::{Deserialize, Serialize};

use crate::data::{GeneratedRoster, RawRosterEntry, RosterEntry, RosterProvider, StaticRoster};
use crate::engine::config::EngineConfig;
use crate::engine::match_sim::{play_to_completion, MatchSetup, MatchState};
use crate::engine::stats::{summarize, MatchSummary};
use crate::error::{ApiError, SetupError};
use crate::models::{DefensiveLine, Formation, Mentality, Pressing, TeamSide, TeamTactics, Width};

pub const SCHEMA_VERSION: u32 = 1;

fn default_formation() -> String {
    Formation::default().name().to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchRequest {
    pub schema_version: u32,
    pub seed: u64,
    pub home: TeamRequest,
    pub away: TeamRequest,
    /// Full engine config; defaults when absent
    #[serde(default)]
    pub config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamRequest {
    pub name: String,
    /// "4-4-2", "4-3-3", ... Unknown names fall back to 4-4-2.
    #[serde(default = "default_formation")]
    pub formation: String,
    #[serde(default)]
    pub mentality: Mentality,
    #[serde(default)]
    pub width: Width,
    #[serde(default)]
    pub pressing: Pressing,
    #[serde(default)]
    pub defensive_line: DefensiveLine,
    /// Explicit eleven; generated from the seed when absent
    #[serde(default)]
    pub players: Option<Vec<RawRosterEntry>>,
}

impl TeamRequest {
    pub fn tactics(&self) -> TeamTactics {
        TeamTactics {
            formation: Formation::parse_or_default(&self.formation),
            mentality: self.mentality,
            width: self.width,
            pressing: self.pressing,
            defensive_line: self.defensive_line,
        }
    }

    fn roster(
        &self,
        side: TeamSide,
        formation: Formation,
        generated: &GeneratedRoster,
    ) -> Result<Vec<RosterEntry>, SetupError> {
        match &self.players {
            Some(raw) => raw.iter().map(RawRosterEntry::normalize).collect(),
            None => generated.roster(side, formation),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchResponse {
    pub schema_version: u32,
    #[serde(flatten)]
    pub summary: MatchSummary,
}

/// Validate a request and build its kickoff state.
pub fn create_state_from_request(request: &MatchRequest) -> Result<MatchState, ApiError> {
    if request.schema_version != SCHEMA_VERSION {
        return Err(ApiError::UnsupportedSchema(request.schema_version));
    }
    let config = match &request.config {
        Some(config) => {
            config.validate()?;
            config.clone()
        }
        None => EngineConfig::default(),
    };

    let setup = MatchSetup {
        seed: request.seed,
        home_name: request.home.name.clone(),
        away_name: request.away.name.clone(),
        home_tactics: request.home.tactics(),
        away_tactics: request.away.tactics(),
        config,
        kickoff_team: TeamSide::Home,
    };

    let generated = GeneratedRoster::new(request.seed);
    let home = request
        .home
        .roster(TeamSide::Home, setup.home_tactics.formation, &generated)?;
    let away = request
        .away
        .roster(TeamSide::Away, setup.away_tactics.formation, &generated)?;

    Ok(MatchState::create(&setup, &StaticRoster::new(home, away))?)
}

/// Play a whole match from a JSON request and return the summary as JSON.
pub fn simulate_match_json(request_json: &str) -> Result<String, ApiError> {
    let request: MatchRequest = serde_json::from_str(request_json)?;
    let state = create_state_from_request(&request)?;
    let finished = play_to_completion(state);

    let response = MatchResponse {
        schema_version: SCHEMA_VERSION,
        summary: summarize(&finished),
    };
    Ok(serde_json::to_string(&response)?)
}
