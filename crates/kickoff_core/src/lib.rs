//! # kickoff_core - Deterministic Football Match Simulation Core
//!
//! 22명의 에이전트, 공 하나, 규칙 상태 기계를 고정 타임스텝으로 진행하는
//! 축구 경기 시뮬레이션 코어.
//!
//! ## Features
//! - 100% deterministic simulation (same seed + same inputs = same state)
//! - Utility-scored decisions with top-k weighted selection
//! - Formation / tactics driven grid positioning
//! - Kickoff, restarts, half-time, extra time and penalty shootout
//! - JSON API and headless runner friendly snapshots

// Tuning structs are built from defaults and then adjusted
#![allow(clippy::field_reassign_with_default)]
// Physics helpers take many scalar parameters
#![allow(clippy::too_many_arguments)]
// Index loops over the fixed 22-agent roster
#![allow(clippy::needless_range_loop)]

pub mod api;
pub mod data;
pub mod engine;
pub mod error;
pub mod models;

// Re-export main API functions
pub use api::{create_state_from_request, simulate_match_json, MatchRequest, MatchResponse};
pub use data::{GeneratedRoster, RawRosterEntry, RosterEntry, RosterProvider, StaticRoster};
pub use engine::{
    advance, create_initial_state, pause, play_to_completion, resume, summarize, EngineConfig,
    FixedStepLoop, MatchPeriod, MatchSetup, MatchState, MatchSummary, PlayPhase, TICK_DT,
};
pub use error::{ApiError, ConfigError, Result, SetupError};
