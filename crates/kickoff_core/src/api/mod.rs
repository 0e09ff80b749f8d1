pub mod json_api;

pub use json_api::{
    create_state_from_request, simulate_match_json, MatchRequest, MatchResponse, TeamRequest,
    SCHEMA_VERSION,
};
