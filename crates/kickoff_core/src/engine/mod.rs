pub mod ball;
pub mod config; // Tuning configuration (presets, YAML/JSON loading)
pub mod decision;
pub mod formation;
pub mod kicking;
pub mod match_phase;
pub mod match_sim;
pub mod physics_constants;
pub mod player_motion_params; // Ability → motion params
pub mod player_physics; // Player inertia
pub mod positioning;
pub mod sim_rng;
pub mod sort_keys; // Stable sort tie-breaker keys
pub mod stamina;
pub mod stats;
pub mod steering; // seek, arrive, pursuit
pub mod timestep;

#[cfg(test)]
pub(crate) mod test_fixtures;

pub use config::{
    ActionDurations, DecisionConfig, EngineConfig, KickConfig, PhysicsConfig, ResolutionConfig,
    RulesConfig, StaminaConfig,
};
pub use decision::{evaluate_actions, ActionChoice, DecisionContext};
pub use match_phase::{next_period, MatchPeriod, PlayPhase, RestartKind};
pub use match_sim::{
    advance, create_initial_state, pause, play_to_completion, resume, shootout_winner, BallView,
    ClockView, MatchSetup, MatchState, PlayerView,
};
pub use sim_rng::SimRng;
pub use stats::{summarize, MatchSummary};
pub use timestep::{FixedStepLoop, MAX_TICK_DT, TICK_DT};
