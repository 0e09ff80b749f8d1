//! Match simulation state and the per-tick pipeline.
//!
//! One `MatchState` aggregate, advanced in whole fixed steps:
//!
//! 1. clock / phase gate (paused, breaks, dead-ball timers)
//! 2. decisions for every agent whose action timer expired
//! 3. movement (tactical targets, pursuit, dribble)
//! 4. ball: glued to the owner or loose flight
//! 5. rules: goal line, touchline, restarts
//! 6. possession claims and crediting
//! 7. possession time, period end
//!
//! `advance` is the pure wrapper: it clones, steps, and returns the new state.

mod actions;
mod penalties;
mod possession;
mod rules;
mod state_accessors;

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod scenario_tests;

pub use penalties::shootout_winner;
pub use state_accessors::{BallView, ClockView, PlayerView};

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::ball::{attach_to_owner, step_loose_ball};
use super::config::EngineConfig;
use super::decision::{evaluate_actions, DecisionContext};
use super::formation::{assign_lanes, base_position};
use super::match_phase::{MatchPeriod, PlayPhase};
use super::physics_constants::field;
use super::player_motion_params::motion_params;
use super::player_physics::step_player;
use super::positioning::target_for;
use super::sim_rng::SimRng;
use super::sort_keys::compare_distance_asc_stable;
use super::stamina::update_fatigue;
use super::steering::distance;
use super::timestep::MAX_TICK_DT;
use crate::data::{validate_roster, GeneratedRoster, RosterProvider};
use crate::error::SetupError;
use crate::models::{
    Ball, EventType, LogKind, MatchEvent, MatchLog, MentalState, PenaltyTally, PerSide, Player,
    PlayerAction, PlayerId, PlayerMatchStats, Score, TeamSide, TeamStats, TeamTactics,
};

/// Everything needed to build the kickoff state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchSetup {
    pub seed: u64,
    pub home_name: String,
    pub away_name: String,
    pub home_tactics: TeamTactics,
    pub away_tactics: TeamTactics,
    pub config: EngineConfig,
    /// Side taking the first-half kickoff
    pub kickoff_team: TeamSide,
}

impl Default for MatchSetup {
    fn default() -> Self {
        Self {
            seed: 0,
            home_name: "Home".to_string(),
            away_name: "Away".to_string(),
            home_tactics: TeamTactics::default(),
            away_tactics: TeamTactics::default(),
            config: EngineConfig::default(),
            kickoff_team: TeamSide::Home,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub config: EngineConfig,
    pub team_names: PerSide<String>,
    pub tactics: PerSide<TeamTactics>,
    /// 22 agents, home slots first
    pub players: Vec<Player>,
    pub ball: Ball,
    pub score: Score,
    pub stats: PerSide<TeamStats>,
    /// Simulated match-clock seconds
    pub clock: f32,
    pub period: MatchPeriod,
    pub phase: PlayPhase,
    /// Counts down during non-play phases
    pub phase_timer: f32,
    pub paused: bool,
    /// Seconds the loose ball has been nearly still
    pub deadlock_timer: f32,
    pub momentum: PerSide<f32>,
    pub penalties: PenaltyTally,
    pub first_kickoff: TeamSide,
    /// Newest last
    pub logs: Vec<MatchLog>,
    pub events: Vec<MatchEvent>,
    pub rng: SimRng,
    pub tick: u64,
}

/// Build the kickoff state, rejecting malformed setup up front.
pub fn create_initial_state(setup: &MatchSetup, roster: &dyn RosterProvider) -> Result<MatchState, SetupError> {
    MatchState::create(setup, roster)
}

/// Pure step: returns the state one fixed step later.
pub fn advance(state: &MatchState, dt: f32) -> MatchState {
    let mut next = state.clone();
    next.step(dt);
    next
}

/// External control: leave a break / unpause.
pub fn resume(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.resume();
    next
}

pub fn pause(state: &MatchState) -> MatchState {
    let mut next = state.clone();
    next.set_paused(true);
    next
}

/// Play until full-time, resuming at every break.
pub fn play_to_completion(mut state: MatchState) -> MatchState {
    let dt = state.config.rules.tick_dt;
    let rules = &state.config.rules;
    let regulation = (2 * rules.half_length_minutes + 2 * rules.extra_time_half_minutes) as f32 * 60.0;
    let max_steps = (regulation / dt) as u64 + 200_000;

    let mut steps = 0u64;
    while !state.is_finished() {
        if state.is_paused() {
            state.resume();
        }
        state.step(dt);
        steps += 1;
        if steps > max_steps {
            log::warn!("match did not finish within {} steps; stopping", max_steps);
            break;
        }
    }
    state
}

impl MatchState {
    pub fn create(setup: &MatchSetup, roster: &dyn RosterProvider) -> Result<Self, SetupError> {
        setup
            .config
            .validate()
            .map_err(|e| SetupError::Config(e.to_string()))?;

        let tactics = PerSide::new(setup.home_tactics, setup.away_tactics);
        let mut players = Vec::with_capacity(22);
        for side in TeamSide::BOTH {
            let entries = roster.roster(side, tactics.get(side).formation)?;
            validate_roster(side, &entries)?;

            let roles: Vec<_> = entries.iter().map(|e| e.role).collect();
            let lanes = assign_lanes(&roles);
            let id_offset = side.index() as u8 * 11;
            for (slot, (entry, lane)) in entries.into_iter().zip(lanes).enumerate() {
                let base = base_position(entry.role, lane, side);
                players.push(Player {
                    id: PlayerId(id_offset + slot as u8 + 1),
                    number: entry.number,
                    name: entry.name,
                    side,
                    role: entry.role,
                    lane,
                    position: base,
                    velocity: (0.0, 0.0),
                    base_position: base,
                    target: None,
                    action: PlayerAction::Idle,
                    action_timer: 0.0,
                    claim_cooldown: 0.0,
                    attributes: entry.attributes,
                    mental: MentalState::default(),
                    stats: PlayerMatchStats::default(),
                });
            }
        }

        let mut state = Self {
            config: setup.config.clone(),
            team_names: PerSide::new(setup.home_name.clone(), setup.away_name.clone()),
            tactics,
            players,
            ball: Ball::default(),
            score: Score::default(),
            stats: PerSide::default(),
            clock: 0.0,
            period: MatchPeriod::FirstHalf,
            phase: PlayPhase::InPlay,
            phase_timer: 0.0,
            paused: false,
            deadlock_timer: 0.0,
            momentum: PerSide::default(),
            penalties: PenaltyTally::default(),
            first_kickoff: setup.kickoff_team,
            logs: Vec::new(),
            events: Vec::new(),
            rng: SimRng::new(setup.seed),
            tick: 0,
        };
        state.push_log(
            LogKind::Info,
            format!("{} vs {}", state.team_names.home, state.team_names.away),
        );
        state.reset_for_kickoff(setup.kickoff_team);
        log::info!(
            "match created: {} vs {} (seed {})",
            state.team_names.home,
            state.team_names.away,
            setup.seed
        );
        Ok(state)
    }

    /// Default setup with generated squads.
    pub fn with_seed(seed: u64) -> Result<Self, SetupError> {
        let setup = MatchSetup {
            seed,
            ..Default::default()
        };
        Self::create(&setup, &GeneratedRoster::new(seed))
    }

    /// In-place fixed step. A paused or finished match is left untouched.
    pub fn step(&mut self, dt: f32) {
        if self.paused || self.is_finished() {
            return;
        }
        if !(dt > 0.0) || !dt.is_finite() {
            return;
        }
        let dt = dt.min(MAX_TICK_DT);
        self.tick += 1;

        if self.period == MatchPeriod::PenaltyShootout {
            self.step_shootout(dt);
            return;
        }
        if !self.period.is_running() {
            return;
        }

        self.clock += dt;
        self.tick_timers(dt);

        match self.phase {
            PlayPhase::Kickoff { team } => {
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.take_kickoff(team);
                }
            }
            PlayPhase::GoalCelebration { conceded } => {
                self.phase_timer -= dt;
                if self.phase_timer <= 0.0 {
                    self.reset_for_kickoff(conceded);
                }
            }
            PlayPhase::Restart { kind, team } => {
                self.phase_timer -= dt;
                self.reposition_players(dt);
                self.update_ball(dt);
                if self.phase_timer <= 0.0 {
                    self.take_restart(kind, team);
                }
            }
            PlayPhase::InPlay => self.step_in_play(dt),
        }

        self.check_period_end();
    }

    fn step_in_play(&mut self, dt: f32) {
        self.run_decisions();
        self.check_deadlock(dt);
        self.move_players(dt);
        self.update_ball(dt);

        if self.check_boundaries() {
            return;
        }

        self.resolve_possession();
        self.credit_possession(dt);
    }

    fn tick_timers(&mut self, dt: f32) {
        for p in &mut self.players {
            p.action_timer = (p.action_timer - dt).max(0.0);
            p.claim_cooldown = (p.claim_cooldown - dt).max(0.0);
        }
        let decay = self.config.rules.momentum_decay_per_s * dt;
        for side in TeamSide::BOTH {
            let m = self.momentum.get_mut(side);
            *m = (*m - decay).max(0.0);
        }
    }

    /// Every ready agent picks one action.
    fn run_decisions(&mut self) {
        for i in 0..self.players.len() {
            if !self.players[i].is_ready() {
                continue;
            }
            let side = self.players[i].side;
            let choice = {
                let ctx = DecisionContext {
                    player: &self.players[i],
                    players: &self.players,
                    ball: &self.ball,
                    tactics: self.tactics.get(side),
                    cfg: &self.config.decision,
                };
                evaluate_actions(&ctx, &mut self.rng)
            };
            self.apply_choice(i, choice);
        }
    }

    /// Loose ball nearly still for too long: nearest agent is sent after it.
    fn check_deadlock(&mut self, dt: f32) {
        let res = &self.config.resolution;
        if !self.ball.is_loose() || self.ball.speed() >= res.deadlock_speed {
            self.deadlock_timer = 0.0;
            return;
        }
        self.deadlock_timer += dt;
        if self.deadlock_timer <= res.deadlock_threshold {
            return;
        }

        let ball_pos = self.ball.position;
        if let Some(idx) = self.nearest_player(ball_pos, |_| true) {
            let chase = res.deadlock_chase;
            let p = &mut self.players[idx];
            p.action = PlayerAction::Chase;
            p.target = Some(ball_pos);
            p.action_timer = chase;
            log::debug!("deadlock broken: {} sent to the ball", p.id);
        }
        self.deadlock_timer = 0.0;
    }

    fn move_players(&mut self, dt: f32) {
        let ball_pos = self.ball.position;
        let ball_vel = self.ball.velocity;
        let owner = self.ball.owner;
        let physics = &self.config.physics;
        let stamina = &self.config.stamina;
        for p in &mut self.players {
            if matches!(p.action, PlayerAction::Chase | PlayerAction::Tackle | PlayerAction::Press)
                && owner != Some(p.id)
            {
                p.target = Some(ball_pos);
            }
            step_player(p, ball_pos, ball_vel, dt, physics);
            let max_speed = motion_params(&p.attributes, &p.mental, physics).max_speed;
            update_fatigue(p, max_speed, dt, stamina);
        }
    }

    /// Dead-ball phase: everyone except the taker drifts to shape.
    fn reposition_players(&mut self, dt: f32) {
        let ball_pos = self.ball.position;
        let owner = self.ball.owner;
        let physics = &self.config.physics;
        for p in &mut self.players {
            if owner == Some(p.id) {
                p.velocity = (0.0, 0.0);
                p.action = PlayerAction::Hold;
                continue;
            }
            p.action = PlayerAction::Move;
            p.target = Some(target_for(p, self.tactics.get(p.side), ball_pos));
            step_player(p, ball_pos, (0.0, 0.0), dt, physics);
        }
    }

    /// Glue to the owner or integrate the loose ball.
    fn update_ball(&mut self, dt: f32) {
        match self.ball.owner {
            Some(id) => match self.player_index(id) {
                Some(idx) => attach_to_owner(&mut self.ball, &self.players[idx]),
                None => {
                    log::warn!("ball owner {} not on the pitch; ball becomes loose", id);
                    self.ball.owner = None;
                    self.ball.settled = false;
                    step_loose_ball(&mut self.ball, dt, &self.config.physics);
                }
            },
            None => step_loose_ball(&mut self.ball, dt, &self.config.physics),
        }
    }

    fn credit_possession(&mut self, dt: f32) {
        let side = match self.ball.owner.and_then(|id| self.player_index(id)) {
            Some(idx) => Some(self.players[idx].side),
            None => self.ball.last_touch,
        };
        if let Some(side) = side {
            self.stats.get_mut(side).possession_time += dt;
        }
    }

    // ===========================================
    // Helpers
    // ===========================================

    pub(crate) fn player_index(&self, id: PlayerId) -> Option<usize> {
        self.players.iter().position(|p| p.id == id)
    }

    /// Nearest agent passing `filter`; ties keep roster order.
    pub(crate) fn nearest_player<F: Fn(&Player) -> bool>(&self, point: (f32, f32), filter: F) -> Option<usize> {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| filter(p))
            .map(|(i, p)| (i, distance(p.position, point)))
            .min_by(|a, b| compare_distance_asc_stable(a.1, a.0, b.1, b.0))
            .map(|(i, _)| i)
    }

    pub(crate) fn minute(&self) -> u16 {
        (self.clock / 60.0) as u16
    }

    pub(crate) fn push_log(&mut self, kind: LogKind, message: String) {
        self.logs.push(MatchLog {
            time: self.clock,
            minute: self.minute(),
            kind,
            message,
        });
    }

    pub(crate) fn event(&self, event_type: EventType) -> MatchEvent {
        MatchEvent::new(self.clock, self.minute(), event_type)
    }

    pub(crate) fn name_of(&self, id: Option<PlayerId>) -> String {
        id.and_then(|id| self.player_index(id))
            .map(|i| self.players[i].name.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Freeze everyone on their anchors with the ball on the centre spot.
    pub(crate) fn reset_for_kickoff(&mut self, team: TeamSide) {
        for p in &mut self.players {
            p.reset_to_base();
        }
        self.ball.place((field::CENTER_X, field::CENTER_Y));
        self.ball.last_touch = None;
        self.ball.pending_assist = None;
        self.deadlock_timer = 0.0;
        self.phase = PlayPhase::Kickoff { team };
        self.phase_timer = self.config.rules.kickoff_duration;
    }

    /// SHA-256 of the serialized state.
    pub fn state_digest(&self) -> String {
        let bytes = serde_json::to_vec(self).unwrap_or_default();
        let digest = Sha256::digest(&bytes);
        let mut out = String::with_capacity(digest.len() * 2);
        for b in digest {
            out.push_str(&format!("{:02x}", b));
        }
        out
    }
}
