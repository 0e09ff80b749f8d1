//! Rules: goal line, touchline, restarts, period transitions.
//!
//! Checked right after the ball moves and before anyone may claim it,
//! so a ball that left the pitch is never picked up.

use super::MatchState;
use crate::engine::match_phase::{next_period, MatchPeriod, PlayPhase, RestartKind};
use crate::engine::physics_constants::{field, goal, timers};
use crate::models::{EventDetails, EventType, LogKind, PlayerAction, TeamSide};

impl MatchState {
    /// Returns true when play stopped this tick.
    pub(crate) fn check_boundaries(&mut self) -> bool {
        let (x, y) = self.ball.position;

        let crossed_right = x > field::LENGTH_M;
        let crossed_left = x < 0.0;
        if crossed_right || crossed_left {
            // Home attacks +x: the right goal line belongs to away
            let defending = if crossed_right { TeamSide::Away } else { TeamSide::Home };
            if goal::within_mouth(y) && self.ball.height <= goal::CROSSBAR_HEIGHT_M {
                self.score_goal(defending.opponent());
            } else {
                self.award_goal_line_restart(defending, crossed_right);
            }
            return true;
        }

        if y < 0.0 || y > field::WIDTH_M {
            let team = self
                .ball
                .last_touch
                .map(TeamSide::opponent)
                .unwrap_or(TeamSide::Home);
            self.ball.place(field::clamp(self.ball.position));
            self.start_restart(RestartKind::ThrowIn, team);
            return true;
        }
        false
    }

    fn score_goal(&mut self, scoring: TeamSide) {
        let conceding = scoring.opponent();
        let own_goal = self.ball.last_touch == Some(conceding);
        let scorer = if own_goal {
            None
        } else {
            *self.ball.last_owner_by_team.get(scoring)
        };
        let assist = self
            .ball
            .pending_assist
            .filter(|a| !own_goal && Some(*a) != scorer)
            .filter(|a| self.player_index(*a).map(|i| self.players[i].side) == Some(scoring));

        self.score.add_goal(scoring);
        let rules = self.config.rules.clone();

        if let Some(i) = scorer.and_then(|id| self.player_index(id)) {
            self.players[i].stats.goals += 1;
            self.players[i].mental.confidence += rules.goal_confidence_boost;
        }
        if let Some(i) = assist.and_then(|id| self.player_index(id)) {
            self.players[i].stats.assists += 1;
        }
        for p in &mut self.players {
            if p.side == scoring {
                p.mental.morale += rules.goal_morale_swing;
            } else {
                p.mental.morale -= rules.goal_morale_swing;
            }
            p.mental.clamp();
        }
        *self.momentum.get_mut(scoring) += rules.goal_momentum;

        let scorer_name = self.name_of(scorer);
        let message = if own_goal {
            format!(
                "GOAL! own goal by {}, {} {}-{}",
                self.team_names.get(conceding),
                self.team_names.get(scoring),
                self.score.home,
                self.score.away
            )
        } else {
            match assist {
                Some(a) => format!(
                    "GOAL! {} ({}) scores, assist {}. {}-{}",
                    scorer_name,
                    self.team_names.get(scoring),
                    self.name_of(Some(a)),
                    self.score.home,
                    self.score.away
                ),
                None => format!(
                    "GOAL! {} ({}) scores. {}-{}",
                    scorer_name,
                    self.team_names.get(scoring),
                    self.score.home,
                    self.score.away
                ),
            }
        };
        log::info!("{}' {}", self.minute(), message);
        self.push_log(LogKind::Goal, message);

        let event_type = if own_goal { EventType::OwnGoal } else { EventType::Goal };
        let ev = self
            .event(event_type)
            .with_side(scoring)
            .with_player(scorer)
            .with_secondary(assist);
        self.events.push(ev);

        self.ball.place(field::clamp(self.ball.position));
        self.ball.pending_assist = None;
        for p in &mut self.players {
            p.velocity = (0.0, 0.0);
            p.action = PlayerAction::Idle;
        }
        self.phase = PlayPhase::GoalCelebration { conceded: conceding };
        self.phase_timer = rules.celebration_duration;
    }

    /// Over the goal line outside the goal: corner if the defenders touched it last.
    fn award_goal_line_restart(&mut self, defending: TeamSide, right_end: bool) {
        let attacking = defending.opponent();
        let line_x = if right_end { field::LENGTH_M } else { 0.0 };
        let inward = if right_end { -1.0 } else { 1.0 };

        if self.ball.last_touch == Some(defending) {
            let corner_y = if self.ball.position.1 < field::CENTER_Y {
                timers::CORNER_INSET_M
            } else {
                field::WIDTH_M - timers::CORNER_INSET_M
            };
            self.ball.place((line_x + inward * timers::CORNER_INSET_M, corner_y));
            self.start_restart(RestartKind::Corner, attacking);
        } else {
            let spot = (line_x + inward * field::GOAL_AREA_DEPTH_M, field::CENTER_Y);
            self.ball.place(spot);
            if let Some(gk) = self.nearest_player(spot, |p| p.side == defending && p.role.is_goalkeeper()) {
                let p = &mut self.players[gk];
                p.position = spot;
                p.velocity = (0.0, 0.0);
                let id = p.id;
                self.ball.give_to(id, defending);
                self.ball.position = spot;
            }
            self.start_restart(RestartKind::GoalKick, defending);
        }
    }

    fn start_restart(&mut self, kind: RestartKind, team: TeamSide) {
        let rules = &self.config.rules;
        let (duration, event_type, label) = match kind {
            RestartKind::ThrowIn => (rules.throw_in_duration, EventType::ThrowIn, "throw-in"),
            RestartKind::Corner => (rules.corner_duration, EventType::Corner, "corner"),
            RestartKind::GoalKick => (rules.goal_kick_duration, EventType::GoalKick, "goal kick"),
        };
        {
            let stats = self.stats.get_mut(team);
            match kind {
                RestartKind::ThrowIn => stats.throw_ins += 1,
                RestartKind::Corner => stats.corners += 1,
                RestartKind::GoalKick => stats.goal_kicks += 1,
            }
        }
        self.phase = PlayPhase::Restart { kind, team };
        self.phase_timer = duration;
        self.deadlock_timer = 0.0;

        let ev = self.event(event_type).with_side(team);
        self.events.push(ev);
        let name = self.team_names.get(team).clone();
        self.push_log(LogKind::Restart, format!("{} to {}", label, name));
    }

    /// Dead-ball timer expired: hand the ball to the taker and play on.
    pub(crate) fn take_restart(&mut self, kind: RestartKind, team: TeamSide) {
        if kind != RestartKind::GoalKick || self.ball.owner.is_none() {
            let spot = self.ball.position;
            let taker = self
                .nearest_player(spot, |p| p.side == team && !p.role.is_goalkeeper())
                .or_else(|| self.nearest_player(spot, |p| p.side == team));
            if let Some(idx) = taker {
                let p = &mut self.players[idx];
                p.position = spot;
                p.velocity = (0.0, 0.0);
                let id = p.id;
                self.ball.give_to(id, team);
                self.ball.position = spot;
            }
        }
        for p in &mut self.players {
            p.action_timer = 0.0;
        }
        self.phase = PlayPhase::InPlay;
        self.phase_timer = 0.0;
    }

    /// Close the running period once the clock passes its end.
    pub(crate) fn check_period_end(&mut self) {
        let Some(end) = self.period.end_seconds(&self.config.rules) else {
            return;
        };
        if self.clock < end {
            return;
        }
        self.clock = end;

        let ended = self.period;
        let next = next_period(ended, &self.config.rules, self.score.is_draw());
        let summary = format!(
            "end of {}: {} {}-{} {}",
            ended.label(),
            self.team_names.home,
            self.score.home,
            self.score.away,
            self.team_names.away
        );
        log::info!("{}", summary);
        self.push_log(LogKind::Period, summary);
        let ev = self.event(EventType::PeriodEnd).with_details(EventDetails {
            period: Some(ended),
            ..Default::default()
        });
        self.events.push(ev);

        self.period = next;
        self.paused = true;
        match next {
            MatchPeriod::ExtraTimeFirstHalf => self.reset_for_kickoff(self.first_kickoff),
            MatchPeriod::PenaltyShootout => self.prepare_shootout(),
            MatchPeriod::Finished => {
                self.push_log(LogKind::Period, "full-time".to_string());
            }
            _ => {}
        }
    }

    /// Unpause; leaving a break starts the next period with a kickoff.
    pub fn resume(&mut self) {
        if self.is_finished() {
            return;
        }
        self.paused = false;
        let second_kickoff = self.first_kickoff.opponent();
        match self.period {
            MatchPeriod::HalfTime => {
                self.period = MatchPeriod::SecondHalf;
                self.reset_for_kickoff(second_kickoff);
            }
            MatchPeriod::ExtraTimeHalfTime => {
                self.period = MatchPeriod::ExtraTimeSecondHalf;
                self.reset_for_kickoff(second_kickoff);
            }
            _ => {}
        }
    }
}
