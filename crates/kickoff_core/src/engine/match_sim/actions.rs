//! Applying a chosen action: timers, targets, and the kick itself.

use super::MatchState;
use crate::engine::decision::ActionChoice;
use crate::engine::kicking::{kick_ball, KickKind};
use crate::engine::match_phase::PlayPhase;
use crate::engine::physics_constants::field;
use crate::models::{EventDetails, EventType, LastKick, LogKind, PlayerAction, Role, TeamSide};

/// Receiver keeps chasing the pass for at least this long.
const RECEIVE_WINDOW_S: f32 = 1.0;

impl MatchState {
    pub(crate) fn apply_choice(&mut self, idx: usize, choice: ActionChoice) {
        let duration = self.config.decision.actions.of(choice.action);
        let is_owner = self.ball.owner == Some(self.players[idx].id);
        {
            let p = &mut self.players[idx];
            p.action = choice.action;
            p.target = choice.target;
            p.action_timer = duration;
        }

        if choice.action.is_kick() {
            if is_owner {
                self.execute_kick(idx, choice, duration);
            } else {
                self.players[idx].action = PlayerAction::Hold;
            }
        }
    }

    fn execute_kick(&mut self, idx: usize, choice: ActionChoice, duration: f32) {
        let kind = match choice.action {
            PlayerAction::ShortPass => KickKind::ShortPass,
            PlayerAction::LongPass => KickKind::LongPass,
            _ => KickKind::Shot,
        };
        let kicker_id = self.players[idx].id;
        let side = self.players[idx].side;
        let from = self.ball.position;
        let target = choice.target.unwrap_or(from);

        let outcome = kick_ball(
            &self.players[idx],
            from,
            kind,
            target,
            choice.power.unwrap_or(1.0),
            &self.config.kick,
            &mut self.rng,
        );

        let last_kick = match kind {
            KickKind::Shot => LastKick::Shot { shooter: kicker_id },
            _ => LastKick::Pass { passer: kicker_id },
        };
        self.ball.release(last_kick);
        self.ball.velocity = outcome.velocity;
        self.ball.height = outcome.height;

        let kicker = &mut self.players[idx];
        kicker.claim_cooldown = duration;
        kicker.velocity = (0.0, 0.0);

        match kind {
            KickKind::Shot => {
                kicker.stats.shots += 1;
                if outcome.on_target {
                    kicker.stats.shots_on_target += 1;
                }
                let name = kicker.name.clone();
                let team = self.stats.get_mut(side);
                team.shots += 1;
                if outcome.on_target {
                    team.shots_on_target += 1;
                }
                let verdict = if outcome.on_target { "on target" } else { "off target" };
                self.push_log(LogKind::Chance, format!("{} ({}) shoots, {}", name, side, verdict));
                let ev = self
                    .event(EventType::Shot)
                    .with_side(side)
                    .with_player(Some(kicker_id))
                    .with_details(EventDetails {
                        on_target: Some(outcome.on_target),
                        ..Default::default()
                    });
                self.events.push(ev);
            }
            KickKind::ShortPass | KickKind::LongPass => {
                kicker.stats.passes_attempted += 1;
                self.stats.get_mut(side).passes += 1;
                if let Some(receiver) = choice.receiver.and_then(|id| self.player_index(id)) {
                    let r = &mut self.players[receiver];
                    r.action = PlayerAction::Chase;
                    r.target = Some(target);
                    r.action_timer = r.action_timer.max(RECEIVE_WINDOW_S);
                }
            }
        }
    }

    /// Kick-off taker: a striker, else attacking/central midfielder, else any outfielder.
    fn kickoff_taker(&self, team: TeamSide) -> Option<usize> {
        const PREFERENCE: [Role; 3] = [Role::ST, Role::AMC, Role::MC];
        let centre = (field::CENTER_X, field::CENTER_Y);
        for role in PREFERENCE {
            let found = self.nearest_player(centre, |p| p.side == team && p.role == role);
            if found.is_some() {
                return found;
            }
        }
        self.nearest_player(centre, |p| p.side == team && !p.role.is_goalkeeper())
    }

    pub(crate) fn take_kickoff(&mut self, team: TeamSide) {
        self.phase = PlayPhase::InPlay;
        self.phase_timer = 0.0;

        let Some(idx) = self.kickoff_taker(team) else {
            log::warn!("{} has no outfield player to kick off", team);
            return;
        };
        let centre = (field::CENTER_X, field::CENTER_Y);
        let p = &mut self.players[idx];
        p.position = (centre.0 - team.direction() * 0.5, centre.1);
        p.velocity = (0.0, 0.0);
        let id = p.id;
        self.ball.give_to(id, team);
        self.ball.position = centre;

        let ev = self.event(EventType::KickOff).with_side(team).with_player(Some(id));
        self.events.push(ev);
        log::debug!("kick-off {} by {} at {:.1}s", team, id, self.clock);
    }
}
