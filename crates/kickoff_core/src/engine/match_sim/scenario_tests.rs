//! Scripted match situations: goals, restarts, breaks, deadlock, shootout.

use super::*;
use crate::data::{RosterEntry, StaticRoster};
use crate::engine::match_phase::RestartKind;
use crate::engine::physics_constants::goal;
use crate::engine::test_fixtures::in_play_state;
use crate::engine::timestep::TICK_DT;
use crate::models::{Formation, LastKick, PlayerAttributes, Role};

/// In-play state with a loose, still ball.
fn loose_ball_state(seed: u64, pos: (f32, f32)) -> MatchState {
    let mut s = in_play_state(seed);
    s.ball.owner = None;
    s.ball.place(pos);
    s
}

fn index_of(s: &MatchState, side: TeamSide, role: Role) -> usize {
    s.players
        .iter()
        .position(|p| p.side == side && p.role == role)
        .unwrap()
}

fn touched_by(s: &mut MatchState, idx: usize) {
    let id = s.players[idx].id;
    let side = s.players[idx].side;
    let pos = s.ball.position;
    s.ball.give_to(id, side);
    s.ball.owner = None;
    s.ball.position = pos;
}

/// Push everyone except `keep` well clear of `pos`.
fn isolate(s: &mut MatchState, pos: (f32, f32), keep: &[usize]) {
    for (i, p) in s.players.iter_mut().enumerate() {
        if !keep.contains(&i) && distance(p.position, pos) < 8.0 {
            let dy = if pos.1 < field::CENTER_Y { 12.0 } else { -12.0 };
            p.position = (p.position.0, pos.1 + dy);
        }
    }
}

#[test]
fn test_goal_scored_past_right_goal_line() {
    let mut s = loose_ball_state(11, (field::LENGTH_M + 0.1, field::CENTER_Y));
    let st = index_of(&s, TeamSide::Home, Role::ST);
    touched_by(&mut s, st);
    let scorer = s.players[st].id;

    let next = advance(&s, TICK_DT);

    assert_eq!(next.score.home, s.score.home + 1);
    assert_eq!(next.score.away, s.score.away);
    assert_eq!(next.phase, PlayPhase::GoalCelebration { conceded: TeamSide::Away });
    assert_eq!(next.logs.last().unwrap().kind, LogKind::Goal);

    let ev = next.events.last().unwrap();
    assert_eq!(ev.event_type, EventType::Goal);
    assert_eq!(ev.player, Some(scorer));
    assert_eq!(next.players[st].stats.goals, 1);
    assert!(field::contains(next.ball.position));
}

#[test]
fn test_goal_credits_assist_to_other_teammate() {
    let mut s = loose_ball_state(12, (field::LENGTH_M + 0.1, field::CENTER_Y + 1.0));
    let st = index_of(&s, TeamSide::Home, Role::ST);
    let mc = index_of(&s, TeamSide::Home, Role::MC);
    touched_by(&mut s, st);
    s.ball.pending_assist = Some(s.players[mc].id);

    let next = advance(&s, TICK_DT);
    let ev = next.events.last().unwrap();
    assert_eq!(ev.secondary, Some(s.players[mc].id));
    assert_eq!(next.players[mc].stats.assists, 1);
}

#[test]
fn test_own_goal_has_no_named_scorer() {
    let mut s = loose_ball_state(13, (field::LENGTH_M + 0.1, field::CENTER_Y));
    let dc = index_of(&s, TeamSide::Away, Role::DC);
    touched_by(&mut s, dc);

    let next = advance(&s, TICK_DT);
    assert_eq!(next.score.home, 1);
    let ev = next.events.last().unwrap();
    assert_eq!(ev.event_type, EventType::OwnGoal);
    assert_eq!(ev.player, None);
    assert!(next.players.iter().all(|p| p.stats.goals == 0));
}

#[test]
fn test_ball_over_crossbar_is_not_a_goal() {
    let mut s = loose_ball_state(14, (field::LENGTH_M + 0.1, field::CENTER_Y));
    let st = index_of(&s, TeamSide::Home, Role::ST);
    touched_by(&mut s, st);
    s.ball.height = goal::CROSSBAR_HEIGHT_M + 1.0;
    s.ball.settled = false;

    let next = advance(&s, TICK_DT);
    assert_eq!(next.score.home, 0);
    assert!(matches!(
        next.phase,
        PlayPhase::Restart {
            kind: RestartKind::GoalKick,
            team: TeamSide::Away
        }
    ));
}

#[test]
fn test_kickoff_reset_after_celebration() {
    let mut s = loose_ball_state(21, (field::LENGTH_M + 0.1, field::CENTER_Y));
    let st = index_of(&s, TeamSide::Home, Role::ST);
    touched_by(&mut s, st);
    s = advance(&s, TICK_DT);
    assert!(matches!(s.phase, PlayPhase::GoalCelebration { .. }));

    let mut ticks = 0;
    while !matches!(s.phase, PlayPhase::Kickoff { .. }) {
        s = advance(&s, TICK_DT);
        ticks += 1;
        assert!(ticks < 200, "celebration never ended");
    }

    assert_eq!(s.phase, PlayPhase::Kickoff { team: TeamSide::Away });
    for p in &s.players {
        assert_eq!(p.position, p.base_position, "{} off its anchor", p.id);
    }
    assert_eq!(s.ball.position, (field::CENTER_X, field::CENTER_Y));
    assert_eq!(s.ball.velocity, (0.0, 0.0));
    assert_eq!(s.ball.owner, None);
}

#[test]
fn test_conceding_side_kicks_off_after_frozen_second() {
    let mut s = in_play_state(22);
    s.reset_for_kickoff(TeamSide::Away);
    let frozen = s.players.clone();

    s = advance(&s, TICK_DT);
    for (now, before) in s.players.iter().zip(&frozen) {
        assert_eq!(now.position, before.position);
    }

    for _ in 0..40 {
        s = advance(&s, TICK_DT);
    }
    assert_eq!(s.phase, PlayPhase::InPlay);
    let kick_off = s.events.iter().rev().find(|e| e.event_type == EventType::KickOff).unwrap();
    assert_eq!(kick_off.side, Some(TeamSide::Away));
}

#[test]
fn test_throw_in_clamps_and_stops_ball() {
    let mut s = loose_ball_state(31, (50.0, -1.0));
    let dl = index_of(&s, TeamSide::Home, Role::DL);
    touched_by(&mut s, dl);
    s.ball.velocity = (3.0, -2.0);
    s.ball.settled = false;

    let next = advance(&s, TICK_DT);

    assert!((0.0..=field::WIDTH_M).contains(&next.ball.position.1));
    assert_eq!(next.ball.velocity, (0.0, 0.0));
    assert_eq!(next.ball.owner, None);
    assert_eq!(
        next.phase,
        PlayPhase::Restart {
            kind: RestartKind::ThrowIn,
            team: TeamSide::Away
        }
    );
    assert_eq!(next.stats.away.throw_ins, 1);
    assert_eq!(next.logs.last().unwrap().kind, LogKind::Restart);
}

#[test]
fn test_throw_in_taker_gets_the_ball() {
    let mut s = loose_ball_state(32, (40.0, -0.5));
    let dl = index_of(&s, TeamSide::Home, Role::DL);
    touched_by(&mut s, dl);
    s.ball.velocity = (0.0, -1.0);
    s.ball.settled = false;

    for _ in 0..60 {
        s = advance(&s, TICK_DT);
        if s.phase.is_in_play() {
            break;
        }
    }
    assert!(s.phase.is_in_play());
    let owner = s.ball.owner.and_then(|id| s.player_index(id)).unwrap();
    assert_eq!(s.players[owner].side, TeamSide::Away);
}

#[test]
fn test_defender_last_touch_gives_corner() {
    let mut s = loose_ball_state(41, (field::LENGTH_M + 0.3, 10.0));
    let dc = index_of(&s, TeamSide::Away, Role::DC);
    touched_by(&mut s, dc);

    let next = advance(&s, TICK_DT);
    assert_eq!(
        next.phase,
        PlayPhase::Restart {
            kind: RestartKind::Corner,
            team: TeamSide::Home
        }
    );
    assert_eq!(next.ball.position, (field::LENGTH_M - 1.0, 1.0));
    assert_eq!(next.stats.home.corners, 1);
}

#[test]
fn test_attacker_last_touch_gives_goal_kick() {
    let mut s = loose_ball_state(42, (field::LENGTH_M + 0.3, 60.0));
    let st = index_of(&s, TeamSide::Home, Role::ST);
    touched_by(&mut s, st);

    let next = advance(&s, TICK_DT);
    assert_eq!(
        next.phase,
        PlayPhase::Restart {
            kind: RestartKind::GoalKick,
            team: TeamSide::Away
        }
    );
    let gk = index_of(&next, TeamSide::Away, Role::GK);
    assert_eq!(next.ball.owner, Some(next.players[gk].id));
    assert_eq!(next.players[gk].position, (field::LENGTH_M - field::GOAL_AREA_DEPTH_M, field::CENTER_Y));
}

#[test]
fn test_deadlock_sends_nearest_agent_to_ball() {
    let ball_pos = (60.0, 4.0);
    let mut s = loose_ball_state(51, ball_pos);
    s.deadlock_timer = s.config.resolution.deadlock_threshold - 0.01;
    let nearest = s.nearest_player(ball_pos, |_| true).unwrap();
    assert!(distance(s.players[nearest].position, ball_pos) > s.config.resolution.reach);

    let next = advance(&s, TICK_DT);
    assert_eq!(next.players[nearest].target, Some(ball_pos));
    assert_eq!(next.players[nearest].action, PlayerAction::Chase);
    assert_eq!(next.deadlock_timer, 0.0);
}

#[test]
fn test_deadlock_timer_resets_when_ball_owned() {
    let mut s = in_play_state(52);
    s.deadlock_timer = 2.0;
    let next = advance(&s, TICK_DT);
    assert_eq!(next.deadlock_timer, 0.0);
}

#[test]
fn test_half_time_pauses_then_second_half_kickoff_swaps() {
    let mut s = in_play_state(61);
    s.clock = 45.0 * 60.0 - 0.01;

    s = advance(&s, TICK_DT);
    assert_eq!(s.period, MatchPeriod::HalfTime);
    assert!(s.is_paused());
    assert_eq!(s.clock, 2700.0);
    assert_eq!(s.logs.last().unwrap().kind, LogKind::Period);

    let frozen = advance(&s, TICK_DT);
    assert_eq!(frozen, s);

    s = resume(&s);
    assert_eq!(s.period, MatchPeriod::SecondHalf);
    assert!(!s.is_paused());
    assert_eq!(s.phase, PlayPhase::Kickoff { team: TeamSide::Away });
}

#[test]
fn test_full_time_is_terminal() {
    let mut s = in_play_state(62);
    s.period = MatchPeriod::SecondHalf;
    s.clock = 90.0 * 60.0 - 0.01;
    s.score.home = 1;

    s = advance(&s, TICK_DT);
    assert!(s.is_finished());
    let again = advance(&resume(&s), TICK_DT);
    assert_eq!(again, s);
}

#[test]
fn test_draw_goes_to_shootout_and_finishes() {
    let mut s = in_play_state(63);
    s.config.rules.allow_penalty_shootout = true;
    s.period = MatchPeriod::SecondHalf;
    s.clock = 90.0 * 60.0 - 0.01;

    s = advance(&s, TICK_DT);
    assert_eq!(s.period, MatchPeriod::PenaltyShootout);

    let done = play_to_completion(s);
    assert!(done.is_finished());
    let winner = done.penalties.winner.unwrap();
    assert!(done.penalties.scored(winner) > done.penalties.scored(winner.opponent()));
    assert!(done.penalties.home_taken.abs_diff(done.penalties.away_taken) <= 1);
    assert_eq!(done.score.home, done.score.away);
}

#[test]
fn test_draw_with_extra_time_restarts_from_kickoff() {
    let mut s = in_play_state(64);
    s.config.rules.allow_extra_time = true;
    s.period = MatchPeriod::SecondHalf;
    s.clock = 90.0 * 60.0 - 0.01;

    s = advance(&s, TICK_DT);
    assert_eq!(s.period, MatchPeriod::ExtraTimeFirstHalf);
    assert!(s.is_paused());
    assert_eq!(s.phase, PlayPhase::Kickoff { team: TeamSide::Home });

    s = resume(&s);
    let next = advance(&s, TICK_DT);
    assert!(next.clock > s.clock);
}

#[test]
fn test_dangling_owner_releases_ball() {
    let mut s = in_play_state(71);
    s.ball.owner = Some(PlayerId(99));
    let next = advance(&s, TICK_DT);
    assert!(next.ball.owner.map_or(true, |id| next.player_index(id).is_some()));
}

#[test]
fn test_advance_is_pure_and_ignores_bad_dt() {
    let s = in_play_state(72);
    let copy = s.clone();
    let _ = advance(&s, TICK_DT);
    assert_eq!(s, copy);

    assert_eq!(advance(&s, f32::NAN), s);
    assert_eq!(advance(&s, 0.0), s);
    assert_eq!(advance(&s, -1.0), s);
}

#[test]
fn test_large_dt_is_clamped() {
    let s = in_play_state(73);
    let next = advance(&s, 10.0);
    assert!((next.clock - s.clock - MAX_TICK_DT).abs() < 1e-4);
}

#[test]
fn test_pass_completion_credits_passer() {
    let mut s = loose_ball_state(81, (30.0, 30.0));
    let mc = index_of(&s, TeamSide::Home, Role::MC);
    let ml = index_of(&s, TeamSide::Home, Role::ML);
    let passer = s.players[mc].id;
    touched_by(&mut s, mc);
    s.ball.last_kick = LastKick::Pass { passer };
    s.players[ml].position = (30.5, 30.0);
    s.players[ml].attributes.first_touch = 20;
    for (i, p) in s.players.iter_mut().enumerate() {
        if i != ml && distance(p.position, (30.0, 30.0)) < 3.0 {
            p.position = (p.position.0, p.position.1 + 10.0);
        }
    }

    let next = advance(&s, TICK_DT);
    assert_eq!(next.ball.owner, Some(next.players[ml].id));
    assert_eq!(next.players[mc].stats.passes_completed, 1);
    assert_eq!(next.stats.home.passes_completed, 1);
    assert_eq!(next.ball.pending_assist, Some(passer));
}

#[test]
fn test_create_rejects_bad_roster() {
    let setup = MatchSetup::default();
    let entry = |n: u8, role| RosterEntry {
        number: n,
        name: format!("P{}", n),
        role,
        attributes: PlayerAttributes::default(),
    };
    let squad: Vec<RosterEntry> = Formation::F442
        .roles()
        .iter()
        .enumerate()
        .map(|(i, &r)| entry(i as u8 + 1, r))
        .collect();
    let mut no_keeper = squad.clone();
    no_keeper[0].role = Role::DC;

    let err = MatchState::create(&setup, &StaticRoster::new(squad.clone(), no_keeper)).unwrap_err();
    assert_eq!(
        err,
        SetupError::GoalkeeperCount {
            side: TeamSide::Away,
            found: 0
        }
    );
    assert!(MatchState::create(&setup, &StaticRoster::new(squad.clone(), squad)).is_ok());
}

#[test]
fn test_create_rejects_invalid_config() {
    let mut setup = MatchSetup::default();
    setup.config.rules.tick_dt = 0.0;
    let err = MatchState::create(&setup, &GeneratedRoster::new(1)).unwrap_err();
    assert!(matches!(err, SetupError::Config(_)));
}

#[test]
fn test_initial_state_layout() {
    let s = MatchState::with_seed(5).unwrap();
    assert_eq!(s.players.len(), 22);
    assert!(s.players[..11].iter().all(|p| p.side == TeamSide::Home));
    assert!(s.players[11..].iter().all(|p| p.side == TeamSide::Away));
    assert_eq!(s.phase, PlayPhase::Kickoff { team: TeamSide::Home });
    assert_eq!(s.period, MatchPeriod::FirstHalf);
    assert_eq!(s.clock, 0.0);
}

#[test]
fn test_full_matches_have_plausible_totals() {
    let mut shots = 0u32;
    let mut on_target = 0u32;
    let mut dead_ball_restarts = 0u32;

    for seed in [2024, 7, 31] {
        let done = play_to_completion(MatchState::with_seed(seed).unwrap());
        assert!(done.is_finished());
        assert_eq!(done.clock, 90.0 * 60.0);
        let poss = done.stats.home.possession_time + done.stats.away.possession_time;
        assert!(poss <= done.clock + 1e-2);
        assert!(done.stats.home.passes + done.stats.away.passes > 0);

        let goals = done.score.home as u32 + done.score.away as u32;
        assert!(goals < 15, "seed {} produced {} goals", seed, goals);
        for st in [&done.stats.home, &done.stats.away] {
            assert!(st.shots_on_target <= st.shots);
            shots += st.shots as u32;
            on_target += st.shots_on_target as u32;
            dead_ball_restarts += st.corners as u32 + st.goal_kicks as u32;
        }
    }

    assert!(shots < 3 * 120, "{} shots over three matches", shots);
    // 빗나가는 슈팅이 있어야 코너킥/골킥이 나온다
    assert!(on_target < shots);
    assert!(dead_ball_restarts > 0);
}

#[test]
fn test_deflected_pass_is_not_completed_for_the_deflecting_side() {
    let pos = (40.0, 30.0);
    let mut s = loose_ball_state(91, pos);
    let mc = index_of(&s, TeamSide::Away, Role::MC);
    let dc = index_of(&s, TeamSide::Home, Role::DC);
    let dl = index_of(&s, TeamSide::Home, Role::DL);
    let passer = s.players[mc].id;
    touched_by(&mut s, mc);
    s.ball.last_kick = LastKick::Pass { passer };
    s.ball.pending_assist = None;
    s.stats.away.passes = 1;
    s.players[mc].stats.passes_attempted = 1;
    isolate(&mut s, pos, &[dc]);
    s.players[dc].position = pos;

    // 80 m/s is beyond any control roll
    s.ball.velocity = (80.0, 0.0);
    s.ball.settled = false;
    s.resolve_possession();
    assert_eq!(s.ball.owner, None);
    assert_eq!(s.ball.last_touch, Some(TeamSide::Home));
    assert_eq!(s.ball.last_kick, LastKick::None);

    s.ball.position = pos;
    s.ball.velocity = (0.0, 0.0);
    s.players[dl].position = (pos.0 + 0.5, pos.1);
    s.resolve_possession();

    assert_eq!(s.ball.owner, Some(s.players[dl].id));
    assert_eq!(s.players[mc].stats.passes_completed, 0);
    assert_eq!(s.stats.away.passes_completed, 0);
    assert_eq!(s.stats.home.passes_completed, 0);
    assert!(s.stats.away.passes_completed <= s.stats.away.passes);
    assert_ne!(s.ball.pending_assist, Some(passer));
}

#[test]
fn test_recovering_own_deflected_pass_is_not_an_interception() {
    let pos = (60.0, 40.0);
    let mut s = loose_ball_state(92, pos);
    let mc = index_of(&s, TeamSide::Home, Role::MC);
    let ml = index_of(&s, TeamSide::Home, Role::ML);
    let dc = index_of(&s, TeamSide::Away, Role::DC);
    let passer = s.players[mc].id;
    touched_by(&mut s, mc);
    s.ball.last_kick = LastKick::Pass { passer };
    isolate(&mut s, pos, &[dc]);
    s.players[dc].position = pos;

    s.ball.velocity = (80.0, 0.0);
    s.ball.settled = false;
    s.resolve_possession();
    assert_eq!(s.ball.last_touch, Some(TeamSide::Away));

    s.ball.position = pos;
    s.ball.velocity = (0.0, 0.0);
    s.players[ml].position = (pos.0 - 0.5, pos.1);
    s.resolve_possession();

    assert_eq!(s.ball.owner, Some(s.players[ml].id));
    assert_eq!(s.players[ml].stats.interceptions, 0);
    assert_eq!(s.stats.home.interceptions, 0);
    assert!(s.events.iter().all(|e| e.event_type != EventType::Interception));
}

#[test]
fn test_keeper_parries_fast_shot_and_is_credited() {
    let pos = (3.0, field::CENTER_Y);
    let mut s = loose_ball_state(93, pos);
    let gk = index_of(&s, TeamSide::Home, Role::GK);
    let st = index_of(&s, TeamSide::Away, Role::ST);
    let shooter = s.players[st].id;
    touched_by(&mut s, st);
    s.ball.last_kick = LastKick::Shot { shooter };
    isolate(&mut s, pos, &[gk]);
    s.players[gk].position = pos;
    s.ball.velocity = (-80.0, 0.0);
    s.ball.settled = false;

    s.resolve_possession();

    let spread = s.config.resolution.gk_deflect_spread;
    assert_eq!(s.ball.owner, None);
    assert!((s.ball.velocity.0 + 40.0).abs() <= spread);
    assert!(s.ball.velocity.1.abs() <= spread);
    assert_eq!(s.ball.last_touch, Some(TeamSide::Home));
    assert_eq!(s.players[gk].stats.saves, 1);
    assert_eq!(s.stats.home.saves, 1);
    assert_eq!(s.players[gk].claim_cooldown, s.config.resolution.deflect_cooldown);

    let ev = s.events.last().unwrap();
    assert_eq!(ev.event_type, EventType::Save);
    assert_eq!(ev.player, Some(s.players[gk].id));
}

#[test]
fn test_failed_touch_puts_every_contender_on_cooldown() {
    let pos = (40.0, 30.0);
    let mut s = loose_ball_state(94, pos);
    let dc = index_of(&s, TeamSide::Home, Role::DC);
    let dl = index_of(&s, TeamSide::Home, Role::DL);
    isolate(&mut s, pos, &[dc, dl]);
    s.players[dc].position = pos;
    s.players[dl].position = (pos.0 + 0.8, pos.1);
    s.ball.velocity = (80.0, 0.0);
    s.ball.settled = false;

    s.resolve_possession();

    let res = s.config.resolution.clone();
    assert_eq!(s.ball.owner, None);
    for i in [dc, dl] {
        assert_eq!(s.players[i].claim_cooldown, res.deflect_cooldown);
        assert!(s.players[i].action_timer >= res.deflect_cooldown);
    }
    assert!((s.ball.velocity.0 - 80.0).abs() <= res.deflect_spread);
    assert!(s.ball.velocity.1.abs() <= res.deflect_spread);
    assert_eq!(s.stats.home.saves, 0);

    // nobody can touch it again until the cooldown runs out
    s.ball.position = pos;
    s.ball.velocity = (0.0, 0.0);
    s.resolve_possession();
    assert_eq!(s.ball.owner, None);
}

/// Home MC on the ball, away MC tackling from 0.8 m with fixed rolls.
fn tackle_state(seed: u64) -> (MatchState, usize, usize) {
    let pos = (50.0, 30.0);
    let mut s = loose_ball_state(seed, pos);
    let owner = index_of(&s, TeamSide::Home, Role::MC);
    let tackler = index_of(&s, TeamSide::Away, Role::MC);
    isolate(&mut s, pos, &[]);
    s.players[owner].position = pos;
    s.players[tackler].position = (pos.0 + 0.8, pos.1);
    s.players[tackler].action = PlayerAction::Tackle;
    s.players[owner].attributes.first_touch = 10;
    s.players[tackler].attributes.first_touch = 10;
    s.players[tackler].attributes.tackling = 20;
    s.config.resolution.roll_range = 0.0;
    let (id, side) = (s.players[owner].id, s.players[owner].side);
    s.ball.give_to(id, side);
    (s, owner, tackler)
}

#[test]
fn test_owner_bonus_holds_off_equal_tackle() {
    let (mut s, owner, tackler) = tackle_state(95);

    s.resolve_possession();

    assert_eq!(s.ball.owner, Some(s.players[owner].id));
    assert_eq!(s.players[tackler].stats.tackles_attempted, 1);
    assert_eq!(s.players[tackler].stats.tackles_won, 0);
    assert_eq!(s.players[tackler].claim_cooldown, s.config.resolution.deflect_cooldown);
    assert_eq!(s.stats.away.tackles, 0);
}

#[test]
fn test_strong_tackle_wins_the_ball() {
    let (mut s, owner, tackler) = tackle_state(96);
    s.config.resolution.owner_bonus = 0.0;
    s.players[owner].attributes.first_touch = 4;
    let mate = index_of(&s, TeamSide::Home, Role::ST);
    s.ball.pending_assist = Some(s.players[mate].id);

    s.resolve_possession();

    let winner = s.players[tackler].id;
    assert_eq!(s.ball.owner, Some(winner));
    assert_eq!(s.ball.last_touch, Some(TeamSide::Away));
    assert_eq!(s.ball.pending_assist, None);
    assert_eq!(s.players[tackler].stats.tackles_won, 1);
    assert_eq!(s.stats.away.tackles, 1);
    assert_eq!(s.players[owner].claim_cooldown, s.config.resolution.deflect_cooldown);

    let ev = s.events.last().unwrap();
    assert_eq!(ev.event_type, EventType::Tackle);
    assert_eq!(ev.side, Some(TeamSide::Away));
    assert_eq!(ev.player, Some(winner));
    assert_eq!(ev.secondary, Some(s.players[owner].id));
}

#[test]
fn test_loose_pass_claimed_by_opponent_is_an_interception() {
    let pos = (35.0, 30.0);
    let mut s = loose_ball_state(97, pos);
    let mc = index_of(&s, TeamSide::Home, Role::MC);
    let ml = index_of(&s, TeamSide::Home, Role::ML);
    let thief = index_of(&s, TeamSide::Away, Role::MC);
    let passer = s.players[mc].id;
    touched_by(&mut s, mc);
    s.ball.last_kick = LastKick::Pass { passer };
    s.ball.pending_assist = Some(s.players[ml].id);
    isolate(&mut s, pos, &[thief]);
    s.players[thief].position = (pos.0 + 0.3, pos.1);

    s.resolve_possession();

    assert_eq!(s.ball.owner, Some(s.players[thief].id));
    assert_eq!(s.players[thief].stats.interceptions, 1);
    assert_eq!(s.stats.away.interceptions, 1);
    assert_eq!(s.stats.home.passes_completed, 0);
    assert_eq!(s.ball.pending_assist, None);
    let ev = s.events.last().unwrap();
    assert_eq!(ev.event_type, EventType::Interception);
    assert_eq!(ev.player, Some(s.players[thief].id));
}

#[test]
fn test_keeper_gathering_shot_is_a_save() {
    let pos = (4.0, field::CENTER_Y + 2.0);
    let mut s = loose_ball_state(98, pos);
    let gk = index_of(&s, TeamSide::Home, Role::GK);
    let st = index_of(&s, TeamSide::Away, Role::ST);
    let shooter = s.players[st].id;
    touched_by(&mut s, st);
    s.ball.last_kick = LastKick::Shot { shooter };
    isolate(&mut s, pos, &[gk]);
    s.players[gk].position = (pos.0 + 0.5, pos.1);
    s.ball.velocity = (-2.0, 0.0);
    s.ball.settled = false;

    s.resolve_possession();

    assert_eq!(s.ball.owner, Some(s.players[gk].id));
    assert_eq!(s.players[gk].stats.saves, 1);
    assert_eq!(s.stats.home.saves, 1);
    assert_eq!(s.players[gk].stats.interceptions, 0);
    assert_eq!(s.events.last().unwrap().event_type, EventType::Save);
}
