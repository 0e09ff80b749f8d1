//! Kickoff CLI
//!
//! 헤드리스 경기 실행기: 단일 경기, 시드 배치, 실시간 관전(watch)

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use kickoff_core::engine::stats::GoalLine;
use kickoff_core::models::{Formation, TeamSide, TeamTactics};
use kickoff_core::{
    create_initial_state, play_to_completion, simulate_match_json, summarize, EngineConfig,
    FixedStepLoop, GeneratedRoster, MatchSetup, MatchState, MatchSummary,
};

#[derive(Parser)]
#[command(name = "kickoff")]
#[command(about = "Run deterministic football match simulations", long_about = None)]
struct Cli {
    /// Engine config file (.yaml / .yml / .json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Built-in tuning preset, used when no config file is given
    #[arg(long, value_enum, default_value = "realistic", global = true)]
    preset: Preset,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Preset {
    Realistic,
    Arcade,
    Deterministic,
}

#[derive(clap::Args, Clone)]
struct MatchArgs {
    #[arg(long, default_value_t = 42)]
    seed: u64,

    #[arg(long, default_value = "Home")]
    home: String,

    #[arg(long, default_value = "Away")]
    away: String,

    #[arg(long, default_value = "4-4-2")]
    home_formation: String,

    #[arg(long, default_value = "4-4-2")]
    away_formation: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Play one match to completion and print the summary
    Run {
        #[command(flatten)]
        args: MatchArgs,

        /// Read a JSON match request instead of the flags above
        #[arg(long)]
        request: Option<PathBuf>,

        /// Print the full summary as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// Play many seeds in parallel and print aggregate results
    Batch {
        #[arg(long, default_value_t = 0)]
        start_seed: u64,

        #[arg(long, default_value_t = 100)]
        count: u64,

        #[arg(long, default_value = "4-4-2")]
        home_formation: String,

        #[arg(long, default_value = "4-4-2")]
        away_formation: String,
    },

    /// Drive a match through the fixed-step loop and stream the play-by-play
    Watch {
        #[command(flatten)]
        args: MatchArgs,

        /// Simulated seconds per real second
        #[arg(long, default_value_t = 30.0)]
        speed: f32,

        /// Display frames per second
        #[arg(long, default_value_t = 30)]
        fps: u32,

        /// Sleep between frames instead of running flat out
        #[arg(long, default_value = "false")]
        realtime: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref(), cli.preset)?;

    match cli.command {
        Commands::Run { args, request, json } => {
            if let Some(path) = request {
                let text = fs::read_to_string(&path)
                    .with_context(|| format!("failed to read request {}", path.display()))?;
                let out = simulate_match_json(&text)?;
                println!("{}", out);
                return Ok(());
            }

            let state = build_state(&args, config)?;
            info!(seed = args.seed, "simulating match");
            let summary = summarize(&play_to_completion(state));
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_summary(&summary);
            }
        }

        Commands::Batch {
            start_seed,
            count,
            home_formation,
            away_formation,
        } => {
            if count == 0 {
                bail!("--count must be at least 1");
            }
            let template = MatchArgs {
                seed: start_seed,
                home: "Home".to_string(),
                away: "Away".to_string(),
                home_formation,
                away_formation,
            };
            run_batch(&template, start_seed, count, &config)?;
        }

        Commands::Watch {
            args,
            speed,
            fps,
            realtime,
        } => {
            if fps == 0 {
                bail!("--fps must be at least 1");
            }
            let state = build_state(&args, config)?;
            watch(state, speed, fps, realtime);
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>, preset: Preset) -> Result<EngineConfig> {
    let Some(path) = path else {
        return Ok(match preset {
            Preset::Realistic => EngineConfig::realistic(),
            Preset::Arcade => EngineConfig::arcade(),
            Preset::Deterministic => EngineConfig::deterministic(),
        });
    };

    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("yaml") | Some("yml") => EngineConfig::from_yaml_str(&text)?,
        Some("json") => EngineConfig::from_json_str(&text)?,
        other => bail!("unsupported config extension {:?} (expected yaml or json)", other),
    };
    debug!(path = %path.display(), "loaded engine config");
    Ok(config)
}

fn build_state(args: &MatchArgs, config: EngineConfig) -> Result<MatchState> {
    let setup = MatchSetup {
        seed: args.seed,
        home_name: args.home.clone(),
        away_name: args.away.clone(),
        home_tactics: TeamTactics {
            formation: Formation::parse_or_default(&args.home_formation),
            ..TeamTactics::default()
        },
        away_tactics: TeamTactics {
            formation: Formation::parse_or_default(&args.away_formation),
            ..TeamTactics::default()
        },
        config,
        kickoff_team: TeamSide::Home,
    };
    let state = create_initial_state(&setup, &GeneratedRoster::new(args.seed))?;
    Ok(state)
}

#[derive(Default)]
struct BatchTotals {
    home_wins: u64,
    draws: u64,
    away_wins: u64,
    goals: u64,
    shootouts: u64,
}

fn run_batch(template: &MatchArgs, start_seed: u64, count: u64, config: &EngineConfig) -> Result<()> {
    let summaries: Vec<MatchSummary> = (start_seed..start_seed + count)
        .into_par_iter()
        .map(|seed| {
            let args = MatchArgs {
                seed,
                ..template.clone()
            };
            build_state(&args, config.clone()).map(|state| summarize(&play_to_completion(state)))
        })
        .collect::<Result<_>>()?;

    let mut totals = BatchTotals::default();
    for s in &summaries {
        totals.goals += (s.score.home + s.score.away) as u64;
        if s.penalties.is_some() {
            totals.shootouts += 1;
        }
        match s.winner {
            Some(TeamSide::Home) => totals.home_wins += 1,
            Some(TeamSide::Away) => totals.away_wins += 1,
            None => totals.draws += 1,
        }
    }

    println!("⚽ Batch: {} matches from seed {}", count, start_seed);
    println!("   Home wins: {}", totals.home_wins);
    println!("   Draws:     {}", totals.draws);
    println!("   Away wins: {}", totals.away_wins);
    println!("   Shootouts: {}", totals.shootouts);
    println!("   Goals/match: {:.2}", totals.goals as f64 / count as f64);
    Ok(())
}

fn watch(mut state: MatchState, speed: f32, fps: u32, realtime: bool) {
    let frame_delta = 1.0 / fps as f32;
    let mut frame_loop = FixedStepLoop::default().with_speed(speed);
    let mut printed = 0usize;

    loop {
        if state.is_finished() {
            break;
        }
        if state.is_paused() {
            // 하프타임 등 휴식 구간은 바로 재개
            state.resume();
            frame_loop.accumulator = 0.0;
        }

        let (next, steps) = frame_loop.frame(state, frame_delta);
        state = next;
        if steps == 0 && speed <= 0.0 {
            warn!("speed is zero; nothing to watch");
            break;
        }

        for log in &state.logs[printed..] {
            println!("[{:>3}'] {}", log.minute, log.message);
        }
        printed = state.logs.len();

        if realtime {
            std::thread::sleep(Duration::from_secs_f32(frame_delta));
        }
    }

    print_summary(&summarize(&state));
}

fn scorer_label(goal: &GoalLine) -> &str {
    match goal.scorer.as_deref() {
        Some(name) => name,
        None if goal.own_goal => "own goal",
        None => "unknown",
    }
}

fn print_summary(s: &MatchSummary) {
    println!();
    println!("🏁 {} {} - {} {}", s.home_name, s.score.home, s.score.away, s.away_name);
    if let Some((home, away)) = s.penalties {
        println!("   Penalties: {} - {}", home, away);
    }
    for goal in &s.goals {
        let scorer = scorer_label(goal);
        match &goal.assist {
            Some(assist) => println!("   {}' {} ({}) assist {}", goal.minute, scorer, goal.side, assist),
            None => println!("   {}' {} ({})", goal.minute, scorer, goal.side),
        }
    }
    println!(
        "   Possession: {:.0}% - {:.0}%",
        s.possession.home, s.possession.away
    );
    println!(
        "   Shots: {} ({}) - {} ({})",
        s.stats.home.shots, s.stats.home.shots_on_target, s.stats.away.shots, s.stats.away.shots_on_target
    );
    println!(
        "   Pass accuracy: {:.0}% - {:.0}%",
        s.pass_accuracy.home, s.pass_accuracy.away
    );
    if let Some(best) = s
        .players
        .iter()
        .max_by(|a, b| a.rating.total_cmp(&b.rating).then(b.id.cmp(&a.id)))
    {
        println!("   Player of the match: {} ({:.1})", best.name, best.rating);
    }
    println!("   Digest: {}", s.digest);
}
