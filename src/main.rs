//! Space Shooter headless runner
//!
//! Drives the simulation core with the built-in autopilot, logging progress as
//! it goes. Useful for soak-testing balance changes without a renderer.

use std::path::PathBuf;

use clap::Parser;
use env_logger::{Builder, Env};
use log::LevelFilter;
use serde::Serialize;

use space_shooter::consts::SIM_DT;
use space_shooter::highscores::HighScoreEntry;
use space_shooter::sim::{GamePhase, GameState, TickInput, tick};
use space_shooter::Settings;

/// Simulated seconds between progress reports
const REPORT_EVERY_SECS: u64 = 10;

#[derive(Debug, Parser)]
#[command(name = "space-shooter", about = "Run the shooter simulation headless")]
struct Args {
    /// Number of fixed ticks to simulate (60 per second)
    #[arg(long, default_value_t = 60 * 120)]
    ticks: u64,

    /// RNG seed (overrides the settings file)
    #[arg(long)]
    seed: Option<u64>,

    /// Settings JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the final summary as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Serialize)]
struct Summary {
    seed: u64,
    ticks: u64,
    phase: GamePhase,
    sessions_finished: usize,
    score: u64,
    kills: u32,
    health: i32,
    enemies_alive: usize,
    high_scores: Vec<HighScoreEntry>,
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    let env = Env::default().default_filter_or(level.to_string());
    // Only fails if a logger is already installed
    let _ = Builder::from_env(env).try_init();
}

fn load_settings(args: &Args) -> Settings {
    let mut settings = match &args.config {
        Some(path) => Settings::load(path).unwrap_or_else(|e| {
            log::warn!("{e}; using default settings");
            Settings::default()
        }),
        None => Settings::default(),
    };
    if args.seed.is_some() {
        settings.seed = args.seed;
    }
    settings
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let settings = load_settings(&args);
    let mut state = GameState::new(settings);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let report_every = ((REPORT_EVERY_SECS as f32) / SIM_DT).round() as u64;
    let mut sessions_finished = 0;
    let mut last_phase = state.phase();

    for n in 1..=args.ticks {
        tick(&mut state, &input, SIM_DT);

        let phase = state.phase();
        if phase != last_phase {
            if phase == GamePhase::GameOver {
                sessions_finished += 1;
            }
            last_phase = phase;
        }

        if n % report_every == 0 {
            if let Some(player) = state.player() {
                log::info!(
                    "t={:>5.0}s score={} hp={} enemies={} bullets={} particles={} spawn_every={:.2}s",
                    n as f32 * SIM_DT,
                    player.score,
                    player.health.current,
                    state.active_enemies().count(),
                    state.active_bullets().count(),
                    state.active_particles().count(),
                    state.spawn_interval,
                );
            }
        }
    }

    let player = state.player();
    let summary = Summary {
        seed: state.seed,
        ticks: args.ticks,
        phase: state.phase(),
        sessions_finished,
        score: player.map(|p| p.score).unwrap_or_default(),
        kills: player.map(|p| p.kills).unwrap_or_default(),
        health: player.map(|p| p.health.current).unwrap_or_default(),
        enemies_alive: state.active_enemies().count(),
        high_scores: state.high_scores.entries.clone(),
    };

    if args.json {
        match serde_json::to_string_pretty(&summary) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("Failed to encode summary: {e}"),
        }
    } else {
        println!(
            "seed {} | {} ticks | {:?} | score {} | kills {} | finished sessions {} | best {}",
            summary.seed,
            summary.ticks,
            summary.phase,
            summary.score,
            summary.kills,
            summary.sessions_finished,
            state.high_scores.top_score().unwrap_or_default(),
        );
    }
}
