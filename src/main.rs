//! Ember Run headless runner
//!
//! Parses a level pack and plays each level with an idle player: actors move,
//! the player's box is checked against the grid and the other actors, and the
//! touches are fed back into the level until it finishes or time runs out.
//!
//! Usage: `ember-run [levels.json] [--seed N]`

use anyhow::{Context, Result};
use clap::Parser;
use ember_run::SymbolTable;
use ember_run::sim::{Level, LevelParser, Step};
use ember_run::{SimError, parse_level_list};
use std::path::PathBuf;

/// Built-in level pack
const DEMO_LEVELS: &str = include_str!("../demos/levels.json");

/// Fixed simulation timestep (60 Hz)
const SIM_DT: f64 = 1.0 / 60.0;
/// Give up on a level after this many ticks (one minute)
const MAX_TICKS: u32 = 60 * 60;

#[derive(Parser)]
#[command(name = "ember-run")]
#[command(about = "Play a level pack headlessly with an idle player")]
struct Cli {
    /// JSON level pack (array of row arrays); the built-in pack if omitted
    levels: Option<PathBuf>,
    /// Seed for coin spring phases
    #[arg(long, default_value_t = 0x5eed)]
    seed: u64,
}

fn main() {
    env_logger::init();
    log::info!("Ember Run (headless) starting...");

    if let Err(e) = run(Cli::parse()) {
        log::error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let json = match &cli.levels {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => DEMO_LEVELS.to_string(),
    };
    log::info!("Using seed: {}", cli.seed);

    let levels = parse_level_list(&json).context("Invalid level pack")?;
    let mut parser = LevelParser::new(SymbolTable::default(), cli.seed);
    let step = Step::new(SIM_DT)?;

    for (index, rows) in levels.iter().enumerate() {
        let mut level = parser.parse(rows);
        println!(
            "Level {}: {}x{}, {} actors",
            index + 1,
            level.width(),
            level.height(),
            level.actors().len()
        );

        let ticks = play(&mut level, step).with_context(|| format!("Level {} failed", index + 1))?;
        match level.status() {
            Some(status) => println!("  {:?} after {} ticks", status, ticks),
            None => println!("  unfinished after {} ticks", ticks),
        }
    }
    Ok(())
}

/// Run one level with an idle player; returns the number of ticks played
fn play(level: &mut Level, step: Step) -> Result<u32, SimError> {
    for tick in 0..MAX_TICKS {
        if level.is_finished() {
            return Ok(tick);
        }
        level.act_actors(step)?;

        if let Some(player) = level.player() {
            let obstacle = level.obstacle_at(player.pos, player.size)?;
            let touched = level.actor_at(player).map(|a| (a.actor_type(), a.id()));

            if let Some(obstacle) = obstacle {
                level.player_touched(obstacle, None);
            }
            if let Some((actor_type, id)) = touched {
                level.player_touched(actor_type, Some(id));
            }
        }
        level.count_down(step);
    }
    Ok(MAX_TICKS)
}
