//! Command-line training driver.

use std::io::{self, BufWriter, Write};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use bjrl::options::{DEFAULT_EPISODES, DEFAULT_EPSILON};
use bjrl::{Trainer, TrainingOptions};
use clap::Parser;
use log::info;

/// Learn a blackjack policy by Monte Carlo self-play against a fixed dealer.
#[derive(Debug, Parser)]
#[command(name = "bjrl", version, about, long_about = None)]
struct Cli {
    /// Number of training episodes.
    #[arg(short, long, default_value_t = DEFAULT_EPISODES)]
    episodes: u64,

    /// Probability of exploring with a random action.
    #[arg(long, default_value_t = DEFAULT_EPSILON)]
    epsilon: f64,

    /// Random seed (defaults to the current time).
    #[arg(long)]
    seed: Option<u64>,

    /// Do not print the status of every episode.
    #[arg(short, long)]
    quiet: bool,

    /// Also print the greedy action for every observed state.
    #[arg(long)]
    policy: bool,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let seed = cli.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!("seed {seed}");

    let options = TrainingOptions::default()
        .with_episodes(cli.episodes)
        .with_epsilon(cli.epsilon);
    let mut trainer = Trainer::new(options, seed).context("invalid training options")?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let mut write_error = None;
    trainer
        .train(|_, result| {
            if cli.quiet || write_error.is_some() {
                return;
            }
            if let Err(err) = writeln!(out, "{}", result.status) {
                write_error = Some(err);
            }
        })
        .context("training episode failed")?;
    if let Some(err) = write_error {
        return Err(err).context("failed to write episode status");
    }

    writeln!(out, "Training done.")?;
    writeln!(out, "{}", trainer.stats())?;
    write!(out, "{}", trainer.q_table())?;

    if cli.policy {
        writeln!(out)?;
        for (observation, action) in trainer.q_table().greedy_policy() {
            writeln!(out, "{observation} -> {action}")?;
        }
    }

    out.flush()?;
    Ok(())
}
