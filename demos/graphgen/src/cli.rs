//! Command-line options and the commands behind them.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use gg_core::Seed;
use gg_graph::GraphView;
use gg_growth::{generate_batch, BranchingModel, GraphStream, Settings, SettingsInput};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Parser, Clone)]
#[command(name = "graphgen", about = "Grow seeded random directed graphs.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print every operation of one run as a JSON line.
    Stream(StreamArgs),
    /// Run several seeds and print one summary line per seed.
    Batch(BatchArgs),
}

/// Settings shared by every command.  Flags override the settings file.
#[derive(Debug, Args, Clone, Default)]
pub struct SettingsArgs {
    /// JSON file with any of `heterogeneity`, `density`, `nodes`, `branchingModel`.
    #[arg(long)]
    pub settings: Option<PathBuf>,

    #[arg(long)]
    pub heterogeneity: Option<f64>,

    #[arg(long)]
    pub density: Option<f64>,

    #[arg(long)]
    pub nodes: Option<usize>,

    /// `barabasi-albert` or `dnd`.
    #[arg(long)]
    pub model: Option<BranchingModel>,
}

impl SettingsArgs {
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.settings {
            Some(path) => {
                let raw = fs::read_to_string(path)
                    .with_context(|| format!("failed to read settings file {}", path.display()))?;
                serde_json::from_str::<SettingsInput>(&raw)
                    .with_context(|| format!("invalid settings file {}", path.display()))?
            }
            None => SettingsInput::default(),
        };
        let flags = SettingsInput {
            heterogeneity:   self.heterogeneity,
            density:         self.density,
            nodes:           self.nodes,
            branching_model: self.model,
        };
        Ok(file.merge(flags).resolve()?)
    }
}

#[derive(Debug, Args, Clone)]
pub struct StreamArgs {
    /// Seed phrase, hashed into the PRNG seed.
    #[arg(long, default_value = "seed1")]
    pub seed: String,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// Seed phrases; one run each.
    #[arg(required = true)]
    pub seeds: Vec<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,
}

#[derive(Debug, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub seed:     String,
    pub vertices: usize,
    pub edges:    usize,
}

pub fn run_cli<W: Write>(cli: Cli, out: &mut W) -> Result<()> {
    match cli.command {
        Command::Stream(args) => stream(&args, out),
        Command::Batch(args) => batch(&args, out),
    }
}

fn stream<W: Write>(args: &StreamArgs, out: &mut W) -> Result<()> {
    let settings = args.settings.resolve()?;
    info!(seed = %args.seed, ?settings, "streaming");
    for item in GraphStream::new(Seed::from_phrase(&args.seed), &settings)? {
        serde_json::to_writer(&mut *out, &item?).context("failed to encode item")?;
        writeln!(out)?;
    }
    Ok(())
}

fn batch<W: Write>(args: &BatchArgs, out: &mut W) -> Result<()> {
    let settings = args.settings.resolve()?;
    let seeds: Vec<Seed> = args.seeds.iter().map(|p| Seed::from_phrase(p)).collect();
    for (phrase, result) in args.seeds.iter().zip(generate_batch(&seeds, &settings)) {
        let done = result.with_context(|| format!("run for seed {phrase:?} failed"))?;
        let summary = RunSummary {
            seed:     phrase.clone(),
            vertices: done.graph.vertex_count(),
            edges:    done.graph.edge_count(),
        };
        serde_json::to_writer(&mut *out, &summary).context("failed to encode summary")?;
        writeln!(out)?;
    }
    Ok(())
}
