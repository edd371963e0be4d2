use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use brain_core::{
    build_connections, category_counts, mock_topics, Category, FloorPolicy, NeuronPlacer,
    Placement, PlacementConfig, MOCK_TOPIC_COUNT,
};
use chrono::Utc;
use clap::Parser;
use serde::Serialize;

/// Print a neuron placement (or the laid-out sample topics) as JSON.
#[derive(Parser, Debug)]
#[command(name = "brain-native", version, about)]
struct Args {
    /// Number of neurons to place
    #[arg(default_value_t = 40)]
    count: usize,

    /// Seed for a reproducible layout; random when omitted
    #[arg(long)]
    seed: Option<u64>,

    /// JSON file overriding the default placement config
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Honor region floors even when they exceed COUNT
    #[arg(long)]
    strict_floors: bool,

    /// Lay out the built-in sample topics instead of bare points
    #[arg(long)]
    mock: bool,
}

#[derive(Serialize)]
struct MockOutput<'a> {
    topics: &'a [brain_core::Topic],
    connections: Vec<brain_core::Connection>,
}

fn load_config(args: &Args) -> anyhow::Result<PlacementConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str::<PlacementConfig>(&text)
                .with_context(|| format!("parsing {}", path.display()))?
        }
        None => PlacementConfig::default(),
    };
    if args.strict_floors {
        config.floor_policy = FloorPolicy::Strict;
    }
    config.validate().context("invalid placement config")?;
    Ok(config)
}

fn log_fill(placement: &Placement) {
    for fill in &placement.regions {
        log::info!(
            "[placement] {:<14} {:>3}/{:<3} attempts={}",
            fill.name,
            fill.placed,
            fill.quota,
            fill.attempts
        );
    }
    if !placement.is_complete() {
        log::warn!(
            "[placement] short fill: {} of {} neurons placed",
            placement.len(),
            placement.requested()
        );
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let config = load_config(&args)?;
    let mut placer = match args.seed {
        Some(seed) => NeuronPlacer::new(config, seed)?,
        None => NeuronPlacer::from_entropy(config)?,
    };

    let json = if args.mock {
        let topics = mock_topics(Utc::now(), &mut placer);
        let counts = category_counts(&topics);
        for category in Category::ALL {
            if let Some(n) = counts.get(&category) {
                log::info!("[mock] {:<13} {}", category.label(), n);
            }
        }
        let connections = build_connections(&topics);
        log::info!(
            "[mock] {} of {} topics positioned, {} connections",
            topics.iter().filter(|t| t.position.is_some()).count(),
            MOCK_TOPIC_COUNT,
            connections.len()
        );
        serde_json::to_string_pretty(&MockOutput {
            topics: &topics,
            connections,
        })?
    } else {
        let placement = placer.place(args.count);
        log_fill(&placement);
        serde_json::to_string_pretty(&placement)?
    };

    println!("{json}");
    Ok(())
}
