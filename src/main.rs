use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use social_graph::network::generator::{generate_random_data, GeneratorConfig};
use social_graph::network::graph::SocialNetwork;
use social_graph::network::prompt::{read_number, run_session, write_engagement_rates};
use social_graph::network::snapshot::write_snapshot;
use social_graph::time_it;

/// Build a random social network and explore it from the terminal.
#[derive(Parser, Debug)]
#[command(name = "social-graph", version)]
struct Cli {
    /// Number of member names to draw
    #[arg(long, env = "SOCIAL_GRAPH_MEMBERS")]
    members: Option<usize>,

    /// Number of random interactions to record (about ten per member works well)
    #[arg(long, env = "SOCIAL_GRAPH_INTERACTIONS")]
    interactions: Option<usize>,

    /// Seed for reproducible networks
    #[arg(long, env = "SOCIAL_GRAPH_SEED")]
    seed: Option<u64>,

    /// Write a RON dump of the generated network to this path
    #[arg(long)]
    snapshot: Option<PathBuf>,

    /// Print every engagement rate and exit instead of opening the menu
    #[arg(long)]
    non_interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let start = Instant::now();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    writeln!(output, "Welcome to the social network!")?;

    let members = match cli.members {
        Some(members) => members,
        None => read_number(
            &mut input,
            &mut output,
            "Please enter how many members you want in the network: ",
        )?
        .context("no member count given")?,
    };
    let interactions = match cli.interactions {
        Some(interactions) => interactions,
        None => read_number(
            &mut input,
            &mut output,
            "Now enter how many interactions should happen in the network (about ten per member works well): ",
        )?
        .context("no interaction count given")?,
    };

    let config = GeneratorConfig {
        members,
        interactions,
        seed: cli.seed,
        show_progress: true,
        ..GeneratorConfig::default()
    };
    let mut rng = config.rng();

    let mut network = SocialNetwork::new();
    time_it!("generating the network" =>
        generate_random_data(&mut network, &config, &mut rng)
    )
    .context("generating the network")?;
    tracing::info!(members = network.len(), interactions, "network ready");

    if let Some(path) = &cli.snapshot {
        time_it!("writing snapshot" => write_snapshot(path, &network))
            .with_context(|| format!("writing snapshot to {}", path.display()))?;
    }

    if cli.non_interactive {
        write_engagement_rates(&mut output, &network.all_engagement_rates())?;
    } else {
        run_session(&network, &mut input, &mut output)?;
    }

    tracing::info!(elapsed = ?start.elapsed(), "total run time");
    Ok(())
}
