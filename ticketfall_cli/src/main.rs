use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ticketfall_core::{
    plan_spin, AnimatorConfig, HostBridge, ReelAnimator, Stage, CATALOG, CURRENCY_LABEL,
};
use ticketfall_shared::{SpinClient, REEL_COUNT};

mod terminal;

use crate::terminal::{TerminalHost, TerminalReel, TerminalView, TokioClock};

#[derive(Parser)]
#[command(name = "ticketfall-cli", about = "Run the ticketfall reels in a terminal")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// JSON file overriding the animator defaults
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Spin against a live /spin endpoint
    Spin {
        #[arg(long, env = "SPIN_ENDPOINT", default_value = "http://127.0.0.1:8000/spin")]
        endpoint: String,
        /// Filler seed, defaults to the current time
        #[arg(long, env = "TICKETFALL_SEED")]
        seed: Option<String>,
        #[arg(long, default_value_t = 20)]
        fps: u32,
        /// Skip delays and transitions
        #[arg(long)]
        instant: bool,
    },
    /// Print the reel plans for a result as JSON
    Plan {
        /// Target value of each reel, comma separated
        #[arg(long, value_delimiter = ',', required = true)]
        reels: Vec<f64>,
        #[arg(long, env = "TICKETFALL_SEED", default_value = "plan")]
        seed: String,
        #[arg(long, default_value_t = 1)]
        nonce: u64,
    },
    /// List the symbol catalog
    Catalog,
}

fn load_config(path: Option<&Path>) -> anyhow::Result<AnimatorConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            serde_json::from_str(&raw).with_context(|| format!("parsing {}", path.display()))?
        }
        None => AnimatorConfig::default(),
    };
    config.validate()?;
    Ok(config)
}

async fn run_spin(
    config: AnimatorConfig,
    endpoint: &str,
    seed: Option<String>,
    fps: u32,
    instant: bool,
) -> anyhow::Result<()> {
    let client = SpinClient::new(endpoint)?;
    let seed = seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis())
            .unwrap_or_default()
            .to_string()
    });
    info!(endpoint = %client.endpoint(), %seed, "spinning");

    let stage = Stage {
        reels: [0, 1, 2].map(|i| TerminalReel::new(i, &config, fps, instant)),
        view: TerminalView::default(),
        host: TerminalHost,
    };
    let animator = ReelAnimator::new(config, client, TokioClock { instant }, seed);

    stage.host.expand();
    animator.init_tracks(&stage)?;
    let report = animator.spin(&stage).await?;
    debug!(
        nonce = report.nonce,
        ready = stage.view.enabled(),
        "spin finished"
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Spin {
            endpoint,
            seed,
            fps,
            instant,
        } => run_spin(config, &endpoint, seed, fps, instant).await?,
        Commands::Plan { reels, seed, nonce } => {
            let reels: [f64; REEL_COUNT] = reels.as_slice().try_into().map_err(|_| {
                anyhow!("expected {REEL_COUNT} reel values, got {}", reels.len())
            })?;
            let plans = plan_spin(&config, &seed, nonce, &reels);
            println!("{}", serde_json::to_string_pretty(&plans)?);
        }
        Commands::Catalog => {
            for symbol in &CATALOG {
                println!("{:>5} {}", symbol.label(), CURRENCY_LABEL);
            }
        }
    }

    Ok(())
}
