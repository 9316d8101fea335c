//! Stake Facilitator CLI
//!
//! `stake` initiates a stake against the origin gateway and prints the
//! receipt as JSON. The pending-request table is process-local, so
//! progression has to happen in the same run: pass `--progress` to reveal
//! the unlock secret right after initiation. `health` probes both chain
//! endpoints.

use std::path::PathBuf;
use std::sync::Arc;

use alloy::primitives::{Address, U256};
use clap::{Parser, Subcommand};

use stake_facilitator::config::load_config;
use stake_facilitator::observability::{logging, metrics};
use stake_facilitator::{GatewayBridgeClient, InMemoryStakeStore, StakeFacilitator};

#[derive(Parser)]
#[command(name = "stake-facilitator")]
#[command(about = "Facilitates stake and mint across a gateway contract pair", long_about = None)]
struct Cli {
    /// Path to the facilitator configuration file.
    #[arg(short, long, default_value = "facilitator.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initiate a stake and print the receipt as JSON
    Stake {
        /// Account staking value on the origin chain
        #[arg(long)]
        staker: Address,

        /// Amount to stake, in the chain-native denomination
        #[arg(long)]
        amount: U256,

        /// Account credited on the auxiliary chain
        #[arg(long)]
        beneficiary: Address,

        /// Progress the stake immediately after initiation
        #[arg(long)]
        progress: bool,
    },
    /// Probe both chain endpoints
    Health,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();

    let cli = Cli::parse();
    let config = load_config(&cli.config)?;

    tracing::info!(
        origin = %config.origin.rpc_url,
        auxiliary = %config.auxiliary.rpc_url,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let bridge = Arc::new(GatewayBridgeClient::connect(&config).await?);

    match cli.command {
        Commands::Stake {
            staker,
            amount,
            beneficiary,
            progress,
        } => {
            let store = Arc::new(InMemoryStakeStore::new());
            let facilitator = StakeFacilitator::new(bridge, store, &config)?;

            let receipt = facilitator.initiate_stake(staker, amount, beneficiary).await?;
            println!("{}", serde_json::to_string_pretty(&receipt)?);

            if progress {
                facilitator.progress_stake(receipt.message_hash).await?;
            } else {
                tracing::info!(
                    "Pending requests are process-local; rerun with --progress to complete the stake in one run"
                );
            }
        }
        Commands::Health => {
            let origin_healthy = bridge.origin().is_healthy().await;
            let auxiliary_healthy = bridge.auxiliary().is_healthy().await;
            println!(
                "{}",
                serde_json::json!({
                    "origin": origin_healthy,
                    "auxiliary": auxiliary_healthy,
                })
            );
            if !(origin_healthy && auxiliary_healthy) {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
