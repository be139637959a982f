use std::time::Duration;

use alloy::primitives::U256;
use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use chain_balance::balance::BalanceService;
use chain_balance::{api, chains, classify, format};

mod cli;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chain_balance=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Command::Serve { host, port } => api::serve(&host, port).await,
        cli::Command::Balance {
            address,
            chain,
            timeout_secs,
        } => lookup(&address, &chain, timeout_secs).await,
        cli::Command::Chains => {
            for config in chains::all() {
                println!(
                    "{:<10} {} ({}, chain id {})",
                    config.key.as_str(),
                    config.name,
                    config.symbol,
                    config.chain_id
                );
            }
            Ok(())
        }
    }
}

/// One-off lookup, printed for humans. Errors go through the
/// classifier so the output matches what the web UI would show.
async fn lookup(address: &str, chain: &str, timeout_secs: u64) -> Result<()> {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let service = BalanceService::with_timeout(Duration::from_secs(timeout_secs));
    match service.get_balance(address, chain).await {
        Ok(result) => {
            let wei: U256 = result
                .balance
                .parse()
                .context("parsing balance returned by the pipeline")?;
            println!("Adresse:  {} ({})", result.address, format::format_address(&result.address));
            println!("Chaîne:   {}", result.chain_name);
            println!(
                "Solde:    {} ({} wei)",
                format::format_balance_with_unit(wei, &result.symbol),
                result.balance
            );
            println!("Explorer: {}/address/{}", result.explorer, result.address);
            Ok(())
        }
        Err(err) => {
            let info = classify::classify(&classify::Failure::from(&err));
            anyhow::bail!("{}", classify::format_message(&info))
        }
    }
}
