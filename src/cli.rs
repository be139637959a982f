use clap::{Parser, Subcommand};

/// Native-token balance lookup for EVM chains — look up an address on
/// Ethereum or Mode from the command line, or serve the HTTP API.
#[derive(Parser)]
#[command(name = "chain-balance", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the HTTP API (POST /api/balance)
    Serve {
        /// Interface to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to listen on
        #[arg(long, default_value_t = 3000)]
        port: u16,
    },

    /// Look up the native balance of an address
    Balance {
        /// Address to query (0x-prefixed, EIP-55)
        address: String,

        /// Chain key: ethereum or mode
        #[arg(long, default_value = "ethereum")]
        chain: String,

        /// Give up after this many seconds
        #[arg(long, default_value_t = 15)]
        timeout_secs: u64,
    },

    /// List supported chains
    Chains,
}
