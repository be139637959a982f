use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

// ── Chain keys ───────────────────────────────────────────────────────

/// Identifier of a supported network. Keys are case-sensitive on the
/// wire: exactly `"ethereum"` or `"mode"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChainKey {
    Ethereum,
    Mode,
}

impl ChainKey {
    /// Parse a chain key from its exact wire form. No case folding:
    /// `"Ethereum"` is not a supported chain.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ethereum" => Some(ChainKey::Ethereum),
            "mode" => Some(ChainKey::Mode),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ChainKey::Ethereum => "ethereum",
            ChainKey::Mode => "mode",
        }
    }
}

impl std::fmt::Display for ChainKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// ── Chain configuration ──────────────────────────────────────────────

/// Static per-chain configuration. One instance per [`ChainKey`], built
/// at first access and read-only for the rest of the process.
#[derive(Debug, Clone)]
pub struct ChainConfig {
    pub key: ChainKey,
    /// Human-readable network name (e.g. "Ethereum Mainnet").
    pub name: &'static str,
    /// Native currency symbol. Mode is an Ethereum L2, so both are ETH.
    pub symbol: &'static str,
    /// Block explorer base URL, without trailing slash.
    pub explorer: &'static str,
    pub chain_id: u64,
    /// JSON-RPC endpoint. Overridable at process start via
    /// `ETHEREUM_RPC_URL` / `MODE_RPC_URL`.
    pub rpc_url: String,
}

impl ChainConfig {
    /// Explorer deep link for an address.
    pub fn explorer_address_url(&self, address: &str) -> String {
        format!("{}/address/{}", self.explorer, address)
    }
}

static ETHEREUM: LazyLock<ChainConfig> = LazyLock::new(|| ChainConfig {
    key: ChainKey::Ethereum,
    name: "Ethereum Mainnet",
    symbol: "ETH",
    explorer: "https://etherscan.io",
    chain_id: 1,
    rpc_url: std::env::var("ETHEREUM_RPC_URL")
        .unwrap_or_else(|_| "https://eth.llamarpc.com".to_string()),
});

static MODE: LazyLock<ChainConfig> = LazyLock::new(|| ChainConfig {
    key: ChainKey::Mode,
    name: "Mode Mainnet",
    symbol: "ETH",
    explorer: "https://explorer.mode.network",
    chain_id: 34443,
    rpc_url: std::env::var("MODE_RPC_URL")
        .unwrap_or_else(|_| "https://mainnet.mode.network".to_string()),
});

// ── Lookups ──────────────────────────────────────────────────────────

/// Configuration for a chain key. Total over [`ChainKey`]: every key
/// has a registry entry.
pub fn config_for(key: ChainKey) -> &'static ChainConfig {
    match key {
        ChainKey::Ethereum => &ETHEREUM,
        ChainKey::Mode => &MODE,
    }
}

/// Whether a raw string names a supported chain.
pub fn is_supported(chain: &str) -> bool {
    ChainKey::parse(chain).is_some()
}

/// All supported chains, for listings and selectors.
pub fn all() -> impl Iterator<Item = &'static ChainConfig> {
    [ChainKey::Ethereum, ChainKey::Mode]
        .into_iter()
        .map(config_for)
}
