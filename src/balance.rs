use std::time::Duration;

use alloy::primitives::Address;
use alloy::providers::Provider;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chains::{self, ChainKey};
use crate::clients::ClientCache;
use crate::format;
use crate::validation::{self, ValidationError};

/// One timeout policy for every lookup, CLI and HTTP alike.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

// ── Errors ───────────────────────────────────────────────────────────

/// Pipeline outcome tags. Validation failures keep their own shape so
/// the boundary can map them to precise responses; everything that
/// goes wrong after validation (client construction, RPC rejection,
/// timeout) collapses into `Fetch` carrying the cause's message.
/// Classification into the user-facing taxonomy happens later, at the
/// boundary — never here.
#[derive(Debug, Error)]
pub enum BalanceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Erreur lors de la récupération du solde: {message}")]
    Fetch { message: String },
}

impl BalanceError {
    fn fetch(message: impl Into<String>) -> Self {
        BalanceError::Fetch {
            message: message.into(),
        }
    }
}

// ── Result ───────────────────────────────────────────────────────────

/// Normalized outcome of a successful lookup, in wire shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceResult {
    /// The address exactly as the caller supplied it.
    pub address: String,
    pub chain: ChainKey,
    pub chain_name: String,
    /// Wei amount as a decimal integer string, lossless.
    pub balance: String,
    /// Exact ether amount, up to 18 fractional digits.
    pub balance_formatted: String,
    pub symbol: String,
    /// Explorer base URL for the chain.
    pub explorer: String,
}

// ── Service ──────────────────────────────────────────────────────────

/// The balance-lookup pipeline: validate, resolve chain config, query
/// through the cached per-chain client with a time bound, normalize.
pub struct BalanceService {
    clients: ClientCache,
    timeout: Duration,
}

impl Default for BalanceService {
    fn default() -> Self {
        Self::new()
    }
}

impl BalanceService {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        BalanceService {
            clients: ClientCache::new(),
            timeout,
        }
    }

    /// The per-chain client cache. Exposed so tests can point chains at
    /// mock endpoints.
    pub fn clients(&self) -> &ClientCache {
        &self.clients
    }

    /// Look up the native-token balance of `address` on `chain`.
    ///
    /// Bad input fails here without touching the network. The RPC call
    /// races a timer: whichever settles first wins, and a late RPC
    /// completion is silently dropped — nothing is signalled to the
    /// transport.
    pub async fn get_balance(
        &self,
        address: &str,
        chain: &str,
    ) -> Result<BalanceResult, BalanceError> {
        let request = validation::validate_request(address, chain)?;
        let config = chains::config_for(request.chain);

        let client = self
            .clients
            .client_for(request.chain)
            .map_err(|e| BalanceError::fetch(e.to_string()))?;

        let account: Address = request
            .address
            .parse()
            .map_err(|_| ValidationError::InvalidAddress {
                address: request.address.clone(),
            })?;

        let wei = match tokio::time::timeout(self.timeout, client.get_balance(account)).await {
            Ok(Ok(wei)) => wei,
            Ok(Err(e)) => return Err(BalanceError::fetch(e.to_string())),
            Err(_) => {
                return Err(BalanceError::fetch(format!(
                    "Timeout: la requête a dépassé {} secondes",
                    self.timeout.as_secs()
                )));
            }
        };

        Ok(BalanceResult {
            address: request.address,
            chain: request.chain,
            chain_name: config.name.to_string(),
            balance: wei.to_string(),
            balance_formatted: format::format_wei(wei),
            symbol: config.symbol.to_string(),
            explorer: config.explorer.to_string(),
        })
    }
}
