use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::transports::http::reqwest::Url;
use thiserror::Error;

use crate::chains::{self, ChainKey};

#[derive(Debug, Error)]
pub enum ClientError {
    /// The configured RPC endpoint is not a usable URL. This is a
    /// deployment fault, not something a retry can fix.
    #[error("Point d'accès RPC invalide pour {chain}: {reason}")]
    InvalidEndpoint { chain: ChainKey, reason: String },
}

/// One RPC client per chain, created on first use and shared by every
/// request for that chain afterwards.
///
/// Explicitly owned (held by the balance service) rather than a
/// module-level global, so tests can build and discard caches freely.
#[derive(Default)]
pub struct ClientCache {
    clients: Mutex<HashMap<ChainKey, Arc<DynProvider>>>,
}

impl ClientCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached client for `key`, constructing it from the chain's
    /// registry entry on first call. The lookup-or-create runs under
    /// one lock, so concurrent first access still constructs a single
    /// client per chain.
    pub fn client_for(&self, key: ChainKey) -> Result<Arc<DynProvider>, ClientError> {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(client) = clients.get(&key) {
            return Ok(client.clone());
        }

        let config = chains::config_for(key);
        let url: Url = config
            .rpc_url
            .parse()
            .map_err(|e: <Url as std::str::FromStr>::Err| ClientError::InvalidEndpoint {
                chain: key,
                reason: e.to_string(),
            })?;
        let client = Arc::new(ProviderBuilder::new().connect_http(url).erased());
        clients.insert(key, client.clone());
        Ok(client)
    }

    /// Replace the cached client for a chain. Lets tests point a chain
    /// at a local mock endpoint.
    pub fn put(&self, key: ChainKey, provider: DynProvider) {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        clients.insert(key, Arc::new(provider));
    }

    /// Drop every cached client.
    pub fn clear(&self) {
        let mut clients = self.clients.lock().unwrap_or_else(PoisonError::into_inner);
        clients.clear();
    }
}
