use std::sync::Arc;

use crate::balance::BalanceService;

/// Shared server state: one balance service (and thus one client
/// cache) for the whole process.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<BalanceService>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            service: Arc::new(BalanceService::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
