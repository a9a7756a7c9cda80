use std::sync::Arc;

use crate::account::AccountRepository;
use crate::ledger::LedgerStore;
use crate::transfer::TransferService;

/// Gateway application state (shared across request tasks)
#[derive(Clone)]
pub struct AppState {
    /// Ledger backend, for health probes
    pub store: Arc<dyn LedgerStore>,
    /// Account read path and creation
    pub accounts: AccountRepository,
    /// Validate → apply → re-read pipeline
    pub transfers: Arc<TransferService>,
}

impl AppState {
    pub fn new(store: Arc<dyn LedgerStore>) -> Self {
        Self {
            accounts: AccountRepository::new(store.clone()),
            transfers: Arc::new(TransferService::new(store.clone())),
            store,
        }
    }
}
