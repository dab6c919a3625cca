use std::sync::Arc;

use judge::{RunnerRegistry, Sandbox, VerdictEngine};

use crate::config::AppConfig;
use crate::ledger::Ledger;
use crate::store::Stores;

/// Shared application state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub stores: Arc<Stores>,
    pub engine: Arc<VerdictEngine>,
    pub ledger: Arc<Ledger>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// State with the stock interpreter runners from the configuration.
    pub fn new(config: AppConfig) -> Self {
        let registry = RunnerRegistry::with_defaults(&config.judge.node_bin, &config.judge.python_bin);
        Self::with_registry(config, registry)
    }

    /// State with an explicit runner registry (tests swap in scripted
    /// runners here).
    pub fn with_registry(config: AppConfig, registry: RunnerRegistry) -> Self {
        let sandbox = Arc::new(Sandbox::new(registry));
        Self {
            stores: Arc::new(Stores::new()),
            engine: Arc::new(VerdictEngine::new(sandbox)),
            ledger: Arc::new(Ledger::new(config.scoring.accepted_award)),
            config: Arc::new(config),
        }
    }
}
