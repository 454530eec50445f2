use std::sync::Arc;

use crate::analysis::SwotAnalyzer;
use crate::config::Config;
use crate::store::DynStore;
use axum::extract::FromRef;

#[derive(Clone)]
pub struct AppState {
    pub store: DynStore,
    pub analyzer: Arc<SwotAnalyzer>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: DynStore, analyzer: SwotAnalyzer, config: Config) -> Self {
        Self {
            store,
            analyzer: Arc::new(analyzer),
            config,
        }
    }
}

impl FromRef<AppState> for DynStore {
    fn from_ref(state: &AppState) -> Self {
        state.store.clone()
    }
}

impl FromRef<AppState> for Arc<SwotAnalyzer> {
    fn from_ref(state: &AppState) -> Self {
        state.analyzer.clone()
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}
