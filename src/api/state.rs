//! Application state for the Travel Settlement Engine API.

use std::sync::Arc;

use crate::config::SettlementConfig;
use crate::engine::SettlementEngine;
use crate::error::SettlementResult;

/// Shared application state.
///
/// Holds the compiled settlement engine. Requests only read from it, so a
/// single engine serves every request.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<SettlementEngine>,
}

impl AppState {
    /// Creates a new application state with the given engine.
    pub fn new(engine: SettlementEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Compiles an engine for `config` and wraps it in application state.
    pub fn from_config(config: SettlementConfig) -> SettlementResult<Self> {
        Ok(Self::new(SettlementEngine::new(config)?))
    }

    /// Returns a reference to the settlement engine.
    pub fn engine(&self) -> &SettlementEngine {
        &self.engine
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_engine() {
        let state = AppState::from_config(SettlementConfig::default()).unwrap();
        let clone = state.clone();
        assert!(std::ptr::eq(state.engine(), clone.engine()));
    }
}
