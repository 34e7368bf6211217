use std::sync::Arc;

use crate::config::Config;
use crate::matching::scoring::MatchScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable match scorer. Default: TfidfCosineScorer.
    pub scorer: Arc<dyn MatchScorer>,
}
