use std::sync::Arc;

use crate::analysis::GapResolver;
use crate::config::Config;
use crate::news::NewsFeed;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Gap analysis and roadmap lookup over the catalog loaded at startup.
    pub resolver: GapResolver,
    /// Pluggable headline source. Default: HackerNewsClient.
    pub news: Arc<dyn NewsFeed>,
}
