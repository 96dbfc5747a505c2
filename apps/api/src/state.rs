use std::sync::Arc;

use crate::config::Config;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
/// The scoring engine is stateless and needs no slot here.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable resume store. Postgres when DATABASE_URL is set, in-memory otherwise.
    pub store: Arc<dyn ResumeStore>,
    pub config: Config,
}
