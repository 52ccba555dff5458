use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The analysis engine is a set of pure functions, so configuration is the
/// only thing handlers need.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}
