use crate::config::AppConfig;

pub mod analyze;

/// Shared, read-only server state. Each request builds its own Riot client.
pub struct AppState {
    pub config: AppConfig,
}
