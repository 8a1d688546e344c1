// Application state for HTTP handlers
use crate::application::dashboard_store::DashboardStore;
use tokio::sync::RwLock;

/// Handlers share one store; the write lock makes it the single writer.
pub struct AppState {
    pub store: RwLock<DashboardStore>,
}

impl AppState {
    pub fn new(store: DashboardStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }
}
