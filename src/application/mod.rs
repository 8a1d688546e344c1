// Application layer - the dashboard store
pub mod dashboard_store;
