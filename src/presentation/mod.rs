// Presentation layer - HTTP adapter over the dashboard store
pub mod app_state;
pub mod handlers;
pub mod router;
