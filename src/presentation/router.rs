// Route table for the dashboard API
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_custom_widget, get_dashboard, health_check, list_catalog_groups, remove_widget,
    search_catalog, toggle_widget,
};
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::{compression::CompressionLayer, trace::TraceLayer};

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/catalog", get(search_catalog))
        .route("/catalog/groups", get(list_catalog_groups))
        .route("/catalog/:widget_id/placement", put(toggle_widget))
        .route("/categories/:category_id/widgets", post(add_custom_widget))
        .route(
            "/categories/:category_id/widgets/:widget_id",
            delete(remove_widget),
        )
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
