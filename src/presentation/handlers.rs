// HTTP request handlers
use crate::application::dashboard_store::{CatalogItem, DashboardSnapshot};
use crate::domain::command::DashboardCommand;
use crate::domain::error::DashboardError;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
pub struct SearchQuery {
    pub search: Option<String>,
}

#[derive(Deserialize)]
pub struct NewWidgetRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementRequest {
    pub category_id: String,
    pub present: bool,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Store errors that reach a client.
pub struct ApiError(DashboardError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0 {
            DashboardError::ValidationRejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            DashboardError::ReferenceNotFound { .. } => StatusCode::NOT_FOUND,
            DashboardError::DuplicateId { .. } => StatusCode::CONFLICT,
        };
        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard snapshot
pub async fn get_dashboard(State(state): State<Arc<AppState>>) -> Json<DashboardSnapshot> {
    Json(state.store.read().await.snapshot())
}

/// Catalog entries matching `?search=`, with their checkbox state
pub async fn search_catalog(
    Query(query): Query<SearchQuery>,
    State(state): State<Arc<AppState>>,
) -> Json<Vec<CatalogItem>> {
    let term = query.search.unwrap_or_default();
    Json(state.store.read().await.catalog_view(&term))
}

/// Distinct catalog group names
pub async fn list_catalog_groups(State(state): State<Arc<AppState>>) -> Json<Vec<String>> {
    Json(state.store.read().await.category_groups())
}

pub async fn add_custom_widget(
    Path(category_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<NewWidgetRequest>,
) -> Result<(StatusCode, Json<DashboardSnapshot>), ApiError> {
    let mut store = state.store.write().await;
    let changed = store
        .dispatch(DashboardCommand::AddCustomWidget {
            category_id,
            name: request.name,
            text: request.text,
        })
        .map_err(ApiError)?;

    let status = if changed { StatusCode::CREATED } else { StatusCode::OK };
    Ok((status, Json(store.snapshot())))
}

pub async fn remove_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> Json<DashboardSnapshot> {
    let mut store = state.store.write().await;
    store.remove_widget(&category_id, &widget_id);
    Json(store.snapshot())
}

pub async fn toggle_widget(
    Path(widget_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(request): Json<PlacementRequest>,
) -> Json<DashboardSnapshot> {
    let mut store = state.store.write().await;
    store.toggle_widget(&widget_id, request.present, &request.category_id);
    Json(store.snapshot())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_store::DashboardStore;
    use crate::domain::command::test_ids::CountingIds;
    use crate::infrastructure::seed::default_seed;
    use crate::presentation::router::build_router;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use axum::Router;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        let store = DashboardStore::new(
            default_seed().into_state().unwrap(),
            Arc::new(CountingIds::new("customWidget")),
        );
        build_router(Arc::new(AppState::new(store)))
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }

    fn widget_count(snapshot: &Value, category_id: &str) -> usize {
        snapshot["categories"]
            .as_array()
            .unwrap()
            .iter()
            .find(|c| c["id"] == category_id)
            .map(|c| c["widgets"].as_array().unwrap().len())
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_get_dashboard() {
        let (status, body) = send(&app(), Method::GET, "/dashboard", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revision"], 0);
        assert_eq!(body["categories"].as_array().unwrap().len(), 3);
        assert_eq!(body["availableWidgets"].as_array().unwrap().len(), 8);
    }

    #[tokio::test]
    async fn test_remove_widget() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::DELETE,
            "/categories/cspmExecutiveDashboard/widgets/cloudAccounts",
            None,
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["revision"], 1);
        assert_eq!(widget_count(&body, "cspmExecutiveDashboard"), 1);
        assert_eq!(widget_count(&body, "cwppDashboard"), 2);
    }

    #[tokio::test]
    async fn test_add_custom_widget() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/categories/registryScan/widgets",
            Some(json!({ "name": "Note", "text": "hello" })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(widget_count(&body, "registryScan"), 3);

        let last = body["availableWidgets"].as_array().unwrap().last().unwrap().clone();
        assert_eq!(last["category"], "Registry Scan");
        assert_eq!(last["name"], "Note");
    }

    #[tokio::test]
    async fn test_add_custom_widget_empty_name_is_unprocessable() {
        let app = app();
        let (status, body) = send(
            &app,
            Method::POST,
            "/categories/cwppDashboard/widgets",
            Some(json!({ "name": "", "text": "text" })),
        )
        .await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"], "name must not be empty");

        let (_, snapshot) = send(&app, Method::GET, "/dashboard", None).await;
        assert_eq!(snapshot["revision"], 0);
        assert_eq!(widget_count(&snapshot, "cwppDashboard"), 2);
    }

    #[tokio::test]
    async fn test_toggle_widget_round_trip() {
        let app = app();
        let (_, body) = send(
            &app,
            Method::PUT,
            "/catalog/newWidgetImage/placement",
            Some(json!({ "categoryId": "cwppDashboard", "present": true })),
        )
        .await;
        assert_eq!(widget_count(&body, "cwppDashboard"), 3);

        let (_, catalog) = send(&app, Method::GET, "/catalog?search=image%20widget", None).await;
        assert_eq!(catalog[0]["id"], "newWidgetImage");
        assert_eq!(catalog[0]["present"], true);

        let (_, body) = send(
            &app,
            Method::PUT,
            "/catalog/newWidgetImage/placement",
            Some(json!({ "categoryId": "cwppDashboard", "present": false })),
        )
        .await;
        assert_eq!(widget_count(&body, "cwppDashboard"), 2);
        assert_eq!(body["revision"], 2);
    }

    #[tokio::test]
    async fn test_catalog_search_and_groups() {
        let app = app();
        let (status, catalog) = send(&app, Method::GET, "/catalog", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(catalog.as_array().unwrap().len(), 8);
        assert_eq!(catalog[4]["targetCategoryId"], "registryScan");
        assert_eq!(catalog[0]["targetCategoryId"], Value::Null);

        let (_, filtered) = send(&app, Method::GET, "/catalog?search=ALERTS", None).await;
        let names: Vec<_> = filtered
            .as_array()
            .unwrap()
            .iter()
            .map(|w| w["name"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["Top 5 Namespace Specific Alerts", "Workload Alerts"]);

        let (_, groups) = send(&app, Method::GET, "/catalog/groups", None).await;
        assert_eq!(groups, json!(["CSPM", "CWPP", "Registry Scan", "Image", "Ticket"]));
    }
}
