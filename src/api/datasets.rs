//! Dataset endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Router,
};
use tracing::debug;

use crate::api::middleware::RequireUser;
use crate::api::state::AppState;
use crate::api::types::{
    ApiError, CreateDatasetApiRequest, DatasetResponse, DeleteDatasetResponse, Json,
    ListDatasetsResponse, UserResponse,
};
use crate::domain::dataset::Settings;
use crate::infrastructure::dataset::CreateDatasetRequest;

/// Create the dataset API router
pub fn create_datasets_router() -> Router<AppState> {
    Router::new()
        .route("/me", get(current_user))
        .route("/datasets", get(list_datasets).post(create_dataset))
        .route("/datasets/{name}", get(get_dataset).delete(delete_dataset))
        .route(
            "/datasets/{name}/settings",
            get(get_settings).put(put_settings),
        )
}

/// GET /api/me
pub async fn current_user(RequireUser(user): RequireUser) -> Json<UserResponse> {
    Json(UserResponse::from(&user))
}

/// GET /api/datasets
pub async fn list_datasets(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
) -> Result<Json<ListDatasetsResponse>, ApiError> {
    let datasets: Vec<DatasetResponse> = state
        .dataset_service
        .list()
        .await?
        .iter()
        .map(DatasetResponse::from)
        .collect();
    let total = datasets.len();

    Ok(Json(ListDatasetsResponse { datasets, total }))
}

/// POST /api/datasets
pub async fn create_dataset(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Json(request): Json<CreateDatasetApiRequest>,
) -> Result<(StatusCode, Json<DatasetResponse>), ApiError> {
    debug!(name = %request.name, task = %request.task, "Creating dataset");

    let dataset = state
        .dataset_service
        .create(
            &user,
            CreateDatasetRequest {
                name: request.name,
                task: request.task,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(DatasetResponse::from(&dataset))))
}

/// GET /api/datasets/{name}
pub async fn get_dataset(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(name): Path<String>,
) -> Result<Json<DatasetResponse>, ApiError> {
    let dataset = state
        .dataset_service
        .get(&name)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("Dataset '{}' not found", name)))?;

    Ok(Json(DatasetResponse::from(&dataset)))
}

/// DELETE /api/datasets/{name}
pub async fn delete_dataset(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(name): Path<String>,
) -> Result<Json<DeleteDatasetResponse>, ApiError> {
    let deleted = state.dataset_service.delete(&user, &name).await?;

    Ok(Json(DeleteDatasetResponse { deleted, name }))
}

/// GET /api/datasets/{name}/settings
///
/// Responds with `null` when the dataset has no settings yet.
pub async fn get_settings(
    State(state): State<AppState>,
    RequireUser(_): RequireUser,
    Path(name): Path<String>,
) -> Result<Json<Option<Settings>>, ApiError> {
    let settings = state.dataset_service.load_settings(&name).await?;
    Ok(Json(settings))
}

/// PUT /api/datasets/{name}/settings
pub async fn put_settings(
    State(state): State<AppState>,
    RequireUser(user): RequireUser,
    Path(name): Path<String>,
    Json(settings): Json<Settings>,
) -> Result<Json<DatasetResponse>, ApiError> {
    debug!(name = %name, task = %settings.task(), "Saving dataset settings");

    let dataset = state
        .dataset_service
        .configure_settings(&user, &name, settings)
        .await?;

    Ok(Json(DatasetResponse::from(&dataset)))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::body::{to_bytes, Body};
    use axum::http::{header, Method, Request};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::api::middleware::API_KEY_HEADER;
    use crate::api::types::TASK_MISMATCH_CODE;
    use crate::domain::user::{MockUserRepository, User, UserRole};
    use crate::infrastructure::dataset::{DatasetService, InMemoryDatasetRepository};

    fn test_router() -> Router {
        let users = MockUserRepository::new()
            .with_user(User::new("admin", UserRole::Admin, "admin.apikey").unwrap())
            .with_user(User::new("alice", UserRole::Annotator, "alice.apikey").unwrap())
            .with_user(User::new("mock-user", UserRole::Annotator, "mock-user.apikey").unwrap());
        let service = DatasetService::new(Arc::new(InMemoryDatasetRepository::new()));
        let state = AppState::new(Arc::new(service), Arc::new(users));

        Router::new()
            .nest("/api", create_datasets_router())
            .with_state(state)
    }

    async fn send(
        router: &Router,
        method: Method,
        uri: &str,
        api_key: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);

        if let Some(key) = api_key {
            builder = builder.header(API_KEY_HEADER, key);
        }

        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };

        (status, value)
    }

    #[tokio::test]
    async fn test_requires_api_key() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/api/datasets", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["error"]["type"], "authentication_error");

        let (status, _) = send(&router, Method::GET, "/api/datasets", Some("wrong.apikey"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_current_user() {
        let router = test_router();

        let (status, body) = send(&router, Method::GET, "/api/me", Some("alice.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"username": "alice", "role": "annotator"}));
    }

    #[tokio::test]
    async fn test_create_and_get_dataset() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/datasets",
            Some("alice.apikey"),
            Some(json!({"name": "reviews", "task": "TextClassification"})),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["owner"], "alice");

        let (status, body) =
            send(&router, Method::GET, "/api/datasets/reviews", Some("admin.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["task"], "TextClassification");
        assert!(body["settings"].is_null());

        let (status, body) = send(&router, Method::GET, "/api/datasets", Some("admin.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["total"], 1);
    }

    #[tokio::test]
    async fn test_create_duplicate_conflict() {
        let router = test_router();
        let body = json!({"name": "reviews", "task": "TextClassification"});

        send(&router, Method::POST, "/api/datasets", Some("alice.apikey"), Some(body.clone())).await;
        let (status, response) =
            send(&router, Method::POST, "/api/datasets", Some("alice.apikey"), Some(body)).await;

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(response["error"]["type"], "conflict_error");
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let router = test_router();

        let (status, body) = send(
            &router,
            Method::POST,
            "/api/datasets",
            Some("alice.apikey"),
            Some(json!({"name": "reviews"})),
        )
        .await;

        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["code"], "json_parse_error");
    }

    #[tokio::test]
    async fn test_settings_round_trip_and_mismatch() {
        let router = test_router();
        send(
            &router,
            Method::POST,
            "/api/datasets",
            Some("alice.apikey"),
            Some(json!({"name": "ner", "task": "TokenClassification"})),
        )
        .await;

        let (status, body) =
            send(&router, Method::GET, "/api/datasets/ner/settings", Some("alice.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_null());

        let settings = json!({"task": "TokenClassification", "label_schema": ["PER", "ORG"]});
        let (status, _) = send(
            &router,
            Method::PUT,
            "/api/datasets/ner/settings",
            Some("alice.apikey"),
            Some(settings),
        )
        .await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) =
            send(&router, Method::GET, "/api/datasets/ner/settings", Some("alice.apikey"), None).await;
        assert_eq!(
            body,
            json!({"task": "TokenClassification", "label_schema": ["ORG", "PER"]})
        );

        let (status, body) = send(
            &router,
            Method::PUT,
            "/api/datasets/ner/settings",
            Some("alice.apikey"),
            Some(json!({"task": "TextClassification", "label_schema": ["A", "B"]})),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], TASK_MISMATCH_CODE);
    }

    #[tokio::test]
    async fn test_settings_missing_dataset() {
        let router = test_router();

        let (status, _) =
            send(&router, Method::GET, "/api/datasets/ghost/settings", Some("alice.apikey"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_by_non_creator_forbidden() {
        let router = test_router();
        send(
            &router,
            Method::POST,
            "/api/datasets",
            Some("alice.apikey"),
            Some(json!({"name": "reviews", "task": "TextClassification"})),
        )
        .await;

        let (status, body) =
            send(&router, Method::DELETE, "/api/datasets/reviews", Some("mock-user.apikey"), None).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body["error"]["type"], "permission_error");

        let (status, body) =
            send(&router, Method::DELETE, "/api/datasets/reviews", Some("alice.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({"deleted": true, "name": "reviews"}));
    }

    #[tokio::test]
    async fn test_delete_missing_dataset() {
        let router = test_router();

        let (status, body) =
            send(&router, Method::DELETE, "/api/datasets/ghost", Some("alice.apikey"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["deleted"], false);
    }
}
