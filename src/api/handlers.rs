//! HTTP request handlers for the employee registry API.
//!
//! This module contains the handler functions for all API endpoints and the
//! router that wires them together.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderValue, Method, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde::Serialize;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use uuid::Uuid;

use crate::config::CorsConfig;
use crate::error::{RegistryError, RegistryResult};
use crate::models::{EmployeeDraft, EmployeeId};
use crate::reporting::{dashboard_report, summary_report};

use super::request::EmployeeRequest;
use super::response::{
    ApiError, ApiErrorResponse, CreatedResponse, EmployeeDetail, EmployeeListItem,
    MessageResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/employee", post(create_employee_handler))
        .route("/employees", get(list_employees_handler))
        .route(
            "/employee/:id",
            put(update_employee_handler).delete(delete_employee_handler),
        )
        .route("/api/employee/:id", get(get_employee_handler))
        .route("/report", get(summary_report_handler))
        .route("/dashboard/report", get(dashboard_report_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Creates the router with CORS and request tracing layers applied.
pub fn create_app(state: AppState, cors: &CorsConfig) -> Router {
    create_router(state)
        .layer(cors_layer(cors))
        .layer(TraceLayer::new_for_http())
}

/// Builds a CORS layer allowing the configured origins.
///
/// Origins that are not valid header values are skipped with a warning.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

/// Handler for POST /employee.
async fn create_employee_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing create employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = EmployeeDraft::from(request)
        .validate()
        .and_then(|fields| state.store().create(fields));

    match result {
        Ok(id) => {
            info!(correlation_id = %correlation_id, employee_id = %id, "Employee created");
            json_response(
                StatusCode::CREATED,
                CreatedResponse {
                    message: "Employee added successfully".to_string(),
                    id: id.to_string(),
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /employees.
async fn list_employees_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().list_all() {
        Ok(records) => {
            info!(
                correlation_id = %correlation_id,
                count = records.len(),
                "Listed employees"
            );
            let items: Vec<EmployeeListItem> = records.into_iter().map(Into::into).collect();
            json_response(StatusCode::OK, items)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /employee/:id.
///
/// Replaces every field of the record; partial bodies are rejected. An
/// unknown id is reported before any problem with the body.
async fn update_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, employee_id = %id, "Processing update employee request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let result = parse_id(&id).and_then(|id| {
        state.store().get(&id)?;
        let fields = EmployeeDraft::from(request).validate()?;
        state.store().update(&id, fields)
    });

    match result {
        Ok(record) => {
            info!(correlation_id = %correlation_id, employee_id = %record.id, "Employee updated");
            json_response(
                StatusCode::OK,
                MessageResponse::new("Employee updated successfully"),
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for DELETE /employee/:id.
///
/// Succeeds whether or not the record existed.
async fn delete_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    let removed = match id.parse::<EmployeeId>() {
        Ok(id) => state.store().delete(&id),
        Err(_) => Ok(false),
    };

    match removed {
        Ok(removed) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %id,
                removed,
                "Processed delete employee request"
            );
            json_response(
                StatusCode::OK,
                MessageResponse::new("Employee deleted successfully"),
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /api/employee/:id.
async fn get_employee_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Response {
    let correlation_id = Uuid::new_v4();

    match parse_id(&id).and_then(|id| state.store().get(&id)) {
        Ok(record) => json_response(StatusCode::OK, EmployeeDetail::from(record)),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /report.
async fn summary_report_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().list_all() {
        Ok(records) => {
            let report = summary_report(&records);
            info!(
                correlation_id = %correlation_id,
                total_employees = report.total_employees,
                total_salary = %report.total_salary,
                "Summary report generated"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /dashboard/report.
async fn dashboard_report_handler(State(state): State<AppState>) -> Response {
    let correlation_id = Uuid::new_v4();

    match state.store().list_all() {
        Ok(records) => {
            let report = dashboard_report(&records);
            info!(
                correlation_id = %correlation_id,
                total_employees = report.total_employees,
                departments = report.department_stats.len(),
                avg_salary = %report.avg_salary,
                "Dashboard report generated"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /health.
async fn health_handler() -> Response {
    json_response(StatusCode::OK, MessageResponse::new("ok"))
}

/// Path ids that do not parse cannot name a stored record.
fn parse_id(raw: &str) -> RegistryResult<EmployeeId> {
    raw.parse().map_err(|_| RegistryError::EmployeeNotFound {
        id: raw.to_string(),
    })
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn error_response(correlation_id: Uuid, err: RegistryError) -> Response {
    warn!(correlation_id = %correlation_id, error = %err, "Request failed");
    ApiErrorResponse::from(err).into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Body text carries serde's description of the offending field
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            ApiError::validation_error(body_text)
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    json_response(StatusCode::BAD_REQUEST, error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reporting::{DashboardReport, SummaryReport};
    use crate::store::{EmployeeStore, InMemoryStore};
    use axum::body::Body;
    use axum::http::Request;
    use rust_decimal::Decimal;
    use serde::de::DeserializeOwned;
    use std::str::FromStr;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn create_test_state() -> (AppState, Arc<InMemoryStore>) {
        let store = Arc::new(InMemoryStore::new(false));
        (AppState::new(store.clone()), store)
    }

    fn valid_body() -> serde_json::Value {
        serde_json::json!({
            "first_name": "Ada",
            "last_name": "Lovelace",
            "email": "ada@example.com",
            "salary": 100,
            "department_id": "A",
            "role_id": "engineer"
        })
    }

    async fn send(router: Router, method: &str, uri: &str, body: Option<String>) -> Response {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("Content-Type", "application/json")
                .body(Body::from(body))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        router.oneshot(request).await.unwrap()
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> T {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_201_with_id() {
        let (state, store) = create_test_state();
        let router = create_router(state);

        let response = send(router, "POST", "/employee", Some(valid_body().to_string())).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let content_type = response.headers().get("content-type").unwrap();
        assert_eq!(content_type, "application/json");

        let created: CreatedResponse = read_json(response).await;
        let id: EmployeeId = created.id.parse().unwrap();
        assert_eq!(store.get(&id).unwrap().first_name, "Ada");
    }

    #[tokio::test]
    async fn test_create_missing_field_returns_400() {
        let (state, store) = create_test_state();
        let router = create_router(state);

        let mut body = valid_body();
        body.as_object_mut().unwrap().remove("salary");

        let response = send(router, "POST", "/employee", Some(body.to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(error.details.as_deref(), Some("salary"));
        assert!(store.is_empty().unwrap());
    }

    #[tokio::test]
    async fn test_malformed_json_returns_400() {
        let (state, _) = create_test_state();
        let router = create_router(state);

        let response = send(router, "POST", "/employee", Some("{invalid json".to_string())).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "MALFORMED_JSON");
    }

    #[tokio::test]
    async fn test_get_unknown_and_unparseable_ids_return_404() {
        let (state, _) = create_test_state();

        for uri in [
            format!("/api/employee/{}", EmployeeId::new()),
            "/api/employee/not-an-id".to_string(),
        ] {
            let response = send(create_router(state.clone()), "GET", &uri, None).await;
            assert_eq!(response.status(), StatusCode::NOT_FOUND);

            let error: ApiError = read_json(response).await;
            assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
        }
    }

    #[tokio::test]
    async fn test_update_unknown_id_returns_404() {
        let (state, _) = create_test_state();
        let uri = format!("/employee/{}", EmployeeId::new());

        let response = send(create_router(state), "PUT", &uri, Some(valid_body().to_string())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_unknown_id_with_partial_body_returns_404() {
        let (state, _) = create_test_state();
        let uri = format!("/employee/{}", EmployeeId::new());
        let body = serde_json::json!({ "first_name": "x" }).to_string();

        let response = send(create_router(state), "PUT", &uri, Some(body)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.headers().get("content-type").unwrap(),
            "application/json"
        );

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "EMPLOYEE_NOT_FOUND");
    }

    #[tokio::test]
    async fn test_update_existing_id_with_partial_body_returns_400() {
        let (state, store) = create_test_state();
        let request: EmployeeRequest = serde_json::from_value(valid_body()).unwrap();
        let id = store
            .create(EmployeeDraft::from(request).validate().unwrap())
            .unwrap();
        let before = store.get(&id).unwrap();
        let uri = format!("/employee/{}", id);
        let body = serde_json::json!({ "first_name": "x" }).to_string();

        let response = send(create_router(state), "PUT", &uri, Some(body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let error: ApiError = read_json(response).await;
        assert_eq!(error.code, "VALIDATION_ERROR");
        assert_eq!(store.get(&id).unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_absent_id_returns_200() {
        let (state, _) = create_test_state();
        let uri = format!("/employee/{}", EmployeeId::new());

        let response = send(create_router(state), "DELETE", &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: MessageResponse = read_json(response).await;
        assert_eq!(body.message, "Employee deleted successfully");
    }

    #[tokio::test]
    async fn test_reports_on_empty_store() {
        let (state, _) = create_test_state();

        let response = send(create_router(state.clone()), "GET", "/report", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let summary: SummaryReport = read_json(response).await;
        assert_eq!(summary.total_employees, 0);
        assert_eq!(summary.total_salary, Decimal::ZERO);

        let response = send(create_router(state), "GET", "/dashboard/report", None).await;
        assert_eq!(response.status(), StatusCode::OK);
        let dashboard: DashboardReport = read_json(response).await;
        assert!(dashboard.department_stats.is_empty());
        assert_eq!(dashboard.highest_paid_department, None);
    }

    #[tokio::test]
    async fn test_dashboard_reflects_store_contents() {
        let (state, store) = create_test_state();
        for (salary, department) in [(100, "A"), (200, "A"), (50, "B")] {
            let mut body = valid_body();
            body["salary"] = salary.into();
            body["department_id"] = department.into();
            let request: EmployeeRequest = serde_json::from_value(body).unwrap();
            let fields = EmployeeDraft::from(request).validate().unwrap();
            store.create(fields).unwrap();
        }

        let response = send(create_router(state), "GET", "/dashboard/report", None).await;
        let report: DashboardReport = read_json(response).await;

        assert_eq!(report.total_employees, 3);
        assert_eq!(report.avg_salary, Decimal::from_str("116.67").unwrap());
        assert_eq!(report.department_with_most_employees.as_deref(), Some("A"));
    }

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        let config = CorsConfig {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "bad\norigin".to_string(),
            ],
        };
        // Building must not panic on the invalid entry
        let _layer = cors_layer(&config);
    }
}
