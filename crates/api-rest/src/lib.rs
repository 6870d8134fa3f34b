//! # API REST
//!
//! REST API implementation for the vitals tracker.
//!
//! Handles:
//! - HTTP endpoints with axum
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON serialization, CORS, status codes)
//!
//! Uses `api-shared` for wire types and `vitals-core` for all record logic.

#![warn(rust_2018_idioms)]

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use api_shared::{
    ClearRecordsRes, CreateRecordRes, DashboardRes, DeleteRecordRes, ErrorRes, HealthRes,
    HealthService, InterpretRes, ListRecordsRes, RecordRes, VitalsFormReq,
};
use vitals_core::{
    config::data_dir_from_env_value,
    constants::{DATA_DIR_ENV, EXPORT_FILENAME},
    CoreConfig, RecordId, VitalsError, VitalsService,
};

/// Environment variable holding the REST listen address.
pub const REST_ADDR_ENV: &str = "VITALS_REST_ADDR";

/// Listen address used when `VITALS_REST_ADDR` is unset.
pub const DEFAULT_REST_ADDR: &str = "0.0.0.0:3000";

/// Application state shared across REST API handlers
#[derive(Clone)]
pub struct AppState {
    vitals_service: Arc<VitalsService>,
}

impl AppState {
    pub fn new(vitals_service: VitalsService) -> Self {
        Self {
            vitals_service: Arc::new(vitals_service),
        }
    }
}

/// Resolves core configuration from the environment and builds the application state.
///
/// # Errors
/// Returns an error if the configured data directory is unusable.
pub fn state_from_env() -> anyhow::Result<AppState> {
    let data_dir = data_dir_from_env_value(std::env::var(DATA_DIR_ENV).ok());
    let service = VitalsService::new(Arc::new(CoreConfig::new(data_dir)?));
    tracing::info!("-- Records stored in {}", service.config().data_dir().display());
    Ok(AppState::new(service))
}

/// Binds `addr` and serves the REST API until the server stops.
///
/// # Errors
/// Returns an error if the address cannot be bound or the server fails while running.
pub async fn serve(addr: &str, state: AppState) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router(state)).await?;
    Ok(())
}

#[derive(OpenApi)]
#[openapi(
    paths(
        health,
        interpret,
        list_records,
        create_record,
        delete_record,
        clear_records,
        dashboard,
        export_csv,
    ),
    components(schemas(
        HealthRes,
        ErrorRes,
        VitalsFormReq,
        api_shared::FindingRes,
        InterpretRes,
        RecordRes,
        CreateRecordRes,
        ListRecordsRes,
        DeleteRecordRes,
        ClearRecordsRes,
        DashboardRes,
        api_shared::SeveritySummaryRes,
        api_shared::CategoryBreakdownRes,
        api_shared::BloodPressureDistributionRes,
        api_shared::CardiacRateDistributionRes,
        api_shared::TemperatureTrendRes,
        api_shared::TemperaturePointRes,
    ))
)]
pub struct ApiDoc;

/// Builds the REST router with every route, Swagger UI and permissive CORS.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/interpret", post(interpret))
        .route(
            "/records",
            get(list_records).post(create_record).delete(clear_records),
        )
        .route("/records/:id", delete(delete_record))
        .route("/dashboard", get(dashboard))
        .route("/export.csv", get(export_csv))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

type ApiError = (StatusCode, Json<ErrorRes>);

/// Maps a core error to a status code and body.
///
/// Caller mistakes are reported verbatim; anything else is logged and hidden behind a
/// generic message.
fn api_error(e: VitalsError) -> ApiError {
    if !e.is_client_error() {
        tracing::error!("Vitals service error: {:?}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorRes {
                message: "Internal error".into(),
            }),
        );
    }

    let status = match &e {
        VitalsError::RecordNotFound(_) | VitalsError::NothingToExport => StatusCode::NOT_FOUND,
        _ => StatusCode::BAD_REQUEST,
    };
    (status, Json(ErrorRes { message: e.to_string() }))
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/interpret",
    request_body = VitalsFormReq,
    responses(
        (status = 200, description = "Findings for the submitted vitals", body = InterpretRes),
        (status = 400, description = "Missing or non-numeric vitals", body = ErrorRes)
    )
)]
/// Interpret a set of vitals without storing a record
async fn interpret(
    State(state): State<AppState>,
    Json(req): Json<VitalsFormReq>,
) -> Result<Json<InterpretRes>, ApiError> {
    let result = state
        .vitals_service
        .interpret_only(&req.into())
        .map_err(api_error)?;
    Ok(Json(InterpretRes::from(&result)))
}

#[utoipa::path(
    get,
    path = "/records",
    responses(
        (status = 200, description = "All stored records", body = ListRecordsRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// List all stored records in insertion order
async fn list_records(State(state): State<AppState>) -> Result<Json<ListRecordsRes>, ApiError> {
    let records = state.vitals_service.list_records().map_err(api_error)?;
    Ok(Json(ListRecordsRes {
        records: records.iter().map(RecordRes::from).collect(),
    }))
}

#[utoipa::path(
    post,
    path = "/records",
    request_body = VitalsFormReq,
    responses(
        (status = 201, description = "Record created", body = CreateRecordRes),
        (status = 400, description = "Missing name or invalid vitals", body = ErrorRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Submit a new vitals record
///
/// Validates the form, interprets the vitals once and stores the record with its findings.
async fn create_record(
    State(state): State<AppState>,
    Json(req): Json<VitalsFormReq>,
) -> Result<(StatusCode, Json<CreateRecordRes>), ApiError> {
    let record = state
        .vitals_service
        .submit(&req.into())
        .map_err(api_error)?;
    Ok((
        StatusCode::CREATED,
        Json(CreateRecordRes {
            record: RecordRes::from(&record),
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/records/{id}",
    params(
        ("id" = String, Path, description = "Record id, 32 lowercase hex characters")
    ),
    responses(
        (status = 200, description = "Record deleted", body = DeleteRecordRes),
        (status = 400, description = "Malformed record id", body = ErrorRes),
        (status = 404, description = "No record with this id", body = ErrorRes)
    )
)]
/// Delete one record
async fn delete_record(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteRecordRes>, ApiError> {
    let id = RecordId::parse(&id).map_err(|e| api_error(e.into()))?;
    state.vitals_service.delete_record(&id).map_err(api_error)?;
    Ok(Json(DeleteRecordRes { id: id.to_string() }))
}

#[utoipa::path(
    delete,
    path = "/records",
    responses(
        (status = 200, description = "All records deleted", body = ClearRecordsRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Delete every record
async fn clear_records(State(state): State<AppState>) -> Result<Json<ClearRecordsRes>, ApiError> {
    let removed = state.vitals_service.clear_records().map_err(api_error)?;
    Ok(Json(ClearRecordsRes { removed }))
}

#[utoipa::path(
    get,
    path = "/dashboard",
    responses(
        (status = 200, description = "Aggregate statistics over all records", body = DashboardRes),
        (status = 500, description = "Internal server error", body = ErrorRes)
    )
)]
/// Dashboard statistics and chart series
async fn dashboard(State(state): State<AppState>) -> Result<Json<DashboardRes>, ApiError> {
    let dashboard = state.vitals_service.dashboard().map_err(api_error)?;
    Ok(Json(DashboardRes::from(&dashboard)))
}

#[utoipa::path(
    get,
    path = "/export.csv",
    responses(
        (status = 200, description = "CSV export of all records", content_type = "text/csv", body = String),
        (status = 404, description = "No data to export", body = ErrorRes)
    )
)]
/// Export all records as CSV
async fn export_csv(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let csv = state.vitals_service.export_csv().map_err(api_error)?;
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
            ),
        ],
        csv,
    ))
}
