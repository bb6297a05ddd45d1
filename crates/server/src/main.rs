// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path as AxumPath, Query, State as AxumState},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use barber_booking_api::{
    ApiError, AuthenticatedUser, AvailabilityRequest, AvailabilityResponse, BarberInfo,
    BookingInfo, BulkStatusRequest, BulkStatusResponse, CreateBookingRequest, DayBookingInfo,
    DeleteBookingResponse, RevalidationHook, ServiceInfo, StatsResponse, SweepResponse,
    UpdateStatusRequest, booking_stats, cancel_booking, check_availability, create_booking,
    delete_booking, list_barbers, list_day_bookings, list_services, list_user_bookings,
    update_booking_status, update_expired_bookings, update_multiple_bookings_status,
};
use barber_booking_persistence::Persistence;
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::macros::format_description;
use time::{Date, OffsetDateTime};
use tokio::sync::Mutex;
use tracing::{error, info};

/// Barber Booking Server - HTTP server for the Barber Booking System
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Seconds between background expiry sweeps. 0 disables the sweeper.
    #[arg(long, default_value_t = 60)]
    sweep_interval_secs: u64,

    /// Seed the demo shop catalogue into an empty database on startup.
    #[arg(long)]
    seed: bool,
}

/// Application state shared across handlers.
///
/// The mutex serializes the conflict engine's check-then-insert against
/// concurrent creators, on top of the storage-level unique index.
#[derive(Clone)]
struct AppState {
    /// The persistence adapter for the booking schema.
    persistence: Arc<Mutex<Persistence>>,
}

/// The server's revalidation hook: stale views are only logged here.
/// A frontend-cache deployment would swap in a hook that calls out.
struct LoggingRevalidation;

impl RevalidationHook for LoggingRevalidation {
    fn revalidate(&self, path: &str) {
        tracing::debug!(path, "view marked stale");
    }
}

/// Query parameters for the dashboard day listing.
#[derive(Debug, Deserialize)]
struct DayQuery {
    /// The day to list, as `YYYY-MM-DD` (UTC).
    date: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Always `"ok"` when the server is up.
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::NotAuthenticated => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::SlotOccupied { .. } | ApiError::AlreadyCancelled { .. } => {
                StatusCode::CONFLICT
            }
            ApiError::ValidationFailed { .. } | ApiError::BarberInactive { .. } => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Builds the caller identity from the identity provider's headers.
///
/// The external provider authenticates upstream and forwards
/// `x-user-id`, `x-user-email`, and `x-user-name`. No id means the
/// caller is anonymous.
fn caller_from_headers(headers: &HeaderMap) -> Option<AuthenticatedUser> {
    let header = |name: &str| -> Option<String> {
        headers
            .get(name)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string)
    };
    let id: String = header("x-user-id")?;
    Some(AuthenticatedUser::new(
        id,
        header("x-user-email").unwrap_or_default(),
        header("x-user-name").unwrap_or_default(),
    ))
}

fn parse_day(raw: &str) -> Result<Date, HttpError> {
    Date::parse(raw, format_description!("[year]-[month]-[day]")).map_err(|e| HttpError {
        status: StatusCode::BAD_REQUEST,
        message: format!("Invalid date '{raw}': {e}"),
    })
}

/// Handler for GET `/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for POST `/api/bookings`.
async fn handle_create_booking(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<BookingInfo>), HttpError> {
    let caller: Option<AuthenticatedUser> = caller_from_headers(&headers);
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = create_booking(
        &mut persistence,
        caller.as_ref(),
        &LoggingRevalidation,
        &request,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);
    Ok((StatusCode::CREATED, Json(booking)))
}

/// Handler for POST `/api/bookings/check-availability`.
async fn handle_check_availability(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<AvailabilityRequest>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let response: AvailabilityResponse = check_availability(&mut persistence, &request)?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/bookings/{id}/cancel`.
async fn handle_cancel_booking(
    AxumState(app_state): AxumState<AppState>,
    AxumPath(booking_id): AxumPath<String>,
    headers: HeaderMap,
) -> Result<Json<BookingInfo>, HttpError> {
    let caller: Option<AuthenticatedUser> = caller_from_headers(&headers);
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = cancel_booking(
        &mut persistence,
        caller.as_ref(),
        &LoggingRevalidation,
        &booking_id,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);
    Ok(Json(booking))
}

/// Handler for PUT `/api/bookings/{id}/status`.
async fn handle_update_status(
    AxumState(app_state): AxumState<AppState>,
    AxumPath(booking_id): AxumPath<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<BookingInfo>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let booking: BookingInfo = update_booking_status(
        &mut persistence,
        &LoggingRevalidation,
        &booking_id,
        &request.status,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);
    Ok(Json(booking))
}

/// Handler for PUT `/api/bookings/status` (bulk).
async fn handle_bulk_update_status(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
    Json(request): Json<BulkStatusRequest>,
) -> Result<Json<BulkStatusResponse>, HttpError> {
    let caller: Option<AuthenticatedUser> = caller_from_headers(&headers);
    let mut persistence = app_state.persistence.lock().await;
    let response: BulkStatusResponse = update_multiple_bookings_status(
        &mut persistence,
        caller.as_ref(),
        &LoggingRevalidation,
        &request,
        OffsetDateTime::now_utc(),
    )?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for POST `/api/bookings/sweep`.
async fn handle_sweep(AxumState(app_state): AxumState<AppState>) -> Json<SweepResponse> {
    let mut persistence = app_state.persistence.lock().await;
    let response: SweepResponse = update_expired_bookings(
        &mut persistence,
        &LoggingRevalidation,
        OffsetDateTime::now_utc(),
    );
    drop(persistence);
    Json(response)
}

/// Handler for DELETE `/api/bookings/{id}`.
async fn handle_delete_booking(
    AxumState(app_state): AxumState<AppState>,
    AxumPath(booking_id): AxumPath<String>,
    headers: HeaderMap,
) -> Result<Json<DeleteBookingResponse>, HttpError> {
    let caller: Option<AuthenticatedUser> = caller_from_headers(&headers);
    let mut persistence = app_state.persistence.lock().await;
    let response: DeleteBookingResponse = delete_booking(
        &mut persistence,
        caller.as_ref(),
        &LoggingRevalidation,
        &booking_id,
    )?;
    drop(persistence);
    Ok(Json(response))
}

/// Handler for GET `/api/bookings`.
async fn handle_list_bookings(
    AxumState(app_state): AxumState<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<BookingInfo>>, HttpError> {
    let caller: Option<AuthenticatedUser> = caller_from_headers(&headers);
    let mut persistence = app_state.persistence.lock().await;
    let bookings: Vec<BookingInfo> = list_user_bookings(&mut persistence, caller.as_ref())?;
    drop(persistence);
    Ok(Json(bookings))
}

/// Handler for GET `/api/dashboard/bookings?date=`.
async fn handle_day_bookings(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<DayQuery>,
) -> Result<Json<Vec<DayBookingInfo>>, HttpError> {
    let day: Date = parse_day(&query.date)?;
    let mut persistence = app_state.persistence.lock().await;
    let rows: Vec<DayBookingInfo> = list_day_bookings(&mut persistence, day)?;
    drop(persistence);
    Ok(Json(rows))
}

/// Handler for GET `/api/dashboard/stats`.
async fn handle_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<StatsResponse>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let stats: StatsResponse = booking_stats(&mut persistence)?;
    drop(persistence);
    Ok(Json(stats))
}

/// Handler for GET `/api/barbers`.
async fn handle_list_barbers(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<BarberInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let barbers: Vec<BarberInfo> = list_barbers(&mut persistence)?;
    drop(persistence);
    Ok(Json(barbers))
}

/// Handler for GET `/api/services`.
async fn handle_list_services(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<Vec<ServiceInfo>>, HttpError> {
    let mut persistence = app_state.persistence.lock().await;
    let services: Vec<ServiceInfo> = list_services(&mut persistence)?;
    drop(persistence);
    Ok(Json(services))
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/api/bookings", post(handle_create_booking))
        .route("/api/bookings", get(handle_list_bookings))
        .route(
            "/api/bookings/check-availability",
            post(handle_check_availability),
        )
        .route("/api/bookings/sweep", post(handle_sweep))
        .route("/api/bookings/status", put(handle_bulk_update_status))
        .route("/api/bookings/{id}/cancel", post(handle_cancel_booking))
        .route("/api/bookings/{id}/status", put(handle_update_status))
        .route("/api/bookings/{id}", delete(handle_delete_booking))
        .route("/api/dashboard/bookings", get(handle_day_bookings))
        .route("/api/dashboard/stats", get(handle_stats))
        .route("/api/barbers", get(handle_list_barbers))
        .route("/api/services", get(handle_list_services))
        .with_state(app_state)
}

/// Spawns the background expiry sweeper.
///
/// The task runs forever; a failed sweep category is already logged at
/// the handler level and never tears the task down.
fn spawn_sweeper(app_state: AppState, interval_secs: u64) {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(std::time::Duration::from_secs(interval_secs));
        loop {
            ticker.tick().await;
            let mut persistence = app_state.persistence.lock().await;
            let response: SweepResponse = update_expired_bookings(
                &mut persistence,
                &LoggingRevalidation,
                OffsetDateTime::now_utc(),
            );
            drop(persistence);
            if !response.failures.is_empty() {
                error!(failures = ?response.failures, "background sweep had failures");
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Barber Booking Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let mut persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    if args.seed {
        if persistence.seed_dev_data()? {
            info!("Seeded demo shop catalogue");
        } else {
            info!("Database already has a catalogue; skipping seed");
        }
    }

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    if args.sweep_interval_secs > 0 {
        info!(
            interval_secs = args.sweep_interval_secs,
            "Starting background expiry sweeper"
        );
        spawn_sweeper(app_state.clone(), args.sweep_interval_secs);
    } else {
        info!("Background expiry sweeper disabled");
    }

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode as HttpStatusCode},
    };
    use barber_booking_domain::{Barber, Role, Service, WorkingHours};
    use time::macros::datetime;
    use tower::ServiceExt;

    const USER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000001";
    const STAFF_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000002";
    const BARBER_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000003";
    const SERVICE_ID: &str = "0191d8a0-5f2e-7c3b-9b1a-000000000005";

    /// A valid far-future Wednesday afternoon slot.
    const SLOT: &str = "2030-06-05T14:00:00Z";

    /// Helper to create test app state with a seeded in-memory database.
    fn create_test_app_state() -> AppState {
        let mut persistence: Persistence =
            Persistence::new_in_memory().expect("Failed to create in-memory persistence");
        let seeded_at = datetime!(2026-08-01 12:00 UTC);
        persistence
            .insert_user(USER_ID, "Test User", "user@example.com", Role::User, seeded_at)
            .unwrap();
        persistence
            .insert_user(
                STAFF_ID,
                "Staff Member",
                "staff@example.com",
                Role::Staff,
                seeded_at,
            )
            .unwrap();
        persistence
            .insert_barber(
                &Barber {
                    id: BARBER_ID.to_string(),
                    name: String::from("Lucas Silva"),
                    email: None,
                    is_active: true,
                    specialties: vec![String::from("Cabelo")],
                    working_hours: WorkingHours::default(),
                },
                seeded_at,
            )
            .unwrap();
        persistence
            .insert_service(
                &Service {
                    id: SERVICE_ID.to_string(),
                    name: String::from("Corte de Cabelo"),
                    description: String::from("Corte completo"),
                    price_cents: 6000,
                    duration_minutes: 45,
                },
                seeded_at,
            )
            .unwrap();
        AppState {
            persistence: Arc::new(Mutex::new(persistence)),
        }
    }

    fn create_booking_body(date: &str) -> String {
        serde_json::json!({
            "service_id": SERVICE_ID,
            "barber_id": BARBER_ID,
            "date": date,
            "notes": null,
        })
        .to_string()
    }

    fn post_booking_request(user_id: &str, date: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/api/bookings")
            .header("content-type", "application/json")
            .header("x-user-id", user_id)
            .header("x-user-email", "user@example.com")
            .header("x-user-name", "Test User")
            .body(Body::from(create_booking_body(date)))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_create_booking_returns_created() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::CREATED);
        let body = body_json(response).await;
        assert_eq!(body["status"], "SCHEDULED");
        assert_eq!(body["total_price_cents"], 6000);
        assert_eq!(body["barber_id"], BARBER_ID);
    }

    #[tokio::test]
    async fn test_create_booking_without_identity_is_unauthorized() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings")
                    .header("content-type", "application/json")
                    .body(Body::from(create_booking_body(SLOT)))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_booking_conflict_is_409() {
        let app_state: AppState = create_test_app_state();
        let app: Router = build_router(app_state);

        let first = app
            .clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();
        assert_eq!(first.status(), HttpStatusCode::CREATED);

        let second = app
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_create_booking_on_sunday_is_unprocessable() {
        let app: Router = build_router(create_test_app_state());

        // 2030-06-09 is a Sunday.
        let response = app
            .oneshot(post_booking_request(USER_ID, "2030-06-09T14:00:00Z"))
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::UNPROCESSABLE_ENTITY);
        let body = body_json(response).await;
        assert_eq!(body["error"], true);
    }

    #[tokio::test]
    async fn test_cancel_unknown_booking_is_404() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/missing/cancel")
                    .header("x-user-id", USER_ID)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_cancel_own_booking_succeeds() {
        let app: Router = build_router(create_test_app_state());

        let created = app
            .clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();
        let booking = body_json(created).await;
        let booking_id: &str = booking["id"].as_str().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(format!("/api/bookings/{booking_id}/cancel"))
                    .header("x-user-id", USER_ID)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["status"], "CANCELLED");
    }

    #[tokio::test]
    async fn test_customer_delete_is_forbidden() {
        let app: Router = build_router(create_test_app_state());

        let created = app
            .clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();
        let booking = body_json(created).await;
        let booking_id: &str = booking["id"].as_str().unwrap();

        let response = app
            .oneshot(
                Request::builder()
                    .method("DELETE")
                    .uri(format!("/api/bookings/{booking_id}"))
                    .header("x-user-id", USER_ID)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_availability_probe_round_trip() {
        let app: Router = build_router(create_test_app_state());

        let probe = serde_json::json!({
            "barber_id": BARBER_ID,
            "service_id": SERVICE_ID,
            "date": SLOT,
        })
        .to_string();

        let free = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/check-availability")
                    .header("content-type", "application/json")
                    .body(Body::from(probe.clone()))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(free.status(), HttpStatusCode::OK);
        assert_eq!(body_json(free).await["available"], true);

        app.clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();

        let occupied = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/check-availability")
                    .header("content-type", "application/json")
                    .body(Body::from(probe))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(occupied.status(), HttpStatusCode::OK);
        assert_eq!(body_json(occupied).await["available"], false);
    }

    #[tokio::test]
    async fn test_sweep_endpoint_reports_counts() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/bookings/sweep")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["expired_count"], 0);
        assert_eq!(body["long_running_count"], 0);
        assert_eq!(body["failures"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_list_barbers_and_services() {
        let app: Router = build_router(create_test_app_state());

        let barbers = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/barbers")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(barbers.status(), HttpStatusCode::OK);
        let barbers_body = body_json(barbers).await;
        assert_eq!(barbers_body.as_array().unwrap().len(), 1);
        assert_eq!(barbers_body[0]["name"], "Lucas Silva");

        let services = app
            .oneshot(
                Request::builder()
                    .uri("/api/services")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(services.status(), HttpStatusCode::OK);
        let services_body = body_json(services).await;
        assert_eq!(services_body[0]["price_cents"], 6000);
    }

    #[tokio::test]
    async fn test_dashboard_day_listing_and_stats() {
        let app: Router = build_router(create_test_app_state());

        app.clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();

        let day = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard/bookings?date=2030-06-05")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(day.status(), HttpStatusCode::OK);
        let day_body = body_json(day).await;
        assert_eq!(day_body.as_array().unwrap().len(), 1);
        assert_eq!(day_body[0]["user_name"], "Test User");

        let stats = app
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard/stats")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(stats.status(), HttpStatusCode::OK);
        let stats_body = body_json(stats).await;
        assert_eq!(stats_body["scheduled"], 1);
    }

    #[tokio::test]
    async fn test_dashboard_bad_date_is_400() {
        let app: Router = build_router(create_test_app_state());

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api/dashboard/bookings?date=June-5th")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_staff_bulk_status_update() {
        let app: Router = build_router(create_test_app_state());

        let created = app
            .clone()
            .oneshot(post_booking_request(USER_ID, SLOT))
            .await
            .unwrap();
        let booking = body_json(created).await;
        let booking_id: &str = booking["id"].as_str().unwrap();

        let body = serde_json::json!({
            "booking_ids": [booking_id],
            "status": "COMPLETED",
        })
        .to_string();
        let response = app
            .oneshot(
                Request::builder()
                    .method("PUT")
                    .uri("/api/bookings/status")
                    .header("content-type", "application/json")
                    .header("x-user-id", STAFF_ID)
                    .body(Body::from(body))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), HttpStatusCode::OK);
        let response_body = body_json(response).await;
        assert_eq!(response_body["updated_count"], 1);
    }
}
