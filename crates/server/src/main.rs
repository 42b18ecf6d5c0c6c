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
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

use courtside::BookingPolicy;
use courtside_api::{
    AddChargeRequest, ApiConfig, ApiError, AvailabilityRequest, AvailabilityResponse,
    CancelReservationRequest, CancelSeriesRequest, CancelSeriesResponse,
    ConfirmReservationRequest, CreateReservationRequest, CreateReservationResponse,
    CreateSeriesRequest, CreateSeriesResponse, GuestPayload, LogNotifier, Role, authenticate_stub,
    handlers,
};
use courtside_domain::SlotCatalog;
use courtside_persistence::Persistence;

/// Courtside Server - HTTP server for the court reservation system
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// IANA timezone applied when a court carries no override
    #[arg(long, default_value = "Europe/Madrid")]
    default_timezone: String,

    /// Flat default booking price, in cents
    #[arg(long, default_value_t = 0)]
    default_price_cents: i64,

    /// How far ahead non-privileged callers may book, in days
    #[arg(long, default_value_t = 31)]
    max_advance_days: u32,

    /// Seconds between completion sweep cycles
    #[arg(long, default_value_t = 300)]
    sweep_interval_seconds: u64,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The persistence adapter; the mutex serializes every operation,
    /// which is what makes the booking transaction atomic per process.
    persistence: Arc<Mutex<Persistence>>,
    /// Deployment configuration for the API handlers.
    config: Arc<ApiConfig>,
    /// The booking notification sink.
    notifier: Arc<LogNotifier>,
}

// ============================================================================
// Wire requests
// ============================================================================

/// API request for booking a slot, including actor identification.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateReservationApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor (`admin` or `member`).
    actor_role: String,
    /// The court to book.
    court_id: i64,
    /// The activity to book.
    activity_id: i64,
    /// Absolute start instant.
    starts_at: DateTime<Utc>,
    /// The booking member, when the holder is a member.
    member_id: Option<i64>,
    /// The guest descriptor, when the holder is a guest.
    guest: Option<GuestPayload>,
    /// Price override in cents.
    price_cents: Option<i64>,
}

/// API request for confirming a reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ConfirmReservationApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// Payment method string.
    method: String,
}

/// API request for cancelling a reservation.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelReservationApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The club scope the caller operates under.
    club_scope: Option<i64>,
}

/// API request for adding an incidental charge.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct AddChargeApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// Charge amount in cents.
    amount_cents: i64,
    /// Ledger description.
    description: String,
    /// Payment method string.
    method: String,
}

/// API request for creating a fixed weekly series.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateSeriesApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The court to claim weekly.
    court_id: i64,
    /// The activity of every occurrence.
    activity_id: i64,
    /// Absolute start of the first occurrence.
    first_start: DateTime<Utc>,
    /// Number of weekly occurrences to generate.
    weeks: u32,
    /// The holding member, when the holder is a member.
    member_id: Option<i64>,
    /// The guest descriptor, when the holder is a guest.
    guest: Option<GuestPayload>,
    /// Price override per occurrence, in cents.
    price_cents: Option<i64>,
}

/// API request for cancelling a fixed series.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CancelSeriesApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The club scope the caller operates under.
    club_scope: Option<i64>,
}

/// Query parameters for the availability endpoint.
#[derive(Debug, Clone, Deserialize)]
struct AvailabilityParams {
    /// A single court to inspect.
    court_id: Option<i64>,
    /// A club whose courts are inspected together.
    club_id: Option<i64>,
    /// The local calendar day.
    date: NaiveDate,
    /// The activity determining slot length.
    activity_id: i64,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
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
        let status = match err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Forbidden { .. } => StatusCode::FORBIDDEN,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal API error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "member" => Ok(Role::Member),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'member'"),
        }),
    }
}

fn authenticate(
    actor_id: String,
    actor_role: &str,
) -> Result<courtside_api::AuthenticatedActor, HttpError> {
    let role = parse_role(actor_role)?;
    authenticate_stub(actor_id, role).map_err(|e| HttpError {
        status: StatusCode::UNAUTHORIZED,
        message: e.to_string(),
    })
}

// ============================================================================
// Handlers
// ============================================================================

/// Handler for POST `/v1/reservations`.
async fn handle_create_reservation(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateReservationApiRequest>,
) -> Result<Json<CreateReservationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        court_id = req.court_id,
        starts_at = %req.starts_at,
        "Handling create_reservation request"
    );
    let actor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::create_reservation(
        &mut store,
        &actor,
        &app_state.config,
        app_state.notifier.as_ref(),
        CreateReservationRequest {
            court_id: req.court_id,
            activity_id: req.activity_id,
            starts_at: req.starts_at,
            member_id: req.member_id,
            guest: req.guest,
            price_cents: req.price_cents,
        },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for GET `/v1/availability`.
async fn handle_availability(
    AxumState(app_state): AxumState<AppState>,
    Query(params): Query<AvailabilityParams>,
) -> Result<Json<AvailabilityResponse>, HttpError> {
    let mut store = app_state.persistence.lock().await;
    let response = handlers::availability(
        &mut store,
        &app_state.config,
        AvailabilityRequest {
            court_id: params.court_id,
            club_id: params.club_id,
            date: params.date,
            activity_id: params.activity_id,
        },
    )?;
    Ok(Json(response))
}

/// Handler for POST `/v1/reservations/{id}/confirm`.
async fn handle_confirm_reservation(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
    Json(req): Json<ConfirmReservationApiRequest>,
) -> Result<Json<CreateReservationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reservation_id,
        method = %req.method,
        "Handling confirm_reservation request"
    );
    authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::confirm_reservation(
        &mut store,
        reservation_id,
        ConfirmReservationRequest { method: req.method },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for POST `/v1/reservations/{id}/cancel`.
async fn handle_cancel_reservation(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
    Json(req): Json<CancelReservationApiRequest>,
) -> Result<Json<CreateReservationResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reservation_id,
        "Handling cancel_reservation request"
    );
    let actor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::cancel_reservation(
        &mut store,
        &actor,
        reservation_id,
        CancelReservationRequest {
            club_scope: req.club_scope,
        },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for POST `/v1/reservations/{id}/charges`.
async fn handle_add_charge(
    AxumState(app_state): AxumState<AppState>,
    Path(reservation_id): Path<i64>,
    Json(req): Json<AddChargeApiRequest>,
) -> Result<Json<courtside_api::AddChargeResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        reservation_id,
        amount_cents = req.amount_cents,
        "Handling add_charge request"
    );
    authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::add_charge(
        &mut store,
        reservation_id,
        AddChargeRequest {
            amount_cents: req.amount_cents,
            description: req.description,
            method: req.method,
        },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for POST `/v1/series`.
async fn handle_create_series(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateSeriesApiRequest>,
) -> Result<Json<CreateSeriesResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        court_id = req.court_id,
        weeks = req.weeks,
        "Handling create_series request"
    );
    let actor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::create_series(
        &mut store,
        &actor,
        &app_state.config,
        CreateSeriesRequest {
            court_id: req.court_id,
            activity_id: req.activity_id,
            first_start: req.first_start,
            weeks: req.weeks,
            member_id: req.member_id,
            guest: req.guest,
            price_cents: req.price_cents,
        },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for POST `/v1/series/{id}/cancel`.
async fn handle_cancel_series(
    AxumState(app_state): AxumState<AppState>,
    Path(series_id): Path<i64>,
    Json(req): Json<CancelSeriesApiRequest>,
) -> Result<Json<CancelSeriesResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        series_id,
        "Handling cancel_series request"
    );
    let actor = authenticate(req.actor_id.clone(), &req.actor_role)?;

    let mut store = app_state.persistence.lock().await;
    let response = handlers::cancel_series(
        &mut store,
        &actor,
        series_id,
        CancelSeriesRequest {
            club_scope: req.club_scope,
        },
        Utc::now(),
    )?;
    Ok(Json(response))
}

/// Handler for GET `/v1/health`.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/v1/reservations", post(handle_create_reservation))
        .route("/v1/availability", get(handle_availability))
        .route(
            "/v1/reservations/{id}/confirm",
            post(handle_confirm_reservation),
        )
        .route(
            "/v1/reservations/{id}/cancel",
            post(handle_cancel_reservation),
        )
        .route("/v1/reservations/{id}/charges", post(handle_add_charge))
        .route("/v1/series", post(handle_create_series))
        .route("/v1/series/{id}/cancel", post(handle_cancel_series))
        .route("/v1/health", get(handle_health))
        .with_state(app_state)
}

/// Runs the completion sweep on a fixed interval.
///
/// Each cycle takes the persistence lock for one transaction and flips
/// elapsed active reservations to Completed. Safe to stop between
/// cycles.
async fn run_sweep_loop(persistence: Arc<Mutex<Persistence>>, interval_seconds: u64) {
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(interval_seconds));
    loop {
        interval.tick().await;
        let mut store = persistence.lock().await;
        match store.sweep_completed(Utc::now()) {
            Ok(ids) if ids.is_empty() => {}
            Ok(ids) => info!(count = ids.len(), "Completion sweep flipped reservations"),
            Err(err) => error!(error = %err, "Completion sweep failed"),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Courtside Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let config = ApiConfig {
        default_timezone: args.default_timezone.clone(),
        policy: BookingPolicy {
            max_advance_days: args.max_advance_days,
            default_price_cents: args.default_price_cents,
        },
        catalog: SlotCatalog::standard(),
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        config: Arc::new(config),
        notifier: Arc::new(LogNotifier),
    };

    tokio::spawn(run_sweep_loop(
        Arc::clone(&app_state.persistence),
        args.sweep_interval_seconds,
    ));

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode as HttpStatusCode};
    use tower::ServiceExt;

    struct TestIds {
        club_id: i64,
        court_id: i64,
        activity_id: i64,
    }

    fn create_test_app_state() -> (AppState, TestIds) {
        let mut persistence = Persistence::new_in_memory().unwrap();
        let club_id = persistence.create_club("Riverside Racquet Club").unwrap();
        let court_id = persistence.create_court(club_id, "Court 1", None).unwrap();
        let activity_id = persistence.create_activity("Padel", 90).unwrap();

        let config = ApiConfig {
            default_timezone: String::from("UTC"),
            policy: BookingPolicy {
                max_advance_days: 31,
                default_price_cents: 1500,
            },
            catalog: SlotCatalog::standard(),
        };
        let app_state = AppState {
            persistence: Arc::new(Mutex::new(persistence)),
            config: Arc::new(config),
            notifier: Arc::new(LogNotifier),
        };
        (
            app_state,
            TestIds {
                club_id,
                court_id,
                activity_id,
            },
        )
    }

    fn booking_request(ids: &TestIds, starts_at: DateTime<Utc>) -> CreateReservationApiRequest {
        CreateReservationApiRequest {
            actor_id: String::from("front-desk"),
            actor_role: String::from("admin"),
            court_id: ids.court_id,
            activity_id: ids.activity_id,
            starts_at,
            member_id: Some(42),
            guest: None,
            price_cents: None,
        }
    }

    async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> axum::response::Response {
        app.oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(body).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let (app_state, _) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/v1/health")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_create_reservation_round_trip() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let starts_at = Utc::now() + chrono::Duration::days(1);
        let response = post_json(
            app,
            "/v1/reservations",
            &booking_request(&ids, starts_at),
        )
        .await;
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let api_response: CreateReservationResponse =
            serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(api_response.reservation.status, "Pending");
        assert_eq!(api_response.reservation.price_cents, 1500);
    }

    #[tokio::test]
    async fn test_double_booking_returns_conflict() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let starts_at = Utc::now() + chrono::Duration::days(1);
        let first = post_json(
            app.clone(),
            "/v1/reservations",
            &booking_request(&ids, starts_at),
        )
        .await;
        assert_eq!(first.status(), HttpStatusCode::OK);

        let second = post_json(
            app,
            "/v1/reservations",
            &booking_request(&ids, starts_at),
        )
        .await;
        assert_eq!(second.status(), HttpStatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn test_unknown_court_returns_not_found() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let mut request = booking_request(&ids, Utc::now() + chrono::Duration::days(1));
        request.court_id = 999;
        let response = post_json(app, "/v1/reservations", &request).await;
        assert_eq!(response.status(), HttpStatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_invalid_role_rejected() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let mut request = booking_request(&ids, Utc::now() + chrono::Duration::days(1));
        request.actor_role = String::from("janitor");
        let response = post_json(app, "/v1/reservations", &request).await;
        assert_eq!(response.status(), HttpStatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_confirm_and_cancel_flow() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let starts_at = Utc::now() + chrono::Duration::days(1);
        let created = post_json(
            app.clone(),
            "/v1/reservations",
            &booking_request(&ids, starts_at),
        )
        .await;
        let body_bytes = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: CreateReservationResponse = serde_json::from_slice(&body_bytes).unwrap();
        let id = created.reservation.reservation_id;

        let confirm = post_json(
            app.clone(),
            &format!("/v1/reservations/{id}/confirm"),
            &ConfirmReservationApiRequest {
                actor_id: String::from("front-desk"),
                actor_role: String::from("admin"),
                method: String::from("Card"),
            },
        )
        .await;
        assert_eq!(confirm.status(), HttpStatusCode::OK);

        let cancel = post_json(
            app,
            &format!("/v1/reservations/{id}/cancel"),
            &CancelReservationApiRequest {
                actor_id: String::from("front-desk"),
                actor_role: String::from("admin"),
                club_scope: None,
            },
        )
        .await;
        assert_eq!(cancel.status(), HttpStatusCode::OK);
    }

    #[tokio::test]
    async fn test_scope_violation_returns_forbidden() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let starts_at = Utc::now() + chrono::Duration::days(1);
        let created = post_json(
            app.clone(),
            "/v1/reservations",
            &booking_request(&ids, starts_at),
        )
        .await;
        let body_bytes = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let created: CreateReservationResponse = serde_json::from_slice(&body_bytes).unwrap();
        let id = created.reservation.reservation_id;

        let cancel = post_json(
            app,
            &format!("/v1/reservations/{id}/cancel"),
            &CancelReservationApiRequest {
                actor_id: String::from("member-7"),
                actor_role: String::from("member"),
                club_scope: Some(ids.club_id + 1),
            },
        )
        .await;
        assert_eq!(cancel.status(), HttpStatusCode::FORBIDDEN);
    }

    #[tokio::test]
    async fn test_availability_endpoint() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri(format!(
                        "/v1/availability?court_id={}&date=2026-03-02&activity_id={}",
                        ids.court_id, ids.activity_id
                    ))
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let availability: AvailabilityResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert!(!availability.slots.is_empty());
        assert_eq!(availability.slots[0].slot, "08:00");
    }

    #[tokio::test]
    async fn test_series_endpoints() {
        let (app_state, ids) = create_test_app_state();
        let app: Router = build_router(app_state);

        let created = post_json(
            app.clone(),
            "/v1/series",
            &CreateSeriesApiRequest {
                actor_id: String::from("front-desk"),
                actor_role: String::from("admin"),
                court_id: ids.court_id,
                activity_id: ids.activity_id,
                first_start: Utc::now() + chrono::Duration::days(1),
                weeks: 4,
                member_id: Some(42),
                guest: None,
                price_cents: None,
            },
        )
        .await;
        assert_eq!(created.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(created.into_body(), usize::MAX)
            .await
            .unwrap();
        let series: CreateSeriesResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(series.occurrences_created, 4);

        let cancelled = post_json(
            app,
            &format!("/v1/series/{}/cancel", series.series_id),
            &CancelSeriesApiRequest {
                actor_id: String::from("front-desk"),
                actor_role: String::from("admin"),
                club_scope: None,
            },
        )
        .await;
        assert_eq!(cancelled.status(), HttpStatusCode::OK);

        let body_bytes = axum::body::to_bytes(cancelled.into_body(), usize::MAX)
            .await
            .unwrap();
        let cancelled: CancelSeriesResponse = serde_json::from_slice(&body_bytes).unwrap();
        assert_eq!(cancelled.cancelled_occurrence_ids.len(), 4);
    }
}
