//! HTTP surface: `POST /classes`, `POST /bookings` and the `GET /` banner.
//!
//! Bodies are decoded here, then handed to the services in
//! [`crate::schedule`]. Every JSON reply uses the same [`Envelope`].

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::limits::MAX_BODY_BYTES;
use crate::model::*;
use crate::observability::*;
use crate::schedule::{FormError, Schedule, ScheduleError};

const ROUTE_CLASSES: &str = "classes";
const ROUTE_BOOKINGS: &str = "bookings";

/// Uniform reply body: status code, payload (or null), error strings (or null).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: u16,
    pub data: Option<T>,
    pub errors: Option<Vec<String>>,
}

fn reply<T: Serialize>(status: StatusCode, data: Option<T>, errors: Vec<String>) -> Response {
    let body = Envelope {
        code: status.as_u16(),
        data,
        errors: (!errors.is_empty()).then_some(errors),
    };
    (status, Json(body)).into_response()
}

fn form_errors(errs: &[FormError]) -> Vec<String> {
    errs.iter().map(ToString::to_string).collect()
}

pub fn router(schedule: Schedule) -> Router {
    Router::new()
        .route("/", get(welcome))
        .route("/classes", post(create_class).fallback(method_not_allowed))
        .route("/bookings", post(create_booking).fallback(method_not_allowed))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(schedule)
}

async fn welcome() -> &'static str {
    "Welcome to classbook!"
}

async fn method_not_allowed() -> (StatusCode, &'static str) {
    (StatusCode::METHOD_NOT_ALLOWED, "method not allowed")
}

fn decode<F: DeserializeOwned>(route: &'static str, body: &[u8]) -> Result<F, Response> {
    serde_json::from_slice(body).map_err(|e| {
        warn!("error decoding {route} request body: {e}");
        metrics::counter!(INVALID_BODIES_TOTAL, "route" => route).increment(1);
        reply::<()>(
            StatusCode::BAD_REQUEST,
            None,
            vec!["invalid request body".to_string()],
        )
    })
}

fn rejected(route: &'static str, err: ScheduleError) -> Response {
    debug!("{route} request rejected: {err}");
    metrics::counter!(REJECTIONS_TOTAL, "route" => route, "reason" => err.label()).increment(1);
    reply::<()>(StatusCode::BAD_REQUEST, None, vec![err.to_string()])
}

fn invalid(route: &'static str, errs: &[FormError]) -> Response {
    metrics::counter!(VALIDATION_FAILURES_TOTAL, "route" => route).increment(1);
    reply::<()>(StatusCode::BAD_REQUEST, None, form_errors(errs))
}

fn observe(route: &'static str, started: Instant, response: &Response) {
    metrics::counter!(
        REQUESTS_TOTAL,
        "route" => route,
        "status" => response.status().as_u16().to_string()
    )
    .increment(1);
    metrics::histogram!(REQUEST_DURATION_SECONDS, "route" => route)
        .record(started.elapsed().as_secs_f64());
}

async fn create_class(State(schedule): State<Schedule>, body: Bytes) -> Response {
    let started = Instant::now();
    let response = admit_class(&schedule, &body).await;
    observe(ROUTE_CLASSES, started, &response);
    response
}

async fn admit_class(schedule: &Schedule, body: &[u8]) -> Response {
    let form: ClassForm = match decode(ROUTE_CLASSES, body) {
        Ok(form) => form,
        Err(response) => return response,
    };
    let class = match schedule.classes.parse(form) {
        Ok(class) => class,
        Err(errs) => return invalid(ROUTE_CLASSES, &errs),
    };
    match schedule.classes.create(class).await {
        Ok(class) => {
            info!(
                "class {:?} created for {}..={} (capacity {})",
                class.name, class.start, class.end, class.capacity
            );
            metrics::counter!(CLASSES_CREATED_TOTAL).increment(1);
            reply(StatusCode::CREATED, Some(class), Vec::new())
        }
        Err(e) => rejected(ROUTE_CLASSES, e),
    }
}

async fn create_booking(State(schedule): State<Schedule>, body: Bytes) -> Response {
    let started = Instant::now();
    let response = admit_booking(&schedule, &body).await;
    observe(ROUTE_BOOKINGS, started, &response);
    response
}

async fn admit_booking(schedule: &Schedule, body: &[u8]) -> Response {
    let form: BookingForm = match decode(ROUTE_BOOKINGS, body) {
        Ok(form) => form,
        Err(response) => return response,
    };
    let booking = match schedule.bookings.parse(form) {
        Ok(booking) => booking,
        Err(errs) => return invalid(ROUTE_BOOKINGS, &errs),
    };
    match schedule.bookings.create(booking).await {
        Ok(booking) => {
            info!("booking for {:?} created on {}", booking.name, booking.date);
            metrics::counter!(BOOKINGS_CREATED_TOTAL).increment(1);
            reply(StatusCode::CREATED, Some(booking), Vec::new())
        }
        Err(e) => rejected(ROUTE_BOOKINGS, e),
    }
}
