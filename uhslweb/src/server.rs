//! Web server module for the UHSL Student Center.
//!
//! Wires the static pages and the booking submission endpoint onto an axum
//! router. Holds the process-wide `BookingRegister` behind an `RwLock` in
//! `AppState`; the submit handler keeps the write guard across the whole
//! check-then-insert pair so concurrent submissions for the same slot cannot
//! both pass the conflict scan.
//!
use std::sync::Arc;

use axum::{
    Form, Json, Router,
    extract::{FromRequest, Request, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use thiserror::Error;
use tokio::sync::RwLock;
use uhslcore::{Booking, BookingRegister, SubmitOutcome};

use crate::{
    config::CONFIG,
    html::{BOOKING_PAGE, FAILURE_PAGE, INDEX_PAGE, SUCCESS_PAGE},
};

/// Application state shared across request handlers
pub(crate) struct AppState {
    /// All accepted bookings for this process lifetime
    pub(crate) register: RwLock<BookingRegister>,
}

impl AppState {
    /// Fresh state with an empty register
    pub(crate) fn new() -> Self {
        Self {
            register: RwLock::new(BookingRegister::new()),
        }
    }
}

/// Failure while turning a request into a `Booking`.
///
/// Both variants surface to the client as a generic HTTP 500; the detail
/// only goes to the log.
#[derive(Debug, Error)]
enum SubmitError {
    #[error("unsupported content type: {0:?}")]
    UnsupportedContentType(String),
    #[error("malformed booking payload: {0}")]
    MalformedPayload(String),
}

impl IntoResponse for SubmitError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            "An error occurred while processing your request.",
        )
            .into_response()
    }
}

/// Start the web server on the configured port
pub async fn run() {
    let state = Arc::new(AppState::new());

    let addr = format!("0.0.0.0:{}", CONFIG.web_port)
        .parse::<std::net::SocketAddr>()
        .unwrap();

    tracing::info!(
        "UHSL Student Center server running at http://localhost:{}",
        CONFIG.web_port
    );

    axum_server::bind(addr)
        .serve(app(state).into_make_service())
        .await
        .unwrap();
}

/// Build the router; split out from `run` so tests can serve it on an
/// ephemeral port with their own state
pub(crate) fn app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/index.html", get(index_page))
        .route("/booking.html", get(booking_page))
        .route("/submit-booking", post(submit_booking))
        .route("/booking-success", get(success_page))
        .route("/booking-failure", get(failure_page))
        .with_state(state)
}

/// Handle a booking submission: parse, conflict-check, store, redirect
async fn submit_booking(State(state): State<Arc<AppState>>, req: Request) -> Response {
    let booking = match parse_booking(req).await {
        Ok(booking) => booking,
        Err(err) => {
            tracing::error!(%err, "error processing booking");
            return err.into_response();
        }
    };

    tracing::info!(
        room = %booking.room_type,
        date = %booking.booking_date,
        slot = %booking.time_slot,
        "received new booking request"
    );

    // The write guard must span both the conflict scan and the insert;
    // releasing it between the two admits duplicate acceptances.
    let mut register = state.register.write().await;
    match register.submit(booking) {
        SubmitOutcome::Accepted => {
            tracing::info!(total = register.len(), "booking successful");
            Redirect::to("/booking-success").into_response()
        }
        SubmitOutcome::Conflict => {
            tracing::info!("booking conflict detected");
            Redirect::to("/booking-failure").into_response()
        }
    }
}

/// Deserialize the submission body according to its content type.
///
/// The browser form posts urlencoded data; API callers may post JSON. Any
/// other content type, or a body the deserializer rejects, is an internal
/// error (the register is never touched on this path).
async fn parse_booking(req: Request) -> Result<Booking, SubmitError> {
    let content_type = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
        .to_owned();

    if content_type.starts_with("application/json") {
        let Json(booking) = Json::<Booking>::from_request(req, &())
            .await
            .map_err(|err| SubmitError::MalformedPayload(err.to_string()))?;
        Ok(booking)
    } else if content_type.starts_with("application/x-www-form-urlencoded") {
        let Form(booking) = Form::<Booking>::from_request(req, &())
            .await
            .map_err(|err| SubmitError::MalformedPayload(err.to_string()))?;
        Ok(booking)
    } else {
        Err(SubmitError::UnsupportedContentType(content_type))
    }
}

/// Display the student center homepage
async fn index_page() -> Html<&'static str> {
    Html(INDEX_PAGE)
}

/// Display the booking form
async fn booking_page() -> Html<&'static str> {
    Html(BOOKING_PAGE)
}

/// Display the submission confirmation page
async fn success_page() -> Html<&'static str> {
    Html(SUCCESS_PAGE)
}

/// Display the conflict notice page
async fn failure_page() -> Html<&'static str> {
    Html(FAILURE_PAGE)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use reqwest::{StatusCode, redirect::Policy};

    use super::{AppState, app};

    /// Serve the router on an OS-assigned port; returns the base URL and a
    /// handle on the state so tests can inspect the register directly
    async fn spawn_server() -> (String, Arc<AppState>) {
        let state = Arc::new(AppState::new());
        let router = app(Arc::clone(&state));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        (format!("http://{addr}"), state)
    }

    /// Client that does not follow redirects, so the 303s stay observable
    fn client() -> reqwest::Client {
        reqwest::Client::builder()
            .redirect(Policy::none())
            .build()
            .unwrap()
    }

    const FORM_LAB_A_NINE: &[(&str, &str)] = &[
        ("roomType", "Lab A"),
        ("bookingDate", "2024-05-01"),
        ("timeSlot", "09:00"),
        ("name", "Alice"),
    ];

    /// Every static route serves its page, before and after submissions
    #[tokio::test]
    async fn static_pages_are_served() {
        let (base, _state) = spawn_server().await;
        let client = client();

        for (path, needle) in [
            ("/", "UHSL Student Center"),
            ("/index.html", "UHSL Student Center"),
            ("/booking.html", "Submit Booking Request"),
            ("/booking-success", "Booking Request Received!"),
            ("/booking-failure", "Booking Conflict"),
        ] {
            let res = client.get(format!("{base}{path}")).send().await.unwrap();
            assert_eq!(res.status(), StatusCode::OK, "{path}");
            assert!(res.text().await.unwrap().contains(needle), "{path}");
        }

        // Page content is independent of register state.
        client
            .post(format!("{base}/submit-booking"))
            .form(FORM_LAB_A_NINE)
            .send()
            .await
            .unwrap();
        let res = client
            .get(format!("{base}/booking.html"))
            .send()
            .await
            .unwrap();
        assert!(res.text().await.unwrap().contains("Submit Booking Request"));
    }

    /// First submission redirects to success, duplicate to failure, and the
    /// duplicate leaves the register untouched
    #[tokio::test]
    async fn duplicate_submission_redirects_to_failure() {
        let (base, state) = spawn_server().await;
        let client = client();
        let url = format!("{base}/submit-booking");

        let res = client.post(&url).form(FORM_LAB_A_NINE).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()["location"], "/booking-success");

        let res = client.post(&url).form(FORM_LAB_A_NINE).send().await.unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()["location"], "/booking-failure");

        assert_eq!(state.register.read().await.len(), 1);

        // A different slot on the same room and day is still free.
        let res = client
            .post(&url)
            .form(&[
                ("roomType", "Lab A"),
                ("bookingDate", "2024-05-01"),
                ("timeSlot", "10:00"),
            ])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()["location"], "/booking-success");
        assert_eq!(state.register.read().await.len(), 2);
    }

    /// JSON submissions land in the same register as form submissions
    #[tokio::test]
    async fn json_and_form_share_the_register() {
        let (base, state) = spawn_server().await;
        let client = client();
        let url = format!("{base}/submit-booking");

        let res = client.post(&url).form(FORM_LAB_A_NINE).send().await.unwrap();
        assert_eq!(res.headers()["location"], "/booking-success");

        let res = client
            .post(&url)
            .json(&serde_json::json!({
                "roomType": "Lab A",
                "bookingDate": "2024-05-01",
                "timeSlot": "09:00",
                "email": "bob@uhsl.edu"
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::SEE_OTHER);
        assert_eq!(res.headers()["location"], "/booking-failure");
        assert_eq!(state.register.read().await.len(), 1);

        // Extra fields from the form survive into the stored record.
        let register = state.register.read().await;
        assert_eq!(
            register.bookings()[0].extra.get("name"),
            Some(&serde_json::Value::String("Alice".into()))
        );
    }

    /// Malformed or unsupported payloads get the generic 500 and never
    /// mutate the register
    #[tokio::test]
    async fn bad_payloads_are_internal_errors() {
        let (base, state) = spawn_server().await;
        let client = client();
        let url = format!("{base}/submit-booking");

        // Truncated JSON.
        let res = client
            .post(&url)
            .header("content-type", "application/json")
            .body(r#"{"roomType": "Lab A""#)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            res.text().await.unwrap(),
            "An error occurred while processing your request."
        );

        // Missing composite-key field.
        let res = client
            .post(&url)
            .form(&[("roomType", "Lab A"), ("bookingDate", "2024-05-01")])
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Content type nobody handles.
        let res = client
            .post(&url)
            .header("content-type", "text/plain")
            .body("roomType=Lab A")
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

        assert!(state.register.read().await.is_empty());
    }
}
