//! Submission client normalization: success envelopes, server error
//! messages, the bare-status fallback, and unreachable endpoints.

use actix_web::{App, HttpResponse, HttpServer, web};

use simphiwe::client::{ApiClient, SubmitClient, SubmitError};
use simphiwe::forms::{FormKind, FormRecord};

async fn success_route() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "success",
        "message": "booking email sent successfully.",
        "message_id": "abc123",
    }))
}

async fn error_route() -> HttpResponse {
    HttpResponse::InternalServerError().json(serde_json::json!({
        "status": "error",
        "message": "Failed to send booking request: relay down",
    }))
}

async fn text_error_route() -> HttpResponse {
    HttpResponse::ServiceUnavailable().body("upstream melted")
}

/// Bind the fixture server on an ephemeral port and return its base URL.
fn spawn_server() -> String {
    let server = HttpServer::new(|| {
        App::new()
            .route("/ok", web::post().to(success_route))
            .route("/error", web::post().to(error_route))
            .route("/text-error", web::post().to(text_error_route))
    })
    .workers(1)
    .bind(("127.0.0.1", 0))
    .expect("Failed to bind fixture server");

    let addr = server.addrs()[0];
    actix_rt::spawn(server.run());
    format!("http://{addr}")
}

fn record() -> FormRecord {
    let mut record = FormRecord::new(FormKind::Booking);
    record.set("name", "Thabo Dlamini");
    record
}

#[actix_rt::test]
async fn test_success_envelope_parsed() {
    let base = spawn_server();
    let client = ApiClient::new(format!("{base}/ok"));

    let submission = client.submit(&record()).await.expect("submit failed");
    assert_eq!(submission.message, "booking email sent successfully.");
    assert_eq!(submission.message_id.as_deref(), Some("abc123"));
}

#[actix_rt::test]
async fn test_server_error_message_surfaced() {
    let base = spawn_server();
    let client = ApiClient::new(format!("{base}/error"));

    match client.submit(&record()).await {
        Err(SubmitError::Rejected(message)) => {
            assert_eq!(message, "Failed to send booking request: relay down");
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[actix_rt::test]
async fn test_non_json_error_falls_back_to_status() {
    let base = spawn_server();
    let client = ApiClient::new(format!("{base}/text-error"));

    match client.submit(&record()).await {
        Err(SubmitError::Rejected(message)) => {
            assert_eq!(message, "API request failed with status: 503");
        }
        other => panic!("Expected Rejected, got {other:?}"),
    }
}

#[actix_rt::test]
async fn test_unreachable_endpoint_is_transport_error() {
    // Nothing listens on port 1.
    let client = ApiClient::new("http://127.0.0.1:1/api/send-email");

    match client.submit(&record()).await {
        Err(SubmitError::Transport(_)) => {}
        other => panic!("Expected Transport, got {other:?}"),
    }
}
