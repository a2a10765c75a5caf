use actix_web::{HttpResponse, web};

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::forms::record::FormRecord;
use crate::mail::{Mailer, templates};

/// GET / — liveness probe.
pub async fn health() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Simphiwe Guesthouse Email API is running.")
}

/// POST /api/send-email
///
/// Renders the email matching the record's `type` and relays it to the
/// guesthouse mailbox. Stateless: no session, no per-request auth.
pub async fn send_email(
    config: web::Data<AppConfig>,
    mailer: web::Data<dyn Mailer>,
    body: web::Json<FormRecord>,
) -> Result<HttpResponse, AppError> {
    let record = body.into_inner();

    // A missing or unrecognized discriminator never reaches the dispatcher.
    let kind = record
        .kind()
        .ok_or_else(|| AppError::BadRequest("Invalid request: Form type is missing.".to_string()))?;

    let email = templates::render(kind, &record)?;

    match mailer
        .send(&config.recipient, &config.email_user, &email.subject, &email.html)
        .await
    {
        Ok(id) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "status": "success",
            "message": format!("{} email sent successfully.", kind.as_str()),
            "message_id": id,
        }))),
        Err(e) => Err(AppError::Dispatch(format!(
            "Failed to send {} request: {e}",
            kind.as_str()
        ))),
    }
}
