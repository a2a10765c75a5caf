use actix_web::{HttpResponse, ResponseError};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    BadRequest(String),
    Template(askama::Error),
    Dispatch(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BadRequest(msg) => write!(f, "{msg}"),
            AppError::Template(e) => write!(f, "Template error: {e}"),
            AppError::Dispatch(msg) => write!(f, "{msg}"),
        }
    }
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::BadRequest(msg) => HttpResponse::BadRequest().json(serde_json::json!({
                "status": "error",
                "message": msg,
            })),
            AppError::Template(e) => {
                log::error!("Email template error: {e}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "status": "error",
                    "message": "Internal server error.",
                }))
            }
            AppError::Dispatch(msg) => {
                log::error!("Mail dispatch failed: {msg}");
                HttpResponse::InternalServerError().json(serde_json::json!({
                    "status": "error",
                    "message": msg,
                }))
            }
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(e: askama::Error) -> Self {
        AppError::Template(e)
    }
}
