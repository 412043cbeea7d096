use actix_multipart::MultipartError;
use actix_web::{HttpResponse, ResponseError};
use derive_more::Display;
use serde_json::json;

/// Request-facing error taxonomy. Handlers and use cases communicate through
/// these tagged variants instead of matching on message strings.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum AppError {
    #[display("Missing required field: {}", _0)]
    MissingField(String),

    #[display("Employee ID must be 3 uppercase letters followed by 4 digits")]
    InvalidIdFormat,

    #[display("Email must be a valid {} address", crate::constants::ORG_EMAIL_DOMAIN)]
    InvalidEmailFormat,

    #[display("Phone number must be exactly 10 digits")]
    InvalidPhoneFormat,

    #[display("Only JPEG or PNG images are allowed, got {}", _0)]
    UnsupportedMediaType(String),

    #[display("Profile image exceeds the 5 MiB limit")]
    PayloadTooLarge,

    #[display("Not found: {}", _0)]
    NotFound(String),

    #[display("Database error: {}", _0)]
    StoreError(String),

    #[display("IO error: {}", _0)]
    IoError(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidIdFormat
            | AppError::InvalidEmailFormat
            | AppError::InvalidPhoneFormat => HttpResponse::BadRequest().json(json!({
                "error": "validation_error",
                "message": self.to_string()
            })),
            // Media rejections are client errors on this surface, same as
            // the field validation kinds; the tagged discriminator is what
            // distinguishes them.
            AppError::UnsupportedMediaType(_) => HttpResponse::BadRequest().json(json!({
                "error": "unsupported_media_type",
                "message": self.to_string()
            })),
            AppError::PayloadTooLarge => HttpResponse::BadRequest().json(json!({
                "error": "payload_too_large",
                "message": self.to_string()
            })),
            AppError::NotFound(_) => HttpResponse::NotFound().json(json!({
                "error": "not_found",
                "message": self.to_string()
            })),
            // The underlying store message travels to the client for
            // diagnostics; nothing is redacted.
            AppError::StoreError(_) | AppError::IoError(_) => {
                HttpResponse::InternalServerError().json(json!({
                    "error": "internal_server_error",
                    "message": self.to_string()
                }))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => AppError::NotFound("Database row not found".to_string()),
            _ => AppError::StoreError(err.to_string()),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<MultipartError> for AppError {
    fn from(err: MultipartError) -> Self {
        match err {
            MultipartError::ContentTypeIncompatible => {
                AppError::UnsupportedMediaType("incompatible content type".to_string())
            }
            MultipartError::Payload(_) => AppError::PayloadTooLarge,
            _ => AppError::MissingField(err.to_string()),
        }
    }
}
