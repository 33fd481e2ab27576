//! HTTP adapter mapping for domain failures.
//!
//! Purpose: keep the domain types HTTP-agnostic while letting Actix handlers
//! turn them into consistent JSON responses and status codes. Validation
//! failures become a bare JSON array of violations with status 400; envelope
//! errors serialise as-is with the status matching their code.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode};
use tracing::debug;

use crate::domain::{Error, ErrorCode, ValidationFailure};
use crate::middleware::request_id::REQUEST_ID_HEADER;

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.request_id() {
            builder.insert_header((REQUEST_ID_HEADER, id.to_owned()));
        }
        builder.json(self)
    }
}

impl ResponseError for ValidationFailure {
    fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    fn error_response(&self) -> HttpResponse {
        let mut builder = HttpResponse::build(self.status_code());
        if let Some(id) = self.request_id() {
            builder.insert_header((REQUEST_ID_HEADER, id.to_owned()));
        }
        builder.json(self.violations())
    }
}

/// Map undecodable JSON bodies to the error envelope before any handler runs.
///
/// Registered through [`actix_web::web::JsonConfig`]; the validator is never
/// invoked for payloads that fail here.
pub fn json_decode_error(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejecting undecodable request body");
    Error::invalid_request(format!("malformed person payload: {err}")).into()
}
