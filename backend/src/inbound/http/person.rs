//! Person API handler.
//!
//! ```text
//! POST /sipy/api/person  Validate a staff person record
//! ```

use actix_web::{post, web};
use tracing::debug;

use crate::domain::{PersonRecord, ValidationFailure, check};

/// Validate a staff person record.
///
/// The decoded record is run through the full rule set. A clean record is
/// echoed back unchanged with status 200; otherwise the response is a 400
/// with a JSON array listing every violated rule, not just the first.
#[utoipa::path(
    post,
    path = "/sipy/api/person",
    request_body = PersonRecord,
    responses(
        (status = 200, description = "Record is valid and echoed back", body = PersonRecord),
        (status = 400, description = "Validation failed", body = [crate::domain::Violation])
    ),
    tags = ["person"],
    operation_id = "submitPerson"
)]
#[post("/person")]
pub async fn submit_person(
    payload: web::Json<PersonRecord>,
) -> Result<web::Json<PersonRecord>, ValidationFailure> {
    let person = payload.into_inner();
    check(&person)?;
    debug!(access_level = person.access_level, "person record accepted");
    Ok(web::Json(person))
}
