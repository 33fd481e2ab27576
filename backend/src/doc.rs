//! OpenAPI documentation configuration.
//!
//! Defines [`ApiDoc`], the generated specification for the REST API. The
//! document registers the person endpoint and the health probes together
//! with the schemas they reference. Swagger UI serves it in debug builds.

use utoipa::OpenApi;

use crate::domain::{Error, ErrorCode, PersonRecord, Violation, ViolationCode};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Sipy person API",
        description = "Validates staff person records against the salary and access-level rule set."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::person::submit_person,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(PersonRecord, Violation, ViolationCode, Error, ErrorCode)),
    tags(
        (name = "person", description = "Person record validation"),
        (name = "health", description = "Probes for orchestration")
    )
)]
pub struct ApiDoc;
