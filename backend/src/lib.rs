//! Sipy backend library modules.
//!
//! The crate exposes a single REST endpoint, `POST /sipy/api/person`, which
//! validates a staff person record and either echoes it back or reports the
//! violated rules. See [`domain::validation`] for the rule set.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod server;

pub use doc::ApiDoc;
pub use middleware::RequestTracking;
