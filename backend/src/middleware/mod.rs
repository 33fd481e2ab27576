//! Actix middleware used by the HTTP server.

pub mod request_id;

pub use request_id::RequestTracking;
