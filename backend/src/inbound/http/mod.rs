//! HTTP inbound adapter exposing the REST endpoints.

pub mod error;
pub mod health;
pub mod person;
