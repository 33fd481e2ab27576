//! Domain types and validation rules.
//!
//! Purpose: define the person record under validation and the pure rule set
//! applied to it. Everything here is transport agnostic; inbound adapters map
//! outcomes to HTTP responses.
//!
//! Public surface:
//! - [`PersonRecord`] — the value object under validation.
//! - [`validate`] / [`check`] — rule evaluation.
//! - [`Violation`] / [`ValidationFailure`] — per-rule failures and the
//!   aggregate error they roll up into.
//! - [`Error`] / [`ErrorCode`] — envelope for non-validation failures.

pub mod error;
pub mod person;
pub mod validation;

#[cfg(test)]
mod validation_tests;

pub use self::error::{Error, ErrorCode};
pub use self::person::PersonRecord;
pub use self::validation::{ValidationFailure, Violation, ViolationCode, check, validate};
