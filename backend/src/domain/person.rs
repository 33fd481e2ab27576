//! Staff person record value object.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Staff person record submitted for validation.
///
/// Constructed from a decoded request body, validated, then either echoed
/// back to the client or discarded. The record has no identity and is never
/// mutated after construction.
///
/// Serialisation contract: camelCase JSON keys (`name`, `lastname`, `phone`,
/// `accessLevel`, `salary`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PersonRecord {
    /// Staff person name.
    #[schema(example = "Alice")]
    pub name: String,
    /// Staff person lastname.
    #[schema(example = "Smith")]
    pub lastname: String,
    /// Staff person phone number, optionally prefixed with `+`.
    #[schema(example = "+12345678901")]
    pub phone: String,
    /// Staff person access level to the system (1 to 5).
    #[schema(example = 3)]
    pub access_level: i32,
    /// Staff person salary, a monetary value with two fractional digits.
    #[schema(example = 25000.0)]
    pub salary: f64,
}
