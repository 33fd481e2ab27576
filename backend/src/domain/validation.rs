//! Validation rules for [`PersonRecord`].
//!
//! Every rule is an independent predicate paired with a fixed message. Rules
//! are evaluated in order and all failing rules are reported; nothing
//! short-circuits, so a single field may contribute several violations.
//! Evaluation is a pure in-memory computation with no shared state, safe to
//! invoke concurrently from any number of request handlers.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use thiserror::Error as ThisError;
use utoipa::ToSchema;

use crate::domain::PersonRecord;
use crate::middleware::request_id::RequestId;

/// Inclusive character-count bounds shared by `name` and `lastname`.
const TEXT_LENGTH: RangeInclusive<usize> = 5..=100;

/// Inclusive salary bounds applied regardless of access level.
const SALARY_RANGE: RangeInclusive<f64> = 5000.0..=50000.0;

/// Tier table mapping an access level to its maximum permissible salary.
/// Levels absent from the table have no cap and always fail the tier rule.
const TIER_CAPS: [(i32, u32); 5] = [
    (1, 10_000),
    (2, 20_000),
    (3, 30_000),
    (4, 40_000),
    (5, 50_000),
];

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]{10,15}$").expect("phone pattern"));

/// Stable machine-readable code identifying the kind of rule that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ViolationCode {
    /// A required value was blank or zero.
    Required,
    /// Text length fell outside the permitted bounds.
    Length,
    /// The value does not match the required format.
    Format,
    /// A numeric value fell outside the permitted range.
    Range,
    /// The salary exceeds the cap for the record's access level.
    TierCap,
}

/// A single failed rule: the offending field and a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Violation {
    /// JSON key of the field the rule constrains.
    #[schema(example = "salary")]
    pub field: String,
    /// Human-readable description of the failed rule.
    #[schema(example = "salary out of global range")]
    pub message: String,
    /// Machine-readable rule category.
    pub code: ViolationCode,
}

impl Violation {
    fn new(field: &str, message: impl Into<String>, code: ViolationCode) -> Self {
        Self {
            field: field.to_owned(),
            message: message.into(),
            code,
        }
    }
}

/// Failed validation outcome carrying a non-empty list of violations.
///
/// This is the only error taxonomy the validation core produces. The inbound
/// HTTP adapter serialises the violation list as a JSON array with status
/// 400; the core itself knows nothing about transport.
#[derive(Debug, Clone, PartialEq, ThisError)]
#[error("person record failed validation with {} violation(s)", .violations.len())]
pub struct ValidationFailure {
    violations: Vec<Violation>,
    request_id: Option<String>,
}

impl ValidationFailure {
    /// Wrap a non-empty violation list, capturing any ambient request id for
    /// response correlation.
    #[must_use]
    pub fn new(violations: Vec<Violation>) -> Self {
        debug_assert!(!violations.is_empty(), "violation list must be non-empty");
        Self {
            violations,
            request_id: RequestId::current().map(|id| id.to_string()),
        }
    }

    /// The violations that caused the failure.
    #[must_use]
    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Request id captured when the failure was constructed, if any.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Cap for the given access level, or `None` when the level has no tier.
fn tier_cap(access_level: i32) -> Option<u32> {
    TIER_CAPS
        .iter()
        .find(|(level, _)| *level == access_level)
        .map(|&(_, cap)| cap)
}

fn check_text(field: &str, value: &str, violations: &mut Vec<Violation>) {
    if is_blank(value) {
        violations.push(Violation::new(
            field,
            format!("{field} is required"),
            ViolationCode::Required,
        ));
    }
    if !TEXT_LENGTH.contains(&value.chars().count()) {
        violations.push(Violation::new(
            field,
            format!("{field} length invalid"),
            ViolationCode::Length,
        ));
    }
}

fn check_phone(value: &str, violations: &mut Vec<Violation>) {
    if is_blank(value) {
        violations.push(Violation::new(
            "phone",
            "phone is required",
            ViolationCode::Required,
        ));
    }
    if !PHONE_PATTERN.is_match(value) {
        violations.push(Violation::new(
            "phone",
            "invalid phone format",
            ViolationCode::Format,
        ));
    }
}

fn check_access_level(access_level: i32, violations: &mut Vec<Violation>) {
    if !(1..=5).contains(&access_level) {
        violations.push(Violation::new(
            "accessLevel",
            "access level out of range",
            ViolationCode::Range,
        ));
    }
}

fn check_salary(record: &PersonRecord, violations: &mut Vec<Violation>) {
    let salary = record.salary;
    if salary == 0.0 {
        violations.push(Violation::new(
            "salary",
            "salary is required",
            ViolationCode::Required,
        ));
    }
    if salary <= 0.0 {
        violations.push(Violation::new(
            "salary",
            "salary must be positive",
            ViolationCode::Range,
        ));
    }
    if !SALARY_RANGE.contains(&salary) {
        violations.push(Violation::new(
            "salary",
            "salary out of global range",
            ViolationCode::Range,
        ));
    }
    // The tier rule is evaluated independently of the range rules above and
    // of the access-level range rule; both messages may appear together.
    match tier_cap(record.access_level) {
        Some(cap) if salary > f64::from(cap) => {
            violations.push(Violation::new(
                "salary",
                format!("Salary cannot be greater than {cap}"),
                ViolationCode::TierCap,
            ));
        }
        Some(_) => {}
        None => {
            violations.push(Violation::new(
                "salary",
                "access level invalid",
                ViolationCode::TierCap,
            ));
        }
    }
}

/// Evaluate every rule against the record and collect the failures.
///
/// Returns an empty vector iff the record satisfies all rules. The same
/// immutable record always yields the same result.
#[must_use]
pub fn validate(record: &PersonRecord) -> Vec<Violation> {
    let mut violations = Vec::new();
    check_text("name", &record.name, &mut violations);
    check_text("lastname", &record.lastname, &mut violations);
    check_phone(&record.phone, &mut violations);
    check_access_level(record.access_level, &mut violations);
    check_salary(record, &mut violations);
    violations
}

/// Validate the record, turning a non-empty violation list into a
/// [`ValidationFailure`].
///
/// # Errors
///
/// Returns [`ValidationFailure`] when at least one rule fails.
pub fn check(record: &PersonRecord) -> Result<(), ValidationFailure> {
    let violations = validate(record);
    if violations.is_empty() {
        Ok(())
    } else {
        Err(ValidationFailure::new(violations))
    }
}
