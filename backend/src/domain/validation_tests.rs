//! Unit tests for the person record validation rules.

use rstest::rstest;

use crate::domain::validation::{check, validate, ViolationCode};
use crate::domain::PersonRecord;

fn valid_record() -> PersonRecord {
    PersonRecord {
        name: "Alice".to_owned(),
        lastname: "Smith".to_owned(),
        phone: "+12345678901".to_owned(),
        access_level: 3,
        salary: 25000.0,
    }
}

fn messages(record: &PersonRecord) -> Vec<String> {
    validate(record)
        .into_iter()
        .map(|violation| violation.message)
        .collect()
}

#[rstest]
fn valid_record_produces_no_violations() {
    assert!(validate(&valid_record()).is_empty());
    assert!(check(&valid_record()).is_ok());
}

#[rstest]
fn validation_is_idempotent() {
    let record = valid_record();
    assert_eq!(validate(&record), validate(&record));
}

#[rstest]
fn blank_name_reports_required_before_length() {
    let record = PersonRecord {
        name: "   ".to_owned(),
        ..valid_record()
    };

    let violations = validate(&record);
    assert_eq!(violations.len(), 2);
    assert_eq!(violations.first().map(|v| v.message.as_str()), Some("name is required"));
    assert_eq!(
        violations.get(1).map(|v| v.message.as_str()),
        Some("name length invalid")
    );
}

#[rstest]
#[case("Al".to_owned())]
#[case("a".repeat(101))]
fn name_length_outside_bounds_is_invalid(#[case] name: String) {
    let record = PersonRecord {
        name,
        ..valid_record()
    };

    assert_eq!(messages(&record), vec!["name length invalid"]);
}

#[rstest]
#[case("Alice".to_owned())]
#[case("a".repeat(100))]
fn name_length_at_bounds_is_valid(#[case] name: String) {
    let record = PersonRecord {
        name,
        ..valid_record()
    };

    assert!(validate(&record).is_empty());
}

#[rstest]
fn blank_lastname_reports_required_and_length() {
    let record = PersonRecord {
        lastname: String::new(),
        ..valid_record()
    };

    let found = messages(&record);
    assert!(found.contains(&"lastname is required".to_owned()));
    assert!(found.contains(&"lastname length invalid".to_owned()));
}

#[rstest]
#[case("123")]
#[case("123456789")]
#[case("1234567890123456")]
#[case("+1234567890123456")]
#[case("abc4567890")]
#[case("++12345678901")]
#[case("12345 67890")]
fn malformed_phone_reports_invalid_format(#[case] phone: &str) {
    let record = PersonRecord {
        phone: phone.to_owned(),
        ..valid_record()
    };

    assert_eq!(messages(&record), vec!["invalid phone format"]);
}

#[rstest]
#[case("1234567890")]
#[case("+1234567890")]
#[case("123456789012345")]
#[case("+123456789012345")]
fn well_formed_phone_is_accepted(#[case] phone: &str) {
    let record = PersonRecord {
        phone: phone.to_owned(),
        ..valid_record()
    };

    assert!(validate(&record).is_empty());
}

#[rstest]
fn blank_phone_reports_required_and_format() {
    let record = PersonRecord {
        phone: "  ".to_owned(),
        ..valid_record()
    };

    let found = messages(&record);
    assert!(found.contains(&"phone is required".to_owned()));
    assert!(found.contains(&"invalid phone format".to_owned()));
}

#[rstest]
#[case(0)]
#[case(-1)]
#[case(6)]
#[case(42)]
fn out_of_range_access_level_fails_range_and_tier_rules(#[case] access_level: i32) {
    let record = PersonRecord {
        access_level,
        ..valid_record()
    };

    let found = messages(&record);
    assert!(found.contains(&"access level out of range".to_owned()));
    assert!(found.contains(&"access level invalid".to_owned()));
}

#[rstest]
fn tier_failure_for_unknown_level_is_attached_to_salary() {
    let record = PersonRecord {
        access_level: 6,
        ..valid_record()
    };

    let violation = validate(&record)
        .into_iter()
        .find(|v| v.code == ViolationCode::TierCap)
        .expect("tier violation");
    assert_eq!(violation.field, "salary");
    assert_eq!(violation.message, "access level invalid");
}

#[rstest]
fn zero_salary_reports_required_positive_and_range() {
    let record = PersonRecord {
        salary: 0.0,
        ..valid_record()
    };

    assert_eq!(
        messages(&record),
        vec![
            "salary is required",
            "salary must be positive",
            "salary out of global range",
        ]
    );
}

#[rstest]
fn negative_salary_is_not_reported_as_missing() {
    let record = PersonRecord {
        salary: -5.0,
        ..valid_record()
    };

    assert_eq!(
        messages(&record),
        vec!["salary must be positive", "salary out of global range"]
    );
}

#[rstest]
#[case(4999.99)]
#[case(50000.01)]
fn salary_outside_global_range_is_rejected(#[case] salary: f64) {
    let record = PersonRecord {
        salary,
        access_level: 5,
        ..valid_record()
    };

    let found = messages(&record);
    assert!(found.contains(&"salary out of global range".to_owned()));
}

#[rstest]
#[case(1, 10000.0)]
#[case(2, 20000.0)]
#[case(3, 30000.0)]
#[case(4, 40000.0)]
#[case(5, 50000.0)]
fn salary_at_tier_cap_is_accepted(#[case] access_level: i32, #[case] salary: f64) {
    let record = PersonRecord {
        access_level,
        salary,
        ..valid_record()
    };

    assert!(validate(&record).is_empty());
}

#[rstest]
#[case(1, 10000.01, "Salary cannot be greater than 10000")]
#[case(2, 25000.0, "Salary cannot be greater than 20000")]
#[case(3, 30001.0, "Salary cannot be greater than 30000")]
#[case(4, 40001.0, "Salary cannot be greater than 40000")]
fn salary_above_tier_cap_is_rejected_within_global_range(
    #[case] access_level: i32,
    #[case] salary: f64,
    #[case] expected: &str,
) {
    let record = PersonRecord {
        access_level,
        salary,
        ..valid_record()
    };

    // Within the global range, so the tier rule is the only failure.
    assert_eq!(messages(&record), vec![expected]);
}

#[rstest]
fn heavily_invalid_record_reports_every_failed_rule() {
    let record = PersonRecord {
        name: "Al".to_owned(),
        lastname: "Smith".to_owned(),
        phone: "123".to_owned(),
        access_level: 6,
        salary: 60000.0,
    };

    let found = messages(&record);
    assert_eq!(found.len(), 5);
    assert!(found.contains(&"name length invalid".to_owned()));
    assert!(found.contains(&"invalid phone format".to_owned()));
    assert!(found.contains(&"access level out of range".to_owned()));
    assert!(found.contains(&"salary out of global range".to_owned()));
    assert!(found.contains(&"access level invalid".to_owned()));
}

#[rstest]
fn check_wraps_violations_in_validation_failure() {
    let record = PersonRecord {
        salary: 60000.0,
        ..valid_record()
    };

    let failure = check(&record).expect_err("record is invalid");
    assert!(!failure.violations().is_empty());
    assert!(failure.to_string().contains("violation"));
}
