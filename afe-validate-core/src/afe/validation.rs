//! Business rules applied to an AFE record.
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::debug;

use super::{DocumentData, ValidationOutcome};

pub const START_DATE_REQUIRED: &str = "Start date must be filled out";
pub const END_DATE_REQUIRED: &str = "End date must be filled out";
pub const END_BEFORE_START: &str = "End date must be equal to or after start date";
pub const START_DATE_INVALID: &str = "Start date is not a valid date";
pub const END_DATE_INVALID: &str = "End date is not a valid date";
pub const DESCRIPTION_PLEASE: &str = "Description should contain the word 'please'";

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Run every rule against `data`, in order.
///
/// # Examples
/// ```rust
/// use afe_validate_core::afe::{DocumentData, validate};
///
/// let outcome = validate(&DocumentData::new("please approve", "2024-01-01", "2024-01-31"));
/// assert!(outcome.is_success());
/// assert!(!outcome.has_warnings());
/// ```
pub fn validate(data: &DocumentData) -> ValidationOutcome {
    let mut outcome = ValidationOutcome::new();

    if data.start_date.is_empty() {
        outcome.push_error(START_DATE_REQUIRED);
    }
    if data.end_date.is_empty() {
        outcome.push_error(END_DATE_REQUIRED);
    }
    if outcome.is_success() {
        check_date_order(data, &mut outcome);
    }

    if !mentions_please(&data.description) {
        outcome.push_warning(DESCRIPTION_PLEASE);
    }

    debug!(
        errors = outcome.errors().len(),
        warnings = outcome.warnings().len(),
        "validated AFE document data"
    );
    outcome
}

fn check_date_order(data: &DocumentData, outcome: &mut ValidationOutcome) {
    let start = parse_date(&data.start_date);
    let end = parse_date(&data.end_date);

    if start.is_none() {
        outcome.push_error(START_DATE_INVALID);
    }
    if end.is_none() {
        outcome.push_error(END_DATE_INVALID);
    }
    if let (Some(start), Some(end)) = (start, end) {
        if end < start {
            outcome.push_error(END_BEFORE_START);
        }
    }
}

fn mentions_please(description: &str) -> bool {
    !description.is_empty() && description.to_lowercase().contains("please")
}

/// Parse a date or date-time without regard to the host locale.
///
/// Values with an offset are normalised to UTC; plain dates mean midnight.
pub fn parse_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    if let Some(dt) = DATE_TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
    {
        return Some(dt);
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}
