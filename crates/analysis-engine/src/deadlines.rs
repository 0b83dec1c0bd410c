//! Filing-deadline, urgency, and statute-of-limitations arithmetic
//!
//! "Now" is always an explicit `today` parameter so callers and tests can
//! freeze time; nothing here reads the system clock.

use chrono::{Duration, NaiveDate};
use shared_types::{CaseType, StatuteOfLimitations, UrgencyLevel};

use crate::jurisdiction::JurisdictionRules;

/// Statute periods are computed in flat 365-day years
pub const SOL_DAYS_PER_YEAR: i64 = 365;

/// Answer due date: service date plus the jurisdiction's response window
pub fn filing_deadline(service_date: NaiveDate, response_deadline_days: i64) -> NaiveDate {
    service_date + Duration::days(response_deadline_days)
}

/// Step function of days remaining until the filing deadline:
/// <=3 critical, <=7 high, <=14 medium, else low.
pub fn urgency(deadline: NaiveDate, today: NaiveDate) -> UrgencyLevel {
    let days_left = (deadline - today).num_days();
    if days_left <= 3 {
        UrgencyLevel::Critical
    } else if days_left <= 7 {
        UrgencyLevel::High
    } else if days_left <= 14 {
        UrgencyLevel::Medium
    } else {
        UrgencyLevel::Low
    }
}

/// Statute-of-limitations determination for the claim.
///
/// `expired = today > service_date + years * 365 days`, with the years taken
/// from the jurisdiction rules (4-year default for unmapped case types).
pub fn statute_of_limitations(
    case_type: CaseType,
    service_date: NaiveDate,
    rules: &JurisdictionRules,
    today: NaiveDate,
) -> StatuteOfLimitations {
    let years = rules.sol_years(case_type);
    let expiration = service_date + Duration::days(SOL_DAYS_PER_YEAR * i64::from(years));

    StatuteOfLimitations {
        applicable: true,
        time_limit: format!("{} years", years),
        start_date: service_date,
        expired: today > expiration,
        exceptions: vec![
            "Tolling agreements".to_string(),
            "Bankruptcy stay".to_string(),
            "Military service".to_string(),
        ],
    }
}
