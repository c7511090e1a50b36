//! Enrollment-period policy.
//!
//! A course enrollment starts when it is registered and runs for a fixed
//! period of one calendar year.

use chrono::{Months, SubsecRound, Utc};

use crate::types::Timestamp;

/// Length of an enrollment period in calendar months.
pub const ENROLLMENT_PERIOD_MONTHS: u32 = 12;

/// Current time truncated to microseconds, the precision PostgreSQL stores.
pub fn now() -> Timestamp {
    Utc::now().trunc_subsecs(6)
}

/// End of the enrollment period that starts at `start`.
///
/// February 29th maps to February 28th of the following year. Returns `None`
/// only if the result would overflow the representable date range.
pub fn enrollment_end(start: Timestamp) -> Option<Timestamp> {
    start.checked_add_months(Months::new(ENROLLMENT_PERIOD_MONTHS))
}
