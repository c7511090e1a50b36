//! Application status of a course enrollment.
//!
//! The intended workflow is strictly linear:
//!
//! ```text
//! provisional_application -> confirmed_application -> in_progress -> completed
//! ```
//!
//! The ordering is informational. Writes accept any target status; callers
//! that want to check a move can use [`EnrollmentStatus::is_forward_transition_to`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Status ID type matching SMALLINT in the `enrollment_statuses` lookup table.
pub type StatusId = i16;

/// Where a course enrollment stands in the application workflow.
///
/// Each variant's discriminant matches the seed row in `enrollment_statuses`.
#[repr(i16)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    ProvisionalApplication = 1,
    ConfirmedApplication = 2,
    InProgress = 3,
    Completed = 4,
}

impl EnrollmentStatus {
    /// Every status in workflow order.
    pub const ALL: [Self; 4] = [
        Self::ProvisionalApplication,
        Self::ConfirmedApplication,
        Self::InProgress,
        Self::Completed,
    ];

    /// Status assigned to a freshly created course enrollment.
    pub const INITIAL: Self = Self::ProvisionalApplication;

    /// Return the database status ID.
    pub fn id(self) -> StatusId {
        self as StatusId
    }

    /// Wire representation, identical to the serde form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ProvisionalApplication => "provisional_application",
            Self::ConfirmedApplication => "confirmed_application",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable name used in acknowledgement messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::ProvisionalApplication => "provisional application",
            Self::ConfirmedApplication => "confirmed application",
            Self::InProgress => "in progress",
            Self::Completed => "completed",
        }
    }

    /// The intended successor, or `None` once the course is completed.
    pub fn next(self) -> Option<Self> {
        match self {
            Self::ProvisionalApplication => Some(Self::ConfirmedApplication),
            Self::ConfirmedApplication => Some(Self::InProgress),
            Self::InProgress => Some(Self::Completed),
            Self::Completed => None,
        }
    }

    /// `true` when `target` is exactly the next step of the workflow.
    pub fn is_forward_transition_to(self, target: Self) -> bool {
        self.next() == Some(target)
    }
}

impl fmt::Display for EnrollmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EnrollmentStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|s| s.as_str()).collect();
                CoreError::Validation(format!(
                    "Invalid status '{s}'. Must be one of: {}",
                    valid.join(", ")
                ))
            })
    }
}

impl From<EnrollmentStatus> for StatusId {
    fn from(value: EnrollmentStatus) -> Self {
        value as StatusId
    }
}

impl TryFrom<StatusId> for EnrollmentStatus {
    type Error = CoreError;

    fn try_from(value: StatusId) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.id() == value)
            .ok_or_else(|| CoreError::Internal(format!("Unknown enrollment status id {value}")))
    }
}
