//! Booking request and reservation status enumerations.
//!
//! Both map to TEXT columns constrained by a `CHECK (status IN (...))`
//! clause in the schema; the string values here must match the literals
//! in the corresponding migrations.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid booking request status strings.
pub const VALID_REQUEST_STATUSES: &[&str] = &["pending", "accepted", "declined"];

/// All valid reservation status strings.
pub const VALID_RESERVATION_STATUSES: &[&str] = &["confirmed", "cancelled"];

/// Status of a booking request. New requests start as [`RequestStatus::Pending`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestStatus {
    Pending,
    Accepted,
    Declined,
}

impl RequestStatus {
    /// Return the status as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Declined => "declined",
        }
    }

    /// Parse a status from its database string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "pending" => Ok(Self::Pending),
            "accepted" => Ok(Self::Accepted),
            "declined" => Ok(Self::Declined),
            _ => Err(CoreError::Validation(format!(
                "Invalid booking request status '{s}'. Must be one of: {}",
                VALID_REQUEST_STATUSES.join(", ")
            ))),
        }
    }
}

/// Status of a reservation. New reservations start as
/// [`ReservationStatus::Confirmed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Confirmed,
    Cancelled,
}

impl ReservationStatus {
    /// Return the status as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parse a status from its database string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(CoreError::Validation(format!(
                "Invalid reservation status '{s}'. Must be one of: {}",
                VALID_RESERVATION_STATUSES.join(", ")
            ))),
        }
    }
}
