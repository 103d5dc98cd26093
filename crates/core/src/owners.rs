//! Car owner type enumeration.
//!
//! Maps to the `car_owners.owner_type` TEXT column; values must match the
//! CHECK constraint literals in the `car_owners` migration.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// All valid owner type strings.
pub const VALID_OWNER_TYPES: &[&str] = &["individual", "company"];

/// Whether a listed car belongs to a private individual or a company fleet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OwnerType {
    Individual,
    Company,
}

impl OwnerType {
    /// Return the owner type as the lowercase string stored in the database.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "individual",
            Self::Company => "company",
        }
    }

    /// Parse an owner type from its database string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "individual" => Ok(Self::Individual),
            "company" => Ok(Self::Company),
            _ => Err(CoreError::Validation(format!(
                "Invalid owner type '{s}'. Must be one of: {}",
                VALID_OWNER_TYPES.join(", ")
            ))),
        }
    }
}
