//! Shared domain types for the Carhive rental platform.
//!
//! This crate carries everything the data layer needs that is not a
//! database concern:
//!
//! - [`types`]: ID and timestamp aliases matching the schema.
//! - [`error`]: the [`CoreError`](error::CoreError) enum.
//! - [`booking`]: booking request and reservation status enumerations.
//! - [`owners`]: the car owner type enumeration.
//! - [`validation`]: field-level validators and length limits.
//! - [`password`]: Argon2id password hashing and verification.

pub mod booking;
pub mod error;
pub mod owners;
pub mod password;
pub mod types;
pub mod validation;
