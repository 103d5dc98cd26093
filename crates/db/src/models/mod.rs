//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts, where inserts take more
//!   than a couple of values
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod admin;
pub mod booking_request;
pub mod car;
pub mod car_owner;
pub mod image;
pub mod notification;
pub mod payment;
pub mod reservation;
pub mod review;
pub mod user;
