//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod admin_repo;
pub mod booking_request_repo;
pub mod car_owner_repo;
pub mod car_repo;
pub mod image_repo;
pub mod notification_repo;
pub mod payment_repo;
pub mod reservation_repo;
pub mod review_repo;
pub mod user_repo;

pub use admin_repo::AdminRepo;
pub use booking_request_repo::BookingRequestRepo;
pub use car_owner_repo::CarOwnerRepo;
pub use car_repo::CarRepo;
pub use image_repo::ImageRepo;
pub use notification_repo::NotificationRepo;
pub use payment_repo::PaymentRepo;
pub use reservation_repo::ReservationRepo;
pub use review_repo::ReviewRepo;
pub use user_repo::UserRepo;
