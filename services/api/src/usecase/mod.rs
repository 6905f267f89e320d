pub mod apartment;
pub mod reservation;
pub mod token;
pub mod user;
