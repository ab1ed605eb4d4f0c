pub mod auth;
pub mod classes;
pub mod notifications;
pub mod reservations;
