pub mod auth;
pub mod classes;
pub mod notifications;
pub mod reservations;

pub use auth::*;
pub use classes::*;
pub use notifications::*;
pub use reservations::*;
