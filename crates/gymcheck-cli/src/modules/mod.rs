pub(crate) mod auth;
pub(crate) mod classes;
pub(crate) mod notifications;
pub(crate) mod reservations;
pub(crate) mod system;
