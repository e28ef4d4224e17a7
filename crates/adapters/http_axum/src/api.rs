//! JSON REST handler modules, one per service.

#[allow(clippy::missing_errors_doc)]
pub mod counter;
#[allow(clippy::missing_errors_doc)]
pub mod greeting;
#[allow(clippy::missing_errors_doc)]
pub mod users;
