//! Small helpers shared by controllers and services.

pub mod transaction;
pub mod validate;
