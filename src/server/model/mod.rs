//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and turned
//! into DTOs at the controller boundary. Parameter types carry the already-validated,
//! owner-scoped input of each service operation.

pub mod account;
pub mod article;
pub mod pagination;
pub mod tag;
pub mod user;
