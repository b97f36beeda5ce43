//! Data transfer objects shared by the HTTP API.
//!
//! These types define the JSON wire format of every endpoint. Request DTOs carry their
//! validation rules (`validator`) and are checked in the controllers before any service
//! runs; response DTOs are produced from server-side domain models.

pub mod account;
pub mod api;
pub mod article;
pub mod pagination;
pub mod tag;
pub mod user;
