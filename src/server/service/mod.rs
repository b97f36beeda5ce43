//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Implementing core business rules and validation
//! - **Orchestration**: Coordinating multiple repository calls
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Wrapping tag reference counting and article writes in
//!   one database transaction

pub mod account;
pub mod article;
pub mod password;
pub mod tag;
pub mod token;
pub mod user;

#[cfg(test)]
mod test;
