//! HTTP backend: accounts, articles, folders and tags.
//!
//! # Architecture
//!
//! The server follows a layered architecture:
//!
//! - **Controller Layer** (`controller/`) - HTTP handlers, DTO validation and conversion
//! - **Service Layer** (`service/`) - Business rules, transactions, token and password handling
//! - **Data Layer** (`data/`) - SeaORM queries and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token authentication
//!
//! Supporting modules:
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (database, token service)
//! - **Startup** (`startup`) - Tracing, database connection and migrations, shutdown signal
//! - **Router** (`router`) - Route table and OpenAPI document
//!
//! # Request Flow
//!
//! 1. **Router** matches the request; protected routes pass through the auth middleware
//! 2. **Controller** validates the DTO and converts it to a param
//! 3. **Service** applies business rules, opening a transaction where tag weights change
//! 4. **Data** runs the queries on the pool or on that transaction
//! 5. **Controller** converts the domain model back to a DTO

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
