//! Notekeeper Test Utils
//!
//! Provides shared testing utilities for building integration and unit tests for the notekeeper
//! server. This crate offers a builder pattern for creating test contexts with in-memory
//! SQLite databases and customizable table schemas.
//!
//! # Overview
//!
//! The test utilities consist of four main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **factory**: Builders inserting users, tags and articles with sensible defaults
//! - **audit**: Recounts tag references and checks them against the stored weights
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_article_operations() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_article_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     test_utils::audit::assert_weights_consistent(db).await?;
//!     Ok(())
//! }
//! ```

pub mod audit;
pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
