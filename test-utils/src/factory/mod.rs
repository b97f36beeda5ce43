//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization and
//! a `create_*` convenience function for quick default creation.
//!
//! Factories insert rows exactly as configured. In particular `ArticleFactory::tags` does
//! not touch tag weights, so tests that check reference counts should either create tags
//! with matching weights or go through the server's article service.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::create_user(db).await?;
//! let tag = factory::tag::TagFactory::new(db, user.id).name("rust").weight(2).build().await?;
//! let folder = factory::create_folder(db, user.id).await?;
//! let article = factory::article::ArticleFactory::new(db, user.id)
//!     .pid(folder.id)
//!     .tags(vec![tag.id])
//!     .build()
//!     .await?;
//! ```

pub mod article;
pub mod helpers;
pub mod tag;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use article::{create_article, create_folder};
pub use tag::create_tag;
pub use user::create_user;
