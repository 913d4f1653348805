//! Presence Watch Test Utils
//!
//! Provides shared testing utilities for the presence tracking bot. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases, factories for
//! tracking rows, and Serenity model fixtures.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Insert `guild_config` and `member_stat` rows with sensible defaults
//! - **serenity**: Build Serenity `Role` and `Member` values from JSON
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_tracking() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_tracking_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
