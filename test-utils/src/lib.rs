//! StudyHub Test Utils
//!
//! Shared testing utilities for the StudyHub server. This crate offers a builder for creating
//! test contexts backed by in-memory SQLite databases, plus factories for inserting rows with
//! sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Builders for each entity
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_lesson() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_lesson_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let user = factory::create_user(db).await?;
//!     let lesson = factory::create_lesson(db, user.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
