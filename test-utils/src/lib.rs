//! Hogwarts Admin Test Utils
//!
//! Shared testing utilities for the school administration backend. Tests get an in-memory
//! SQLite database with the school schema created from the entity definitions, plus
//! factories for inserting houses, students, teachers and courses with sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment holding the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Inserts entities with defaults
//! - **fixture**: In-memory entity models, no database involved
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn finds_student() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_school_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let student = factory::create_student(db).await?;
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
