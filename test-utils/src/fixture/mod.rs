//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests and serve as the defaults used by
//! the factory builders. Unlike factories, fixtures do NOT insert data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! let student = fixture::student::entity();
//!
//! let prefect = fixture::student::entity_builder()
//!     .prefect(true)
//!     .build();
//! ```

pub mod course;
pub mod house;
pub mod student;
pub mod teacher;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
pub use house::{entity as house_entity, entity_builder as house_entity_builder};
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
pub use teacher::{entity as teacher_entity, entity_builder as teacher_entity_builder};
