//! Factory methods for creating test data.
//!
//! Factories insert entities with sensible defaults so tests only spell out the fields they
//! care about. Each entity has a `Factory` builder for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let houses = factory::helpers::create_houses(&db).await?;
//! let student = factory::create_student(&db).await?;
//! let course = factory::create_course(&db).await?;
//! factory::enroll_student(&db, course.id, student.id).await?;
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let student = factory::student::StudentFactory::new(&db)
//!     .name("Hermione", Some("Jean"), Some("Granger"))
//!     .house(Some("Gryffindor"))
//!     .prefect(true)
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod course_student;
pub mod helpers;
pub mod house;
pub mod student;
pub mod teacher;

pub use course::create_course;
pub use course_student::enroll_student;
pub use house::create_house;
pub use student::create_student;
pub use teacher::create_teacher;
