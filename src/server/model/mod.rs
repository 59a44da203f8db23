//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary, and
//! services build the `Save*Params` types that repositories write.

pub mod course;
pub mod house;
pub mod person;
pub mod student;
pub mod teacher;
