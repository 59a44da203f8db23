//! Service layer for business logic and orchestration.
//!
//! Services sit between the controllers and the repositories. They resolve request
//! params into rows, validate references between entities, and run multi-step writes
//! such as delete cleanup and roster replacement inside one transaction.

pub mod course;
pub mod house;
pub mod person;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
