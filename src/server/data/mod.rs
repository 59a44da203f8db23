//! Data access layer.
//!
//! Repositories wrap SeaORM queries for one table each and are generic over
//! `ConnectionTrait`, so services can run them on the pool or inside a transaction.

pub mod course;
pub mod course_student;
pub mod house;
pub mod student;
pub mod teacher;

#[cfg(test)]
mod test;
