//! Wire-format DTOs shared by the HTTP layer and the OpenAPI document.

pub mod api;
pub mod course;
pub mod house;
pub mod student;
pub mod teacher;
