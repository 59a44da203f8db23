use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{student::StudentDto, teacher::TeacherDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseDto {
    pub id: i32,
    pub subject: String,
    pub school_year: Option<i32>,
    pub current: bool,
    pub teacher: Option<TeacherDto>,
    pub students: Vec<StudentDto>,
}

/// Reference to an existing teacher or student by id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IdReferenceDto {
    pub id: Option<i32>,
}

/// Reference to an existing student by id or by full name.
///
/// The id wins when both are given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentReferenceDto {
    pub id: Option<i32>,
    pub name: Option<String>,
}

/// Request body for creating, replacing and patching a course.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequestDto {
    pub subject: Option<String>,
    pub school_year: Option<i32>,
    pub current: Option<bool>,
    pub teacher: Option<IdReferenceDto>,
    pub students: Option<Vec<IdReferenceDto>>,
}
