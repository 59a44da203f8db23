use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentDto {
    pub id: i32,
    /// First, middle and last name joined by single spaces.
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Age in whole years at the school's reference date.
    pub age: i32,
    /// Name of the student's house.
    pub house: Option<String>,
    pub prefect: bool,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: bool,
    pub school_year: Option<i32>,
}

/// Request body for creating, replacing and patching a student.
///
/// Every field is optional on the wire. A replace treats missing fields as cleared, a
/// patch leaves them untouched. `name` is required when creating or replacing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StudentRequestDto {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// House name, matched regardless of capitalization.
    pub house: Option<String>,
    pub prefect: Option<bool>,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: Option<bool>,
    pub school_year: Option<i32>,
}
