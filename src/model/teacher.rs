use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentTypeDto {
    Tenured,
    Temporary,
    Deceased,
    Discharged,
    Probation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherDto {
    pub id: i32,
    pub name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub age: i32,
    pub house: Option<String>,
    pub head_of_house: bool,
    pub employment: Option<EmploymentTypeDto>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}

/// Request body for creating, replacing and patching a teacher.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TeacherRequestDto {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub house: Option<String>,
    pub head_of_house: Option<bool>,
    pub employment: Option<EmploymentTypeDto>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}
