//! Course domain models and parameters.
//!
//! A course is returned with its teacher and roster resolved. Requests reference the
//! teacher and students by id; the bulk add endpoint also accepts student names.

use crate::{
    model::course::{CourseDto, CourseRequestDto, StudentReferenceDto},
    server::{
        error::AppError,
        model::{student::Student, teacher::Teacher},
    },
};

pub const INVALID_TEACHER: &str = "Invalid teacher.";
pub const INVALID_STUDENTS: &str = "Invalid students.";
pub const ALREADY_ENROLLED: &str = "Student already enrolled in course.";
pub const NOT_ENROLLED: &str = "Student is not enrolled in course.";

/// Course row with its teacher and roster, as loaded by the repository.
#[derive(Debug, Clone)]
pub struct CourseWithRelations {
    pub course: entity::course::Model,
    pub teacher: Option<entity::teacher::Model>,
    /// Enrolled students ordered by id.
    pub students: Vec<entity::student::Model>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Course {
    pub id: i32,
    pub subject: String,
    pub school_year: Option<i32>,
    pub current: bool,
    pub teacher: Option<Teacher>,
    pub students: Vec<Student>,
}

impl Course {
    pub fn from_with_relations(result: CourseWithRelations) -> Self {
        Self {
            id: result.course.id,
            subject: result.course.subject,
            school_year: result.course.school_year,
            current: result.course.current,
            teacher: result.teacher.map(Teacher::from_entity),
            students: result
                .students
                .into_iter()
                .map(Student::from_entity)
                .collect(),
        }
    }

    pub fn into_dto(self) -> CourseDto {
        CourseDto {
            id: self.id,
            subject: self.subject,
            school_year: self.school_year,
            current: self.current,
            teacher: self.teacher.map(Teacher::into_dto),
            students: self.students.into_iter().map(Student::into_dto).collect(),
        }
    }
}

/// Course fields from a create, replace or patch request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseParams {
    pub subject: Option<String>,
    pub school_year: Option<i32>,
    pub current: Option<bool>,
    pub teacher_id: Option<i32>,
    /// Roster to store. `None` when the request carried no student list.
    pub student_ids: Option<Vec<i32>>,
}

impl CourseParams {
    /// Converts a request DTO into params.
    ///
    /// # Returns
    /// - `Ok(CourseParams)` - Converted params
    /// - `Err(AppError::BadRequest)` - A teacher or student reference carries no id
    pub fn from_dto(dto: CourseRequestDto) -> Result<Self, AppError> {
        let teacher_id = match dto.teacher {
            Some(reference) => Some(
                reference
                    .id
                    .ok_or_else(|| AppError::BadRequest(INVALID_TEACHER.to_string()))?,
            ),
            None => None,
        };

        let student_ids = dto
            .students
            .map(|students| {
                students
                    .into_iter()
                    .map(|reference| reference.id)
                    .collect::<Option<Vec<i32>>>()
                    .ok_or_else(|| AppError::BadRequest(INVALID_STUDENTS.to_string()))
            })
            .transpose()?;

        Ok(Self {
            subject: dto.subject,
            school_year: dto.school_year,
            current: dto.current,
            teacher_id,
            student_ids,
        })
    }
}

/// Fully resolved course row written by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveCourseParams {
    pub subject: String,
    pub school_year: Option<i32>,
    pub current: bool,
    pub teacher_id: Option<i32>,
}

/// A student named in a bulk enrollment request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentReference {
    Id(i32),
    Name(String),
}

impl StudentReference {
    /// Converts a reference DTO, preferring the id when both fields are set.
    ///
    /// # Returns
    /// - `Ok(StudentReference)` - Id or non-blank name reference
    /// - `Err(AppError::BadRequest)` - Neither an id nor a name was supplied
    pub fn from_dto(dto: StudentReferenceDto) -> Result<Self, AppError> {
        match (dto.id, dto.name) {
            (Some(id), _) => Ok(Self::Id(id)),
            (None, Some(name)) if !name.trim().is_empty() => Ok(Self::Name(name)),
            _ => Err(AppError::BadRequest(INVALID_STUDENTS.to_string())),
        }
    }
}
