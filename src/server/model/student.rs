//! Student domain models and parameters.

use crate::{
    model::student::{StudentDto, StudentRequestDto},
    server::model::person::{PersonFields, PersonParams},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    pub id: i32,
    pub person: PersonFields,
    pub prefect: bool,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: bool,
    pub school_year: Option<i32>,
}

impl Student {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::student::Model) -> Self {
        Self {
            id: entity.id,
            person: PersonFields {
                first_name: entity.first_name,
                middle_name: entity.middle_name,
                last_name: entity.last_name,
                date_of_birth: entity.date_of_birth,
                house: entity.house,
            },
            prefect: entity.prefect,
            enrollment_year: entity.enrollment_year,
            graduation_year: entity.graduation_year,
            graduated: entity.graduated,
            school_year: entity.school_year,
        }
    }

    /// Converts domain model to DTO for API responses.
    ///
    /// # Returns
    /// - `StudentDto` - DTO with the joined name and computed age
    pub fn into_dto(self) -> StudentDto {
        StudentDto {
            id: self.id,
            name: self.person.full_name(),
            age: self.person.age(),
            date_of_birth: self.person.date_of_birth,
            house: self.person.house,
            prefect: self.prefect,
            enrollment_year: self.enrollment_year,
            graduation_year: self.graduation_year,
            graduated: self.graduated,
            school_year: self.school_year,
        }
    }
}

/// Student fields from a create, replace or patch request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StudentParams {
    pub person: PersonParams,
    pub prefect: Option<bool>,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: Option<bool>,
    pub school_year: Option<i32>,
}

impl StudentParams {
    pub fn from_dto(dto: StudentRequestDto) -> Self {
        Self {
            person: PersonParams {
                name: dto.name,
                date_of_birth: dto.date_of_birth,
                house: dto.house,
            },
            prefect: dto.prefect,
            enrollment_year: dto.enrollment_year,
            graduation_year: dto.graduation_year,
            graduated: dto.graduated,
            school_year: dto.school_year,
        }
    }
}

/// Fully resolved student row written by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveStudentParams {
    pub person: PersonFields,
    pub prefect: bool,
    pub enrollment_year: Option<i32>,
    pub graduation_year: Option<i32>,
    pub graduated: bool,
    pub school_year: Option<i32>,
}

impl SaveStudentParams {
    /// Builds a full replacement from request params.
    ///
    /// Absent flags become `false`. A supplied graduation year with no explicit
    /// `graduated` flag marks the student as graduated.
    pub fn replace(person: PersonFields, params: &StudentParams) -> Self {
        Self {
            person,
            prefect: params.prefect.unwrap_or(false),
            enrollment_year: params.enrollment_year,
            graduation_year: params.graduation_year,
            graduated: params
                .graduated
                .unwrap_or(params.graduation_year.is_some()),
            school_year: params.school_year,
        }
    }

    /// Overlays the fields present in `params` on an existing student.
    pub fn merge(existing: Student, person: PersonFields, params: &StudentParams) -> Self {
        let graduated = match (params.graduated, params.graduation_year) {
            (Some(graduated), _) => graduated,
            (None, Some(_)) => true,
            (None, None) => existing.graduated,
        };

        Self {
            person,
            prefect: params.prefect.unwrap_or(existing.prefect),
            enrollment_year: params.enrollment_year.or(existing.enrollment_year),
            graduation_year: params.graduation_year.or(existing.graduation_year),
            graduated,
            school_year: params.school_year.or(existing.school_year),
        }
    }
}
