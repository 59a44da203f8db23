//! Teacher domain models and parameters.

use chrono::NaiveDate;
use entity::sea_orm_active_enums::EmploymentType;

use crate::{
    model::teacher::{EmploymentTypeDto, TeacherDto, TeacherRequestDto},
    server::model::person::{PersonFields, PersonParams},
};

impl From<EmploymentType> for EmploymentTypeDto {
    fn from(employment: EmploymentType) -> Self {
        match employment {
            EmploymentType::Tenured => Self::Tenured,
            EmploymentType::Temporary => Self::Temporary,
            EmploymentType::Deceased => Self::Deceased,
            EmploymentType::Discharged => Self::Discharged,
            EmploymentType::Probation => Self::Probation,
        }
    }
}

impl From<EmploymentTypeDto> for EmploymentType {
    fn from(employment: EmploymentTypeDto) -> Self {
        match employment {
            EmploymentTypeDto::Tenured => Self::Tenured,
            EmploymentTypeDto::Temporary => Self::Temporary,
            EmploymentTypeDto::Deceased => Self::Deceased,
            EmploymentTypeDto::Discharged => Self::Discharged,
            EmploymentTypeDto::Probation => Self::Probation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Teacher {
    pub id: i32,
    pub person: PersonFields,
    pub head_of_house: bool,
    pub employment: Option<EmploymentType>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}

impl Teacher {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::teacher::Model) -> Self {
        Self {
            id: entity.id,
            person: PersonFields {
                first_name: entity.first_name,
                middle_name: entity.middle_name,
                last_name: entity.last_name,
                date_of_birth: entity.date_of_birth,
                house: entity.house,
            },
            head_of_house: entity.head_of_house,
            employment: entity.employment,
            employment_start: entity.employment_start,
            employment_end: entity.employment_end,
        }
    }

    pub fn into_dto(self) -> TeacherDto {
        TeacherDto {
            id: self.id,
            name: self.person.full_name(),
            age: self.person.age(),
            date_of_birth: self.person.date_of_birth,
            house: self.person.house,
            head_of_house: self.head_of_house,
            employment: self.employment.map(Into::into),
            employment_start: self.employment_start,
            employment_end: self.employment_end,
        }
    }
}

/// Teacher fields from a create, replace or patch request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeacherParams {
    pub person: PersonParams,
    pub head_of_house: Option<bool>,
    pub employment: Option<EmploymentType>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}

impl TeacherParams {
    pub fn from_dto(dto: TeacherRequestDto) -> Self {
        Self {
            person: PersonParams {
                name: dto.name,
                date_of_birth: dto.date_of_birth,
                house: dto.house,
            },
            head_of_house: dto.head_of_house,
            employment: dto.employment.map(Into::into),
            employment_start: dto.employment_start,
            employment_end: dto.employment_end,
        }
    }
}

/// Fully resolved teacher row written by the repository.
#[derive(Debug, Clone, PartialEq)]
pub struct SaveTeacherParams {
    pub person: PersonFields,
    pub head_of_house: bool,
    pub employment: Option<EmploymentType>,
    pub employment_start: Option<NaiveDate>,
    pub employment_end: Option<NaiveDate>,
}

impl SaveTeacherParams {
    /// Builds a full replacement from request params, clearing absent fields.
    pub fn replace(person: PersonFields, params: &TeacherParams) -> Self {
        Self {
            person,
            head_of_house: params.head_of_house.unwrap_or(false),
            employment: params.employment,
            employment_start: params.employment_start,
            employment_end: params.employment_end,
        }
    }

    /// Overlays the fields present in `params` on an existing teacher.
    pub fn merge(existing: Teacher, person: PersonFields, params: &TeacherParams) -> Self {
        Self {
            person,
            head_of_house: params.head_of_house.unwrap_or(existing.head_of_house),
            employment: params.employment.or(existing.employment),
            employment_start: params.employment_start.or(existing.employment_start),
            employment_end: params.employment_end.or(existing.employment_end),
        }
    }
}
