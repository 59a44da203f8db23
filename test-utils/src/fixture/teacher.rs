//! Teacher fixtures for creating in-memory test data.

use chrono::NaiveDate;
use entity::{sea_orm_active_enums::EmploymentType, teacher};

/// Default test teacher first name.
pub const DEFAULT_FIRST_NAME: &str = "Minerva";

/// Default test teacher last name.
pub const DEFAULT_LAST_NAME: &str = "McGonagall";

/// Creates a teacher entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Minerva"`
/// - last_name: `Some("McGonagall")`
/// - employment: `Some(EmploymentType::Tenured)`
/// - everything else empty or `false`
pub fn entity() -> teacher::Model {
    entity_builder().build()
}

/// Creates a teacher entity builder for customization.
pub fn entity_builder() -> TeacherEntityBuilder {
    TeacherEntityBuilder::default()
}

/// Builder for creating customized teacher entity models.
pub struct TeacherEntityBuilder {
    id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    house: Option<String>,
    head_of_house: bool,
    employment: Option<EmploymentType>,
    employment_start: Option<NaiveDate>,
    employment_end: Option<NaiveDate>,
}

impl Default for TeacherEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            middle_name: None,
            last_name: Some(DEFAULT_LAST_NAME.to_string()),
            date_of_birth: None,
            house: None,
            head_of_house: false,
            employment: Some(EmploymentType::Tenured),
            employment_start: None,
            employment_end: None,
        }
    }
}

impl TeacherEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn first_name(mut self, first_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self
    }

    pub fn middle_name(mut self, middle_name: Option<&str>) -> Self {
        self.middle_name = middle_name.map(str::to_string);
        self
    }

    pub fn last_name(mut self, last_name: Option<&str>) -> Self {
        self.last_name = last_name.map(str::to_string);
        self
    }

    pub fn date_of_birth(mut self, date_of_birth: Option<NaiveDate>) -> Self {
        self.date_of_birth = date_of_birth;
        self
    }

    pub fn house(mut self, house: Option<&str>) -> Self {
        self.house = house.map(str::to_string);
        self
    }

    pub fn head_of_house(mut self, head_of_house: bool) -> Self {
        self.head_of_house = head_of_house;
        self
    }

    pub fn employment(mut self, employment: Option<EmploymentType>) -> Self {
        self.employment = employment;
        self
    }

    pub fn employment_start(mut self, start: Option<NaiveDate>) -> Self {
        self.employment_start = start;
        self
    }

    pub fn employment_end(mut self, end: Option<NaiveDate>) -> Self {
        self.employment_end = end;
        self
    }

    pub fn build(self) -> teacher::Model {
        teacher::Model {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            house: self.house,
            head_of_house: self.head_of_house,
            employment: self.employment,
            employment_start: self.employment_start,
            employment_end: self.employment_end,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_entity_with_defaults() {
        let teacher = entity();

        assert_eq!(teacher.first_name, DEFAULT_FIRST_NAME);
        assert_eq!(teacher.last_name.as_deref(), Some(DEFAULT_LAST_NAME));
        assert_eq!(teacher.employment, Some(EmploymentType::Tenured));
        assert!(!teacher.head_of_house);
    }

    #[test]
    fn builder_creates_entity_with_custom_values() {
        let teacher = entity_builder()
            .first_name("Quirinus")
            .last_name(Some("Quirrell"))
            .employment(Some(EmploymentType::Temporary))
            .build();

        assert_eq!(teacher.first_name, "Quirinus");
        assert_eq!(teacher.employment, Some(EmploymentType::Temporary));
    }
}
