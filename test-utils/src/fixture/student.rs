//! Student fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating student entity models without database insertion.

use chrono::NaiveDate;
use entity::student;

/// Default test student first name.
pub const DEFAULT_FIRST_NAME: &str = "Harry";

/// Default test student last name.
pub const DEFAULT_LAST_NAME: &str = "Potter";

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - first_name: `"Harry"`
/// - middle_name: `None`
/// - last_name: `Some("Potter")`
/// - house: `None`
/// - every flag `false`, every year and the date of birth `None`
///
/// # Returns
/// - `student::Model` - In-memory student entity
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
///
/// # Returns
/// - `StudentEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    first_name: String,
    middle_name: Option<String>,
    last_name: Option<String>,
    date_of_birth: Option<NaiveDate>,
    house: Option<String>,
    prefect: bool,
    enrollment_year: Option<i32>,
    graduation_year: Option<i32>,
    graduated: bool,
    school_year: Option<i32>,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            first_name: DEFAULT_FIRST_NAME.to_string(),
            middle_name: None,
            last_name: Some(DEFAULT_LAST_NAME.to_string()),
            date_of_birth: None,
            house: None,
            prefect: false,
            enrollment_year: None,
            graduation_year: None,
            graduated: false,
            school_year: None,
        }
    }
}

impl StudentEntityBuilder {
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

    pub fn prefect(mut self, prefect: bool) -> Self {
        self.prefect = prefect;
        self
    }

    pub fn enrollment_year(mut self, year: Option<i32>) -> Self {
        self.enrollment_year = year;
        self
    }

    pub fn graduation_year(mut self, year: Option<i32>) -> Self {
        self.graduation_year = year;
        self
    }

    pub fn graduated(mut self, graduated: bool) -> Self {
        self.graduated = graduated;
        self
    }

    pub fn school_year(mut self, year: Option<i32>) -> Self {
        self.school_year = year;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            first_name: self.first_name,
            middle_name: self.middle_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            house: self.house,
            prefect: self.prefect,
            enrollment_year: self.enrollment_year,
            graduation_year: self.graduation_year,
            graduated: self.graduated,
            school_year: self.school_year,
        }
    }
}
