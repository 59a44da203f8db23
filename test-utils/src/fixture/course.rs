//! Course fixtures for creating in-memory test data.

use entity::course;

/// Default test course subject.
pub const DEFAULT_SUBJECT: &str = "Transfiguration";

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - subject: `"Transfiguration"`
/// - school_year: `None`
/// - current: `false`
/// - teacher_id: `None`
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder for customization.
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for creating customized course entity models.
pub struct CourseEntityBuilder {
    id: i32,
    subject: String,
    school_year: Option<i32>,
    current: bool,
    teacher_id: Option<i32>,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            subject: DEFAULT_SUBJECT.to_string(),
            school_year: None,
            current: false,
            teacher_id: None,
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn school_year(mut self, school_year: Option<i32>) -> Self {
        self.school_year = school_year;
        self
    }

    pub fn current(mut self, current: bool) -> Self {
        self.current = current;
        self
    }

    pub fn teacher_id(mut self, teacher_id: Option<i32>) -> Self {
        self.teacher_id = teacher_id;
        self
    }

    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            subject: self.subject,
            school_year: self.school_year,
            current: self.current,
            teacher_id: self.teacher_id,
        }
    }
}
