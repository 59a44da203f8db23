//! Fields shared by students and teachers.
//!
//! Students and teachers both embed `PersonFields` rather than inheriting from a common
//! type. The service layer resolves `PersonParams` from a request into `PersonFields`
//! through the helpers in `service::person`.

use chrono::NaiveDate;

use crate::server::util::{age, name};

/// Stored name, birth date and house of a person.
#[derive(Debug, Clone, PartialEq)]
pub struct PersonFields {
    pub first_name: String,
    pub middle_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    /// Name of an existing house.
    pub house: Option<String>,
}

impl PersonFields {
    /// Full display name built from the stored parts.
    pub fn full_name(&self) -> String {
        name::join_name(
            &self.first_name,
            self.middle_name.as_deref(),
            self.last_name.as_deref(),
        )
    }

    pub fn age(&self) -> i32 {
        age::age(self.date_of_birth)
    }

    /// Overwrites the three name parts with a split full name.
    pub fn set_name(&mut self, parts: name::NameParts) {
        self.first_name = parts.first;
        self.middle_name = parts.middle;
        self.last_name = parts.last;
    }
}

/// Person fields as received in a request, before validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonParams {
    pub name: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub house: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn person() -> PersonFields {
        PersonFields {
            first_name: "Hermione".to_string(),
            middle_name: Some("Jean".to_string()),
            last_name: Some("Granger".to_string()),
            date_of_birth: None,
            house: Some("Gryffindor".to_string()),
        }
    }

    #[test]
    fn full_name_joins_parts() {
        assert_eq!(person().full_name(), "Hermione Jean Granger");
    }

    #[test]
    fn set_name_replaces_all_parts() {
        let mut person = person();

        person.set_name(name::split_full_name("Hermione Weasley").unwrap());

        assert_eq!(person.first_name, "Hermione");
        assert!(person.middle_name.is_none());
        assert_eq!(person.last_name.as_deref(), Some("Weasley"));
    }

    #[test]
    fn unknown_birth_date_has_zero_age() {
        assert_eq!(person().age(), 0);
    }
}
