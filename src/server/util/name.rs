//! Splitting and joining of a person's full name.

/// A full name split into its stored parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameParts {
    pub first: String,
    pub middle: Option<String>,
    pub last: Option<String>,
}

/// Splits a full name on whitespace.
///
/// One word is a first name, two words are first and last name, and with three or more
/// words everything between the first and the last word becomes the middle name, joined
/// by single spaces.
///
/// # Arguments
/// - `full_name` - Name as received on the wire
///
/// # Returns
/// - `Some(NameParts)` - The split name
/// - `None` - The name was empty or only whitespace
pub fn split_full_name(full_name: &str) -> Option<NameParts> {
    let words: Vec<&str> = full_name.split_whitespace().collect();

    match words.as_slice() {
        [] => None,
        [first] => Some(NameParts {
            first: first.to_string(),
            middle: None,
            last: None,
        }),
        [first, last] => Some(NameParts {
            first: first.to_string(),
            middle: None,
            last: Some(last.to_string()),
        }),
        [first, middle @ .., last] => Some(NameParts {
            first: first.to_string(),
            middle: Some(middle.join(" ")),
            last: Some(last.to_string()),
        }),
    }
}

/// Joins name parts back into a single display name.
///
/// Blank middle and last names are skipped.
pub fn join_name(first: &str, middle: Option<&str>, last: Option<&str>) -> String {
    let mut full_name = first.to_string();

    for part in [middle, last].into_iter().flatten() {
        if !part.trim().is_empty() {
            full_name.push(' ');
            full_name.push_str(part);
        }
    }

    full_name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_single_word_into_first_name() {
        let parts = split_full_name("Hagrid").unwrap();

        assert_eq!(parts.first, "Hagrid");
        assert!(parts.middle.is_none());
        assert!(parts.last.is_none());
    }

    #[test]
    fn splits_two_words_into_first_and_last() {
        let parts = split_full_name("Luna Lovegood").unwrap();

        assert_eq!(parts.first, "Luna");
        assert!(parts.middle.is_none());
        assert_eq!(parts.last.as_deref(), Some("Lovegood"));
    }

    #[test]
    fn splits_three_words_with_middle_name() {
        let parts = split_full_name("Harry James Potter").unwrap();

        assert_eq!(parts.first, "Harry");
        assert_eq!(parts.middle.as_deref(), Some("James"));
        assert_eq!(parts.last.as_deref(), Some("Potter"));
    }

    #[test]
    fn joins_inner_words_into_middle_name() {
        let parts = split_full_name("Albus  Percival Wulfric Brian   Dumbledore").unwrap();

        assert_eq!(parts.first, "Albus");
        assert_eq!(parts.middle.as_deref(), Some("Percival Wulfric Brian"));
        assert_eq!(parts.last.as_deref(), Some("Dumbledore"));
    }

    #[test]
    fn blank_name_is_no_name() {
        assert!(split_full_name("").is_none());
        assert!(split_full_name("   ").is_none());
    }

    #[test]
    fn joins_present_parts_only() {
        assert_eq!(join_name("Harry", Some("James"), Some("Potter")), "Harry James Potter");
        assert_eq!(join_name("Cho", Some(""), Some("Chang")), "Cho Chang");
        assert_eq!(join_name("Hagrid", None, None), "Hagrid");
    }
}
