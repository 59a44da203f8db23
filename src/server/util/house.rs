/// Normalizes a requested house name to the stored capitalization.
///
/// The first letter is upper-cased and the rest lower-cased, so `"gryffindor"` and
/// `"GRYFFINDOR"` both become `"Gryffindor"`. Surrounding whitespace is dropped.
pub fn normalize_house_name(name: &str) -> String {
    let mut chars = name.trim().chars();

    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
