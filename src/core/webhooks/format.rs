//! Display helpers for notification fields

/// Turn an event identifier such as `SIGN_IN` into `Sign In`
pub fn title_from_event_kind(kind: &str) -> String {
    kind.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    let mut titled: String = first.to_uppercase().collect();
                    titled.push_str(&chars.as_str().to_lowercase());
                    titled
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `City, Country` when both are known, otherwise whichever one is
pub fn format_location(country: &str, city: &str) -> String {
    match (country.is_empty(), city.is_empty()) {
        (true, true) => String::new(),
        (false, true) => country.to_string(),
        (true, false) => city.to_string(),
        (false, false) => format!("{}, {}", city, country),
    }
}

/// Receivers reject empty field values, so show a dash instead
pub fn value_or_placeholder(value: &str) -> String {
    if value.is_empty() {
        "-".to_string()
    } else {
        value.to_string()
    }
}
