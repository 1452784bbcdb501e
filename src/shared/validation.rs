use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationErrors;

lazy_static! {
    /// Regex for validating username fields
    /// 3-30 characters, letters, digits and underscores only
    /// - Valid: "river_saver", "EcoWarrior99", "abc"
    /// - Invalid: "ab", "eco warrior", "eco-warrior", ""
    pub static ref USERNAME_REGEX: Regex = Regex::new(r"^[A-Za-z0-9_]{3,30}$").unwrap();
}

/// Trim a form value and drop it when nothing is left
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Truncate to `max_chars` characters, appending "..." when anything was cut
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

/// Flatten validator errors into "location is required; description is required"
pub fn validation_message(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    messages.sort();
    messages.join("; ")
}
