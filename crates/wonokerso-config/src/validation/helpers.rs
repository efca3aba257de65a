//! Shared validation helpers used by all domain validators.

use std::sync::OnceLock;

use regex::Regex;

/// Push an error if `value` is outside `[min, max]`.
pub(crate) fn validate_range(errors: &mut Vec<String>, name: &str, value: u32, min: u32, max: u32) {
    if value < min || value > max {
        errors.push(format!("{name} = {value} is out of range [{min}, {max}]"));
    }
}

/// Push an error if `value` is blank.
pub(crate) fn validate_non_empty(errors: &mut Vec<String>, name: &str, value: &str) {
    if value.trim().is_empty() {
        errors.push(format!("{name} must not be empty"));
    }
}

/// Push an error unless `value` is a usable query parameter name.
pub(crate) fn validate_param_name(errors: &mut Vec<String>, name: &str, value: &str) {
    static PARAM: OnceLock<Regex> = OnceLock::new();
    let re = PARAM.get_or_init(|| Regex::new(r"^[A-Za-z0-9_\-]+$").expect("valid regex"));
    if !re.is_match(value) {
        errors.push(format!("{name} = {value:?} is not a valid query parameter name"));
    }
}

/// Whether `value` looks like an absolute http(s) URL.
pub(crate) fn is_http_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
