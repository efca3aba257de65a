//! Validation for the answer endpoint section.

use crate::schema::ChatbotConfig;

use super::helpers::{is_http_url, validate_param_name, validate_range};

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &ChatbotConfig) {
    let endpoint = &config.endpoint;

    if !is_http_url(&endpoint.url) {
        errors.push(format!(
            "endpoint.url = {:?} must start with http:// or https://",
            endpoint.url
        ));
    }

    validate_param_name(errors, "endpoint.question_param", &endpoint.question_param);
    validate_param_name(errors, "endpoint.prompt_param", &endpoint.prompt_param);
    if let Some(session) = endpoint.session_param() {
        validate_param_name(errors, "endpoint.session_param", session);
    }

    if endpoint.question_param == endpoint.prompt_param {
        errors.push("endpoint.question_param and endpoint.prompt_param must differ".into());
    }

    validate_range(
        errors,
        "endpoint.connect_timeout_secs",
        endpoint.connect_timeout_secs,
        1,
        120,
    );
    validate_range(
        errors,
        "endpoint.request_timeout_secs",
        endpoint.request_timeout_secs,
        0,
        600,
    );
}
