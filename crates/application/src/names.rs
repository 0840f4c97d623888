//! Registry keys of the built-in expectations.

#![allow(missing_docs)]

pub const TO_BE_REDIRECT: &str = "to_be_redirect";
pub const TO_BE_REDIRECT_TO_SIGNED_ROUTE: &str = "to_be_redirect_to_signed_route";
pub const TO_BE_SUCCESSFUL: &str = "to_be_successful";
pub const TO_BE_OK: &str = "to_be_ok";
pub const TO_CONFIRM_CREATION: &str = "to_confirm_creation";
pub const TO_BE_NOT_FOUND: &str = "to_be_not_found";
pub const TO_BE_UNAUTHORIZED: &str = "to_be_unauthorized";
pub const TO_HAVE_NO_CONTENT: &str = "to_have_no_content";
pub const TO_BE_FORBIDDEN: &str = "to_be_forbidden";
pub const TO_HAVE_STATUS: &str = "to_have_status";
pub const TO_BE_DOWNLOAD: &str = "to_be_download";
pub const TO_RENDER: &str = "to_render";
pub const TO_RENDER_IN_ORDER: &str = "to_render_in_order";
pub const TO_RENDER_TEXT: &str = "to_render_text";
pub const TO_RENDER_TEXT_IN_ORDER: &str = "to_render_text_in_order";
pub const TO_CONTAIN_TEXT: &str = "to_contain_text";
pub const TO_CONTAIN_TEXT_IN_ORDER: &str = "to_contain_text_in_order";
pub const TO_HAVE_JSON: &str = "to_have_json";
pub const TO_HAVE_EXACT_JSON: &str = "to_have_exact_json";
pub const TO_HAVE_JSON_FRAGMENT: &str = "to_have_json_fragment";
pub const TO_HAVE_JSON_STRUCTURE: &str = "to_have_json_structure";
pub const TO_HAVE_JSON_PATH: &str = "to_have_json_path";
pub const TO_HAVE_JSON_VALIDATION_ERRORS: &str = "to_have_json_validation_errors";
pub const TO_HAVE_VALID: &str = "to_have_valid";
pub const TO_HAVE_INVALID: &str = "to_have_invalid";
pub const TO_HAVE_HEADER: &str = "to_have_header";
pub const TO_HAVE_MISSING_HEADER: &str = "to_have_missing_header";
pub const TO_HAVE_SESSION: &str = "to_have_session";
pub const TO_HAVE_ALL_SESSION: &str = "to_have_all_session";
pub const TO_HAVE_LOCATION: &str = "to_have_location";

/// Every built-in key.
pub const ALL: [&str; 30] = [
    TO_BE_REDIRECT,
    TO_BE_REDIRECT_TO_SIGNED_ROUTE,
    TO_BE_SUCCESSFUL,
    TO_BE_OK,
    TO_CONFIRM_CREATION,
    TO_BE_NOT_FOUND,
    TO_BE_UNAUTHORIZED,
    TO_HAVE_NO_CONTENT,
    TO_BE_FORBIDDEN,
    TO_HAVE_STATUS,
    TO_BE_DOWNLOAD,
    TO_RENDER,
    TO_RENDER_IN_ORDER,
    TO_RENDER_TEXT,
    TO_RENDER_TEXT_IN_ORDER,
    TO_CONTAIN_TEXT,
    TO_CONTAIN_TEXT_IN_ORDER,
    TO_HAVE_JSON,
    TO_HAVE_EXACT_JSON,
    TO_HAVE_JSON_FRAGMENT,
    TO_HAVE_JSON_STRUCTURE,
    TO_HAVE_JSON_PATH,
    TO_HAVE_JSON_VALIDATION_ERRORS,
    TO_HAVE_VALID,
    TO_HAVE_INVALID,
    TO_HAVE_HEADER,
    TO_HAVE_MISSING_HEADER,
    TO_HAVE_SESSION,
    TO_HAVE_ALL_SESSION,
    TO_HAVE_LOCATION,
];
