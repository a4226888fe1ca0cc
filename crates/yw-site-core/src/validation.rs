//! Contact-form field rules.

use crate::config::SiteCopy;
use crate::error::FieldError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    #[default]
    Text,
    Email,
}

impl FieldKind {
    /// Map an `<input type>` value. Textareas and unknown types are plain text.
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.eq_ignore_ascii_case("email") {
            FieldKind::Email
        } else {
            FieldKind::Text
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub kind: FieldKind,
}

/// Validate a raw field value. The value is trimmed first.
///
/// The email rule only looks at non-empty values, so an empty optional email
/// field passes.
pub fn validate(raw: &str, rules: FieldRules, copy: &SiteCopy) -> Result<(), FieldError> {
    let value = raw.trim();

    if rules.required && value.is_empty() {
        return Err(FieldError::Required(copy.required_field.clone()));
    }

    if rules.kind == FieldKind::Email && !value.is_empty() && !is_valid_email(value) {
        return Err(FieldError::InvalidEmail(copy.invalid_email.clone()));
    }

    Ok(())
}

/// `local@domain.tld`: exactly one `@`, no whitespace anywhere, and a dot in
/// the domain with at least one character on each side.
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}
