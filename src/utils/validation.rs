use validator::{Validate, ValidationError};

pub fn validate<T: Validate>(val: &T) -> Result<(), validator::ValidationErrors> {
    val.validate()
}

/// Phone numbers arrive pre-masked by the form: `+7 (XXX) XXX-XX-XX`.
pub fn phone(value: &str) -> Result<(), ValidationError> {
    const TEMPLATE: &str = "+7 (###) ###-##-##";

    let mut chars = value.chars();
    for expected in TEMPLATE.chars() {
        let Some(actual) = chars.next() else {
            return Err(ValidationError::new("phone_format"));
        };
        let ok = if expected == '#' {
            actual.is_ascii_digit()
        } else {
            actual == expected
        };
        if !ok {
            return Err(ValidationError::new("phone_format"));
        }
    }
    if chars.next().is_some() {
        return Err(ValidationError::new("phone_format"));
    }
    Ok(())
}

pub fn password(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < 6 {
        return Err(ValidationError::new("password_too_short"));
    }
    if value.contains(' ') {
        return Err(ValidationError::new("password_has_spaces"));
    }
    Ok(())
}
