// Request payload validation shared by the company and invoice modules

use super::error::ApiError;

#[derive(Debug)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

#[derive(Debug)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationError>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, field: &str, message: &str) {
        self.is_valid = false;
        self.errors.push(ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    /// Checks that a required text field is not blank and fits in `max_len` characters
    pub fn require_text(&mut self, field: &str, value: &str, label: &str, max_len: usize) {
        if value.trim().is_empty() {
            self.add_error(field, &format!("{} is required", label));
        } else if value.chars().count() > max_len {
            self.add_error(
                field,
                &format!("{} must not exceed {} characters", label, max_len),
            );
        }
    }

    /// Short-circuits request handling before any store access
    pub fn into_result(self) -> Result<(), ApiError> {
        if self.is_valid {
            Ok(())
        } else {
            Err(ApiError::from(self))
        }
    }
}

pub trait Validator<T> {
    fn validate(&self, data: &T) -> ValidationResult;
}
