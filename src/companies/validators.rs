use super::models::{CreateCompanyInput, UpdateCompanyInput};
use crate::common::{ValidationResult, Validator};

pub const MAX_CODE_LEN: usize = 64;
pub const MAX_NAME_LEN: usize = 255;

impl Validator<CreateCompanyInput> for CreateCompanyInput {
    fn validate(&self, data: &CreateCompanyInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_text("code", &data.code, "Company code", MAX_CODE_LEN);
        if !data.code.trim().is_empty() && data.code.chars().any(char::is_whitespace) {
            result.add_error("code", "Company code must not contain whitespace");
        }
        result.require_text("name", &data.name, "Company name", MAX_NAME_LEN);

        result
    }
}

impl Validator<UpdateCompanyInput> for UpdateCompanyInput {
    fn validate(&self, data: &UpdateCompanyInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_text("name", &data.name, "Company name", MAX_NAME_LEN);

        result
    }
}
