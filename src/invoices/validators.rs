use super::models::{CreateInvoiceInput, UpdateInvoiceInput};
use crate::common::{ValidationResult, Validator};
use crate::companies::validators::MAX_CODE_LEN;

/// Largest amount a `NUMERIC(10, 2)` invoice amount can hold
pub const MAX_AMOUNT: f64 = 99_999_999.99;

fn check_amount(result: &mut ValidationResult, amt: f64) {
    if !amt.is_finite() {
        result.add_error("amt", "Amount must be a finite number");
    } else if amt < 0.0 {
        result.add_error("amt", "Amount must not be negative");
    } else if amt > MAX_AMOUNT {
        result.add_error("amt", "Amount must not exceed 99999999.99");
    }
}

impl Validator<CreateInvoiceInput> for CreateInvoiceInput {
    fn validate(&self, data: &CreateInvoiceInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        result.require_text("comp_code", &data.comp_code, "Company code", MAX_CODE_LEN);
        check_amount(&mut result, data.amt);

        result
    }
}

impl Validator<UpdateInvoiceInput> for UpdateInvoiceInput {
    fn validate(&self, data: &UpdateInvoiceInput) -> ValidationResult {
        let mut result = ValidationResult::new();

        check_amount(&mut result, data.amt);

        result
    }
}
