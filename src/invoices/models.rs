use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::companies::models::Company;

/// Row shape of `GET /invoices`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct InvoiceSummary {
    pub id: i64,
    pub comp_code: String,
}

/// A full invoice row
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Invoice {
    pub id: i64,
    pub comp_code: String,
    pub amt: f64,
    pub paid: bool,
    pub add_date: NaiveDate,
    pub paid_date: Option<NaiveDate>,
}

/// An invoice with its company attached
///
/// `company` is `None` (serialized as `null`) when the referenced company row
/// cannot be found, so orphaned invoices stay readable.
#[derive(Debug, Clone, Serialize)]
pub struct InvoiceWithCompany {
    #[serde(flatten)]
    pub invoice: Invoice,
    pub company: Option<Company>,
}

#[derive(Debug, Deserialize)]
pub struct CreateInvoiceInput {
    pub comp_code: String,
    pub amt: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdateInvoiceInput {
    pub amt: f64,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct InvoicesResponse {
    pub invoices: Vec<InvoiceSummary>,
}

#[derive(Debug, Serialize)]
pub struct InvoiceResponse<T> {
    pub invoice: T,
}
