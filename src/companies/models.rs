use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::common::helpers::required_nullable;
use crate::invoices::models::Invoice;

/// Row shape of `GET /companies`
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CompanySummary {
    pub code: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Company {
    pub code: String,
    pub name: String,
    pub description: Option<String>,
}

/// A company together with every invoice billed to it
///
/// Invoices are flat rows; they never carry a company back-reference.
#[derive(Debug, Clone, Serialize)]
pub struct CompanyWithInvoices {
    #[serde(flatten)]
    pub company: Company,
    pub invoices: Vec<Invoice>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCompanyInput {
    pub code: String,
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCompanyInput {
    pub name: String,
    #[serde(deserialize_with = "required_nullable")]
    pub description: Option<String>,
}

// ============================================================================
// Response envelopes
// ============================================================================

#[derive(Debug, Serialize)]
pub struct CompaniesResponse {
    pub companies: Vec<CompanySummary>,
}

#[derive(Debug, Serialize)]
pub struct CompanyResponse<T> {
    pub company: T,
}
