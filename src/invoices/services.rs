use super::models::{
    CreateInvoiceInput, Invoice, InvoiceSummary, InvoiceWithCompany, UpdateInvoiceInput,
};
use crate::common::error::is_foreign_key_violation;
use crate::common::{ApiError, Validator};
use crate::companies::services::CompaniesService;
use sqlx::SqlitePool;
use tracing::{info, warn};

pub struct InvoicesService {
    db: SqlitePool,
}

impl InvoicesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List every invoice as `{id, comp_code}`, ordered by id
    pub async fn list_invoices(&self) -> Result<Vec<InvoiceSummary>, ApiError> {
        let invoices = sqlx::query_as::<_, InvoiceSummary>(
            r#"
            SELECT id, comp_code
            FROM invoices
            ORDER BY id
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(invoices)
    }

    /// All invoices billed to one company, ordered by id
    pub async fn list_invoices_for_company(
        &self,
        comp_code: &str,
    ) -> Result<Vec<Invoice>, ApiError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE comp_code = ?
            ORDER BY id
            "#,
        )
        .bind(comp_code)
        .fetch_all(&self.db)
        .await?;

        Ok(invoices)
    }

    /// Fetch an invoice and attach its company
    ///
    /// A missing company is not an error: the invoice comes back with
    /// `company: None`.
    pub async fn get_invoice(&self, id: i64) -> Result<InvoiceWithCompany, ApiError> {
        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            SELECT id, comp_code, amt, paid, add_date, paid_date
            FROM invoices
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice not found: {}", id)))?;

        let company = CompaniesService::new(self.db.clone())
            .find_company(&invoice.comp_code)
            .await?;

        if company.is_none() {
            warn!(invoice_id = id, comp_code = %invoice.comp_code, "Invoice has no company");
        }

        Ok(InvoiceWithCompany { invoice, company })
    }

    /// Insert an invoice; `paid`, `add_date` and `paid_date` take store defaults
    ///
    /// The company is not looked up first. An unknown `comp_code` trips the
    /// foreign key and is reported as a bad request.
    pub async fn create_invoice(&self, input: CreateInvoiceInput) -> Result<Invoice, ApiError> {
        input.validate(&input).into_result()?;

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            INSERT INTO invoices (comp_code, amt)
            VALUES (?, ?)
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(&input.comp_code)
        .bind(input.amt)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                ApiError::BadRequest(format!("Company not found: {}", input.comp_code))
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(invoice_id = invoice.id, comp_code = %invoice.comp_code, "Created invoice");

        Ok(invoice)
    }

    /// Change the amount of an invoice; every other column is left alone
    pub async fn update_invoice(
        &self,
        id: i64,
        input: UpdateInvoiceInput,
    ) -> Result<Invoice, ApiError> {
        input.validate(&input).into_result()?;

        let invoice = sqlx::query_as::<_, Invoice>(
            r#"
            UPDATE invoices
            SET amt = ?
            WHERE id = ?
            RETURNING id, comp_code, amt, paid, add_date, paid_date
            "#,
        )
        .bind(input.amt)
        .bind(id)
        .fetch_optional(&self.db)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Invoice not found: {}", id)))?;

        info!(invoice_id = id, amt = invoice.amt, "Updated invoice");

        Ok(invoice)
    }

    pub async fn delete_invoice(&self, id: i64) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM invoices WHERE id = ?")
            .bind(id)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Invoice not found: {}", id)));
        }

        info!(invoice_id = id, "Deleted invoice");

        Ok(())
    }
}
