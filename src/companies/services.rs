use super::models::{
    Company, CompanySummary, CompanyWithInvoices, CreateCompanyInput, UpdateCompanyInput,
};
use crate::common::error::is_unique_violation;
use crate::common::{ApiError, Validator};
use crate::invoices::services::InvoicesService;
use sqlx::SqlitePool;
use tracing::info;

pub struct CompaniesService {
    db: SqlitePool,
}

impl CompaniesService {
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }

    /// List every company as `{code, name}`, ordered by code
    pub async fn list_companies(&self) -> Result<Vec<CompanySummary>, ApiError> {
        let companies = sqlx::query_as::<_, CompanySummary>(
            r#"
            SELECT code, name
            FROM companies
            ORDER BY code
            "#,
        )
        .fetch_all(&self.db)
        .await?;

        Ok(companies)
    }

    /// Fetch a single company row without its invoices
    pub async fn find_company(&self, code: &str) -> Result<Option<Company>, ApiError> {
        let company = sqlx::query_as::<_, Company>(
            r#"
            SELECT code, name, description
            FROM companies
            WHERE code = ?
            "#,
        )
        .bind(code)
        .fetch_optional(&self.db)
        .await?;

        Ok(company)
    }

    /// Fetch a company and attach all of its invoices
    ///
    /// Two reads outside a transaction: an invoice inserted or removed between
    /// them may or may not show up.
    pub async fn get_company(&self, code: &str) -> Result<CompanyWithInvoices, ApiError> {
        let company = self
            .find_company(code)
            .await?
            .ok_or_else(|| ApiError::NotFound(format!("Company not found: {}", code)))?;

        let invoices = InvoicesService::new(self.db.clone())
            .list_invoices_for_company(code)
            .await?;

        Ok(CompanyWithInvoices { company, invoices })
    }

    pub async fn create_company(&self, input: CreateCompanyInput) -> Result<Company, ApiError> {
        input.validate(&input).into_result()?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            INSERT INTO companies (code, name, description)
            VALUES (?, ?, ?)
            RETURNING code, name, description
            "#,
        )
        .bind(&input.code)
        .bind(&input.name)
        .bind(&input.description)
        .fetch_one(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest(format!(
                    "Company code or name already exists: {}",
                    input.code
                ))
            } else {
                ApiError::DatabaseError(e)
            }
        })?;

        info!(code = %company.code, "Created company");

        Ok(company)
    }

    /// Replace name and description; the code never changes
    pub async fn update_company(
        &self,
        code: &str,
        input: UpdateCompanyInput,
    ) -> Result<Company, ApiError> {
        input.validate(&input).into_result()?;

        let company = sqlx::query_as::<_, Company>(
            r#"
            UPDATE companies
            SET name = ?, description = ?
            WHERE code = ?
            RETURNING code, name, description
            "#,
        )
        .bind(&input.name)
        .bind(&input.description)
        .bind(code)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                ApiError::BadRequest(format!("Company name already exists: {}", input.name))
            } else {
                ApiError::DatabaseError(e)
            }
        })?
        .ok_or_else(|| ApiError::NotFound(format!("Company not found: {}", code)))?;

        info!(code = %company.code, "Updated company");

        Ok(company)
    }

    /// Delete a company; the store cascades the delete to its invoices
    pub async fn delete_company(&self, code: &str) -> Result<(), ApiError> {
        let result = sqlx::query("DELETE FROM companies WHERE code = ?")
            .bind(code)
            .execute(&self.db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(ApiError::NotFound(format!("Company not found: {}", code)));
        }

        info!(code = %code, "Deleted company");

        Ok(())
    }
}
