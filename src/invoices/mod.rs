//! # Invoices Module
//!
//! Invoice CRUD. Every invoice belongs to a company through `comp_code`; a
//! fetched invoice carries its company when that row still exists.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::invoices_routes;
