//! # Companies Module
//!
//! Company CRUD. A fetched company carries the full list of its invoices.

pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;
pub mod validators;


pub use routes::companies_routes;
