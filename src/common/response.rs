// Response bodies shared by the resource modules

use serde::Serialize;

/// Body returned by successful deletes: `{"status": "deleted"}`
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

impl StatusResponse {
    pub fn deleted() -> Self {
        Self { status: "deleted" }
    }
}
