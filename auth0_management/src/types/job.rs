//! Background jobs, such as bulk user imports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A job as returned by `/jobs` endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: String,

    /// `pending`, `processing`, `completed` or `failed`.
    pub status: String,

    #[serde(rename = "type")]
    pub job_type: String,

    pub connection_id: Option<String>,

    pub external_id: Option<String>,

    pub created_at: Option<DateTime<Utc>>,

    /// Completion percentage while processing.
    pub percentage_done: Option<u32>,
}

/// Parameters of a bulk user import. `users` is the JSON file content.
#[derive(Debug, Clone, Default)]
pub struct ImportUsersRequest {
    pub connection_id: String,
    pub users: Vec<u8>,
    pub file_name: String,
    /// Update users that already exist instead of failing.
    pub upsert: Option<bool>,
    pub send_completion_email: Option<bool>,
    pub external_id: Option<String>,
}
