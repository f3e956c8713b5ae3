//! Tenant log events.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One log event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub log_id: Option<String>,

    pub date: Option<DateTime<Utc>>,

    /// Event type code, e.g. `s` (successful login) or `f` (failed login).
    #[serde(rename = "type")]
    pub event_type: Option<String>,

    pub description: Option<String>,

    pub client_id: Option<String>,

    pub client_name: Option<String>,

    pub ip: Option<String>,

    pub user_id: Option<String>,

    pub user_name: Option<String>,

    pub connection: Option<String>,

    pub details: Option<serde_json::Value>,
}
