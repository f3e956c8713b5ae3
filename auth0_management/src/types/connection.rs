//! Identity provider connections.

use serde::{Deserialize, Serialize};

/// A connection (database, social or enterprise identity provider).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IdentityConnection {
    pub id: String,
    pub name: String,
    pub display_name: Option<String>,
    /// Identity provider kind, e.g. `auth0`, `google-oauth2`, `samlp`.
    pub strategy: String,
    #[serde(default)]
    pub enabled_clients: Vec<String>,
    #[serde(default)]
    pub realms: Vec<String>,
    pub is_domain_connection: Option<bool>,
    pub options: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
}
