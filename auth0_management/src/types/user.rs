//! User types sent to and returned by the `/users` endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a user (e.g. "auth0|5f7c8ec7c33c6c004bbafe82").
pub type UserId = String;

/// Profile fields shared by user records and user create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_verified: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
    /// Full name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    /// URL of the user's picture.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked: Option<bool>,
    /// Data the user can read and edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_metadata: Option<serde_json::Value>,
    /// Data the user can read but not edit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_metadata: Option<serde_json::Value>,
}

/// A user account as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub user_id: UserId,

    #[serde(flatten)]
    pub base: UserBase,

    #[serde(default)]
    pub identities: Vec<Identity>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_ip: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logins_count: Option<u64>,
}

/// A linked identity of a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub connection: String,
    /// Identifier of the user within the identity provider.
    pub user_id: serde_json::Value,
    pub provider: String,
    #[serde(rename = "isSocial", default)]
    pub is_social: bool,
}

/// Body of `POST /users`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserCreateRequest {
    #[serde(flatten)]
    pub base: UserBase,

    /// Name of the connection the user is created in.
    pub connection: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    /// Explicit user id; generated by the server when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
}

/// Body of `PATCH /users/{id}`. Only fields that are set are sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UserUpdateRequest {
    #[serde(flatten)]
    pub base: UserBase,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub verify_email: Option<bool>,
}
