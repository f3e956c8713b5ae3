//! Role types for the `/roles` endpoints.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Unique identifier for a role (e.g. "rol_0PXH5mX3JZqYnCsB").
pub type RoleId = String;

/// Fields shared by roles and role create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoleBase {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,

    #[serde(flatten)]
    pub base: RoleBase,
}

/// Body of `POST /roles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleCreateRequest {
    #[serde(flatten)]
    pub base: RoleBase,
}

/// Body of `PATCH /roles/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RoleUpdateRequest {
    #[serde(flatten)]
    pub base: RoleBase,
}

/// A user holding a role, as listed by `/roles/{id}/users`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignedUser {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}

/// Body of `POST /users/{id}/roles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AssignRolesRequest {
    pub roles: Vec<RoleId>,
}
