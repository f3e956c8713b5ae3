//! Organization types for the `/organizations` endpoints.

use serde::{Deserialize, Serialize};

use super::user::UserId;

/// Unique identifier for an organization (e.g. "org_4a3dcfa4d8e23b57").
pub type OrganizationId = String;

/// Fields shared by organizations and organization create/update requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationBase {
    /// URL-safe name, unique within the tenant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branding: Option<OrganizationBranding>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OrganizationBranding {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    /// Keys are `primary` and `page_background`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colors: Option<serde_json::Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: OrganizationId,

    #[serde(flatten)]
    pub base: OrganizationBase,
}

/// Body of `POST /organizations`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationCreateRequest {
    #[serde(flatten)]
    pub base: OrganizationBase,
}

/// Body of `PATCH /organizations/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrganizationUpdateRequest {
    #[serde(flatten)]
    pub base: OrganizationBase,
}

/// A member of an organization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrganizationMember {
    pub user_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picture: Option<String>,
}
