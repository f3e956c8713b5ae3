use std::sync::Arc;

use crate::connection::Connection;
use crate::envelope::{Json, NoContent, OffsetEnvelope};
use crate::error::Result;
use crate::pagination::{Page, PaginationInfo};
use crate::query::{GetUsersQuery, Query};
use crate::request::ApiRequest;
use crate::types::{AssignRolesRequest, Role, User, UserCreateRequest, UserUpdateRequest};
use crate::uri::{PathParams, QueryParams};

/// Client for the `/users` endpoints.
#[derive(Debug, Clone)]
pub struct UsersClient {
    connection: Arc<Connection>,
}

impl UsersClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    /// Lists users. Without pagination, or with `include_totals` off, the
    /// page carries no metadata.
    pub async fn list(
        &self,
        query: &GetUsersQuery,
        pagination: Option<&PaginationInfo>,
    ) -> Result<Page<User>> {
        let mut params = query.to_params();
        if let Some(pagination) = pagination {
            pagination.add_to_params(&mut params);
        }
        let url = self.connection.uri("users", &PathParams::new(), &params)?;
        self.connection
            .send(ApiRequest::get(url), &OffsetEnvelope::new("users"))
            .await
    }

    /// Fetches one user, optionally restricted to `fields`.
    pub async fn get(&self, id: &str, fields: &[&str]) -> Result<User> {
        let mut params = QueryParams::new();
        if !fields.is_empty() {
            params.push("fields", fields.join(",")).push("include_fields", true);
        }
        let url = self.connection.uri(
            "users/{id}",
            &PathParams::new().with("id", id),
            &params,
        )?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }

    pub async fn create(&self, request: &UserCreateRequest) -> Result<User> {
        let url = self
            .connection
            .uri("users", &PathParams::new(), &QueryParams::new())?;
        self.connection
            .send(ApiRequest::post(url).json(request)?, &Json::new())
            .await
    }

    /// Updates the fields set in `request`; unset fields are left untouched.
    pub async fn update(&self, id: &str, request: &UserUpdateRequest) -> Result<User> {
        let url = self.connection.uri(
            "users/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection
            .send(ApiRequest::patch(url).json(request)?, &Json::new())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.connection.uri(
            "users/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::delete(url), &NoContent).await
    }

    /// Roles assigned to a user.
    pub async fn roles(&self, id: &str, pagination: &PaginationInfo) -> Result<Page<Role>> {
        let mut params = QueryParams::new();
        pagination.add_to_params(&mut params);
        let url = self.connection.uri(
            "users/{id}/roles",
            &PathParams::new().with("id", id),
            &params,
        )?;
        self.connection
            .send(ApiRequest::get(url), &OffsetEnvelope::new("roles"))
            .await
    }

    pub async fn assign_roles(&self, id: &str, role_ids: &[&str]) -> Result<()> {
        let url = self.connection.uri(
            "users/{id}/roles",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        let body = AssignRolesRequest {
            roles: role_ids.iter().map(|r| r.to_string()).collect(),
        };
        self.connection
            .send(ApiRequest::post(url).json(&body)?, &NoContent)
            .await
    }
}
