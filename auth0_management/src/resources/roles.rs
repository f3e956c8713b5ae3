use std::sync::Arc;

use crate::connection::Connection;
use crate::envelope::{CheckpointEnvelope, Json, NoContent, OffsetEnvelope};
use crate::error::Result;
use crate::pagination::{CheckpointPage, CheckpointPaginationInfo, Page, PaginationInfo};
use crate::query::GetRolesQuery;
use crate::request::ApiRequest;
use crate::types::{AssignedUser, Role, RoleCreateRequest, RoleUpdateRequest};
use crate::uri::{PathParams, QueryParams};

/// Client for the `/roles` endpoints.
#[derive(Debug, Clone)]
pub struct RolesClient {
    connection: Arc<Connection>,
}

impl RolesClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    pub async fn list(
        &self,
        query: &GetRolesQuery,
        pagination: Option<&PaginationInfo>,
    ) -> Result<Page<Role>> {
        let mut params = QueryParams::new();
        query.add_to_params(&mut params);
        if let Some(pagination) = pagination {
            pagination.add_to_params(&mut params);
        }
        let url = self.connection.uri("roles", &PathParams::new(), &params)?;
        self.connection
            .send(ApiRequest::get(url), &OffsetEnvelope::new("roles"))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Role> {
        let url = self.role_url("roles/{id}", id)?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }

    pub async fn create(&self, request: &RoleCreateRequest) -> Result<Role> {
        let url = self
            .connection
            .uri("roles", &PathParams::new(), &QueryParams::new())?;
        self.connection
            .send(ApiRequest::post(url).json(request)?, &Json::new())
            .await
    }

    pub async fn update(&self, id: &str, request: &RoleUpdateRequest) -> Result<Role> {
        let url = self.role_url("roles/{id}", id)?;
        self.connection
            .send(ApiRequest::patch(url).json(request)?, &Json::new())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.role_url("roles/{id}", id)?;
        self.connection.send(ApiRequest::delete(url), &NoContent).await
    }

    /// Users holding the role, with checkpoint pagination.
    pub async fn users(
        &self,
        id: &str,
        pagination: &CheckpointPaginationInfo,
    ) -> Result<CheckpointPage<AssignedUser>> {
        let mut params = QueryParams::new();
        pagination.add_to_params(&mut params);
        let url = self.connection.uri(
            "roles/{id}/users",
            &PathParams::new().with("id", id),
            &params,
        )?;
        self.connection
            .send(ApiRequest::get(url), &CheckpointEnvelope::new("users"))
            .await
    }

    fn role_url(&self, template: &str, id: &str) -> Result<url::Url> {
        self.connection.uri(
            template,
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )
    }
}
