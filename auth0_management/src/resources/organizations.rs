use std::sync::Arc;

use crate::connection::Connection;
use crate::envelope::{CheckpointEnvelope, Json, NoContent};
use crate::error::Result;
use crate::pagination::{CheckpointPage, CheckpointPaginationInfo};
use crate::request::ApiRequest;
use crate::types::{
    Organization, OrganizationCreateRequest, OrganizationMember, OrganizationUpdateRequest,
};
use crate::uri::{PathParams, QueryParams};

/// Client for the `/organizations` endpoints. Listings use checkpoint pagination.
#[derive(Debug, Clone)]
pub struct OrganizationsClient {
    connection: Arc<Connection>,
}

impl OrganizationsClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    pub async fn list(
        &self,
        pagination: &CheckpointPaginationInfo,
    ) -> Result<CheckpointPage<Organization>> {
        let mut params = QueryParams::new();
        pagination.add_to_params(&mut params);
        let url = self
            .connection
            .uri("organizations", &PathParams::new(), &params)?;
        self.connection
            .send(ApiRequest::get(url), &CheckpointEnvelope::new("organizations"))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Organization> {
        let url = self.connection.uri(
            "organizations/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Organization> {
        let url = self.connection.uri(
            "organizations/name/{name}",
            &PathParams::new().with("name", name),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }

    pub async fn create(&self, request: &OrganizationCreateRequest) -> Result<Organization> {
        let url = self
            .connection
            .uri("organizations", &PathParams::new(), &QueryParams::new())?;
        self.connection
            .send(ApiRequest::post(url).json(request)?, &Json::new())
            .await
    }

    pub async fn update(
        &self,
        id: &str,
        request: &OrganizationUpdateRequest,
    ) -> Result<Organization> {
        let url = self.connection.uri(
            "organizations/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection
            .send(ApiRequest::patch(url).json(request)?, &Json::new())
            .await
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        let url = self.connection.uri(
            "organizations/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::delete(url), &NoContent).await
    }

    pub async fn members(
        &self,
        id: &str,
        pagination: &CheckpointPaginationInfo,
    ) -> Result<CheckpointPage<OrganizationMember>> {
        let mut params = QueryParams::new();
        pagination.add_to_params(&mut params);
        let url = self.connection.uri(
            "organizations/{id}/members",
            &PathParams::new().with("id", id),
            &params,
        )?;
        self.connection
            .send(ApiRequest::get(url), &CheckpointEnvelope::new("members"))
            .await
    }
}
