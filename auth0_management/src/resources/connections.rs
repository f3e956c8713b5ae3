use std::sync::Arc;

use crate::connection::Connection;
use crate::envelope::OffsetEnvelope;
use crate::error::Result;
use crate::pagination::{Page, PaginationInfo};
use crate::query::{GetConnectionsQuery, Query};
use crate::request::ApiRequest;
use crate::types::IdentityConnection;
use crate::uri::PathParams;

/// Client for the `/connections` endpoints.
#[derive(Debug, Clone)]
pub struct ConnectionsClient {
    connection: Arc<Connection>,
}

impl ConnectionsClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    pub async fn list(
        &self,
        query: &GetConnectionsQuery,
        pagination: Option<&PaginationInfo>,
    ) -> Result<Page<IdentityConnection>> {
        let mut params = query.to_params();
        if let Some(pagination) = pagination {
            pagination.add_to_params(&mut params);
        }
        let url = self
            .connection
            .uri("connections", &PathParams::new(), &params)?;
        self.connection
            .send(ApiRequest::get(url), &OffsetEnvelope::new("connections"))
            .await
    }
}
