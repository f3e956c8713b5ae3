use std::sync::Arc;

use crate::connection::Connection;
use crate::envelope::{Json, OffsetEnvelope};
use crate::error::Result;
use crate::pagination::{Page, PaginationInfo};
use crate::query::{GetLogsQuery, Query};
use crate::request::ApiRequest;
use crate::types::LogEntry;
use crate::uri::{PathParams, QueryParams};

/// Client for the `/logs` endpoints.
///
/// The log envelope reports `start`, `limit`, `length` and `total`.
#[derive(Debug, Clone)]
pub struct LogsClient {
    connection: Arc<Connection>,
}

impl LogsClient {
    pub(crate) fn new(connection: Arc<Connection>) -> Self {
        Self { connection }
    }

    pub async fn list(
        &self,
        query: &GetLogsQuery,
        pagination: Option<&PaginationInfo>,
    ) -> Result<Page<LogEntry>> {
        let mut params = query.to_params();
        if let Some(pagination) = pagination {
            pagination.add_to_params(&mut params);
        }
        let url = self.connection.uri("logs", &PathParams::new(), &params)?;
        self.connection
            .send(ApiRequest::get(url), &OffsetEnvelope::new("logs"))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<LogEntry> {
        let url = self.connection.uri(
            "logs/{id}",
            &PathParams::new().with("id", id),
            &QueryParams::new(),
        )?;
        self.connection.send(ApiRequest::get(url), &Json::new()).await
    }
}
