use crate::uri::QueryParams;

use super::common::{Query, QueryCommon};

/// Filters for listing users.
#[derive(Debug, Clone, Default)]
pub struct GetUsersQuery {
    pub common: QueryCommon,
    /// Lucene query string, e.g. `email:"jane@example.com"`.
    pub q: Option<String>,
    /// Search engine version, e.g. `v3`.
    pub search_engine: Option<String>,
    /// Restricts results to one connection.
    pub connection: Option<String>,
}

impl Query for GetUsersQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_params(&self, params: &mut QueryParams) {
        self.common.add_to_params(params);
        params
            .push_opt("q", self.q.as_deref())
            .push_opt("search_engine", self.search_engine.as_deref())
            .push_opt("connection", self.connection.as_deref());
    }
}

impl GetUsersQuery {
    pub fn with_q(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }

    pub fn with_search_engine(mut self, search_engine: &str) -> Self {
        self.search_engine = Some(search_engine.to_string());
        self
    }

    pub fn with_connection(mut self, connection: &str) -> Self {
        self.connection = Some(connection.to_string());
        self
    }
}
