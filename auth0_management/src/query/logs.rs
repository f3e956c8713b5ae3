use crate::uri::QueryParams;

use super::common::{Query, QueryCommon};

/// Filters for searching log events.
#[derive(Debug, Clone, Default)]
pub struct GetLogsQuery {
    pub common: QueryCommon,
    /// Lucene query string, e.g. `type:"f"`.
    pub q: Option<String>,
}

impl Query for GetLogsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_params(&self, params: &mut QueryParams) {
        self.common.add_to_params(params);
        params.push_opt("q", self.q.as_deref());
    }
}

impl GetLogsQuery {
    pub fn with_q(mut self, q: &str) -> Self {
        self.q = Some(q.to_string());
        self
    }
}
