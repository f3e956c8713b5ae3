use crate::uri::QueryParams;

use super::common::{Query, QueryCommon};

/// Filters for listing connections.
#[derive(Debug, Clone, Default)]
pub struct GetConnectionsQuery {
    pub common: QueryCommon,
    /// Strategies to include; sent as one `strategy=` pair each.
    pub strategies: Vec<String>,
    pub name: Option<String>,
}

impl Query for GetConnectionsQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }

    fn add_to_params(&self, params: &mut QueryParams) {
        self.common.add_to_params(params);
        params
            .push_all("strategy", &self.strategies)
            .push_opt("name", self.name.as_deref());
    }
}

impl GetConnectionsQuery {
    pub fn with_strategy(mut self, strategy: &str) -> Self {
        self.strategies.push(strategy.to_string());
        self
    }

    pub fn with_name(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }
}
