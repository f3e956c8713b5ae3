use crate::uri::QueryParams;

/// Filters for listing roles. The roles endpoint has no field selection or
/// sorting, so this does not implement [`Query`](super::Query).
#[derive(Debug, Clone, Default)]
pub struct GetRolesQuery {
    /// Case-insensitive filter on the role name.
    pub name_filter: Option<String>,
}

impl GetRolesQuery {
    pub fn with_name_filter(mut self, name_filter: &str) -> Self {
        self.name_filter = Some(name_filter.to_string());
        self
    }

    pub fn add_to_params(&self, params: &mut QueryParams) {
        params.push_opt("name_filter", self.name_filter.as_deref());
    }
}
