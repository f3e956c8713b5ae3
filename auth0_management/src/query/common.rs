//! Shared query infrastructure: the [`Query`] trait, [`QueryCommon`] fields, and [`SortDirection`].

use std::fmt;
use std::str::FromStr;

use crate::uri::QueryParams;

/// Trait implemented by listing query builders. Provides parameter
/// serialization and shared builder methods for field selection and sorting.
pub trait Query {
    /// Appends this query's parameters.
    fn add_to_params(&self, params: &mut QueryParams);

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Serializes the query into a fresh parameter list.
    fn to_params(&self) -> QueryParams {
        let mut params = QueryParams::new();
        self.add_to_params(&mut params);
        params
    }

    /// Adds a field to the `fields` selection.
    fn with_field(mut self, field: &str) -> Self
    where
        Self: Sized,
    {
        self.get_common().fields.push(field.to_string());
        self
    }

    /// Whether `fields` lists the fields to include (`true`) or exclude (`false`).
    fn with_include_fields(mut self, include_fields: bool) -> Self
    where
        Self: Sized,
    {
        self.get_common().include_fields = Some(include_fields);
        self
    }

    /// Sorts by `field` in the given direction.
    fn with_sort(mut self, field: &str, direction: SortDirection) -> Self
    where
        Self: Sized,
    {
        self.get_common().sort = Some((field.to_string(), direction));
        self
    }
}

/// Sort order for API results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Ascending order. Serialized as `1`.
    Asc,
    /// Descending order. Serialized as `-1`. This is the default.
    #[default]
    Desc,
}

impl FromStr for SortDirection {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "asc" => Ok(SortDirection::Asc),
            "-1" | "desc" => Ok(SortDirection::Desc),
            _ => Err(()),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Asc => write!(f, "1"),
            SortDirection::Desc => write!(f, "-1"),
        }
    }
}

/// Fields shared by listing queries: field selection and sorting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryCommon {
    /// Fields to include or exclude. Empty means all fields.
    pub fields: Vec<String>,
    /// `None` uses the API default (include).
    pub include_fields: Option<bool>,
    /// Sort field and direction. `None` uses the API default ordering.
    pub sort: Option<(String, SortDirection)>,
}

impl QueryCommon {
    /// Appends `fields`, `include_fields` and `sort` when set.
    pub fn add_to_params(&self, params: &mut QueryParams) {
        if !self.fields.is_empty() {
            params.push("fields", self.fields.join(","));
        }
        params.push_opt("include_fields", self.include_fields);
        if let Some((field, direction)) = &self.sort {
            params.push("sort", format!("{}:{}", field, direction));
        }
    }
}
