mod classify;
mod client;
mod connection;
mod diagnostics;
mod envelope;
mod error;
mod pagination;
mod query;
mod request;
pub mod resources;
pub mod types;
mod uri;
pub use self::classify::classify;
pub use self::client::ManagementClient;
pub use self::connection::{Connection, ConnectionBuilder};
pub use self::diagnostics::{Diagnostics, HEADER_NAME as DIAGNOSTICS_HEADER};
pub use self::envelope::{
    CheckpointEnvelope, Json, JsonList, NoContent, OffsetEnvelope, ResponseDecoder,
};
pub use self::error::{
    ApiError, ApiErrorPayload, BoxError, DecodeError, Error, RateLimitError, RateLimitInfo, Result,
    TransportError,
};
pub use self::pagination::{
    CheckpointPage, CheckpointPaginationInfo, Page, PaginationInfo, PagingMetadata,
};
pub use self::query::{
    GetConnectionsQuery, GetLogsQuery, GetRolesQuery, GetUsersQuery, Query, QueryCommon,
    SortDirection,
};
pub use self::request::{ApiRequest, FileAttachment};
pub use self::uri::{build_uri, PathParams, QueryParams};
pub use tokio_util::sync::CancellationToken;
