//! Resource clients. Each one only supplies paths, parameters and the decoder
//! for its response shape; everything else goes through [`Connection`](crate::Connection).

mod connections;
pub use self::connections::ConnectionsClient;

mod jobs;
pub use self::jobs::JobsClient;

mod logs;
pub use self::logs::LogsClient;

mod organizations;
pub use self::organizations::OrganizationsClient;

mod roles;
pub use self::roles::RolesClient;

mod users;
pub use self::users::UsersClient;
