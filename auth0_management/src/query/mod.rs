mod common;
pub use self::common::{Query, QueryCommon, SortDirection};

mod users;
pub use self::users::GetUsersQuery;

mod roles;
pub use self::roles::GetRolesQuery;

mod connections;
pub use self::connections::GetConnectionsQuery;

mod logs;
pub use self::logs::GetLogsQuery;
