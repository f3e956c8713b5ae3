mod user;
pub use self::user::{Identity, User, UserBase, UserCreateRequest, UserId, UserUpdateRequest};

mod role;
pub use self::role::{
    AssignRolesRequest, AssignedUser, Role, RoleBase, RoleCreateRequest, RoleId, RoleUpdateRequest,
};

mod organization;
pub use self::organization::{
    Organization, OrganizationBase, OrganizationBranding, OrganizationCreateRequest,
    OrganizationId, OrganizationMember, OrganizationUpdateRequest,
};

mod connection;
pub use self::connection::IdentityConnection;

mod log;
pub use self::log::LogEntry;

mod job;
pub use self::job::{ImportUsersRequest, Job};
