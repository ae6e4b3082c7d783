pub mod role;
pub use role::{ParseRoleError, Role};

pub mod session;
pub use session::{Session, SessionUser, TokenClaims};

pub mod user;
pub use user::NewUser;
