mod auth;
pub use self::auth::*;

mod user;
pub use self::user::*;
