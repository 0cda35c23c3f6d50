mod error;
pub use error::*;

mod fetch_api;
pub use fetch_api::*;

mod auth_store;
pub use auth_store::*;

mod notifications;
pub use notifications::*;
