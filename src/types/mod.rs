pub mod api;
pub mod notifications;
pub mod profile;

mod r#true;
pub use self::r#true::*;
