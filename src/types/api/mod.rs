mod request;
pub use self::request::*;

mod response;
pub use self::response::*;
