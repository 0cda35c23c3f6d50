mod notification;
pub use self::notification::*;

mod page;
pub use self::page::*;
