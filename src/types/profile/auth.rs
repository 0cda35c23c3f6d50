use core::fmt;

use serde::{Deserialize, Serialize};

/// Bearer token attached to authenticated API calls.
#[derive(Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthKey(pub String);

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AuthKey(<SENSITIVE>)")
    }
}
