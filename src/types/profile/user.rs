use serde::{Deserialize, Serialize};

/// Account identity attributes, issued on sign in and persisted until sign
/// out. A single active instance, there is no multi-account support.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub verified: bool,
}
