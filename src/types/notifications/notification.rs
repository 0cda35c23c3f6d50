use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One feed entry. Immutable once issued, except for `read` which flips via
/// the mark-as-read endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub author: String,
    pub created_at: DateTime<Utc>,
    #[serde(rename = "likes")]
    pub like_count: u32,
    #[serde(rename = "comments")]
    pub comment_count: u32,
    /// Not all feed payloads carry the flag, absent means unread.
    #[serde(default)]
    pub read: bool,
}
