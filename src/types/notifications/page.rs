use serde::{Deserialize, Serialize};

use crate::types::notifications::Notification;

/// One fetched batch of notifications plus its pagination metadata.
/// Recomputed on every fetch, never cached across calls.
///
/// Items are ordered by `created_at` descending and ids are unique within
/// the page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationsPage {
    pub items: Vec<Notification>,
    pub pagination: Pagination,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub total_items: u32,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}
