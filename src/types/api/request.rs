use http::Method;
use percent_encoding::utf8_percent_encode;
use serde::Serialize;
use url::Url;

use crate::constants::{API_URL, NOTIFICATIONS_ENDPOINT, URI_COMPONENT_ENCODE_SET};
use crate::types::profile::AuthKey;

/// Everything the API client needs to dispatch one call.
pub trait FetchRequestParams<T> {
    fn endpoint(&self) -> Url;
    fn method(&self) -> Method;
    fn path(&self) -> String;
    /// Serialized query string; params with no value are skipped entirely.
    fn query(&self) -> Option<String>;
    /// Bearer token for authenticated calls.
    fn auth_key(&self) -> Option<&AuthKey>;
    fn body(self) -> T;
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum NotificationsRequest {
    Catalog {
        auth_key: AuthKey,
        limit: Option<u32>,
        offset: Option<u32>,
    },
    MarkRead {
        auth_key: AuthKey,
        id: String,
    },
}

#[derive(Serialize)]
struct CatalogQuery {
    limit: Option<u32>,
    offset: Option<u32>,
}

impl FetchRequestParams<()> for NotificationsRequest {
    fn endpoint(&self) -> Url {
        API_URL.to_owned()
    }
    fn method(&self) -> Method {
        match self {
            NotificationsRequest::Catalog { .. } => Method::GET,
            NotificationsRequest::MarkRead { .. } => Method::POST,
        }
    }
    fn path(&self) -> String {
        match self {
            NotificationsRequest::Catalog { .. } => NOTIFICATIONS_ENDPOINT.to_owned(),
            NotificationsRequest::MarkRead { id, .. } => format!(
                "{}/{}/read",
                NOTIFICATIONS_ENDPOINT,
                utf8_percent_encode(id, URI_COMPONENT_ENCODE_SET)
            ),
        }
    }
    fn query(&self) -> Option<String> {
        match self {
            NotificationsRequest::Catalog { limit, offset, .. } => Some(
                serde_url_params::to_string(&CatalogQuery {
                    limit: *limit,
                    offset: *offset,
                })
                .expect("Serialize query params failed"),
            ),
            NotificationsRequest::MarkRead { .. } => None,
        }
    }
    fn auth_key(&self) -> Option<&AuthKey> {
        match self {
            NotificationsRequest::Catalog { auth_key, .. }
            | NotificationsRequest::MarkRead { auth_key, .. } => Some(auth_key),
        }
    }
    fn body(self) {}
}
