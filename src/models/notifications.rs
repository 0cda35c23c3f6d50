use std::marker::PhantomData;

use chrono::Duration;
use futures::{future, TryFutureExt};

use crate::constants::{CATALOG_PAGE_SIZE, MOCK_CATALOG_SIZE};
use crate::models::auth_store::AuthStore;
use crate::models::error::{ApiError, NotificationsError};
use crate::models::fetch_api::fetch_api;
use crate::runtime::{Env, EnvFuture, EnvFutureExt, EnvMode};
use crate::types::api::{NotificationsRequest, SuccessResponse};
use crate::types::notifications::{Notification, NotificationsPage, Pagination};

pub type TryApiFuture<T> = EnvFuture<'static, Result<T, ApiError>>;

/// Which page of the catalog to fetch. Omitted values are left to the
/// API's server-side defaults and never appear in the query string.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct PageSelection {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
}

/// Where a page of notifications comes from.
pub trait NotificationSource {
    fn catalog(&self, selection: &PageSelection) -> TryApiFuture<NotificationsPage>;
    fn mark_read(&self, id: &str) -> TryApiFuture<SuccessResponse>;
}

/// The live notification API.
pub struct RemoteSource<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env> RemoteSource<E> {
    pub fn new() -> Self {
        RemoteSource { env: PhantomData }
    }
}

impl<E: Env + 'static> NotificationSource for RemoteSource<E> {
    fn catalog(&self, selection: &PageSelection) -> TryApiFuture<NotificationsPage> {
        let selection = *selection;
        AuthStore::<E>::auth_key()
            .map_err(ApiError::from)
            .and_then(move |auth_key| {
                fetch_api::<E, _, _, _>(NotificationsRequest::Catalog {
                    auth_key,
                    limit: selection.limit,
                    offset: selection.offset,
                })
            })
            .boxed_env()
    }
    fn mark_read(&self, id: &str) -> TryApiFuture<SuccessResponse> {
        let id = id.to_owned();
        AuthStore::<E>::auth_key()
            .map_err(ApiError::from)
            .and_then(move |auth_key| {
                fetch_api::<E, _, _, _>(NotificationsRequest::MarkRead { auth_key, id })
            })
            .boxed_env()
    }
}

/// Deterministic locally generated catalog, the degraded-mode substitute for
/// an unreachable API. Never mixed with live data.
pub struct MockSource<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env> MockSource<E> {
    pub fn new() -> Self {
        MockSource { env: PhantomData }
    }
}

impl<E: Env + 'static> NotificationSource for MockSource<E> {
    fn catalog(&self, selection: &PageSelection) -> TryApiFuture<NotificationsPage> {
        future::ok(mock_page::<E>(selection)).boxed_env()
    }
    fn mark_read(&self, _id: &str) -> TryApiFuture<SuccessResponse> {
        future::ok(SuccessResponse::default()).boxed_env()
    }
}

/// Fetches notification pages and flips their read flag.
///
/// The fallback source is consulted for catalog reads only, and only when
/// one is wired; [`NotificationService::new`] wires it outside production
/// mode exclusively. Mark-as-read never falls back.
pub struct NotificationService<E: Env> {
    source: Box<dyn NotificationSource>,
    fallback: Option<Box<dyn NotificationSource>>,
    env: PhantomData<E>,
}

impl<E: Env + 'static> NotificationService<E> {
    pub fn new() -> Self {
        let fallback: Option<Box<dyn NotificationSource>> = match E::mode() {
            EnvMode::Production => None,
            EnvMode::Development => Some(Box::new(MockSource::<E>::new())),
        };
        Self::with_sources(Box::new(RemoteSource::<E>::new()), fallback)
    }

    pub fn with_sources(
        source: Box<dyn NotificationSource>,
        fallback: Option<Box<dyn NotificationSource>>,
    ) -> Self {
        NotificationService {
            source,
            fallback,
            env: PhantomData,
        }
    }

    pub fn get_notifications(
        &self,
        selection: &PageSelection,
    ) -> EnvFuture<'static, Result<NotificationsPage, NotificationsError>> {
        let primary = self.source.catalog(selection);
        let fallback = self.fallback.as_ref().map(|source| source.catalog(selection));
        async move {
            match primary.await {
                Ok(page) => Ok(page),
                Err(error) => match fallback {
                    Some(fallback) => {
                        tracing::warn!(%error, "notification catalog degraded to mock data");
                        fallback.await.map_err(NotificationsError::Fetch)
                    }
                    None => Err(NotificationsError::Fetch(error)),
                },
            }
        }
        .boxed_env()
    }

    pub fn mark_as_read(
        &self,
        id: &str,
    ) -> EnvFuture<'static, Result<SuccessResponse, NotificationsError>> {
        self.source
            .mark_read(id)
            .map_err(NotificationsError::MarkRead)
            .boxed_env()
    }
}

fn mock_page<E: Env>(selection: &PageSelection) -> NotificationsPage {
    let limit = selection.limit.unwrap_or(CATALOG_PAGE_SIZE).max(1);
    let offset = selection.offset.unwrap_or(0);
    let mut items = mock_catalog::<E>();
    items.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    let total_items = items.len() as u32;
    let items = items
        .into_iter()
        .skip(offset as usize)
        .take(limit as usize)
        .collect();
    NotificationsPage {
        items,
        pagination: Pagination {
            total_items,
            total_pages: (total_items + limit - 1) / limit,
            current_page: offset / limit + 1,
            page_size: limit,
        },
    }
}

fn mock_catalog<E: Env>() -> Vec<Notification> {
    let now = E::now();
    let mut items = vec![
        Notification {
            id: "1".to_owned(),
            title: "New comment on your post \"Getting Started with Echo Corner\"".to_owned(),
            author: "Jane Doe".to_owned(),
            created_at: now - Duration::minutes(30),
            like_count: 12,
            comment_count: 3,
            read: false,
        },
        Notification {
            id: "2".to_owned(),
            title: "Your post received 15 likes".to_owned(),
            author: "System".to_owned(),
            created_at: now - Duration::hours(2),
            like_count: 15,
            comment_count: 0,
            read: false,
        },
        Notification {
            id: "3".to_owned(),
            title: "John Smith mentioned you in a comment".to_owned(),
            author: "John Smith".to_owned(),
            created_at: now - Duration::hours(5),
            like_count: 2,
            comment_count: 1,
            read: false,
        },
        Notification {
            id: "4".to_owned(),
            title: "New follower: Alice Johnson".to_owned(),
            author: "System".to_owned(),
            created_at: now - Duration::hours(12),
            like_count: 0,
            comment_count: 0,
            read: true,
        },
    ];
    for index in 5..=MOCK_CATALOG_SIZE {
        items.push(Notification {
            id: index.to_string(),
            title: format!("Mock Notification {}", index),
            author: "System".to_owned(),
            created_at: now - Duration::hours(i64::from(index)),
            like_count: index % 7,
            comment_count: index % 3,
            read: index % 3 == 0,
        });
    }
    items
}
