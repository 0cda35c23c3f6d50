use std::collections::HashSet;

use futures::future;

use crate::constants::{TEST_ACCOUNT_EMAIL, TEST_ACCOUNT_PASSWORD};
use crate::models::{
    ApiError, AuthError, AuthStore, MockSource, NotificationService, NotificationSource,
    NotificationsError, PageSelection,
};
use crate::runtime::{EnvError, EnvFutureExt, EnvMode, TryEnvFuture};
use crate::types::api::SuccessResponse;
use crate::types::notifications::{NotificationsPage, Pagination};
use crate::unit_tests::{default_fetch_handler, Request, TestEnv, FETCH_HANDLER, MODE, REQUESTS};

async fn sign_in() {
    AuthStore::<TestEnv>::sign_in(TEST_ACCOUNT_EMAIL, TEST_ACCOUNT_PASSWORD)
        .await
        .expect("Should sign in");
}

fn failing_fetch_handler(_request: Request) -> TryEnvFuture<http::Response<String>> {
    future::err(EnvError::Fetch("connection refused".to_owned())).boxed_env()
}

fn assert_page_invariants(page: &NotificationsPage) {
    let ids = page
        .items
        .iter()
        .map(|item| item.id.as_str())
        .collect::<HashSet<_>>();
    assert_eq!(ids.len(), page.items.len(), "ids unique within the page");
    assert!(
        page.items
            .windows(2)
            .all(|pair| pair[0].created_at >= pair[1].created_at),
        "items ordered newest first"
    );
}

#[tokio::test]
async fn get_notifications_from_the_live_api() {
    fn fetch_handler(request: Request) -> TryEnvFuture<http::Response<String>> {
        match request {
            Request { url, method, .. }
                if url
                    == "https://m97gq044y3.execute-api.eu-central-1.amazonaws.com/prod/notifications?limit=10&offset=0"
                    && method == "GET" =>
            {
                future::ok(
                    http::Response::builder()
                        .status(200)
                        .body(
                            serde_json::json!({
                                "items": [
                                    {
                                        "id": "42",
                                        "title": "New comment on your post",
                                        "author": "Jane Doe",
                                        "createdAt": "2025-04-10T14:23:00Z",
                                        "likes": 12,
                                        "comments": 3,
                                        "read": false
                                    }
                                ],
                                "pagination": {
                                    "totalItems": 1,
                                    "totalPages": 1,
                                    "currentPage": 1,
                                    "pageSize": 10
                                }
                            })
                            .to_string(),
                        )
                        .expect("response builder failed"),
                )
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    sign_in().await;
    let service = NotificationService::<TestEnv>::new();
    let page = service
        .get_notifications(&PageSelection {
            limit: Some(10),
            offset: Some(0),
        })
        .await
        .expect("Should fetch the page");
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.items[0].id, "42");
    assert_page_invariants(&page);
}

#[tokio::test]
async fn get_notifications_falls_back_outside_production() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(failing_fetch_handler);
    sign_in().await;
    let service = NotificationService::<TestEnv>::new();
    let page = service
        .get_notifications(&PageSelection {
            limit: Some(10),
            offset: Some(0),
        })
        .await
        .expect("Should degrade to the mock catalog");
    assert!(!page.items.is_empty(), "mock page is never empty");
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.pagination.total_items, 25);
    assert_page_invariants(&page);
    assert_eq!(
        REQUESTS.read().unwrap().len(),
        1,
        "the live API was attempted first"
    );
}

#[tokio::test]
async fn get_notifications_propagates_in_production() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(failing_fetch_handler);
    *MODE.write().unwrap() = EnvMode::Production;
    sign_in().await;
    let service = NotificationService::<TestEnv>::new();
    let result = service.get_notifications(&PageSelection::default()).await;
    assert_eq!(
        result,
        Err(NotificationsError::Fetch(ApiError::Env(EnvError::Fetch(
            "connection refused".to_owned()
        ))))
    );
}

#[tokio::test]
async fn get_notifications_falls_back_without_a_session() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let service = NotificationService::<TestEnv>::new();
    let page = service
        .get_notifications(&PageSelection::default())
        .await
        .expect("Should degrade to the mock catalog");
    assert!(!page.items.is_empty());
    assert!(
        REQUESTS.read().unwrap().is_empty(),
        "no live call without a bearer token"
    );
}

#[tokio::test]
async fn mark_as_read_against_the_live_api() {
    fn fetch_handler(request: Request) -> TryEnvFuture<http::Response<String>> {
        match request {
            Request { url, method, .. }
                if url
                    == "https://m97gq044y3.execute-api.eu-central-1.amazonaws.com/prod/notifications/42/read"
                    && method == "POST" =>
            {
                future::ok(
                    http::Response::builder()
                        .status(200)
                        .body(serde_json::json!({ "success": true }).to_string())
                        .expect("response builder failed"),
                )
                .boxed_env()
            }
            _ => default_fetch_handler(request),
        }
    }
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(fetch_handler);
    sign_in().await;
    let service = NotificationService::<TestEnv>::new();
    let result = service.mark_as_read("42").await;
    assert_eq!(result, Ok(SuccessResponse::default()));
}

#[tokio::test]
async fn mark_as_read_never_falls_back() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    *FETCH_HANDLER.write().unwrap() = Box::new(failing_fetch_handler);
    sign_in().await;
    let service = NotificationService::<TestEnv>::new();
    let result = service.mark_as_read("42").await;
    assert_eq!(
        result,
        Err(NotificationsError::MarkRead(ApiError::Env(EnvError::Fetch(
            "connection refused".to_owned()
        )))),
        "mock fallback does not apply to mark-as-read"
    );
}

#[tokio::test]
async fn mark_as_read_requires_a_session() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let service = NotificationService::<TestEnv>::new();
    let result = service.mark_as_read("42").await;
    assert_eq!(
        result,
        Err(NotificationsError::MarkRead(ApiError::Auth(
            AuthError::NotAuthenticated
        )))
    );
}

#[tokio::test]
async fn mock_source_first_page() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let source = MockSource::<TestEnv>::new();
    let page = source
        .catalog(&PageSelection {
            limit: Some(10),
            offset: Some(0),
        })
        .await
        .expect("Should generate the page");
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.items[0].id, "1", "newest entry first");
    assert_eq!(
        page.pagination,
        Pagination {
            total_items: 25,
            total_pages: 3,
            current_page: 1,
            page_size: 10,
        }
    );
    assert_page_invariants(&page);
}

#[tokio::test]
async fn mock_source_slices_by_offset() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let source = MockSource::<TestEnv>::new();
    let page = source
        .catalog(&PageSelection {
            limit: Some(10),
            offset: Some(20),
        })
        .await
        .expect("Should generate the page");
    assert_eq!(page.items.len(), 5, "last page is short");
    assert_eq!(
        page.pagination,
        Pagination {
            total_items: 25,
            total_pages: 3,
            current_page: 3,
            page_size: 10,
        }
    );
}

#[tokio::test]
async fn mock_source_applies_selection_defaults() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let source = MockSource::<TestEnv>::new();
    let page = source
        .catalog(&PageSelection::default())
        .await
        .expect("Should generate the page");
    assert_eq!(page.items.len(), 10);
    assert_eq!(page.pagination.page_size, 10);
    assert_eq!(page.pagination.current_page, 1);
}

#[tokio::test]
async fn mock_source_is_deterministic() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let source = MockSource::<TestEnv>::new();
    let selection = PageSelection {
        limit: Some(25),
        offset: Some(0),
    };
    let first = source.catalog(&selection).await.unwrap();
    let second = source.catalog(&selection).await.unwrap();
    assert_eq!(first, second, "same clock, same catalog");
    assert_eq!(first.items.len(), 25);
    assert_page_invariants(&first);
}

#[tokio::test]
async fn mock_source_acknowledges_mark_read() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let source = MockSource::<TestEnv>::new();
    assert_eq!(
        source.mark_read("1").await,
        Ok(SuccessResponse::default())
    );
}
