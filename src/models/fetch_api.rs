use futures::future::Either;
use futures::{future, Future};
use http::header::AUTHORIZATION;
use http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::constants::FETCH_TIMEOUT;
use crate::models::error::ApiError;
use crate::runtime::{ConditionalSend, Env, EnvError};
use crate::types::api::{ErrorResponse, FetchRequestParams};

/// Dispatches one API call: builds the URL, attaches the bearer token,
/// races the transport against the request timeout and normalizes non-2xx
/// statuses into [`ApiError::Http`].
pub fn fetch_api<E, REQ, IN, RESP>(
    api_request: REQ,
) -> impl Future<Output = Result<RESP, ApiError>>
where
    E: Env + 'static,
    REQ: FetchRequestParams<IN>,
    IN: Serialize + ConditionalSend + 'static,
    RESP: DeserializeOwned + ConditionalSend + 'static,
{
    let mut url = api_request
        .endpoint()
        .join(&api_request.path())
        .expect("url builder failed");
    match api_request.query() {
        Some(query) if !query.is_empty() => url.set_query(Some(&query)),
        _ => url.set_query(None),
    };
    let mut request = Request::builder()
        .method(api_request.method())
        .uri(url.as_str());
    if let Some(auth_key) = api_request.auth_key() {
        request = request.header(AUTHORIZATION, format!("Bearer {}", auth_key.0));
    }
    let request = request
        .body(api_request.body())
        .expect("request builder failed");
    tracing::trace!(url = %url, "dispatching API request");
    async move {
        // Whichever side settles first wins, the loser is dropped without
        // being awaited further.
        let response = match future::select(E::fetch(request), E::sleep(FETCH_TIMEOUT)).await {
            Either::Left((result, _)) => result.map_err(ApiError::from)?,
            Either::Right(_) => return Err(ApiError::Timeout),
        };
        let (head, body) = response.into_parts();
        if !head.status.is_success() {
            let message = serde_json::from_str::<ErrorResponse>(&body)
                .map(|error| error.message)
                .unwrap_or_else(|_| {
                    head.status
                        .canonical_reason()
                        .unwrap_or("Unknown error")
                        .to_owned()
                });
            return Err(ApiError::Http {
                status: head.status.as_u16(),
                message,
            });
        }
        serde_json::from_str::<RESP>(&body).map_err(|error| ApiError::from(EnvError::from(error)))
    }
}
