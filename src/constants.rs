use lazy_static::lazy_static;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC};
use std::time::Duration;
use url::Url;

pub const AUTHENTICATED_STORAGE_KEY: &str = "authenticated";
pub const USER_STORAGE_KEY: &str = "user";
pub const NOTIFICATIONS_ENDPOINT: &str = "notifications";
pub const CATALOG_PAGE_SIZE: u32 = 10;
pub const MOCK_CATALOG_SIZE: u32 = 25;
pub const FETCH_TIMEOUT: Duration = Duration::from_secs(10);
/// The single credential pair accepted by the mocked auth layer.
pub const TEST_ACCOUNT_EMAIL: &str = "testuser@example.com";
pub const TEST_ACCOUNT_PASSWORD: &str = "TestP@ssw0rd123";
/// Bearer token issued by the mocked auth layer while a session exists.
pub const MOCK_AUTH_KEY: &str = "12345-abcde-67890-fghij";
pub const URI_COMPONENT_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

lazy_static! {
    // Trailing slash matters, paths are joined onto it.
    pub static ref API_URL: Url =
        Url::parse("https://m97gq044y3.execute-api.eu-central-1.amazonaws.com/prod/")
            .expect("API_URL parse failed");
}
