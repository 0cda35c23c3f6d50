use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use chrono::{DateTime, Utc};
use futures::Future;
use http::Request;
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

pub use conditional_types::{ConditionalSend, EnvFuture, EnvFutureExt};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EnvError {
    /// Error returned on [`Env::fetch`]
    Fetch(String),
    /// Serde error when serializing or deserializing
    Serde(String),
    StorageUnavailable,
    StorageReadError(String),
    StorageWriteError(String),
    Other(String),
}

impl EnvError {
    pub fn message(&self) -> String {
        match &self {
            EnvError::Fetch(message) => format!("Failed to fetch: {}", message),
            EnvError::Serde(message) => format!("Serialization error: {}", message),
            EnvError::StorageUnavailable => "Storage is not available".to_owned(),
            EnvError::StorageReadError(message) => format!("Storage read error: {}", message),
            EnvError::StorageWriteError(message) => format!("Storage write error: {}", message),
            EnvError::Other(message) => format!("Other error: {}", message),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            EnvError::Fetch(_) => 1,
            EnvError::Serde(_) => 2,
            EnvError::StorageUnavailable => 3,
            EnvError::StorageReadError(_) => 4,
            EnvError::StorageWriteError(_) => 5,
            EnvError::Other(_) => 1001,
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for EnvError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("EnvError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(error: serde_json::Error) -> Self {
        EnvError::Serde(error.to_string())
    }
}

/// Deployment mode of the shell application. Gates the mock data fallback
/// of the notification catalog.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Debug,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum EnvMode {
    Development,
    Production,
}

impl EnvMode {
    /// Parses shell-provided mode strings, anything unrecognized is treated
    /// as production.
    pub fn from_name(name: &str) -> Self {
        EnvMode::from_str(name).unwrap_or(EnvMode::Production)
    }
}

#[cfg(not(feature = "env-future-send"))]
/// Only for wasm or when `env-future-send` is not enabled
mod conditional_types {
    use futures::{future::LocalBoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = LocalBoxFuture<'a, T>;

    pub trait ConditionalSend {}

    impl<T> ConditionalSend for T {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + 'a,
        {
            self.boxed_local()
        }
    }
}

#[cfg(feature = "env-future-send")]
/// Enabled with the feature `env-future-send` but it requires a non-wasm target!
mod conditional_types {
    use futures::{future::BoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = BoxFuture<'a, T>;

    pub trait ConditionalSend: Send {}

    impl<T> ConditionalSend for T where T: Send {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + Send + 'a,
        {
            self.boxed()
        }
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

pub type TryEnvFuture<T> = EnvFuture<'static, Result<T, EnvError>>;

/// Platform capabilities injected into every component of the core. The
/// shell application (web, mobile, tests) provides the single implementation.
pub trait Env {
    /// Performs one HTTP exchange and resolves with the raw response, status
    /// line included. Status interpretation happens in the API client, not
    /// here; only transport failures map to [`EnvError::Fetch`].
    fn fetch<IN: Serialize + ConditionalSend + 'static>(
        request: Request<IN>,
    ) -> TryEnvFuture<http::Response<String>>;
    fn get_storage<T: for<'de> Deserialize<'de> + ConditionalSend + 'static>(
        key: &str,
    ) -> TryEnvFuture<Option<T>>;
    fn set_storage<T: Serialize>(key: &str, value: Option<&T>) -> TryEnvFuture<()>;
    fn now() -> DateTime<Utc>;
    fn sleep(duration: Duration) -> EnvFuture<'static, ()>;
    fn mode() -> EnvMode;
}
