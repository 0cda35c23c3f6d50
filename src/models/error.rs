use core::fmt;

use serde::ser::{SerializeStruct, Serializer};
use serde::Serialize;

use crate::constants::FETCH_TIMEOUT;
use crate::runtime::EnvError;

/// Session layer failures.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AuthError {
    /// Credentials do not match the fixed test account.
    NotAuthorized,
    /// No persisted session.
    NotAuthenticated,
    Env(EnvError),
}

impl AuthError {
    pub fn message(&self) -> String {
        match &self {
            AuthError::NotAuthorized => "Incorrect username or password".to_owned(),
            AuthError::NotAuthenticated => "User is not authenticated".to_owned(),
            AuthError::Env(error) => error.message(),
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            AuthError::NotAuthorized => 1,
            AuthError::NotAuthenticated => 2,
            AuthError::Env(error) => error.code(),
        }
    }
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for AuthError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("AuthError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<EnvError> for AuthError {
    fn from(error: EnvError) -> Self {
        AuthError::Env(error)
    }
}

/// Failures of a single API call, normalized from whatever the transport
/// produced.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ApiError {
    /// An authenticated call was attempted without a session.
    Auth(AuthError),
    /// Transport or (de)serialization failure.
    Env(EnvError),
    /// The request did not settle within [`FETCH_TIMEOUT`].
    Timeout,
    /// The API answered with a non-2xx status.
    Http { status: u16, message: String },
}

impl ApiError {
    pub fn message(&self) -> String {
        match &self {
            ApiError::Auth(error) => error.message(),
            ApiError::Env(error) => error.message(),
            ApiError::Timeout => {
                format!("Request timeout after {}s", FETCH_TIMEOUT.as_secs())
            }
            ApiError::Http { status, message } => {
                format!("API request failed with status {}: {}", status, message)
            }
        }
    }
    pub fn code(&self) -> u64 {
        match &self {
            ApiError::Auth(error) => error.code(),
            ApiError::Env(error) => error.code(),
            ApiError::Timeout => 100,
            ApiError::Http { status, .. } => u64::from(*status),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl Serialize for ApiError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ApiError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<AuthError> for ApiError {
    fn from(error: AuthError) -> Self {
        ApiError::Auth(error)
    }
}

impl From<EnvError> for ApiError {
    fn from(error: EnvError) -> Self {
        ApiError::Env(error)
    }
}

/// Notification domain errors surfaced to the presentation layer, which owns
/// the user-visible messaging.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
#[serde(tag = "type")]
pub enum NotificationsError {
    Fetch(ApiError),
    MarkRead(ApiError),
}

impl NotificationsError {
    pub fn message(&self) -> String {
        match &self {
            NotificationsError::Fetch(error) => {
                format!("Failed to fetch notifications: {}", error.message())
            }
            NotificationsError::MarkRead(error) => {
                format!("Failed to mark notification as read: {}", error.message())
            }
        }
    }
}

impl fmt::Display for NotificationsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}
