use std::marker::PhantomData;

use crate::constants::{
    AUTHENTICATED_STORAGE_KEY, MOCK_AUTH_KEY, TEST_ACCOUNT_EMAIL, TEST_ACCOUNT_PASSWORD,
    USER_STORAGE_KEY,
};
use crate::models::error::AuthError;
use crate::runtime::Env;
use crate::types::profile::{AuthKey, User};

/// Mocked authentication backed by the persisted session record. Validates
/// against a single fixed credential pair instead of an identity provider.
///
/// Two states only, signed-out and signed-in; [`AuthStore::sign_in`] success
/// and [`AuthStore::sign_out`] are the only transitions.
pub struct AuthStore<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env + 'static> AuthStore<E> {
    pub async fn sign_in(email: &str, password: &str) -> Result<User, AuthError> {
        if email != TEST_ACCOUNT_EMAIL || password != TEST_ACCOUNT_PASSWORD {
            return Err(AuthError::NotAuthorized);
        }
        let user = User {
            id: TEST_ACCOUNT_EMAIL.to_owned(),
            email: TEST_ACCOUNT_EMAIL.to_owned(),
            verified: true,
        };
        E::set_storage(AUTHENTICATED_STORAGE_KEY, Some(&true)).await?;
        E::set_storage(USER_STORAGE_KEY, Some(&user)).await?;
        Ok(user)
    }

    pub async fn current_user() -> Result<User, AuthError> {
        let authenticated = E::get_storage::<bool>(AUTHENTICATED_STORAGE_KEY).await?;
        let user = E::get_storage::<User>(USER_STORAGE_KEY).await?;
        match (authenticated, user) {
            (Some(true), Some(user)) => Ok(user),
            _ => Err(AuthError::NotAuthenticated),
        }
    }

    /// Bearer token for API calls. The mock layer issues a fixed key, valid
    /// exactly as long as a session exists.
    pub async fn auth_key() -> Result<AuthKey, AuthError> {
        Self::current_user().await?;
        Ok(AuthKey(MOCK_AUTH_KEY.to_owned()))
    }

    /// Clears the session unconditionally; signing out twice is fine.
    pub async fn sign_out() -> Result<(), AuthError> {
        E::set_storage::<()>(AUTHENTICATED_STORAGE_KEY, None).await?;
        E::set_storage::<()>(USER_STORAGE_KEY, None).await?;
        Ok(())
    }
}
