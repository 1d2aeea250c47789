use campus_types::auth::{AccountInfo, LoginRequest, SignupRequest, UpdateProfileRequest};
use campus_types::roles::Role;
use dioxus::prelude::*;

use crate::app::api;
use crate::app::cart;
use crate::app::storage::BrowserStorage;
use crate::error::ApiError;

/// localStorage key holding the signed-in account between visits.
pub(crate) const SESSION_KEY: &str = "campus-session";

/// Authentication state
#[derive(Clone, PartialEq, Debug)]
pub struct AuthState {
    pub account: Option<AccountInfo>,
    /// True until the one-time restore from storage has settled. Guarded
    /// routes wait on this instead of bouncing a returning visitor to login.
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { account: None, loading: true }
    }
}

impl AuthState {
    /// The settled anonymous state. Logout overwrites with this
    /// unconditionally, whatever came before.
    pub(crate) fn signed_out() -> Self {
        Self { account: None, loading: false }
    }
}

/// Session store shared through context. Copy, so event handlers can grab
/// it without cloning.
#[derive(Clone, Copy)]
pub struct AuthContext {
    state: Signal<AuthState>,
}

impl AuthContext {
    pub fn state(&self) -> Signal<AuthState> {
        self.state
    }

    /// Snapshot of the signed-in account, if any.
    pub fn account(&self) -> Option<AccountInfo> {
        self.state.read().account.clone()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.read().account.as_ref().map(|a| a.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read().account.is_some()
    }

    fn storage() -> BrowserStorage {
        BrowserStorage::local()
    }

    /// Verify credentials and activate the session.
    pub async fn login(&self, request: LoginRequest) -> Result<AccountInfo, ApiError> {
        let account = api::auth::login(request).await?;
        self.activate(account.clone());
        Ok(account)
    }

    /// Create an account and sign straight in.
    pub async fn signup(&self, request: SignupRequest) -> Result<AccountInfo, ApiError> {
        let account = api::auth::signup(request).await?;
        self.activate(account.clone());
        Ok(account)
    }

    pub async fn update_profile(&self, request: UpdateProfileRequest) -> Result<AccountInfo, ApiError> {
        let Some(current) = self.account() else {
            return Err(ApiError::Unauthorized);
        };
        let account = api::auth::update_profile(current.id, request).await?;
        self.activate(account.clone());
        Ok(account)
    }

    /// Drop the session and the cart keyed to it. Safe to call with nobody
    /// signed in.
    pub fn logout(&self) {
        let storage = Self::storage();
        if let Some(account) = self.account() {
            let _ = storage.remove(&cart::cart_storage_key(&account.id));
            tracing::info!(account_id = %account.id, "logged out");
        }
        let _ = storage.remove(SESSION_KEY);
        let mut state = self.state;
        state.set(AuthState::signed_out());
    }

    /// Make `account` the signed-in session and persist it for restore.
    fn activate(&self, account: AccountInfo) {
        let _ = Self::storage().set_json(SESSION_KEY, &account);
        let mut state = self.state;
        state.set(AuthState {
            account: Some(account),
            loading: false,
        });
    }

    fn finish_restore(&self) {
        let mut state = self.state;
        state.set(AuthState::signed_out());
    }
}

/// Install the session store and kick off the one-time restore from storage.
pub fn use_auth_provider() -> AuthContext {
    let state = use_signal(AuthState::default);
    let context = AuthContext { state };
    use_context_provider(|| context);

    // Restore the persisted session on mount. The stored account is
    // re-validated against the directory rather than trusted as-is.
    use_effect(move || {
        spawn(async move {
            let stored: Option<AccountInfo> = AuthContext::storage().get_json(SESSION_KEY);
            match stored {
                Some(account) => match api::auth::current_session(account.id).await {
                    Some(current) => {
                        tracing::debug!(account_id = %current.id, "session restored");
                        context.activate(current);
                    }
                    None => {
                        let _ = AuthContext::storage().remove(SESSION_KEY);
                        context.finish_restore();
                    }
                },
                None => context.finish_restore(),
            }
        });
    });

    context
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_is_anonymous_and_still_loading() {
        let state = AuthState::default();
        assert!(state.account.is_none());
        assert!(state.loading);
    }

    #[test]
    fn test_signing_out_lands_on_the_same_state_from_anywhere() {
        // logout() does not read the prior state, so a second logout or a
        // logout with nobody signed in is the same write.
        let settled = AuthState::signed_out();
        assert!(settled.account.is_none());
        assert!(!settled.loading);
        assert_eq!(AuthState::signed_out(), settled);
    }
}
