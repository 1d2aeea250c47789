// Session and account operations.

use campus_types::auth::{AccountInfo, LoginRequest, SignupRequest, UpdateProfileRequest};
use campus_types::validation::{format_errors, SignupValidationInput};

use super::{directory, simulate_latency};
use crate::error::ApiError;

/// Verify credentials against the demo directory.
pub async fn login(request: LoginRequest) -> Result<AccountInfo, ApiError> {
    simulate_latency().await;
    let result = directory::with(|dir| dir.authenticate(&request.email, &request.password));
    match &result {
        Ok(account) => {
            tracing::info!(account_id = %account.id, role = %account.role, "login succeeded")
        }
        Err(_) => tracing::warn!(email = %request.email.trim(), "login rejected"),
    }
    result
}

/// Register a new student or teacher account.
pub async fn signup(request: SignupRequest) -> Result<AccountInfo, ApiError> {
    simulate_latency().await;

    // Same checks the form runs; repeated here because a real backend would.
    let errors = SignupValidationInput {
        name: &request.name,
        email: &request.email,
        password: &request.password,
    }
    .validate();
    if !errors.is_empty() {
        return Err(ApiError::validation(format_errors(&errors)));
    }

    let result = directory::with(|dir| dir.register(&request));
    if let Ok(account) = &result {
        tracing::info!(account_id = %account.id, role = %account.role, "account created");
    }
    result
}

/// Re-validate a persisted account id. Used by session restore on startup,
/// so it skips the latency shim.
pub async fn current_session(account_id: String) -> Option<AccountInfo> {
    directory::with(|dir| dir.account_by_id(&account_id))
}

pub async fn update_profile(
    account_id: String,
    request: UpdateProfileRequest,
) -> Result<AccountInfo, ApiError> {
    simulate_latency().await;
    let result = directory::with(|dir| dir.update_profile(&account_id, &request));
    if result.is_ok() {
        tracing::info!(account_id = %account_id, "profile updated");
    }
    result
}
