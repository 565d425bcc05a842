//! User administration and profile

use boscov_core::endpoints::{self, USERS};
use boscov_core::forms::ProfileForm;
use boscov_core::{ApiError, User};

use super::{fetch_json, fetch_ok, RequestOptions};

/// Admin listing, active and deactivated
pub async fn list_users() -> Result<Vec<User>, ApiError> {
    fetch_json(USERS, RequestOptions::get().authorized()).await
}

/// Returns the updated user as stored by the backend
pub async fn update_user(id: u32, form: &ProfileForm) -> Result<User, ApiError> {
    fetch_json(&endpoints::user(id), RequestOptions::put().authorized().json(form)?).await
}

/// Flips the user's active status
pub async fn toggle_user_status(id: u32) -> Result<(), ApiError> {
    fetch_ok(&endpoints::user_delete(id), RequestOptions::put().authorized()).await
}
