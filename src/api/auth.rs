//! Authentication and registration

use boscov_core::endpoints::{AUTHENTICATE, USER};
use boscov_core::forms::{LoginForm, RegisterPayload};
use boscov_core::{ApiError, AuthResponse};

use super::{fetch_json, fetch_ok, RequestOptions};

pub async fn login(form: &LoginForm) -> Result<AuthResponse, ApiError> {
    fetch_json(AUTHENTICATE, RequestOptions::post().json(form)?).await
}

pub async fn register(payload: &RegisterPayload) -> Result<(), ApiError> {
    fetch_ok(USER, RequestOptions::post().json(payload)?).await
}
