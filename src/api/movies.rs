//! Movie catalog and admin operations

use boscov_core::endpoints::{self, DEACTIVATED_MOVIES, MOVIE, MOVIES};
use boscov_core::forms::{MoviePayload, MovieUpdate};
use boscov_core::{ApiError, Movie};

use super::{fetch_json, fetch_ok, RequestOptions};

pub async fn list_movies() -> Result<Vec<Movie>, ApiError> {
    fetch_json(MOVIES, RequestOptions::get().authorized()).await
}

pub async fn get_movie(id: u32) -> Result<Movie, ApiError> {
    fetch_json(&endpoints::movie(id), RequestOptions::get().authorized()).await
}

pub async fn list_deactivated_movies() -> Result<Vec<Movie>, ApiError> {
    fetch_json(DEACTIVATED_MOVIES, RequestOptions::get().authorized()).await
}

/// Returns the created movie (with its new id)
pub async fn create_movie(payload: &MoviePayload) -> Result<Movie, ApiError> {
    fetch_json(MOVIE, RequestOptions::post().authorized().json(payload)?).await
}

pub async fn update_movie(id: u32, update: &MovieUpdate) -> Result<(), ApiError> {
    fetch_ok(&endpoints::movie(id), RequestOptions::put().authorized().json(update)?).await
}

/// Soft-delete toggle: deactivates an active movie, reactivates a deactivated one
pub async fn toggle_movie_status(id: u32) -> Result<(), ApiError> {
    fetch_ok(&endpoints::movie_delete(id), RequestOptions::put().authorized()).await
}
