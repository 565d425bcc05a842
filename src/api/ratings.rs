//! Ratings and averages

use boscov_core::endpoints::{self, HEADER_MOVIE_ID, HEADER_USER_ID, RATING};
use boscov_core::forms::RatingForm;
use boscov_core::models::AverageResponse;
use boscov_core::{ApiError, Rating};

use super::{fetch_json, fetch_ok, RequestOptions};

pub async fn ratings_by_user(user_id: u32) -> Result<Vec<Rating>, ApiError> {
    fetch_json(&endpoints::ratings_by_user(user_id), RequestOptions::get().authorized()).await
}

pub async fn ratings_by_movie(movie_id: u32) -> Result<Vec<Rating>, ApiError> {
    fetch_json(&endpoints::ratings_by_movie(movie_id), RequestOptions::get().authorized()).await
}

/// Backend aggregate for one movie
pub async fn average_for_movie(movie_id: u32) -> Result<Option<f64>, ApiError> {
    let body: AverageResponse =
        fetch_json(&endpoints::average_by_movie(movie_id), RequestOptions::get().authorized()).await?;
    Ok(body.average)
}

/// User and movie ids travel as custom headers on this route
pub async fn create_rating(user_id: u32, movie_id: u32, form: &RatingForm) -> Result<(), ApiError> {
    let options = RequestOptions::post()
        .authorized()
        .header(HEADER_USER_ID, user_id.to_string())
        .header(HEADER_MOVIE_ID, movie_id.to_string())
        .json(form)?;
    fetch_ok(RATING, options).await
}

pub async fn update_rating(id: u32, user_id: u32, form: &RatingForm) -> Result<(), ApiError> {
    let options = RequestOptions::put()
        .authorized()
        .header(HEADER_USER_ID, user_id.to_string())
        .json(form)?;
    fetch_ok(&endpoints::rating(id), options).await
}

pub async fn delete_rating(id: u32) -> Result<(), ApiError> {
    fetch_ok(&endpoints::rating_delete(id), RequestOptions::put().authorized()).await
}
