//! Genres and movie-genre associations

use boscov_core::endpoints::{self, GENRES, GENRE_LINK, HEADER_GENRE_ID, HEADER_MOVIE_ID};
use boscov_core::{ApiError, Genre, GenreLink};

use super::{fetch_json, fetch_ok, RequestOptions};

pub async fn list_genres() -> Result<Vec<Genre>, ApiError> {
    fetch_json(GENRES, RequestOptions::get().authorized()).await
}

/// Creates one association row; ids travel as headers
pub async fn link_genre(movie_id: u32, genre_id: u32) -> Result<(), ApiError> {
    let options = RequestOptions::post()
        .authorized()
        .header(HEADER_GENRE_ID, genre_id.to_string())
        .header(HEADER_MOVIE_ID, movie_id.to_string());
    fetch_ok(GENRE_LINK, options).await
}

pub async fn genres_of_movie(movie_id: u32) -> Result<Vec<Genre>, ApiError> {
    fetch_json(&endpoints::genres_by_movie(movie_id), RequestOptions::get().authorized()).await
}

pub async fn genre_links_of_movie(movie_id: u32) -> Result<Vec<GenreLink>, ApiError> {
    fetch_json(&endpoints::genre_links_by_movie(movie_id), RequestOptions::get().authorized()).await
}

pub async fn delete_genre_link(id: u32) -> Result<(), ApiError> {
    fetch_ok(&endpoints::genre_link_delete(id), RequestOptions::put().authorized()).await
}
