//! Cascading movie removal over HTTP

use async_trait::async_trait;

use boscov_core::cascade::{self, FailurePolicy, MovieRemovalApi};
use boscov_core::{ApiError, CascadeError, CascadeReport, GenreLink, Rating};

/// Binds the removal workflow to the REST endpoints
pub struct HttpMovieRemoval;

#[async_trait(?Send)]
impl MovieRemovalApi for HttpMovieRemoval {
    async fn ratings_for_movie(&self, movie_id: u32) -> Result<Vec<Rating>, ApiError> {
        super::ratings_by_movie(movie_id).await
    }

    async fn genre_links_for_movie(&self, movie_id: u32) -> Result<Vec<GenreLink>, ApiError> {
        super::genre_links_of_movie(movie_id).await
    }

    async fn delete_rating(&self, rating_id: u32) -> Result<(), ApiError> {
        super::delete_rating(rating_id).await
    }

    async fn delete_genre_link(&self, link_id: u32) -> Result<(), ApiError> {
        super::delete_genre_link(link_id).await
    }

    async fn delete_movie(&self, movie_id: u32) -> Result<(), ApiError> {
        super::toggle_movie_status(movie_id).await
    }
}

/// Ratings, then genre links, then the movie; stops at the first failure
pub async fn remove_movie(movie_id: u32) -> Result<CascadeReport, CascadeError> {
    cascade::remove_movie(&HttpMovieRemoval, movie_id, FailurePolicy::AbortOnFirst).await
}
