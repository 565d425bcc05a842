//! Catalog Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity over the loaded
//! movie catalog and genre list.

use leptos::prelude::*;
use reactive_stores::Store;

use boscov_core::{Genre, Movie};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Active movies as returned by `GET /filmes`
    pub movies: Vec<Movie>,
    /// All genres, loaded lazily by the movie forms
    pub genres: Vec<Genre>,
    /// Set once the first catalog load finished
    pub movies_loaded: bool,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

pub fn store_set_movies(store: &AppStore, movies: Vec<Movie>) {
    *store.movies().write() = movies;
    *store.movies_loaded().write() = true;
}

/// Update a movie in the store by ID
pub fn store_update_movie(store: &AppStore, updated: Movie) {
    if let Some(movie) = store.movies().write().iter_mut().find(|m| m.id == updated.id) {
        *movie = updated;
    }
}

/// Remove a movie from the store by ID
pub fn store_remove_movie(store: &AppStore, movie_id: u32) {
    store.movies().write().retain(|m| m.id != movie_id);
}

pub fn store_set_genres(store: &AppStore, genres: Vec<Genre>) {
    *store.genres().write() = genres;
}
