//! Search Page
//!
//! `/buscar?query=...`: case-insensitive title match over the loaded
//! catalog.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_query_map;

use boscov_core::Movie;

use crate::components::{load_catalog, AppShell, MovieGrid};
use crate::store::{use_app_store, AppStateStoreFields};

/// Movies whose title contains `query`, ignoring case; empty query matches nothing
pub fn filter_by_title(movies: &[Movie], query: &str) -> Vec<Movie> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    movies
        .iter()
        .filter(|m| m.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

#[component]
pub fn SearchPage() -> impl IntoView {
    let store = use_app_store();
    let query_map = use_query_map();
    let query = move || query_map.with(|q| q.get("query").unwrap_or_default());

    if !store.movies_loaded().get_untracked() {
        spawn_local(load_catalog(store));
    }

    let results = Signal::derive(move || store.movies().with(|movies| filter_by_title(movies, &query())));

    view! {
        <AppShell>
            <h1 class="page-title">{move || format!("Resultados para \"{}\"", query())}</h1>
            <Show
                when=move || store.movies_loaded().get()
                fallback=|| view! { <div class="muted">"Carregando filmes..."</div> }
            >
                <MovieGrid movies=results empty_text="Nenhum filme corresponde à busca." />
            </Show>
        </AppShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn movie(id: u32, title: &str) -> Movie {
        Movie { id, title: title.to_string(), ..Default::default() }
    }

    #[test]
    fn test_filter_by_title_ignores_case() {
        let movies = vec![movie(1, "O Poderoso Chefão"), movie(2, "Cidade de Deus"), movie(3, "Chef")];
        let found: Vec<u32> = filter_by_title(&movies, "  CHEF ").iter().map(|m| m.id).collect();
        assert_eq!(found, vec![1, 3]);
    }

    #[test]
    fn test_filter_by_title_empty_query() {
        let movies = vec![movie(1, "Matrix")];
        assert!(filter_by_title(&movies, "   ").is_empty());
    }
}
