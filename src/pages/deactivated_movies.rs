//! Deactivated Movies Admin Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::Movie;

use crate::api;
use crate::components::{AppShell, DeactivatedMovieCard};
use crate::context::use_notice;

#[component]
pub fn DeactivatedMoviesPage() -> impl IntoView {
    let notice = use_notice();
    let (movies, set_movies) = signal(Vec::<Movie>::new());
    let (loading, set_loading) = signal(true);
    let (reactivating, set_reactivating) = signal(None::<u32>);

    spawn_local(async move {
        match api::list_deactivated_movies().await {
            Ok(list) => set_movies.set(list),
            Err(e) => log::error!("failed to load deactivated movies: {}", e),
        }
        set_loading.set(false);
    });

    let reactivate = move |id: u32| {
        set_reactivating.set(Some(id));
        spawn_local(async move {
            match api::toggle_movie_status(id).await {
                Ok(()) => {
                    set_movies.update(|list| list.retain(|m| m.id != id));
                    notice.success("Filme reativado!");
                }
                Err(e) => {
                    log::error!("reactivating movie {} failed: {}", id, e);
                    notice.error("Erro ao reativar filme.");
                }
            }
            set_reactivating.set(None);
        });
    };

    let content = move || {
        if loading.get() {
            return view! { <div class="muted center">"Carregando filmes desativados..."</div> }.into_any();
        }
        if movies.with(|m| m.is_empty()) {
            return view! { <div class="muted center">"Nenhum filme desativado encontrado."</div> }.into_any();
        }
        view! {
            <div class="movie-grid">
                <For
                    each=move || movies.get()
                    key=|m| m.id
                    children=move |movie| {
                        let id = movie.id;
                        view! {
                            <DeactivatedMovieCard
                                movie=movie
                                reactivating=Signal::derive(move || reactivating.get() == Some(id))
                                on_reactivate=reactivate
                            />
                        }
                    }
                />
            </div>
        }
        .into_any()
    };

    view! {
        <AppShell>
            <h2 class="page-title">"Filmes Desativados"</h2>
            {content}
        </AppShell>
    }
}
