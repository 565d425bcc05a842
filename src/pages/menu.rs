//! Catalog Page
//!
//! Active movies with their backend averages. Admins additionally get the
//! create button and per-card edit/remove actions.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{load_catalog, AppShell, CreateMovieModal, MovieGrid};
use crate::context::use_session;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn MenuPage() -> impl IntoView {
    let session = use_session();
    let store = use_app_store();
    let (creating, set_creating) = signal(false);

    spawn_local(load_catalog(store));

    view! {
        <AppShell>
            <h1 class="page-title">"Descubra e avalie filmes!"</h1>
            <Show when=move || session.is_admin()>
                <div class="page-actions">
                    <button class="btn primary" on:click=move |_| set_creating.set(true)>"+ Novo filme"</button>
                </div>
            </Show>
            <Show
                when=move || store.movies_loaded().get()
                fallback=|| view! { <div class="muted">"Carregando filmes..."</div> }
            >
                <MovieGrid movies=Signal::derive(move || store.movies().get()) />
            </Show>
            <Show when=move || creating.get()>
                <CreateMovieModal
                    on_close=move |_: ()| set_creating.set(false)
                    on_created=move |_: ()| spawn_local(load_catalog(store))
                />
            </Show>
        </AppShell>
    }
}
