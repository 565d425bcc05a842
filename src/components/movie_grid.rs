//! Movie Grid Component
//!
//! Card grid shared by the catalog and search pages. Owns the modals the
//! cards open: rate, details and, for admins, edit and removal.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::{CascadeError, Movie};

use crate::api;
use crate::components::{EditMovieModal, MovieCard, MovieDetails, RatingModal};
use crate::context::{use_notice, use_session};
use crate::store::{store_remove_movie, store_set_movies, store_update_movie, use_app_store, AppStateStoreFields, AppStore};

/// Replace the catalog in the store with a fresh `GET /filmes`
pub async fn load_catalog(store: AppStore) {
    match api::list_movies().await {
        Ok(movies) => store_set_movies(&store, movies),
        Err(e) => {
            log::error!("failed to load movies: {}", e);
            store_set_movies(&store, Vec::new());
        }
    }
}

#[component]
pub fn MovieGrid(
    #[prop(into)] movies: Signal<Vec<Movie>>,
    #[prop(into, default = "Nenhum filme encontrado.")] empty_text: &'static str,
) -> impl IntoView {
    let session = use_session();
    let notice = use_notice();
    let store = use_app_store();

    let (rating_target, set_rating_target) = signal(None::<Movie>);
    let (details_target, set_details_target) = signal(None::<u32>);
    let (edit_target, set_edit_target) = signal(None::<Movie>);
    let (removing, set_removing) = signal(None::<u32>);

    let reload = move || spawn_local(load_catalog(store));

    // new rating changes the backend aggregate shown on the card
    let refresh_average = move |movie_id: u32| {
        spawn_local(async move {
            match api::average_for_movie(movie_id).await {
                Ok(average) => {
                    let current = store.movies().with_untracked(|movies| movies.iter().find(|m| m.id == movie_id).cloned());
                    if let Some(mut movie) = current {
                        movie.average_rating = average;
                        store_update_movie(&store, movie);
                    }
                }
                Err(e) => log::warn!("could not refresh average of movie {}: {}", movie_id, e),
            }
        });
    };

    let remove = move |movie_id: u32| {
        set_removing.set(Some(movie_id));
        spawn_local(async move {
            match api::remove_movie(movie_id).await {
                Ok(report) => {
                    log::info!("movie {} removed in {} steps", movie_id, report.completed.len());
                    store_remove_movie(&store, movie_id);
                    notice.success("Filme desativado!");
                }
                Err(CascadeError::Fetch { source, .. }) => {
                    log::error!("could not prepare removal of movie {}: {}", movie_id, source);
                    notice.error("Erro ao remover filme.");
                }
                Err(CascadeError::Partial { report }) => {
                    log::error!(
                        "removal of movie {} stopped after {} of {} steps",
                        movie_id,
                        report.completed.len(),
                        report.planned
                    );
                    notice.error("Erro ao remover filme.");
                    load_catalog(store).await;
                }
            }
            set_removing.set(None);
        });
    };

    view! {
        <Show
            when=move || !movies.with(|m| m.is_empty())
            fallback=move || view! { <div class="muted center">{empty_text}</div> }
        >
            <div class="movie-grid">
                <For
                    each=move || movies.get()
                    key=|m| m.id
                    children=move |movie| {
                        let id = movie.id;
                        let admin = session.is_admin();
                        view! {
                            <MovieCard
                                movie=movie
                                on_rate=move |m: Movie| set_rating_target.set(Some(m))
                                on_details=move |id: u32| set_details_target.set(Some(id))
                                on_edit=admin.then(|| Callback::new(move |m: Movie| set_edit_target.set(Some(m))))
                                on_remove=admin.then(|| Callback::new(remove))
                                removing=Signal::derive(move || removing.get() == Some(id))
                            />
                        }
                    }
                />
            </div>
        </Show>

        {move || {
            let user_id = session.user_id()?;
            rating_target.get().map(|movie| {
                let movie_id = movie.id;
                view! {
                    <RatingModal
                        movie_id=movie_id
                        user_id=user_id
                        on_close=move |_: ()| set_rating_target.set(None)
                        on_saved=move |_: ()| refresh_average(movie_id)
                    />
                }
            })
        }}

        {move || details_target.get().map(|id| view! {
            <MovieDetails movie_id=id on_close=move |_: ()| set_details_target.set(None) />
        })}

        {move || edit_target.get().map(|movie| view! {
            <EditMovieModal
                movie=movie
                on_close=move |_: ()| set_edit_target.set(None)
                on_saved=move |_: ()| reload()
            />
        })}
    }
}
