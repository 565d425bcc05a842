//! Movie Details Modal
//!
//! Full movie record, the backend aggregate next to the mean of the loaded
//! ratings, and the comments list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::rating::{average, format_average};
use boscov_core::{Movie, Rating};

use crate::api;
use crate::components::Comments;

#[component]
pub fn MovieDetails(
    movie_id: u32,
    #[prop(into)] on_close: Callback<()>,
    /// Show only this user's rating (the "my ratings" view)
    #[prop(optional_no_strip)]
    only_user: Option<u32>,
    #[prop(optional_no_strip)] on_edit_rating: Option<Callback<Rating>>,
    /// Bump to reload ratings after an edit
    #[prop(into, default = Signal::stored(0))]
    refresh: Signal<u32>,
) -> impl IntoView {
    let (movie, set_movie) = signal(None::<Movie>);
    let (loading, set_loading) = signal(true);
    let (backend_average, set_backend_average) = signal(None::<f64>);
    let (ratings, set_ratings) = signal(Vec::<Rating>::new());
    let (loading_comments, set_loading_comments) = signal(true);

    spawn_local(async move {
        match api::get_movie(movie_id).await {
            Ok(mut m) => {
                // fall back to the association route
                if m.genres.is_empty() {
                    match api::genres_of_movie(movie_id).await {
                        Ok(genres) => m.genres = genres.into_iter().map(|g| g.description).collect(),
                        Err(e) => log::warn!("no genres for movie {}: {}", movie_id, e),
                    }
                }
                set_movie.set(Some(m));
            }
            Err(e) => log::error!("failed to load movie {}: {}", movie_id, e),
        }
        // aggregate is optional; a missing one renders as "--"
        match api::average_for_movie(movie_id).await {
            Ok(avg) => set_backend_average.set(avg),
            Err(e) => log::warn!("no average for movie {}: {}", movie_id, e),
        }
        set_loading.set(false);
    });

    Effect::new(move |_| {
        refresh.track();
        set_loading_comments.set(true);
        spawn_local(async move {
            let loaded = api::ratings_by_movie(movie_id).await.unwrap_or_else(|e| {
                log::error!("failed to load ratings for movie {}: {}", movie_id, e);
                Vec::new()
            });
            set_ratings.set(loaded);
            set_loading_comments.set(false);
        });
    });

    let client_average = move || average(&ratings.get());

    view! {
        <div class="modal-backdrop">
            {move || match movie.get() {
                None if loading.get() => view! {
                    <div class="modal">"Carregando detalhes..."</div>
                }.into_any(),
                None => view! {
                    <div class="modal">
                        <p class="error-text">"Não foi possível carregar o filme."</p>
                        <button class="btn" on:click=move |_| on_close.run(())>"Fechar"</button>
                    </div>
                }.into_any(),
                Some(m) => view! {
                    <div class="modal details-modal">
                        <button class="modal-close" aria-label="Fechar" on:click=move |_| on_close.run(())>"✕"</button>
                        <div class="details-main">
                            <div class="details-poster">
                                {if m.poster_url.is_empty() {
                                    view! { <div class="no-image">"Sem imagem"</div> }.into_any()
                                } else {
                                    view! { <img src=m.poster_url.clone() alt=m.title.clone() /> }.into_any()
                                }}
                            </div>
                            <div class="details-info">
                                <h2>{m.title.clone()}</h2>
                                {m.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                                <div><span class="label">"Diretor: "</span>{m.director.clone()}</div>
                                {(!m.genres.is_empty()).then(|| view! {
                                    <div><span class="label">"Gêneros: "</span>{m.genres.join(", ")}</div>
                                })}
                                <div><span class="label">"Ano: "</span>{m.release_year}</div>
                                <div><span class="label">"Duração: "</span>{m.duration_minutes}" min"</div>
                                <div><span class="label">"Produtora: "</span>{m.studio.clone()}</div>
                                <div><span class="label">"Classificação: "</span>{m.age_rating.clone()}</div>
                                <div class="details-average">
                                    <span class="star full">"★"</span>
                                    <span>{move || format_average(backend_average.get())}" / 5"</span>
                                </div>
                                <div class="details-average secondary">
                                    <span class="label">"Média dos comentários: "</span>
                                    <span>{move || format_average(client_average())}</span>
                                </div>
                            </div>
                        </div>
                        <Comments
                            ratings=ratings
                            loading=loading_comments
                            only_user=only_user
                            on_edit=on_edit_rating
                        />
                    </div>
                }.into_any(),
            }}
        </div>
    }
}
