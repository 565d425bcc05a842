//! Movie Card Components
//!
//! Poster card for the catalog (with stars and actions) and the variant used
//! on the deactivated-movies page.

use leptos::prelude::*;

use boscov_core::Movie;

use crate::components::{DeleteConfirmButton, Stars};

#[component]
pub fn MovieCard(
    movie: Movie,
    /// Score shown under the title; the backend average unless overridden
    #[prop(optional, into)]
    score: Option<Signal<Option<f64>>>,
    #[prop(into)] on_rate: Callback<Movie>,
    #[prop(into)] on_details: Callback<u32>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Movie>>,
    #[prop(optional_no_strip)] on_remove: Option<Callback<u32>>,
    #[prop(into, default = Signal::stored(false))] removing: Signal<bool>,
) -> impl IntoView {
    let id = movie.id;
    let average = movie.average_rating;
    let score = score.unwrap_or_else(|| Signal::stored(average));
    let rate_target = movie.clone();
    let edit_target = movie.clone();

    view! {
        <div class="movie-card">
            <div class="poster">
                <img src=movie.poster_url.clone() alt=movie.title.clone() loading="lazy" />
            </div>
            <h2 class="movie-title">{movie.title.clone()}</h2>
            <div class="movie-score">
                <Stars score=score show_value=true />
            </div>
            <div class="card-actions">
                <button class="card-btn" on:click=move |_| on_rate.run(rate_target.clone())>
                    "✎ Avaliar"
                </button>
                <button class="card-btn outline" on:click=move |_| on_details.run(id)>
                    "👁 Detalhes"
                </button>
            </div>
            {(on_edit.is_some() || on_remove.is_some()).then(|| view! {
                <div class="card-actions admin">
                    {on_edit.map(|on_edit| view! {
                        <button class="card-btn" on:click=move |_| on_edit.run(edit_target.clone())>
                            "Editar"
                        </button>
                    })}
                    {on_remove.map(|on_remove| view! {
                        <DeleteConfirmButton
                            button_class="card-btn danger"
                            label="Desativar"
                            busy_label="Desativando..."
                            busy=removing
                            on_confirm=move |_: ()| on_remove.run(id)
                        />
                    })}
                </div>
            })}
        </div>
    }
}

#[component]
pub fn DeactivatedMovieCard(
    movie: Movie,
    #[prop(into)] reactivating: Signal<bool>,
    #[prop(into)] on_reactivate: Callback<u32>,
) -> impl IntoView {
    let id = movie.id;

    view! {
        <div class="movie-card deactivated">
            <div class="poster">
                <img src=movie.poster_url.clone() alt=movie.title.clone() loading="lazy" />
            </div>
            <h2 class="movie-title">{movie.title.clone()}</h2>
            <button
                class="card-btn success"
                disabled=move || reactivating.get()
                on:click=move |_| on_reactivate.run(id)
            >
                {move || if reactivating.get() { "Reativando..." } else { "Reativar" }}
            </button>
        </div>
    }
}
