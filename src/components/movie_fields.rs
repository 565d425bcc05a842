//! Movie Form Fields
//!
//! Inputs shared by the create and edit movie modals, plus the genre
//! checkboxes shown when creating.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::forms::{FieldErrors, MovieField, MovieForm};
use boscov_core::AgeRating;

use crate::api;
use crate::store::{store_set_genres, use_app_store, AppStateStoreFields};

fn field_value(form: &MovieForm, field: MovieField) -> String {
    match field {
        MovieField::Title => form.title.clone(),
        MovieField::Director => form.director.clone(),
        MovieField::ReleaseYear => form.release_year.clone(),
        MovieField::Duration => form.duration.clone(),
        MovieField::Studio => form.studio.clone(),
        MovieField::AgeRating => form.age_rating.as_str().to_string(),
        MovieField::PosterUrl => form.poster_url.clone(),
    }
}

#[component]
fn MovieInput(
    form: RwSignal<MovieForm>,
    errors: RwSignal<FieldErrors<MovieField>>,
    field: MovieField,
    placeholder: &'static str,
    #[prop(default = "text")] kind: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <input
                type=kind
                placeholder=placeholder
                prop:value=move || form.with(|f| field_value(f, field))
                on:input=move |ev| {
                    form.update(|f| f.apply(field, &event_target_value(&ev)));
                    errors.update(|e| e.clear_field(field));
                }
            />
            {move || errors.with(|e| e.get(field)).map(|msg| view! { <p class="field-error">{msg}</p> })}
        </div>
    }
}

#[component]
pub fn MovieFields(
    form: RwSignal<MovieForm>,
    errors: RwSignal<FieldErrors<MovieField>>,
    /// Genre checkboxes; associations are only created for new movies
    #[prop(optional)]
    with_genres: bool,
) -> impl IntoView {
    let store = use_app_store();

    if with_genres && store.genres().with_untracked(|g| g.is_empty()) {
        spawn_local(async move {
            match api::list_genres().await {
                Ok(genres) => store_set_genres(&store, genres),
                Err(e) => log::warn!("failed to load genres: {}", e),
            }
        });
    }

    view! {
        <MovieInput form=form errors=errors field=MovieField::Title placeholder="Nome do filme" />
        <MovieInput form=form errors=errors field=MovieField::Director placeholder="Diretor" />
        <MovieInput form=form errors=errors field=MovieField::ReleaseYear placeholder="Ano de lançamento" kind="number" />
        <MovieInput form=form errors=errors field=MovieField::Duration placeholder="Duração (min)" kind="number" />
        <MovieInput form=form errors=errors field=MovieField::Studio placeholder="Produtora" />
        <div class="form-field">
            <select
                prop:value=move || form.with(|f| f.age_rating.as_str().to_string())
                on:change=move |ev| form.update(|f| f.apply(MovieField::AgeRating, &event_target_value(&ev)))
            >
                {AgeRating::ALL.into_iter().map(|tier| view! {
                    <option value=tier.as_str()>{tier.as_str()}</option>
                }).collect_view()}
            </select>
        </div>
        <MovieInput form=form errors=errors field=MovieField::PosterUrl placeholder="URL do poster" kind="url" />
        <Show when=move || with_genres>
            <fieldset class="genre-list">
                <legend>"Gêneros"</legend>
                <For
                    each=move || store.genres().get()
                    key=|g| g.id
                    children=move |genre| {
                        let id = genre.id;
                        view! {
                            <label class="genre-option">
                                <input
                                    type="checkbox"
                                    prop:checked=move || form.with(|f| f.genre_ids.contains(&id))
                                    on:change=move |ev| form.update(|f| f.set_genre(id, event_target_checked(&ev)))
                                />
                                {genre.description.clone()}
                            </label>
                        }
                    }
                />
            </fieldset>
        </Show>
    }
}
