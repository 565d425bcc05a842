//! Movie Admin Modals
//!
//! Create (with genre associations) and edit (changed fields only).

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::forms::{FieldErrors, MovieField, MovieForm, NO_CHANGES};
use boscov_core::{link_genres, partial_link_message, Movie};

use crate::api;
use crate::components::MovieFields;
use crate::context::use_notice;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn CreateMovieModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_created: Callback<()>,
) -> impl IntoView {
    let notice = use_notice();
    let store = use_app_store();
    let form = RwSignal::new(MovieForm::default());
    let errors = RwSignal::new(FieldErrors::<MovieField>::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let payload = match current.payload() {
            Ok(payload) => payload,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        error.set(None);
        submitting.set(true);

        spawn_local(async move {
            match api::create_movie(&payload).await {
                Ok(created) => {
                    let report = link_genres(created.id, &current.genre_ids, api::link_genre).await;
                    on_created.run(());
                    let describe = |id: u32| {
                        store
                            .genres()
                            .get_untracked()
                            .into_iter()
                            .find(|g| g.id == id)
                            .map(|g| g.description)
                    };
                    match partial_link_message(&report, describe) {
                        Some(message) => {
                            // the movie exists now; keep the dialog open with the partial result
                            form.set(MovieForm::default());
                            error.set(Some(message.clone()));
                            notice.error(message);
                        }
                        None => {
                            form.set(MovieForm::default());
                            notice.success("Filme criado com sucesso!");
                            on_close.run(());
                        }
                    }
                }
                Err(e) => {
                    log::error!("create movie failed: {}", e);
                    error.set(Some(api::user_message(&e, "Erro ao criar filme")));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal movie-modal">
                <h2>"Criar novo filme"</h2>
                <form class="movie-form" on:submit=submit>
                    <MovieFields form=form errors=errors with_genres=true />
                    {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn ghost" on:click=move |_| on_close.run(())>"Cancelar"</button>
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Salvando..." } else { "Criar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

#[component]
pub fn EditMovieModal(
    movie: Movie,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let notice = use_notice();
    let form = RwSignal::new(MovieForm::from_movie(&movie));
    let errors = RwSignal::new(FieldErrors::<MovieField>::default());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);
    let original = StoredValue::new(movie);

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let update = match original.with_value(|m| form.with_untracked(|f| f.diff(m))) {
            Ok(update) => update,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };
        if update.is_empty() {
            error.set(Some(NO_CHANGES.to_string()));
            return;
        }
        error.set(None);
        submitting.set(true);
        let id = original.with_value(|m| m.id);

        spawn_local(async move {
            match api::update_movie(id, &update).await {
                Ok(()) => {
                    notice.success("Filme atualizado!");
                    on_saved.run(());
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("update movie {} failed: {}", id, e);
                    error.set(Some(api::user_message(&e, "Erro ao editar filme")));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal movie-modal">
                <h2>"Editar filme"</h2>
                <form class="movie-form" on:submit=submit>
                    <MovieFields form=form errors=errors />
                    {move || error.get().map(|e| view! { <p class="error-text">{e}</p> })}
                    <div class="modal-actions">
                        <button type="button" class="btn ghost" on:click=move |_| on_close.run(())>"Cancelar"</button>
                        <button type="submit" class="btn primary" disabled=move || submitting.get()>
                            {move || if submitting.get() { "Salvando..." } else { "Salvar" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
