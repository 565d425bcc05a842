//! Rating Modals
//!
//! Create and edit dialogs for a user's rating of one movie. Both close
//! themselves shortly after a successful submit.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::forms::{RatingField, RatingForm, MAX_COMMENT_CHARS};
use boscov_core::{ApiError, Rating};

use crate::api;
use crate::components::StarPicker;
use crate::config::RATING_MODAL_CLOSE_MS;

#[derive(Clone, Copy)]
struct RatingDialog {
    form: RwSignal<RatingForm>,
    error: RwSignal<Option<String>>,
    success: RwSignal<bool>,
    submitting: RwSignal<bool>,
}

impl RatingDialog {
    fn new(form: RatingForm) -> Self {
        Self {
            form: RwSignal::new(form),
            error: RwSignal::new(None),
            success: RwSignal::new(false),
            submitting: RwSignal::new(false),
        }
    }

    /// Validate, send, then close after a short delay
    fn submit<F, Fut>(self, fallback: &'static str, on_saved: Callback<()>, on_close: Callback<()>, send: F)
    where
        F: FnOnce(RatingForm) -> Fut + 'static,
        Fut: std::future::Future<Output = Result<(), ApiError>> + 'static,
    {
        let form = self.form.get_untracked();
        let errors = form.validate();
        if let Some(message) = errors.get(RatingField::Score) {
            self.error.set(Some(message.to_string()));
            return;
        }
        self.error.set(None);
        self.submitting.set(true);

        spawn_local(async move {
            match send(form).await {
                Ok(()) => {
                    self.success.set(true);
                    on_saved.run(());
                    TimeoutFuture::new(RATING_MODAL_CLOSE_MS).await;
                    self.success.set(false);
                    on_close.run(());
                }
                Err(e) => {
                    log::warn!("rating submit failed: {}", e);
                    self.error.set(Some(api::user_message(&e, fallback)));
                }
            }
            self.submitting.set(false);
        });
    }
}

#[component]
fn RatingFields(
    dialog: RatingDialog,
    heading: &'static str,
    submit_label: &'static str,
    success_text: &'static str,
    #[prop(into)] on_submit: Callback<()>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let form = dialog.form;
    let score = Signal::derive(move || form.with(|f| f.score));

    view! {
        <div class="modal-backdrop">
            <form
                class="modal rating-modal"
                on:submit=move |ev: web_sys::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{heading}</h2>
                <StarPicker
                    value=score
                    on_pick=move |star: u8| form.update(|f| f.apply(RatingField::Score, &star.to_string()))
                />
                <textarea
                    placeholder="Deixe um comentário (opcional)"
                    maxlength=MAX_COMMENT_CHARS.to_string()
                    rows="4"
                    prop:value=move || form.with(|f| f.comment.clone())
                    on:input=move |ev| form.update(|f| f.apply(RatingField::Comment, &event_target_value(&ev)))
                ></textarea>
                <div class="char-count">
                    {move || format!("{}/{}", form.with(|f| f.comment.chars().count()), MAX_COMMENT_CHARS)}
                </div>
                {move || dialog.error.get().map(|e| view! { <p class="error-text">{e}</p> })}
                <Show when=move || dialog.success.get()>
                    <p class="success-text">{success_text}</p>
                </Show>
                <div class="modal-actions">
                    <button type="button" class="btn ghost" on:click=move |_| on_close.run(())>
                        "Cancelar"
                    </button>
                    <button
                        type="submit"
                        class="btn primary"
                        disabled=move || dialog.submitting.get() || !form.with(|f| f.can_submit())
                    >
                        {move || if dialog.submitting.get() { "Enviando..." } else { submit_label }}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// New rating for `movie_id` by `user_id`
#[component]
pub fn RatingModal(
    movie_id: u32,
    user_id: u32,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let dialog = RatingDialog::new(RatingForm::default());

    let submit = move |_: ()| {
        dialog.submit("Erro ao enviar avaliação.", on_saved, on_close, move |form| async move {
            api::create_rating(user_id, movie_id, &form).await
        });
    };

    view! {
        <RatingFields
            dialog=dialog
            heading="Avaliar Filme"
            submit_label="Enviar avaliação"
            success_text="Avaliação enviada!"
            on_submit=submit
            on_close=on_close
        />
    }
}

/// Edit an existing rating, pre-filled with its score and comment
#[component]
pub fn EditRatingModal(
    rating: Rating,
    user_id: u32,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_saved: Callback<()>,
) -> impl IntoView {
    let rating_id = rating.id;
    let dialog = RatingDialog::new(RatingForm::from_existing(rating.score, rating.comment.as_deref()));

    let submit = move |_: ()| {
        dialog.submit("Erro ao editar avaliação.", on_saved, on_close, move |form| async move {
            api::update_rating(rating_id, user_id, &form).await
        });
    };

    view! {
        <RatingFields
            dialog=dialog
            heading="Editar Avaliação"
            submit_label="Salvar"
            success_text="Avaliação atualizada!"
            on_submit=submit
            on_close=on_close
        />
    }
}
