//! Comments List Component
//!
//! Ratings of one movie with author, stars and comment. When filtered to a
//! single user it can offer an edit action on each entry.

use leptos::prelude::*;

use boscov_core::rating::filter_by_user;
use boscov_core::Rating;

use crate::components::Stars;

#[component]
pub fn Comments(
    #[prop(into)] ratings: Signal<Vec<Rating>>,
    #[prop(into)] loading: Signal<bool>,
    #[prop(optional_no_strip)] only_user: Option<u32>,
    #[prop(optional_no_strip)] on_edit: Option<Callback<Rating>>,
) -> impl IntoView {
    let visible = move || match only_user {
        Some(user_id) => filter_by_user(&ratings.get(), user_id),
        None => ratings.get(),
    };

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! { <div class="muted">"Carregando comentários..."</div> }
        >
            <div class="comments">
                <For
                    each=visible
                    key=|r| r.id
                    children=move |rating| {
                        let score = rating.score;
                        let editable = rating.clone();
                        view! {
                            <div class="comment">
                                <div class="comment-head">
                                    <span class="comment-author">{rating.author_name().to_string()}</span>
                                    <span class="comment-stars"><Stars score=Signal::stored(Some(score)) /></span>
                                    {only_user.and(on_edit).map(|on_edit| view! {
                                        <button
                                            class="icon-btn"
                                            title="Editar avaliação"
                                            on:click=move |_| on_edit.run(editable.clone())
                                        >
                                            "✏️"
                                        </button>
                                    })}
                                </div>
                                <div class="comment-body">{rating.comment.clone().unwrap_or_default()}</div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
