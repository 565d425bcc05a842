//! My Ratings Page
//!
//! Movies the current user rated, each card showing the user's own score.
//! The details modal is filtered to the user's rating and allows editing it.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::{Movie, Rating};

use crate::api;
use crate::components::{AppShell, EditRatingModal, MovieCard, MovieDetails};
use crate::context::use_session;

#[derive(Clone, Debug, PartialEq)]
struct RatedMovie {
    movie: Movie,
    rating: Rating,
}

async fn load_rated(user_id: u32) -> Vec<RatedMovie> {
    let ratings = match api::ratings_by_user(user_id).await {
        Ok(ratings) => ratings,
        Err(e) => {
            log::error!("failed to load ratings of user {}: {}", user_id, e);
            return Vec::new();
        }
    };

    let mut rated = Vec::with_capacity(ratings.len());
    for rating in ratings {
        match api::get_movie(rating.movie_id).await {
            Ok(movie) => rated.push(RatedMovie { movie, rating }),
            Err(e) => log::warn!("skipping rated movie {}: {}", rating.movie_id, e),
        }
    }
    rated
}

#[component]
pub fn MyRatingsPage() -> impl IntoView {
    let session = use_session();
    let (rated, set_rated) = signal(Vec::<RatedMovie>::new());
    let (loading, set_loading) = signal(true);
    let (details_target, set_details_target) = signal(None::<u32>);
    let (editing, set_editing) = signal(None::<Rating>);
    let (refresh, set_refresh) = signal(0u32);

    let reload = move || {
        let Some(user_id) = session.user_id() else {
            set_rated.set(Vec::new());
            set_loading.set(false);
            return;
        };
        set_loading.set(true);
        spawn_local(async move {
            set_rated.set(load_rated(user_id).await);
            set_loading.set(false);
        });
    };
    reload();

    let content = move || {
        if loading.get() {
            return view! { <div class="muted">"Carregando avaliações..."</div> }.into_any();
        }
        if rated.with(|r| r.is_empty()) {
            return view! { <div class="muted center">"Você ainda não avaliou nenhum filme."</div> }.into_any();
        }
        view! {
            <div class="movie-grid">
                <For
                    each=move || rated.get()
                    key=|r| (r.rating.id, r.movie.id)
                    children=move |entry| {
                        let score = entry.rating.score;
                        let own = entry.rating.clone();
                        view! {
                            <MovieCard
                                movie=entry.movie
                                score=Signal::stored(Some(score))
                                on_rate=move |_: Movie| set_editing.set(Some(own.clone()))
                                on_details=move |id: u32| set_details_target.set(Some(id))
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
            <h2 class="page-title">"Minhas Avaliações"</h2>
            {content}

            {move || {
                let user_id = session.user_id()?;
                details_target.get().map(|id| view! {
                    <MovieDetails
                        movie_id=id
                        only_user=Some(user_id)
                        on_edit_rating=Some(Callback::new(move |r: Rating| set_editing.set(Some(r))))
                        refresh=refresh
                        on_close=move |_: ()| {
                            set_details_target.set(None);
                            reload();
                        }
                    />
                })
            }}

            {move || {
                let user_id = session.user_id()?;
                editing.get().map(|rating| view! {
                    <EditRatingModal
                        rating=rating
                        user_id=user_id
                        on_close=move |_: ()| set_editing.set(None)
                        on_saved=move |_: ()| {
                            set_refresh.update(|n| *n += 1);
                            if details_target.get_untracked().is_none() {
                                reload();
                            }
                        }
                    />
                })
            }}
        </AppShell>
    }
}
