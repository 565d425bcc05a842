//! Star Rendering
//!
//! Read-only five-star display and the clickable picker used by the rating
//! modals.

use leptos::prelude::*;

use boscov_core::rating::{format_average, star_fills, StarFill};

fn star_view(fill: StarFill) -> impl IntoView {
    let (class, glyph) = match fill {
        StarFill::Full => ("star full", "★"),
        StarFill::Half => ("star half", "★"),
        StarFill::Empty => ("star empty", "☆"),
    };
    view! { <span class=class>{glyph}</span> }
}

/// Five stars with half-point fill, optionally followed by "4.5 / 5"
#[component]
pub fn Stars(
    #[prop(into)] score: Signal<Option<f64>>,
    #[prop(optional)] show_value: bool,
) -> impl IntoView {
    view! {
        <span class="stars">
            {move || star_fills(score.get()).into_iter().map(star_view).collect_view()}
            <Show when=move || show_value>
                <span class="stars-value">{move || format_average(score.get())}</span>
                <span class="stars-max">"/ 5"</span>
            </Show>
        </span>
    }
}

/// Clickable 1-5 picker; 0 means nothing chosen
#[component]
pub fn StarPicker(
    #[prop(into)] value: Signal<u8>,
    #[prop(into)] on_pick: Callback<u8>,
) -> impl IntoView {
    let (hovered, set_hovered) = signal(0u8);

    view! {
        <div class="star-picker" on:mouseleave=move |_| set_hovered.set(0)>
            {(1..=5u8).map(|star| {
                let lit = move || {
                    let shown = if hovered.get() > 0 { hovered.get() } else { value.get() };
                    star <= shown
                };
                view! {
                    <button
                        type="button"
                        class=move || if lit() { "star-btn lit" } else { "star-btn" }
                        title=format!("{} estrela(s)", star)
                        on:mouseenter=move |_| set_hovered.set(star)
                        on:click=move |_| on_pick.run(star)
                    >
                        {move || if lit() { "★" } else { "☆" }}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
