//! Notice Overlay Component
//!
//! Renders the current success/error notice from `NoticeContext`.

use leptos::prelude::*;

use crate::context::{use_notice, NoticeKind};

#[component]
pub fn NoticeOverlay() -> impl IntoView {
    let notice = use_notice();

    view! {
        {move || notice.current.get().map(|n| {
            let class = match n.kind {
                NoticeKind::Success => "notice success",
                NoticeKind::Error => "notice error",
            };
            view! {
                <div class="notice-backdrop" on:click=move |_| notice.dismiss()>
                    <div class=class>
                        <p>{n.message}</p>
                    </div>
                </div>
            }
        })}
    }
}
