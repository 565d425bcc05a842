//! Public Header Component
//!
//! Brand plus login/register links on the pages reachable without a session.

use leptos::prelude::*;

#[component]
pub fn Header(
    #[prop(optional)] show_login: bool,
    #[prop(optional)] show_register: bool,
) -> impl IntoView {
    view! {
        <header class="public-header">
            <a href="/" class="brand">"Boscov"</a>
            <nav class="public-nav">
                <Show when=move || show_login>
                    <a href="/login" class="btn ghost">"Entrar"</a>
                </Show>
                <Show when=move || show_register>
                    <a href="/registrar" class="btn primary">"Registrar"</a>
                </Show>
            </nav>
        </header>
    }
}
