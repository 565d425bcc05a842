//! Menu Header Component
//!
//! Header of the authenticated area: brand, movie search, profile link and
//! logout. Collapses into a slide-in panel on narrow screens.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::LogoutModal;
use crate::context::use_session;

/// `/buscar?query=...` for a trimmed, non-empty term
pub fn search_href(term: &str) -> Option<String> {
    let term = term.trim();
    if term.is_empty() {
        return None;
    }
    let encoded = js_sys::encode_uri_component(term);
    Some(format!("/buscar?query={}", String::from(encoded)))
}

#[component]
pub fn HeaderMenu(#[prop(default = true)] show_search: bool) -> impl IntoView {
    let session = use_session();
    let navigate = use_navigate();

    let (search, set_search) = signal(String::new());
    let (mobile_open, set_mobile_open) = signal(false);
    let logout_open = RwSignal::new(false);

    let on_search = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if let Some(href) = search_href(&search.get()) {
            navigate(&href, Default::default());
            set_search.set(String::new());
            set_mobile_open.set(false);
        }
    };

    let logout = move |_| {
        session.clear();
        logout_open.set(true);
        set_mobile_open.set(false);
    };

    let search_form = move || {
        show_search.then(|| view! {
            <form class="search-form" on:submit=on_search.clone()>
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Buscar filmes..."
                    prop:value=move || search.get()
                    on:input=move |ev| set_search.set(event_target_value(&ev))
                />
            </form>
        })
    };

    view! {
        <header class="menu-header">
            <a href="/menu" class="brand">"Boscov"</a>
            <div class="header-search desktop-only">{search_form()}</div>
            <nav class="header-actions desktop-only">
                <a href="/perfil" class="header-link">"👤 Perfil"</a>
                <button class="header-link" on:click=logout>"🚪 Sair"</button>
            </nav>

            <button
                class="hamburger mobile-only"
                aria-label=move || if mobile_open.get() { "Fechar menu" } else { "Abrir menu" }
                on:click=move |_| set_mobile_open.update(|open| *open = !*open)
            >
                {move || if mobile_open.get() { "✕" } else { "☰" }}
            </button>

            <div class="mobile-panel" class:open=move || mobile_open.get()>
                <button class="mobile-backdrop" aria-label="Fechar menu" on:click=move |_| set_mobile_open.set(false)></button>
                <div class="mobile-drawer">
                    {search_form()}
                    <a href="/perfil" class="header-link" on:click=move |_| set_mobile_open.set(false)>"👤 Perfil"</a>
                    <button class="header-link" on:click=logout>"🚪 Sair"</button>
                </div>
            </div>
        </header>
        <LogoutModal open=logout_open />
    }
}
