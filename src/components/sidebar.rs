//! Sidebar Component
//!
//! User badge and navigation for the authenticated area. Admin-only links
//! are rendered only for admins; the route guard still enforces access.

use leptos::prelude::*;

use crate::components::LogoutModal;
use crate::context::use_session;

#[component]
fn SidebarLink(
    href: &'static str,
    icon: &'static str,
    label: &'static str,
    expanded: ReadSignal<bool>,
) -> impl IntoView {
    view! {
        <a href=href class="sidebar-link">
            <span class="sidebar-icon">{icon}</span>
            <span class="sidebar-text" class:hidden=move || !expanded.get()>{label}</span>
        </a>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = use_session();
    // collapsed state only matters on narrow screens; CSS shows text on desktop
    let (expanded, set_expanded) = signal(false);
    let logout_open = RwSignal::new(false);

    let display_name = move || {
        session
            .user()
            .map(|u| u.name)
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| "Usuário".to_string())
    };
    let initial = move || session.user().map(|u| u.initial()).unwrap_or_else(|| "U".to_string());

    view! {
        <Show when=move || expanded.get()>
            <button class="sidebar-overlay mobile-only" aria-label="Fechar menu" on:click=move |_| set_expanded.set(false)></button>
        </Show>
        <aside class="sidebar" class:expanded=move || expanded.get()>
            <button type="button" class="sidebar-user" on:click=move |_| set_expanded.update(|e| *e = !*e)>
                <div class="avatar">{initial}</div>
                <span class="sidebar-user-name">{display_name}</span>
            </button>
            <nav class="sidebar-nav">
                <SidebarLink href="/avaliacoes" icon="🎬" label="Minhas Avaliações" expanded=expanded />
                <SidebarLink href="/perfil" icon="👤" label="Perfil" expanded=expanded />
                <Show when=move || session.is_admin()>
                    <SidebarLink href="/usuarios" icon="🧑‍💼" label="Usuários" expanded=expanded />
                    <SidebarLink href="/filmes" icon="🎞️" label="Filmes Desativados" expanded=expanded />
                </Show>
                <button
                    type="button"
                    class="sidebar-link"
                    on:click=move |_| {
                        session.clear();
                        logout_open.set(true);
                    }
                >
                    <span class="sidebar-icon">"🚪"</span>
                    <span class="sidebar-text" class:hidden=move || !expanded.get()>"Sair"</span>
                </button>
            </nav>
        </aside>
        <LogoutModal open=logout_open />
    }
}
