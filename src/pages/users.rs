//! Users Admin Page
//!
//! Every account with its status; admins deactivate or reactivate through
//! the same soft-delete toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::models::format_date_br;
use boscov_core::User;

use crate::api;
use crate::components::AppShell;
use crate::context::use_notice;

#[component]
fn StatusBadge(active: bool) -> impl IntoView {
    view! {
        <span class={if active { "badge active" } else { "badge inactive" }}>
            {if active { "Ativo" } else { "Desativado" }}
        </span>
    }
}

#[component]
fn UserCard(
    user: User,
    #[prop(into)] busy: Signal<bool>,
    #[prop(into)] on_toggle: Callback<u32>,
) -> impl IntoView {
    let id = user.id;
    let active = user.is_active();
    let (idle_label, busy_label, class) = if active {
        ("Desativar", "Desativando...", "btn danger")
    } else {
        ("Ativar", "Ativando...", "btn success")
    };

    view! {
        <div class="user-card">
            <div class="user-card-head">
                <div>
                    <div class="user-name">{user.name.clone()}</div>
                    <div class="user-email">{user.email.clone()}</div>
                </div>
                <StatusBadge active=active />
            </div>
            <div class="user-details">
                <div><span class="label">"Apelido: "</span>{user.nickname.clone().unwrap_or_default()}</div>
                <div><span class="label">"Nascimento: "</span>{format_date_br(&user.birth_date)}</div>
                <div><span class="label">"Tipo: "</span>{user.user_type.clone()}</div>
            </div>
            <div class="user-actions">
                <button class=class disabled=move || busy.get() on:click=move |_| on_toggle.run(id)>
                    {move || if busy.get() { busy_label } else { idle_label }}
                </button>
            </div>
        </div>
    }
}

#[component]
pub fn UsersPage() -> impl IntoView {
    let notice = use_notice();
    let (users, set_users) = signal(Vec::<User>::new());
    let (loading, set_loading) = signal(true);
    let (busy_id, set_busy_id) = signal(None::<u32>);

    let load = move || {
        spawn_local(async move {
            match api::list_users().await {
                Ok(list) => set_users.set(list),
                Err(e) => {
                    log::error!("failed to load users: {}", e);
                    set_users.set(Vec::new());
                }
            }
            set_loading.set(false);
        });
    };
    load();

    let toggle = move |id: u32| {
        let was_active = users.with_untracked(|list| list.iter().any(|u| u.id == id && u.is_active()));
        set_busy_id.set(Some(id));
        spawn_local(async move {
            match api::toggle_user_status(id).await {
                Ok(()) => load(),
                Err(e) => {
                    log::error!("status toggle for user {} failed: {}", id, e);
                    notice.error(if was_active { "Erro ao desativar usuário." } else { "Erro ao ativar usuário." });
                }
            }
            set_busy_id.set(None);
        });
    };

    let content = move || {
        if loading.get() {
            return view! { <div class="muted center">"Carregando usuários..."</div> }.into_any();
        }
        if users.with(|u| u.is_empty()) {
            return view! { <div class="muted center">"Nenhum usuário encontrado."</div> }.into_any();
        }
        view! {
            <div class="user-grid">
                <For
                    each=move || users.get()
                    key=|u| (u.id, u.status)
                    children=move |user| {
                        let id = user.id;
                        view! {
                            <UserCard
                                user=user
                                busy=Signal::derive(move || busy_id.get() == Some(id))
                                on_toggle=toggle
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
            <h1 class="page-title">"Usuários do Sistema"</h1>
            {content}
        </AppShell>
    }
}
