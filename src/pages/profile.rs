//! Profile Page
//!
//! Read-only view of the stored user with an edit modal. A successful edit
//! replaces the stored user record and keeps the token.

use leptos::prelude::*;
use leptos::task::spawn_local;

use boscov_core::forms::{FieldErrors, ProfileField, ProfileForm};
use boscov_core::models::format_date_br;
use boscov_core::User;

use crate::api;
use crate::components::AppShell;
use crate::context::{use_notice, use_session};
use crate::pages::labeled_input;

fn read(form: &ProfileForm, field: ProfileField) -> String {
    match field {
        ProfileField::Name => form.name.clone(),
        ProfileField::Nickname => form.nickname.clone(),
        ProfileField::Email => form.email.clone(),
        ProfileField::BirthDate => form.data_nascimento.clone(),
    }
}

#[component]
fn ProfileRow(label: &'static str, value: String) -> impl IntoView {
    view! {
        <div class="profile-row">
            <label>{label}</label>
            <div class="profile-value">{value}</div>
        </div>
    }
}

#[component]
fn EditProfileModal(user: User, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let session = use_session();
    let notice = use_notice();
    let user_id = user.id;
    let form = RwSignal::new(ProfileForm::from_user(&user));
    let errors = RwSignal::new(FieldErrors::<ProfileField>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }
        spawn_local(async move {
            match api::update_user(user_id, &current).await {
                Ok(updated) => {
                    session.set_user(updated);
                    notice.success("Perfil atualizado com sucesso!");
                    on_close.run(());
                }
                Err(e) => {
                    log::error!("profile update failed: {}", e);
                    notice.error("Erro ao atualizar perfil.");
                }
            }
        });
    };

    let input = move |field, label, kind| labeled_input(form, errors, field, label, kind, read, ProfileForm::apply);

    view! {
        <div class="modal-backdrop">
            <form class="modal profile-modal" on:submit=submit>
                <button type="button" class="modal-close" aria-label="Fechar" on:click=move |_| on_close.run(())>"×"</button>
                <h2>"Editar Perfil"</h2>
                {input(ProfileField::Name, "Nome", "text")}
                {input(ProfileField::Nickname, "Apelido", "text")}
                {input(ProfileField::Email, "Email", "email")}
                {input(ProfileField::BirthDate, "Data de Nascimento", "date")}
                <button type="submit" class="btn primary full">"Salvar"</button>
            </form>
        </div>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = use_session();
    let (editing, set_editing) = signal(false);

    view! {
        <AppShell show_search=false>
            {move || match session.user() {
                None => view! { <div class="muted center">"Carregando perfil..."</div> }.into_any(),
                Some(user) => view! {
                    <div class="profile-card">
                        <h2>"Meu Perfil"</h2>
                        <ProfileRow label="Nome" value=user.name.clone() />
                        <ProfileRow label="Apelido" value=user.nickname.clone().unwrap_or_default() />
                        <ProfileRow label="Email" value=user.email.clone() />
                        <ProfileRow label="Data de Nascimento" value=format_date_br(&user.birth_date) />
                        <button class="btn primary full" on:click=move |_| set_editing.set(true)>"Editar Perfil"</button>
                    </div>
                    <Show when=move || editing.get()>
                        {
                            let user = user.clone();
                            view! { <EditProfileModal user=user on_close=move |_: ()| set_editing.set(false) /> }
                        }
                    </Show>
                }.into_any(),
            }}
        </AppShell>
    }
}
