//! Registration Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use boscov_core::forms::{FieldErrors, RegisterField, RegisterForm};

use crate::api;
use crate::components::Header;
use crate::config::NOTICE_DISMISS_MS;
use crate::context::use_notice;
use crate::pages::labeled_input;

fn read(form: &RegisterForm, field: RegisterField) -> String {
    match field {
        RegisterField::Name => form.name.clone(),
        RegisterField::Email => form.email.clone(),
        RegisterField::Password => form.password.clone(),
        RegisterField::ConfirmPassword => form.confirm_password.clone(),
        RegisterField::BirthDate => form.birth_date.clone(),
        RegisterField::Nickname => form.nickname.clone(),
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let notice = use_notice();
    let navigate = use_navigate();

    let form = RwSignal::new(RegisterForm::default());
    let errors = RwSignal::new(FieldErrors::<RegisterField>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let payload = current.payload();
        let navigate = navigate.clone();
        spawn_local(async move {
            match api::register(&payload).await {
                Ok(()) => {
                    notice.success("Usuário criado com sucesso!");
                    TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                    navigate("/login", Default::default());
                }
                Err(e) => {
                    log::error!("registration failed: {}", e);
                    notice.error("Tente novamente mais tarde.");
                }
            }
        });
    };

    let input = move |field, label, kind| labeled_input(form, errors, field, label, kind, read, RegisterForm::apply);

    view! {
        <main class="auth-page">
            <Header show_login=true />
            <section class="auth-section">
                <form class="auth-form" on:submit=submit>
                    <h2>"Criar conta"</h2>
                    {input(RegisterField::Name, "Nome", "text")}
                    {input(RegisterField::Nickname, "Apelido (opcional)", "text")}
                    {input(RegisterField::Email, "Email", "email")}
                    {input(RegisterField::BirthDate, "Data de nascimento", "date")}
                    {input(RegisterField::Password, "Senha", "password")}
                    {input(RegisterField::ConfirmPassword, "Confirmar senha", "password")}
                    <button type="submit" class="btn primary full">"Registrar"</button>
                </form>
            </section>
        </main>
    }
}
