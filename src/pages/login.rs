//! Login Page

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use boscov_core::forms::{FieldErrors, LoginField, LoginForm};
use boscov_core::{ApiError, Session};

use crate::api;
use crate::components::Header;
use crate::config::NOTICE_DISMISS_MS;
use crate::context::{use_notice, use_session};
use crate::pages::labeled_input;

fn read(form: &LoginForm, field: LoginField) -> String {
    match field {
        LoginField::Email => form.email.clone(),
        LoginField::Password => form.password.clone(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();
    let notice = use_notice();
    let navigate = use_navigate();

    let form = RwSignal::new(LoginForm::default());
    let errors = RwSignal::new(FieldErrors::<LoginField>::default());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        let found = current.validate();
        if !found.is_empty() {
            errors.set(found);
            return;
        }

        let navigate = navigate.clone();
        spawn_local(async move {
            match api::login(&current).await {
                Ok(auth) => {
                    log::info!("logged in as user {}", auth.user.id);
                    session.set(Session { user: auth.user, token: auth.token });
                    notice.success("Login realizado com sucesso!");
                    TimeoutFuture::new(NOTICE_DISMISS_MS).await;
                    navigate("/menu", Default::default());
                }
                Err(ApiError::Status { status, .. }) => {
                    log::warn!("login rejected with {}", status);
                    notice.error("Email ou senha inválidos.");
                }
                Err(e) => {
                    log::error!("login failed: {}", e);
                    notice.error("Tente novamente mais tarde.");
                }
            }
        });
    };

    view! {
        <main class="auth-page">
            <Header show_register=true />
            <section class="auth-section">
                <form class="auth-form" on:submit=submit>
                    <h2>"Entrar"</h2>
                    {labeled_input(form, errors, LoginField::Email, "Email", "email", read, LoginForm::apply)}
                    {labeled_input(form, errors, LoginField::Password, "Senha", "password", read, LoginForm::apply)}
                    <button type="submit" class="btn primary full">"Entrar"</button>
                </form>
            </section>
        </main>
    }
}
