//! Logout Modal Component
//!
//! Shown after the session was cleared; its only action returns to the
//! landing page.

use leptos::prelude::*;

#[component]
pub fn LogoutModal(open: RwSignal<bool>) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal logout-modal">
                    <p class="logout-text">"Você foi desconectado!"</p>
                    <a href="/" class="btn primary" on:click=move |_| open.set(false)>
                        "Voltar para o início"
                    </a>
                </div>
            </div>
        </Show>
    }
}
