//! Landing Page

use leptos::prelude::*;

use crate::components::Header;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="landing">
            <Header show_login=true show_register=true />
            <section class="hero">
                <h1>"Avalie filmes de forma simples e rápida"</h1>
                <p>"Descubra, avalie e compartilhe opiniões sobre seus filmes favoritos."</p>
                <div class="hero-actions">
                    <a href="/login" class="btn primary">"Entrar"</a>
                    <a href="/registrar" class="btn outline">"Registrar"</a>
                </div>
            </section>
        </main>
    }
}
