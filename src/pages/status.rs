//! Status Pages
//!
//! Targets of the route guard's redirects, plus the router fallback.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="status-card">
                <span class="status-icon">"🔒"</span>
                <h1>"401 - Não autenticado"</h1>
                <p>"Você precisa estar autenticado para acessar esta área."<br />"Faça login para continuar."</p>
                <div class="status-actions">
                    <a href="/login" class="btn success">"Ir para o Login"</a>
                    <a href="/inicial" class="btn">"Voltar para Inicial"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn ForbiddenPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="status-card">
                <span class="status-icon">"⛔"</span>
                <h1>"403 - Acesso proibido"</h1>
                <p>"Você não tem permissão para acessar esta área."<br />"Apenas administradores podem visualizar esta página."</p>
                <div class="status-actions">
                    <a href="/menu" class="btn">"Voltar para o Menu"</a>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="status-page">
            <div class="status-card">
                <span class="status-icon">"🧭"</span>
                <h1>"404 - Página não encontrada"</h1>
                <p>
                    "Parece que você está tão " <strong>"perdido"</strong> " quanto os personagens de "
                    <strong>"Lost"</strong> "!"
                </p>
                <p>"Essa página não existe ou foi movida para uma ilha misteriosa."</p>
                <a href="/menu" class="btn success">"Voltar para o Menu"</a>
            </div>
        </div>
    }
}
