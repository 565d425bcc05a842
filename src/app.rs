//! Boscov Frontend App
//!
//! Provides the shared contexts and wires every page behind the route guard.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use reactive_stores::Store;

use crate::components::{NoticeOverlay, ProtectedRoute};
use crate::context::{NoticeContext, SessionContext};
use crate::pages::{
    DeactivatedMoviesPage, ForbiddenPage, HomePage, LoginPage, MenuPage, MyRatingsPage, NotFoundPage,
    ProfilePage, RegisterPage, SearchPage, UnauthorizedPage, UsersPage,
};
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    // Provide context to all children
    provide_context(SessionContext::load());
    provide_context(NoticeContext::new());
    provide_context(Store::new(AppState::default()));

    view! {
        <Router>
            <ProtectedRoute>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/inicial") view=HomePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/registrar") view=RegisterPage />
                    <Route path=path!("/401") view=UnauthorizedPage />
                    <Route path=path!("/403") view=ForbiddenPage />
                    <Route path=path!("/menu") view=MenuPage />
                    <Route path=path!("/buscar") view=SearchPage />
                    <Route path=path!("/avaliacoes") view=MyRatingsPage />
                    <Route path=path!("/perfil") view=ProfilePage />
                    <Route path=path!("/usuarios") view=UsersPage />
                    <Route path=path!("/filmes") view=DeactivatedMoviesPage />
                </Routes>
            </ProtectedRoute>
            <NoticeOverlay />
        </Router>
    }
}
