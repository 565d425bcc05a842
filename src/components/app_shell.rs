//! Authenticated Layout
//!
//! Menu header on top, sidebar on the left, page content in the middle.

use leptos::prelude::*;

use crate::components::{HeaderMenu, Sidebar};

#[component]
pub fn AppShell(
    #[prop(default = true)] show_search: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="app-layout">
            <HeaderMenu show_search=show_search />
            <div class="app-body">
                <Sidebar />
                <main class="main-content">{children()}</main>
            </div>
        </div>
    }
}
