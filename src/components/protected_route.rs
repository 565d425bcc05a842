//! Protected Route Component
//!
//! Wraps the route outlet and applies the route guard on every location
//! change. Children render only once the guard has allowed the current path.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};
use leptos_router::NavigateOptions;

use boscov_core::{GuardOutcome, RoutePolicy, SessionSnapshot};

use crate::context::use_session;
use crate::storage::session_store;

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

/// Evaluate `path` against whatever is in storage right now
fn check(path: &str) -> GuardOutcome {
    let store = session_store();
    let token = store.token();
    let stored_role = store.user().map(|u| u.role());
    let snapshot = SessionSnapshot {
        token: token.as_deref(),
        stored_role,
    };
    RoutePolicy::default().evaluate(path, snapshot, now_secs())
}

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = use_session();
    let location = use_location();
    let navigate = use_navigate();

    // Derived in the same reactive pass as the pathname, so the outlet
    // never sees a new path paired with the previous path's decision.
    let outcome = Memo::new(move |_| check(&location.pathname.get()));

    Effect::new(move |_| {
        let outcome = outcome.get();
        if outcome.clear_session {
            session.clear();
        } else {
            session.refresh();
        }
        if let Some(target) = outcome.redirect {
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || outcome.get().state.renders_content()>
            {children()}
        </Show>
    }
}
