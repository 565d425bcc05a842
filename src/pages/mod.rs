//! Pages
//!
//! One component per route.

mod deactivated_movies;
mod home;
mod login;
mod menu;
mod my_ratings;
mod profile;
mod register;
mod search;
mod status;
mod users;

use leptos::prelude::*;

use boscov_core::forms::FieldErrors;

pub use deactivated_movies::DeactivatedMoviesPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use menu::MenuPage;
pub use my_ratings::MyRatingsPage;
pub use profile::ProfilePage;
pub use register::RegisterPage;
pub use search::SearchPage;
pub use status::{ForbiddenPage, NotFoundPage, UnauthorizedPage};
pub use users::UsersPage;

/// Labeled input bound to one field of a typed form.
///
/// `read` pulls the field's current string out of the form and `apply` is
/// the form's reducer. Typing clears the field's validation message.
pub(crate) fn labeled_input<T, F>(
    form: RwSignal<T>,
    errors: RwSignal<FieldErrors<F>>,
    field: F,
    label: &'static str,
    kind: &'static str,
    read: fn(&T, F) -> String,
    apply: fn(&mut T, F, &str),
) -> impl IntoView
where
    T: Send + Sync + 'static,
    F: Ord + Copy + Send + Sync + 'static,
{
    view! {
        <div class="form-field">
            {move || errors.with(|e| e.get(field)).map(|msg| view! { <p class="field-error">{msg}</p> })}
            <label>{label}</label>
            <input
                type=kind
                prop:value=move || form.with(|f| read(f, field))
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    form.update(|f| apply(f, field, &value));
                    errors.update(|e| e.clear_field(field));
                }
            />
        </div>
    }
}
