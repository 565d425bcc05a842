//! Delete Confirm Button Component
//!
//! Inline confirmation in front of a destructive action.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// Shows `label` initially. When clicked, shows "Remover?" with ✓/✗ buttons.
/// While `busy` is true the confirm step shows `busy_label` and ignores clicks.
///
/// # Arguments
/// * `button_class` - CSS class for the initial button (e.g., "card-btn danger")
/// * `on_confirm` - Callback to execute when user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Remover".to_string())] label: String,
    #[prop(into, default = "Removendo...".to_string())] busy_label: String,
    #[prop(into, default = Signal::stored(false))] busy: Signal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirm_delete, set_confirm_delete) = signal(false);
    let busy_label = StoredValue::new(busy_label);

    view! {
        <Show when=move || !confirm_delete.get()>
            <button
                type="button"
                class=button_class.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    set_confirm_delete.set(true);
                }
            >
                {label.clone()}
            </button>
        </Show>
        <Show when=move || confirm_delete.get()>
            <span class="delete-confirm">
                <Show
                    when=move || busy.get()
                    fallback=move || view! {
                        <span class="delete-confirm-text">"Remover?"</span>
                        <button
                            type="button"
                            class="confirm-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                on_confirm.run(());
                            }
                        >
                            "✓"
                        </button>
                        <button
                            type="button"
                            class="cancel-btn"
                            on:click=move |ev| {
                                ev.stop_propagation();
                                set_confirm_delete.set(false);
                            }
                        >
                            "✗"
                        </button>
                    }
                >
                    <span class="delete-confirm-text">{busy_label.get_value()}</span>
                </Show>
            </span>
        </Show>
    }
}
