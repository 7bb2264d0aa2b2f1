use leptos::prelude::*;
use std::rc::Rc;

/// Confirmation dialog body rendered inside the modal host.
#[component]
pub fn ConfirmDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_label: String,
    on_confirm: Rc<dyn Fn(())>,
    on_cancel: Rc<dyn Fn(())>,
) -> impl IntoView {
    let confirm_label = if confirm_label.is_empty() {
        "Delete".to_string()
    } else {
        confirm_label
    };

    view! {
        <div class="confirm-dialog">
            <h3 class="confirm-dialog__title">{title}</h3>
            <p class="confirm-dialog__message">{message}</p>
            <div class="confirm-dialog__actions">
                <button
                    class="button button--secondary"
                    on:click=move |_| on_cancel(())
                >
                    "Cancel"
                </button>
                <button
                    class="button button--danger"
                    on:click=move |_| on_confirm(())
                >
                    {confirm_label}
                </button>
            </div>
        </div>
    }
}
