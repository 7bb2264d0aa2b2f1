use leptos::prelude::*;

use crate::layout::AppShell;
use crate::shared::modal::{ModalHost, ModalService};

#[component]
pub fn App() -> impl IntoView {
    // Dialog management for the whole app lives in context.
    provide_context(ModalService::new());

    view! {
        <AppShell />
        <ModalHost />
    }
}
