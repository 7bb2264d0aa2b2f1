use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

const DEBOUNCE_MS: u32 = 300;

/// Search box with debounce and a clear button. `on_change` fires with
/// the settled text (possibly empty) after the user pauses typing.
#[component]
pub fn SearchInput(
    /// Current applied filter value
    #[prop(into)]
    value: Signal<String>,

    /// Callback invoked after the debounce window
    on_change: Callback<String>,

    #[prop(optional, into)] placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Local echo of the input before the debounce settles.
    let (input_value, set_input_value) = signal(value.get_untracked());
    // Each keystroke invalidates the pending flush.
    let generation = StoredValue::new(0u64);

    let handle_input = move |text: String| {
        set_input_value.set(text.clone());
        let my_generation = generation.with_value(|g| g + 1);
        generation.set_value(my_generation);
        spawn_local(async move {
            TimeoutFuture::new(DEBOUNCE_MS).await;
            if generation.get_value() == my_generation {
                on_change.run(text);
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input(event_target_value(&ev))
            />
            {move || if !input_value.get().is_empty() {
                view! {
                    <button class="search-input__clear" on:click=clear title="Clear">
                        {icon("x")}
                    </button>
                }.into_any()
            } else {
                view! { <></> }.into_any()
            }}
        </div>
    }
}
