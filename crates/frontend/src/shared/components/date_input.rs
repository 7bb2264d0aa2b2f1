use leptos::prelude::*;

/// Native date picker input; value travels as "yyyy-mm-dd" or empty.
#[component]
pub fn DateInput(
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] label: String,
) -> impl IntoView {
    view! {
        <label class="date-input">
            {if label.is_empty() { None } else { Some(view! { <span class="date-input__label">{label}</span> }) }}
            <input
                type="date"
                class="date-input__field"
                prop:value=value
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </label>
    }
}
