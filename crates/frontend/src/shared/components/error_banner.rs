use leptos::prelude::*;

/// Non-blocking error banner shown above a list. The previous data
/// stays visible underneath; the banner disappears on the next
/// successful fetch.
#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || message.get().map(|text| view! {
            <div class="error-banner">
                <span class="error-banner__icon">"⚠"</span>
                <span class="error-banner__text">{text}</span>
            </div>
        })}
    }
}
