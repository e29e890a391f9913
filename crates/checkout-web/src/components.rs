//! UI Components

use leptos::prelude::*;

/// Error banner shown above the plan list
#[component]
pub fn ErrorBanner(message: ReadSignal<String>) -> impl IntoView {
    view! {
        <Show when=move || !message.get().is_empty()>
            <div class="error-banner" role="alert">
                {move || message.get()}
            </div>
        </Show>
    }
}
