use leptos::*;

#[component]
pub fn LoadingState(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());
    view! {
        <div class="state state-loading" role="status" aria-live="polite">
            <span class="spinner" aria-hidden="true"></span>
            <span>{label}</span>
        </div>
    }
}

#[component]
pub fn EmptyState(
    #[prop(into)] title: String,
    #[prop(optional, into)] description: Option<String>,
) -> impl IntoView {
    view! {
        <div class="state state-empty">
            <h3>{title}</h3>
            {description.map(|text| view! { <p>{text}</p> })}
        </div>
    }
}

/// Load failure with a retry button. Retrying is the only way out of this state.
#[component]
pub fn ErrorState(#[prop(into)] message: String, on_retry: Callback<()>) -> impl IntoView {
    view! {
        <div class="state state-error" role="alert">
            <p>{message}</p>
            <button type="button" class="btn btn-secondary" on:click=move |_| on_retry.call(())>
                "Retry"
            </button>
        </div>
    }
}

#[component]
pub fn FieldError(message: Signal<Option<String>>) -> impl IntoView {
    move || message.get().map(|text| view! { <p class="field-error">{text}</p> })
}
