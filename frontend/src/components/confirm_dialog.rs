use leptos::ev::KeyboardEvent;
use leptos::*;

/// Modal yes/no prompt. Backdrop, close button and Escape all cancel.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: Option<String>,
    #[prop(optional, into)] busy: MaybeSignal<bool>,
    #[prop(optional)] destructive: bool,
) -> impl IntoView {
    let confirm_class = if destructive {
        "btn btn-danger"
    } else {
        "btn btn-primary"
    };
    let confirm_label = confirm_label
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| "Confirm".to_string());
    let busy = Signal::derive(move || busy.get());
    let confirm_text = Signal::derive(move || {
        if busy.get() {
            "Working...".to_string()
        } else {
            confirm_label.clone()
        }
    });

    let title = Signal::derive(move || title.get());
    let message = Signal::derive(move || message.get());

    view! {
        <Show when=move || is_open.get()>
            <div class="dialog-overlay">
                <button
                    type="button"
                    aria-label="Close"
                    class="dialog-backdrop"
                    on:click=move |_| on_cancel.call(())
                ></button>
                <div
                    class="dialog"
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_cancel.call(());
                        }
                    }
                >
                    <h2 class="dialog-title">{move || title.get()}</h2>
                    <p class="dialog-message">{move || message.get()}</p>
                    <div class="dialog-actions">
                        <button
                            type="button"
                            class="btn btn-secondary"
                            on:click=move |_| on_cancel.call(())
                        >
                            "Cancel"
                        </button>
                        <button
                            type="button"
                            class=confirm_class
                            disabled=move || busy.get()
                            on:click=move |_| {
                                if !busy.get_untracked() {
                                    on_confirm.call(());
                                }
                            }
                        >
                            {move || confirm_text.get()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
