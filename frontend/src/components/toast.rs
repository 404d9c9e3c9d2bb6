use crate::state::notifications::{
    NotificationKind, NotificationReceiver, Toast, ToastQueue, AUTO_DISMISS,
};
use futures::StreamExt;
use leptos::*;

/// Drains the notification channel into on-screen toasts. Each toast removes
/// itself after `AUTO_DISMISS`.
#[component]
pub fn ToastHost(receiver: NotificationReceiver) -> impl IntoView {
    let queue = create_rw_signal(ToastQueue::default());
    let mut receiver = receiver;
    spawn_local(async move {
        while let Some(notification) = receiver.next().await {
            let Some(id) = queue.try_update(|queue| queue.push(notification)) else {
                break;
            };
            set_timeout(
                move || {
                    queue.try_update(|queue| queue.dismiss(id));
                },
                AUTO_DISMISS,
            );
        }
    });

    let toasts = Signal::derive(move || queue.with(|queue| queue.toasts().to_vec()));
    let on_dismiss = Callback::new(move |id: u64| {
        queue.update(|queue| {
            queue.dismiss(id);
        });
    });
    view! { <ToastList toasts=toasts on_dismiss=on_dismiss /> }
}

#[component]
pub fn ToastList(toasts: Signal<Vec<Toast>>, on_dismiss: Callback<u64>) -> impl IntoView {
    view! {
        <div class="toast-stack" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast| toast.id
                children=move |toast| {
                    let class = match toast.notification.kind {
                        NotificationKind::Success => "toast toast-success",
                        NotificationKind::Failure => "toast toast-failure",
                    };
                    let id = toast.id;
                    view! {
                        <div class=class role="status">
                            <span>{toast.notification.text}</span>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                on:click=move |_| on_dismiss.call(id)
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
