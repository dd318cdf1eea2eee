use crate::app::use_services;
use crate::global_state::toasts;
use crate::infrastructure::ui::{NotificationProvider, Toast};
use leptos::*;

/// Top-right toast stack; clicking a toast dismisses it.
#[component]
pub fn ToastContainer() -> impl IntoView {
    let notifier = use_services().notifier;

    view! {
        <div class="toast-container">
            <For
                each=move || toasts().get()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class="toast error" role="alert" on:click=move |_| notifier.dismiss(id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
