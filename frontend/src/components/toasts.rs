use crate::web::Toasts;
use leptos::prelude::*;
use postcard_admin::MessageKind;

fn alert_class(kind: MessageKind) -> &'static str {
    match kind {
        MessageKind::Info => "alert alert-info shadow-lg",
        MessageKind::Error => "alert alert-error shadow-lg",
        MessageKind::Warning => "alert alert-warning shadow-lg",
        MessageKind::Success => "alert alert-success shadow-lg",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let items = toasts.items();

    view! {
        <div class="toast toast-top toast-end z-50">
            <For
                each=move || items.get()
                key=|t| t.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=alert_class(toast.kind) on:click=move |_| toasts.dismiss(id)>
                            <span>{toast.text}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
