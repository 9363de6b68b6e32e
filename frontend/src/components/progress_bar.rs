use crate::web::TopProgress;
use leptos::prelude::*;

/// 页面顶部的请求进度条
#[component]
pub fn ProgressBar() -> impl IntoView {
    let progress = expect_context::<TopProgress>();
    let value = progress.value();

    view! {
        <Show when=move || value.get().is_some()>
            <div class="fixed top-0 left-0 right-0 z-50 h-1">
                <div
                    class="h-full bg-primary transition-all duration-200"
                    style:width=move || format!("{:.0}%", value.get().unwrap_or(0.0) * 100.0)
                ></div>
            </div>
        </Show>
    }
}
