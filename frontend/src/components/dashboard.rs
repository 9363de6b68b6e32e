use crate::auth::use_auth;
use leptos::prelude::*;

/// 儀錶板：显示会话校验返回的管理员信息
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = use_auth();

    let pretty = move || {
        auth.user.with(|user| {
            user.as_ref()
                .and_then(|u| serde_json::to_string_pretty(u.as_value()).ok())
        })
    };

    view! {
        <div class="card bg-base-100 shadow-xl">
            <div class="card-body">
                <h3 class="card-title">"歡迎回來"</h3>
                {move || match pretty() {
                    Some(text) => view! {
                        <pre class="bg-base-200 rounded-box p-4 text-sm overflow-x-auto">{text}</pre>
                    }
                    .into_any(),
                    // 会话校验失败时仍可进入，但没有用户信息
                    None => view! {
                        <p class="text-base-content/70">"無法取得登入資訊"</p>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
