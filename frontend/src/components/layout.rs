//! 后台页面框架：侧边栏菜单 + 内容区

use crate::auth::{logout, use_auth};
use crate::web::router::{Link, use_router};
use leptos::prelude::*;
use postcard_admin::AppRoute;

/// 侧边栏菜单标题
fn menu_title(route: AppRoute) -> &'static str {
    match route {
        AppRoute::Dashboard => "儀錶板",
        AppRoute::Users => "會員管理",
        AppRoute::PostcardType => "明信片類型管理",
        AppRoute::Locations => "位置管理",
        _ => route.name(),
    }
}

#[component]
pub fn AdminLayout(children: Children) -> impl IntoView {
    let auth = use_auth();
    let router = use_router();

    let on_logout = move |_| logout(&auth);

    let account = move || {
        auth.user.with(|user| {
            user.as_ref()
                .and_then(|u| u.str_field("account").or_else(|| u.str_field("name")))
                .map(str::to_string)
        })
    };

    view! {
        <div class="drawer lg:drawer-open min-h-screen bg-base-200">
            <input id="admin-drawer" type="checkbox" class="drawer-toggle" />
            <div class="drawer-content flex flex-col">
                <div class="navbar bg-base-100 shadow">
                    <div class="flex-none lg:hidden">
                        <label for="admin-drawer" class="btn btn-square btn-ghost">"☰"</label>
                    </div>
                    <div class="flex-1 px-2 text-lg font-bold">
                        {move || router.current_route().get().map(menu_title)}
                    </div>
                    <div class="flex-none gap-2">
                        <Show when=move || account().is_some()>
                            <span class="badge badge-neutral">{move || account().unwrap_or_default()}</span>
                        </Show>
                        <button on:click=on_logout class="btn btn-outline btn-error btn-sm">"登出"</button>
                    </div>
                </div>
                <main class="p-4 md:p-8">{children()}</main>
            </div>
            <div class="drawer-side">
                <label for="admin-drawer" class="drawer-overlay"></label>
                <ul class="menu p-4 w-64 min-h-full bg-base-100 gap-1">
                    <li class="menu-title">"明信片後台"</li>
                    {AppRoute::ADMIN_PAGES
                        .into_iter()
                        .map(|page| {
                            let class = Signal::derive(move || {
                                if router.current_route().get() == Some(page) {
                                    "active".to_string()
                                } else {
                                    String::new()
                                }
                            });
                            view! {
                                <li>
                                    <Link to=page class=class>{menu_title(page)}</Link>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        </div>
    }
}
