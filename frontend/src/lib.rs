//! 明信片后台管理前端
//!
//! 采用 Context-Driven 架构，导航、守卫、请求逻辑都在 `postcard-admin` 核心中：
//! - `web`: 核心协作者的浏览器实现（Cookie、fetch、History、进度条、消息）
//! - `auth`: 管理端上下文与用户信息
//! - `components`: UI 组件层

mod auth;
mod components {
    pub mod dashboard;
    pub mod layout;
    pub mod login;
    pub mod progress_bar;
    pub mod resource_table;
    pub mod toasts;
}

use crate::auth::AuthContext;
use crate::components::dashboard::DashboardPage;
use crate::components::layout::AdminLayout;
use crate::components::login::LoginPage;
use crate::components::progress_bar::ProgressBar;
use crate::components::resource_table::{Resource, ResourceTable};
use crate::components::toasts::ToastStack;

use leptos::prelude::*;
use postcard_admin::{AdminContext, AppConfig, AppRoute, Collaborators};
use std::rc::Rc;

// 浏览器 API 封装模块
pub(crate) mod web {
    mod cookie;
    mod http;
    mod notify;
    mod progress;
    pub mod router;
    mod timer;

    pub use cookie::CookieTokenStore;
    pub use http::FetchTransport;
    pub use notify::Toasts;
    pub use progress::TopProgress;
    pub use timer::BrowserTimer;
}

use web::router::{BrowserHistory, Router, RouterOutlet};
use web::{BrowserTimer, CookieTokenStore, FetchTransport, Toasts, TopProgress};

/// 路由匹配函数
///
/// 根据 AppRoute 枚举返回对应的视图组件。
fn route_matcher(route: AppRoute) -> AnyView {
    match route {
        AppRoute::Login => view! { <LoginPage /> }.into_any(),
        AppRoute::AdminIndex | AppRoute::Dashboard => {
            view! { <AdminLayout><DashboardPage /></AdminLayout> }.into_any()
        }
        AppRoute::Users => view! {
            <AdminLayout><ResourceTable resource=Resource::Users /></AdminLayout>
        }
        .into_any(),
        AppRoute::PostcardType => view! {
            <AdminLayout><ResourceTable resource=Resource::PostcardTypes /></AdminLayout>
        }
        .into_any(),
        AppRoute::Locations => view! {
            <AdminLayout><ResourceTable resource=Resource::Locations /></AdminLayout>
        }
        .into_any(),
        AppRoute::NotFound => view! {
            <div class="flex items-center justify-center min-h-screen bg-base-200">
                <div class="text-center">
                    <h1 class="text-6xl font-bold text-error">"404"</h1>
                    <p class="text-xl mt-4">"找不到頁面"</p>
                </div>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn App() -> impl IntoView {
    // 1. 界面侧的协作者
    let progress = TopProgress::new();
    let toasts = Toasts::new();
    provide_context(progress);
    provide_context(toasts);

    // 2. 组装核心上下文
    let admin = AdminContext::bootstrap(
        AppConfig::from_env(),
        Collaborators {
            transport: Rc::new(FetchTransport),
            timer: Rc::new(BrowserTimer),
            tokens: Rc::new(CookieTokenStore::new()),
            progress: Rc::new(progress),
            notifier: Rc::new(toasts),
            history: Rc::new(BrowserHistory),
        },
    );
    provide_context(AuthContext::new(admin));

    view! {
        <ProgressBar />
        <ToastStack />
        // 3. 路由器组件：首次导航时执行守卫
        <Router>
            <RouterOutlet matcher=route_matcher />
        </Router>
    }
}
