//! 浏览器路由桥接
//!
//! 封装了 web_sys 的 History API，所有对 window.history 的操作都集中在此模块。
//! 导航与守卫逻辑由核心的 `Router` 实现，这里只负责把结果同步到 Signal。

use leptos::prelude::*;
use leptos::task::spawn_local;
use postcard_admin::{AppRoute, History, HistoryMode, Router as CoreRouter};
use wasm_bindgen::prelude::*;

use crate::auth::use_auth;

/// 获取当前浏览器路径
fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// 推送 History 状态（内部工具函数）
fn push_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// 替换 History 状态（内部工具函数，用于重定向）
fn replace_history_state(path: &str) {
    if let Some(window) = web_sys::window() {
        if let Ok(history) = window.history() {
            let _ = history.replace_state_with_url(&JsValue::NULL, "", Some(path));
        }
    }
}

/// `window.history` 的 `History` 实现
pub struct BrowserHistory;

impl History for BrowserHistory {
    fn current_path(&self) -> String {
        current_path()
    }

    fn push(&self, path: &str) {
        push_history_state(path);
    }

    fn replace(&self, path: &str) {
        replace_history_state(path);
    }
}

/// 路由器服务
///
/// 持有核心路由器，通过 Signal 驱动界面更新。
#[derive(Clone, Copy)]
pub struct RouterService {
    /// 当前路由；首次导航（含会话校验）完成前为 `None`
    current_route: RwSignal<Option<AppRoute>>,
    router: StoredValue<CoreRouter, LocalStorage>,
}

impl RouterService {
    fn new(router: CoreRouter) -> Self {
        let current_route = RwSignal::new(router.current());

        // 核心路由器提交导航后同步到 Signal
        router.subscribe(move |route| current_route.set(Some(route)));

        Self {
            current_route,
            router: StoredValue::new_local(router),
        }
    }

    /// 获取当前路由信号
    pub fn current_route(&self) -> Signal<Option<AppRoute>> {
        self.current_route.into()
    }

    /// **核心方法：导航与守卫**
    ///
    /// 守卫可能需要等待会话校验，因此在后台任务中执行。
    pub fn navigate(&self, path: &str) {
        self.run(path.to_string(), HistoryMode::Push);
    }

    fn run(&self, path: String, mode: HistoryMode) {
        let router = self.router.get_value();
        spawn_local(async move {
            router.navigate(&path, mode).await;
        });
    }

    /// 以地址栏路径完成首次导航
    fn start(&self) {
        let router = self.router.get_value();
        spawn_local(async move {
            if let Some(route) = router.start().await {
                log::debug!(target: "router", "Initial route: {}", route);
            }
        });
    }

    /// 初始化浏览器后退/前进按钮监听
    fn init_popstate_listener(&self) {
        let this = *self;

        // popstate 时也执行守卫逻辑
        let closure = Closure::<dyn Fn()>::new(move || {
            this.run(current_path(), HistoryMode::Pop);
        });

        if let Some(window) = web_sys::window() {
            let _ = window
                .add_event_listener_with_callback("popstate", closure.as_ref().unchecked_ref());
        }

        // 泄漏闭包以保持监听器存活
        closure.forget();
    }
}

/// 提供路由服务到 Context 并初始化
fn provide_router() -> RouterService {
    let auth = use_auth();

    // 每次导航提交后刷新用户信息（会话校验在守卫中完成），需先于路由信号更新
    auth.with_admin(|admin| {
        let session = admin.session().clone();
        let user = auth.user;
        admin
            .router()
            .subscribe(move |_| user.set(session.user_data()));
    });

    let router = RouterService::new(auth.with_admin(|admin| admin.router().clone()));

    router.init_popstate_listener();
    router.start();

    provide_context(router);
    router
}

/// 从 Context 获取路由服务
pub fn use_router() -> RouterService {
    use_context::<RouterService>()
        .expect("RouterService not found in context. Ensure Router is provided.")
}

// ============================================================================
// UI 组件
// ============================================================================

/// 路由器根组件
///
/// 提供路由上下文，应在 App 根部使用。
#[component]
pub fn Router(
    /// 子组件
    children: Children,
) -> impl IntoView {
    provide_router();

    children()
}

/// 路由出口组件
///
/// 根据当前路由状态渲染对应的组件。
#[component]
pub fn RouterOutlet(
    /// 路由匹配函数：接收当前路由，返回对应视图
    matcher: fn(AppRoute) -> AnyView,
) -> impl IntoView {
    let router = use_router();

    move || match router.current_route().get() {
        Some(current) => matcher(current),
        None => view! {
            <div class="flex items-center justify-center min-h-screen">
                <span class="loading loading-spinner loading-lg text-primary"></span>
            </div>
        }
        .into_any(),
    }
}

/// 站内链接，点击时交给路由器处理
#[component]
pub fn Link(
    /// 目标路由
    to: AppRoute,
    #[prop(optional, into)] class: Signal<String>,
    /// 子内容
    children: Children,
) -> impl IntoView {
    let router = use_router();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        router.navigate(to.to_path());
    };

    view! {
        <a href=to.to_path() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
