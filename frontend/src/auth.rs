//! 认证模块
//!
//! 持有启动时组装好的 `AdminContext`，并把会话中的用户信息暴露为 Signal。
//! 是否允许进入页面由核心的导航守卫决定。

use leptos::prelude::*;
use postcard_admin::shared::{LoginCredentials, UserPayload};
use postcard_admin::{AdminContext, ApiResult, AppRoute, TokenStore};

/// 认证上下文
///
/// 通过 Context 在组件间共享。
#[derive(Clone, Copy)]
pub struct AuthContext {
    admin: StoredValue<AdminContext, LocalStorage>,
    /// 最近一次会话校验返回的用户信息
    pub user: RwSignal<Option<UserPayload>>,
}

impl AuthContext {
    pub fn new(admin: AdminContext) -> Self {
        let user = RwSignal::new(admin.session().user_data());
        Self {
            admin: StoredValue::new_local(admin),
            user,
        }
    }

    pub fn with_admin<R>(&self, f: impl FnOnce(&AdminContext) -> R) -> R {
        self.admin.with_value(f)
    }

    pub fn admin(&self) -> AdminContext {
        self.admin.get_value()
    }
}

/// 从 Context 获取认证上下文
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext should be provided")
}

/// 登录并保存令牌，成功后整页加载面板
///
/// 整页加载会创建新的会话状态，使新令牌重新经过会话校验。
pub async fn login(ctx: &AuthContext, account: String, password: String) -> ApiResult<()> {
    let admin = ctx.admin();
    let target = admin
        .login(&LoginCredentials { account, password })
        .await?;
    reload_to(target);
    Ok(())
}

/// 注销：清除令牌后整页跳转到登录页
pub fn logout(ctx: &AuthContext) {
    ctx.with_admin(|admin| admin.tokens().clear());
    ctx.user.set(None);
    reload_to(AppRoute::auth_failure_redirect());
}

/// 整页加载指定路由，重置会话状态
fn reload_to(route: AppRoute) {
    let target = route.to_path();
    if let Some(window) = web_sys::window() {
        if window.location().set_href(target).is_err() {
            log::warn!(target: "auth", "Failed to reload to {}", target);
        }
    }
}
