//! Cookie 令牌存储
//!
//! 使用 `document.cookie` 保存管理员令牌，不设置过期时间。

use postcard_admin::token::{format_cookie, format_expired_cookie, parse_cookie};
use postcard_admin::{Token, TokenStore};
use postcard_admin_shared::TOKEN_COOKIE_KEY;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

pub struct CookieTokenStore {
    key: &'static str,
}

impl CookieTokenStore {
    pub fn new() -> Self {
        Self {
            key: TOKEN_COOKIE_KEY,
        }
    }

    /// 获取 HtmlDocument 实例
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
    }

    fn write(&self, cookie: &str) {
        if let Some(doc) = Self::document() {
            if doc.set_cookie(cookie).is_err() {
                log::warn!(target: "token", "写入 Cookie 失败: {}", self.key);
            }
        }
    }
}

impl TokenStore for CookieTokenStore {
    fn get(&self) -> Option<Token> {
        let header = Self::document()?.cookie().ok()?;
        parse_cookie(&header, self.key).and_then(Token::new)
    }

    fn set(&self, token: Token) {
        self.write(&format_cookie(self.key, token.as_str()));
    }

    fn clear(&self) {
        self.write(&format_expired_cookie(self.key));
    }
}
