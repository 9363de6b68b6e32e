use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub mod protocol;

// =========================================================
// 常量定义 (Constants)
// =========================================================

/// 保存管理员令牌的 Cookie 键
pub const TOKEN_COOKIE_KEY: &str = "adminToken";
pub const HEADER_AUTHORIZATION: &str = "Authorization";
pub const BEARER_PREFIX: &str = "Bearer ";

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_LIMIT: u32 = 10;

// =========================================================
// 领域模型 (Domain Models)
// =========================================================

/// 会话校验接口返回的用户信息
///
/// 前端不解析其中的字段，只负责保存和展示。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserPayload(pub serde_json::Value);

impl UserPayload {
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &serde_json::Value {
        &self.0
    }

    /// 尝试读取某个字符串字段（用于 UI 显示用户名等）
    pub fn str_field(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_str())
    }
}

/// 分页查询参数
///
/// `filters` 会被展开成同级的查询参数，对应表格上方的搜索条件。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    pub limit: u32,
    #[serde(flatten)]
    pub filters: BTreeMap<String, String>,
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_LIMIT,
            filters: BTreeMap::new(),
        }
    }
}

/// 列表接口的分页响应
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            total: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub account: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn page_query_flattens_filters() {
        let mut query = PageQuery::default();
        query.filters.insert("keyword".into(), "taipei".into());

        let value = serde_json::to_value(&query).unwrap();
        assert_eq!(value, json!({ "page": 1, "limit": 10, "keyword": "taipei" }));
    }

    #[test]
    fn user_payload_is_transparent() {
        let payload: UserPayload = serde_json::from_value(json!({ "id": 1, "name": "A" })).unwrap();
        assert_eq!(payload.str_field("name"), Some("A"));
        assert_eq!(payload.str_field("id"), None);
    }
}
