use crate::{LoginCredentials, LoginResponse, Page, PageQuery, UserPayload};
use serde::{Deserialize, Serialize, de::DeserializeOwned};

/// HTTP Methods for API Requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }

    /// GET / DELETE 的参数放在查询字符串中，其余方法使用 JSON body
    pub fn uses_query(&self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }
}

/// A trait that defines the request-response relationship and metadata for an API endpoint.
pub trait ApiRequest: Serialize {
    /// The response type returned by this request.
    type Response: DeserializeOwned;
    /// The URL path relative to the API base URL.
    const PATH: &'static str;
    /// The HTTP method.
    const METHOD: HttpMethod;
}

pub const CHECK_SESSION_PATH: &str = "/admin/check";

// =========================================================
// Request Definitions
// =========================================================

/// Verify the current token and fetch the signed-in admin.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CheckSessionRequest;

impl ApiRequest for CheckSessionRequest {
    type Response = UserPayload;
    const PATH: &'static str = CHECK_SESSION_PATH;
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl ApiRequest for LoginCredentials {
    type Response = LoginResponse;
    const PATH: &'static str = "/admin/login";
    const METHOD: HttpMethod = HttpMethod::Post;
}

/// List members
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListUsersRequest {
    #[serde(flatten)]
    pub query: PageQuery,
}

impl ApiRequest for ListUsersRequest {
    type Response = Page<serde_json::Value>;
    const PATH: &'static str = "/admin/users";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List postcard locations
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListLocationsRequest {
    #[serde(flatten)]
    pub query: PageQuery,
}

impl ApiRequest for ListLocationsRequest {
    type Response = Page<serde_json::Value>;
    const PATH: &'static str = "/admin/locations";
    const METHOD: HttpMethod = HttpMethod::Get;
}

/// List postcard types
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListPostcardTypesRequest {
    #[serde(flatten)]
    pub query: PageQuery,
}

impl ApiRequest for ListPostcardTypesRequest {
    type Response = Page<serde_json::Value>;
    const PATH: &'static str = "/admin/postcard-types";
    const METHOD: HttpMethod = HttpMethod::Get;
}

impl From<PageQuery> for ListUsersRequest {
    fn from(query: PageQuery) -> Self {
        Self { query }
    }
}

impl From<PageQuery> for ListLocationsRequest {
    fn from(query: PageQuery) -> Self {
        Self { query }
    }
}

impl From<PageQuery> for ListPostcardTypesRequest {
    fn from(query: PageQuery) -> Self {
        Self { query }
    }
}
