//! HTTP 传输层
//!
//! 基于 `gloo-net` 的 fetch 实现，鉴权和错误处理由核心的 `ApiClient` 负责。

use gloo_net::http::Request;
use postcard_admin::shared::protocol::HttpMethod;
use postcard_admin::{ApiError, ApiResult, HttpRequest, HttpResponse, Transport};

pub struct FetchTransport;

#[async_trait::async_trait(?Send)]
impl Transport for FetchTransport {
    async fn send(&self, req: HttpRequest) -> ApiResult<HttpResponse> {
        let mut builder = match req.method {
            HttpMethod::Get => Request::get(&req.url),
            HttpMethod::Post => Request::post(&req.url),
            HttpMethod::Put => Request::put(&req.url),
            HttpMethod::Delete => Request::delete(&req.url),
            HttpMethod::Patch => Request::patch(&req.url),
        };

        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match req.body {
            Some(body) => builder.body(body),
            None => builder.build(),
        }
        .map_err(|e| ApiError::RequestBuild(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Network(format!("读取响应体失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
