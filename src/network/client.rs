use reqwest::Response;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::core::error::{Result, SourceError};
use crate::network::context::ServiceContext;

/// 面向站点的 HTTP 客户端封装
///
/// 不做重试；非 2xx 响应作为传输错误原样上抛。
#[derive(Clone)]
pub struct SiteClient {
    pub ctx: ServiceContext,
}

impl SiteClient {
    pub fn new(ctx: ServiceContext) -> Self {
        Self { ctx }
    }

    /// 执行通用 GET 请求
    pub async fn get(&self, url: Url) -> Result<Response> {
        let resp = self
            .ctx
            .request_builder(reqwest::Method::GET, url)
            .send()
            .await?;
        Ok(resp.error_for_status()?)
    }

    /// 获取文本内容
    pub async fn get_text(&self, url: Url) -> Result<String> {
        let resp = self.get(url).await?;
        resp.text().await.map_err(SourceError::Transport)
    }

    /// 以 JSON 请求体发起 POST，并将响应体反序列化
    pub async fn post_json<B, T>(&self, url: Url, body: &B, headers: HeaderMap) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let payload = serde_json::to_vec(body)?;
        let resp = self
            .ctx
            .request_builder(reqwest::Method::POST, url)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .headers(headers)
            .body(payload)
            .send()
            .await?
            .error_for_status()?;

        let text = resp.text().await.map_err(SourceError::Transport)?;
        Ok(serde_json::from_str(&text)?)
    }
}
