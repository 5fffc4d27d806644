//! 服务上下文 (ServiceContext)
//!
//! 汇集 HTTP 服务、会话与配置，站点客户端通过它发起请求。

use std::sync::Arc;

use reqwest::Method;
use reqwest_middleware::RequestBuilder;
use url::Url;

use crate::core::config::AppConfig;
use crate::core::error::Result;
use crate::network::service::HttpService;
use crate::network::session::Session;

#[derive(Clone)]
pub struct ServiceContext {
    /// HTTP 服务
    pub http: Arc<HttpService>,
    /// 会话管理（UA）
    pub session: Arc<Session>,
    /// 应用配置
    pub config: Arc<AppConfig>,
}

impl ServiceContext {
    pub fn new(http: Arc<HttpService>, session: Arc<Session>, config: Arc<AppConfig>) -> Self {
        Self {
            http,
            session,
            config,
        }
    }

    /// 按配置构建完整上下文
    pub fn from_config(config: Arc<AppConfig>) -> Result<Self> {
        let http = Arc::new(HttpService::new(&config.http)?);
        let session = Arc::new(Session::new());
        session.set_ua(config.http.user_agent.clone());
        Ok(Self::new(http, session, config))
    }

    /// 构造携带会话扩展的请求
    pub fn request_builder(&self, method: Method, url: Url) -> RequestBuilder {
        self.http
            .client()
            .request(method, url)
            .with_extension(self.session.clone())
    }
}
