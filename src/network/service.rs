use std::time::Duration;

use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};

use crate::core::config::HttpConfig;
use crate::core::error::{Result, SourceError};
use crate::network::middleware::{SessionMiddleware, TracingMiddleware};

/// 共享 HTTP 服务
///
/// 内部客户端持有连接池，克隆开销很小。
#[derive(Clone)]
pub struct HttpService {
    client: ClientWithMiddleware,
}

impl HttpService {
    pub fn new(config: &HttpConfig) -> Result<Self> {
        Ok(Self {
            client: Self::try_build_internal_client(config)?,
        })
    }

    /// 构建底层的 HTTP 客户端
    ///
    /// User-Agent 由 `SessionMiddleware` 按会话注入，这里不设默认值。
    fn try_build_internal_client(config: &HttpConfig) -> Result<ClientWithMiddleware> {
        let client = reqwest::Client::builder()
            .pool_max_idle_per_host(8)
            .tcp_nodelay(true)
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(SourceError::Transport)?;

        Ok(ClientBuilder::new(client)
            .with(SessionMiddleware)
            .with(TracingMiddleware)
            .build())
    }

    /// 获取客户端副本
    pub fn client(&self) -> ClientWithMiddleware {
        self.client.clone()
    }
}
