use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{HeaderValue, USER_AGENT};
use reqwest::{Request, Response};
use reqwest_middleware::{Middleware, Next, Result};
use tracing::{debug, warn};

use crate::network::session::Session;

/// 会话注入中间件
/// 负责在每次请求前，将 Session 中的 UA 写入请求
pub struct SessionMiddleware;

#[async_trait::async_trait]
impl Middleware for SessionMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        if let Some(session) = extensions.get::<Arc<Session>>() {
            let ua = session.get_ua();
            if !ua.is_empty()
                && let Ok(val) = HeaderValue::from_str(&ua)
            {
                req.headers_mut().insert(USER_AGENT, val);
            }
        }
        next.run(req, extensions).await
    }
}

/// 请求追踪中间件
/// 记录方法、URL、状态码与耗时
pub struct TracingMiddleware;

#[async_trait::async_trait]
impl Middleware for TracingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut http::Extensions,
        next: Next<'_>,
    ) -> Result<Response> {
        let method = req.method().clone();
        let url = req.url().clone();
        let started = Instant::now();

        debug!(%method, %url, "sending request");
        let result = next.run(req, extensions).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(resp) => debug!(%method, %url, status = %resp.status(), elapsed_ms, "response received"),
            Err(e) => warn!(%method, %url, elapsed_ms, error = %e, "request failed"),
        }

        result
    }
}
