use parking_lot::RwLock;

/// 请求会话状态
///
/// 目前只承载 User-Agent，由 [`SessionMiddleware`](crate::network::middleware::SessionMiddleware) 写入每个请求。
#[derive(Debug, Default)]
pub struct Session {
    ua: RwLock<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_ua(&self, ua: String) {
        *self.ua.write() = ua;
    }

    pub fn get_ua(&self) -> String {
        self.ua.read().clone()
    }
}
