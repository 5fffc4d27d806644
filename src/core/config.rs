//! 配置管理系统 (Configuration Management)
//!
//! 负责 `config.toml` 的反序列化及其层级结构映射。文件缺失时全部字段回退到默认值。

use std::collections::HashMap;
use std::path::Path;

use bon::Builder;
use config::{Config, ConfigBuilder, File, builder::DefaultState};
use serde::Deserialize;

use crate::core::error::{Result, SourceError};

/// 全局应用配置
#[derive(Debug, Deserialize, Builder, Clone, Default)]
pub struct AppConfig {
    /// HTTP 客户端参数
    #[serde(default)]
    #[builder(default)]
    pub http: HttpConfig,

    /// 站点特定配置覆盖映射
    #[serde(default)]
    #[builder(default)]
    pub sites: HashMap<String, SiteConfig>,
}

/// HTTP 客户端配置
#[derive(Debug, Deserialize, Builder, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    #[builder(default = default_user_agent())]
    pub user_agent: String,
    /// 整体请求超时（秒）
    #[serde(default = "default_timeout_secs")]
    #[builder(default = default_timeout_secs())]
    pub timeout_secs: u64,
    #[serde(default = "default_connect_timeout_secs")]
    #[builder(default = default_connect_timeout_secs())]
    pub connect_timeout_secs: u64,
}

/// 站点特定配置覆盖
#[derive(Debug, Deserialize, Builder, Clone, Default)]
pub struct SiteConfig {
    /// 自定义域名 (用于镜像站点或测试桩)
    pub base_url: Option<String>,
    /// 源语言路径段
    pub lang: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_connect_timeout_secs() -> u64 {
    10
}

impl AppConfig {
    /// 从工作目录的 `config.toml` 加载
    pub fn load() -> Result<Self> {
        Self::load_from("config.toml")
    }

    /// 从指定路径加载，文件不存在时使用默认值
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let config_path = path.as_ref();
        let builder = Config::builder();

        let builder = if config_path.exists() {
            builder.add_source(File::from(config_path))
        } else {
            builder
        };

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder.build().map_err(SourceError::Config)?;
        settings.try_deserialize().map_err(SourceError::Config)
    }

    /// 获取站点配置，未配置时返回默认值
    pub fn site(&self, id: &str) -> SiteConfig {
        self.sites.get(id).cloned().unwrap_or_default()
    }
}
