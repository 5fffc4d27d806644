//! 应用程序入口 (Application Entrypoint)
//!
//! 负责 CLI 指令解析、遥测层初始化与站点装配，结果以 JSON 输出到 stdout。

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use wtrlab::core::config::AppConfig;
use wtrlab::core::filters::{ListingFilters, Order, Sort, StoryStatus};
use wtrlab::core::model::PopularNovelsOptions;
use wtrlab::network::context::ServiceContext;
use wtrlab::{Site, SiteRegistry};

/// 命令行界面脚手架 (CLI Scaffolding)
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// 目标站点标识符
    #[arg(short, long, global = true, default_value = "wtrlab")]
    site: String,

    /// 配置文件路径
    #[arg(short, long, global = true, default_value = "config.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// 获取书籍列表
    Popular {
        /// 页码（从 1 开始）
        #[arg(short, long, default_value_t = 1)]
        page: u32,
        /// 使用最近更新流而非 HTML 列表页
        #[arg(long)]
        latest: bool,
        #[arg(long, default_value_t = Order::default())]
        order: Order,
        #[arg(long, default_value_t = Sort::default())]
        sort: Sort,
        #[arg(long, default_value_t = StoryStatus::default())]
        status: StoryStatus,
    },
    /// 按关键字搜索
    Search {
        term: String,
    },
    /// 获取书籍详情与章节目录
    Novel {
        /// 站内路径，例如 en/serie-123/some-slug
        path: String,
    },
    /// 获取章节正文
    Chapter {
        path: String,
    },
    /// 列出可用的列表筛选项
    Filters,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 遥测层初始化 (Telemetry Layer Initialization)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    // 依赖项初始化与注入 (Dependency Injection)
    let config = Arc::new(AppConfig::load_from(&cli.config)?);
    let ctx = ServiceContext::from_config(config.clone())?;
    let registry = SiteRegistry::new();
    let site: Arc<dyn Site> = Arc::from(registry.create(&cli.site, config.site(&cli.site), ctx)?);

    tracing::debug!("Using {} v{} at {}", site.name(), site.version(), site.base_url());

    match cli.command {
        Commands::Popular {
            page,
            latest,
            order,
            sort,
            status,
        } => {
            let options = PopularNovelsOptions {
                show_latest_novels: latest,
                filters: ListingFilters {
                    order,
                    sort,
                    story_status: status,
                },
            };
            let novels = site.popular_novels(page, &options).await?;
            println!("{}", serde_json::to_string_pretty(&novels)?);
        }
        Commands::Search { term } => {
            let novels = site.search_novels(&term).await?;
            println!("{}", serde_json::to_string_pretty(&novels)?);
        }
        Commands::Novel { path } => {
            let novel = site.parse_novel(&path).await?;
            println!("{}", serde_json::to_string_pretty(&novel)?);
        }
        Commands::Chapter { path } => {
            let content = site.parse_chapter(&path).await?;
            println!("{}", content);
        }
        Commands::Filters => {
            println!(
                "{}",
                serde_json::to_string_pretty(&ListingFilters::definitions())?
            );
        }
    }

    Ok(())
}
