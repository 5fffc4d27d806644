#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{Value, json};
use wiremock::MockServer;

use wtrlab::core::config::{AppConfig, SiteConfig};
use wtrlab::network::context::ServiceContext;
use wtrlab::{Site, SiteRegistry};

/// 指向 mock server 的站点实例
pub fn test_site(server: &MockServer) -> Box<dyn Site> {
    test_site_with(server, AppConfig::default())
}

pub fn test_site_with(server: &MockServer, config: AppConfig) -> Box<dyn Site> {
    let ctx = ServiceContext::from_config(Arc::new(config)).unwrap();
    let site_cfg = SiteConfig::builder()
        .base_url(format!("{}/", server.uri()))
        .build();
    SiteRegistry::new().create("wtrlab", site_cfg, ctx).unwrap()
}

/// 包装为带 `__NEXT_DATA__` 的页面
pub fn next_page(body: &str, state: &Value) -> String {
    format!(
        r#"<!DOCTYPE html><html><head><title>WTR-LAB</title></head><body>{body}<script id="__NEXT_DATA__" type="application/json">{state}</script></body></html>"#
    )
}

pub fn detail_state() -> Value {
    json!({
        "props": {
            "pageProps": {
                "serie": {
                    "id": 77,
                    "raw_id": 1234,
                    "slug": "outer-slug",
                    "serie_data": {
                        "id": 77,
                        "raw_id": 1234,
                        "slug": "star-forge",
                        "data": { "title": "Star Forge", "author": "Lin", "description": "..." }
                    },
                    "chapters": [
                        { "id": 5001, "order": 1, "slug": "c1", "title": "Arrival", "created_at": "2023-11-02T09:15:00.000000Z", "updated_at": "2023-11-03T00:00:00.000000Z" },
                        { "id": 5002, "order": 2, "slug": "c2", "title": "Descent", "updated_at": "2023-11-09T12:00:00.000000Z" },
                        { "id": 5010, "order": 10, "slug": "c10", "title": "Skip Ahead" }
                    ],
                    "recommendation": []
                },
                "server_time": "2024-01-01T00:00:00.000Z",
                "_sentryTraceData": "abc"
            },
            "__N_SSP": true
        },
        "page": "/[locale]/serie-[raw_id]/[slug]",
        "query": {},
        "buildId": "build-1",
        "isFallback": false,
        "locale": "en"
    })
}

pub const DETAIL_BODY: &str = r#"
<main>
  <div class="img-wrap"><img src="https://img.wtr-lab.com/star-forge.jpg" alt="cover"></div>
  <h1 class="text-uppercase">Star Forge</h1>
  <span class="lead">  Metal, stars and stubbornness.  </span>
  <table class="details">
    <tr><td>Author</td><td>
		Lin Feng
	</td></tr>
    <tr><td>Status</td><td>
		Completed
	</td></tr>
    <tr><td>Genre</td><td><a href="/en/genre/1">Sci-fi</a><a href="/en/genre/4">Drama</a></td></tr>
  </table>
</main>"#;

pub const NOVEL_LIST: &str = r#"<!DOCTYPE html><html><body>
<div class="serie-list">
  <div class="serie-item">
    <a href="/en/serie-100/alpha"><img src="https://img.wtr-lab.com/alpha.jpg"></a>
    <div class="title-wrap"><a href="/en/serie-100/alpha">Alpha Tales<span class="rawtitle">阿尔法</span></a></div>
  </div>
  <div class="serie-item">
    <a href="https://wtr-lab.com/en/serie-200/beta"><img src="https://img.wtr-lab.com/beta.jpg"></a>
    <div class="title-wrap"><a href="https://wtr-lab.com/en/serie-200/beta">Beta</a></div>
  </div>
  <div class="serie-item">
    <div class="title-wrap"><a>Ghost card</a></div>
  </div>
</div>
</body></html>"#;
