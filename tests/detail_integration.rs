mod helpers;

use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

use wtrlab::{Site, SourceError};

fn html(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .set_body_string(body)
        .insert_header("Content-Type", "text/html; charset=utf-8")
}

#[tokio::test]
async fn test_novel_detail_combines_html_and_state() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/serie-1234/star-forge"))
        .respond_with(html(helpers::next_page(
            helpers::DETAIL_BODY,
            &helpers::detail_state(),
        )))
        .expect(1)
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let novel = site.parse_novel("en/serie-1234/star-forge").await.unwrap();

    assert_eq!(novel.path, "en/serie-1234/star-forge");
    assert_eq!(novel.name, "Star Forge");
    assert_eq!(
        novel.cover.as_deref(),
        Some("https://img.wtr-lab.com/star-forge.jpg")
    );
    assert_eq!(novel.summary, "Metal, stars and stubbornness.");
    assert_eq!(novel.author, "Lin Feng");
    assert_eq!(novel.status, "Completed");
    assert_eq!(novel.genres, "Sci-fi,Drama");

    // 路径取自 serie_data，而非章节条目自身的 id
    let chapters: Vec<_> = novel
        .chapters
        .iter()
        .map(|c| (c.chapter_number, c.path.as_str(), c.name.as_str()))
        .collect();
    assert_eq!(
        chapters,
        [
            (1, "en/serie-1234/star-forge/chapter-1", "Arrival"),
            (2, "en/serie-1234/star-forge/chapter-2", "Descent"),
            (3, "en/serie-1234/star-forge/chapter-10", "Skip Ahead"),
        ]
    );

    let dates: Vec<_> = novel
        .chapters
        .iter()
        .map(|c| c.release_time.map(|d| d.to_string()))
        .collect();
    assert_eq!(
        dates,
        [Some("2023-11-02".to_string()), Some("2023-11-09".to_string()), None]
    );
}

#[tokio::test]
async fn test_novel_detail_without_serie_is_a_schema_violation() {
    let mock_server = MockServer::start().await;
    let state = json!({
        "props": { "pageProps": { "series": [], "daily": [], "trending": [] }, "__N_SSP": true },
        "page": "/[locale]"
    });

    Mock::given(method("GET"))
        .and(path("/en/serie-9/gone"))
        .respond_with(html(helpers::next_page(helpers::DETAIL_BODY, &state)))
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let result = site.parse_novel("en/serie-9/gone").await;

    match result {
        Err(SourceError::SchemaViolation(path)) => assert_eq!(path, "props.pageProps.serie"),
        other => panic!("Expected schema violation, got {other:?}"),
    }
}

#[tokio::test]
async fn test_novel_detail_not_found_is_a_transport_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/serie-404/missing"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let err = site.parse_novel("en/serie-404/missing").await.unwrap_err();

    assert!(err.is_transport());
    assert_eq!(err.status().map(|s| s.as_u16()), Some(404));
}

#[tokio::test]
async fn test_chapter_body_is_reconstructed_from_segments() {
    let mock_server = MockServer::start().await;
    let state = json!({
        "props": {
            "pageProps": {
                "serie": {
                    "serie_data": { "raw_id": 1234, "slug": "star-forge" },
                    "chapter_data": {
                        "data": {
                            "title": "Arrival",
                            "body": serde_json::to_string(&["Hello", "World"]).unwrap()
                        }
                    }
                }
            }
        },
        "page": "/[locale]/serie-[raw_id]/[slug]/[chapter_slug]"
    });

    Mock::given(method("GET"))
        .and(path("/en/serie-1234/star-forge/chapter-1"))
        .respond_with(html(helpers::next_page("<div id=\"__next\"></div>", &state)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let content = site
        .parse_chapter("en/serie-1234/star-forge/chapter-1")
        .await
        .unwrap();

    assert_eq!(content, "<p>Hello</p><p>World</p>");
}

#[tokio::test]
async fn test_chapter_without_state_block_fails() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/en/serie-1/x/chapter-1"))
        .respond_with(html("<html><body><p>Just a moment...</p></body></html>".into()))
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let result = site.parse_chapter("en/serie-1/x/chapter-1").await;

    assert!(matches!(result, Err(SourceError::MissingElement(_))));
}

#[tokio::test]
async fn test_chapter_without_body_is_a_schema_violation() {
    let mock_server = MockServer::start().await;
    let state = json!({
        "props": { "pageProps": { "serie": { "chapter_data": { "data": { "title": "Locked" } } } } }
    });

    Mock::given(method("GET"))
        .and(path("/en/serie-1/x/chapter-2"))
        .respond_with(html(helpers::next_page("", &state)))
        .mount(&mock_server)
        .await;

    let site = helpers::test_site(&mock_server);
    let result = site.parse_chapter("en/serie-1/x/chapter-2").await;

    assert!(matches!(result, Err(SourceError::SchemaViolation(_))));
}

#[tokio::test]
async fn test_paths_pointing_at_another_host_are_refused() {
    let site_server = MockServer::start().await;
    let other_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(html(helpers::next_page(
            helpers::DETAIL_BODY,
            &helpers::detail_state(),
        )))
        .expect(0)
        .mount(&other_server)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&site_server)
        .await;

    let site = helpers::test_site(&site_server);
    let host = other_server.uri().trim_start_matches("http:").to_string();

    let novel = site
        .parse_novel(&format!("{host}/en/serie-1234/star-forge"))
        .await;
    assert!(matches!(novel, Err(SourceError::Resolution { .. })));

    let chapter = site
        .parse_chapter(&format!("{}/en/serie-1234/star-forge/chapter-1", other_server.uri()))
        .await;
    assert!(matches!(chapter, Err(SourceError::Resolution { .. })));
}
