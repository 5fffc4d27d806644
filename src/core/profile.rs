//! 站点档案 (Site Profile)
//!
//! 站点标识、版本、基准 URL 与源语言路径段的不可变集合，构造时注入各组件。

use url::Url;

use crate::core::error::{Result, SourceError};

#[derive(Debug, Clone)]
pub struct SiteProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub version: &'static str,
    /// 站点根地址，始终以 `/` 结尾
    pub base: Url,
    /// 源语言路径段，不含分隔符
    pub lang: String,
}

impl SiteProfile {
    pub fn new(
        id: &'static str,
        name: &'static str,
        version: &'static str,
        base_url: &str,
        lang: &str,
    ) -> Result<Self> {
        let mut base = Url::parse(base_url).map_err(|e| SourceError::resolution(base_url, e))?;
        if base.cannot_be_a_base() {
            return Err(SourceError::resolution(base_url, "not a hierarchical url"));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let lang = lang.trim_matches('/');
        if lang.is_empty() {
            return Err(SourceError::InvalidArgument(
                "source language segment must not be empty".into(),
            ));
        }

        Ok(Self {
            id,
            name,
            version,
            base,
            lang: lang.to_string(),
        })
    }

    /// 站点内某一路径的绝对地址
    pub fn url(&self, path: &str) -> Result<Url> {
        self.base
            .join(path)
            .map_err(|e| SourceError::resolution(path, e))
    }

    /// 站内相对路径的绝对地址
    ///
    /// 带协议、以 `//` 开头或解析后跳出本站的输入一律拒绝。
    pub fn page_url(&self, path: &str) -> Result<Url> {
        let trimmed = path.trim_start();
        if trimmed.starts_with("//")
            || trimmed.starts_with("\\\\")
            || Url::parse(trimmed).is_ok()
        {
            return Err(SourceError::resolution(path, "not a site-relative path"));
        }

        let url = self.url(trimmed)?;
        if url.origin() != self.base.origin() {
            return Err(SourceError::resolution(path, "resolves outside the site"));
        }
        Ok(url)
    }

    /// 语言首页，例如 `https://wtr-lab.com/en/`
    pub fn lang_root(&self) -> Result<Url> {
        self.url(&format!("{}/", self.lang))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_gets_a_trailing_separator() {
        let profile = SiteProfile::new("T", "Test", "0.0.1", "http://127.0.0.1:9000", "en").unwrap();
        assert_eq!(profile.base.as_str(), "http://127.0.0.1:9000/");
        assert_eq!(
            profile.lang_root().unwrap().as_str(),
            "http://127.0.0.1:9000/en/"
        );
    }

    #[test]
    fn lang_is_stored_without_separators() {
        let profile = SiteProfile::new("T", "Test", "0.0.1", "https://wtr-lab.com/", "/en/").unwrap();
        assert_eq!(profile.lang, "en");
        assert!(SiteProfile::new("T", "Test", "0.0.1", "https://wtr-lab.com/", "/").is_err());
    }

    #[test]
    fn page_url_stays_on_the_site() {
        let profile = SiteProfile::new("T", "Test", "0.0.1", "https://wtr-lab.com/", "en").unwrap();
        assert_eq!(
            profile.page_url("en/serie-5/foo").unwrap().as_str(),
            "https://wtr-lab.com/en/serie-5/foo"
        );
        assert_eq!(
            profile.page_url("/en/serie-5/foo").unwrap().as_str(),
            "https://wtr-lab.com/en/serie-5/foo"
        );

        for foreign in [
            "//evil.example/x",
            "https://evil.example/x",
            "https://wtr-lab.com/en/serie-5/foo",
            "\\\\evil.example/x",
            "javascript:alert(1)",
        ] {
            assert!(
                matches!(profile.page_url(foreign), Err(SourceError::Resolution { .. })),
                "{foreign} was accepted"
            );
        }
    }

    #[test]
    fn malformed_base_is_rejected() {
        assert!(SiteProfile::new("T", "Test", "0.0.1", "not a url", "en").is_err());
    }
}
