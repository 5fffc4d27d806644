use std::collections::HashMap;

use crate::core::config::SiteConfig;
use crate::core::error::{Result, SourceError};
use crate::interfaces::Site;
use crate::network::context::ServiceContext;

pub mod wtrlab;

// ============================================================================
// 站点注册表
// ============================================================================

type SiteFactory = Box<dyn Fn(SiteConfig, ServiceContext) -> Result<Box<dyn Site>> + Send + Sync>;

pub struct SiteRegistry {
    factories: HashMap<String, SiteFactory>,
}

impl SiteRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            factories: HashMap::new(),
        };
        registry.register("wtrlab", |cfg, ctx| {
            Ok(Box::new(wtrlab::WtrLab::new(cfg, ctx)?))
        });
        registry
    }

    pub fn register<F>(&mut self, id: &str, factory: F)
    where
        F: Fn(SiteConfig, ServiceContext) -> Result<Box<dyn Site>> + Send + Sync + 'static,
    {
        self.factories.insert(id.to_string(), Box::new(factory));
    }

    pub fn create(&self, id: &str, config: SiteConfig, ctx: ServiceContext) -> Result<Box<dyn Site>> {
        let factory = self
            .factories
            .get(id)
            .ok_or_else(|| SourceError::UnknownSite(id.to_string()))?;
        factory(config, ctx)
    }

    pub fn list(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for SiteRegistry {
    fn default() -> Self {
        Self::new()
    }
}
