use momentum::{PanelCache, PositionProvider};
use momentum_config::Settings;
use std::sync::Arc;
use std::time::Duration;

/// Shared by every request handler
pub struct AppState {
    pub settings: Settings,
    pub provider: Arc<dyn PositionProvider>,
    pub cache: PanelCache,
}

impl AppState {
    pub fn new(settings: Settings, provider: Arc<dyn PositionProvider>) -> Self {
        let cache = PanelCache::new(
            settings.panel.cache_capacity,
            Duration::from_secs(settings.panel.cache_ttl_secs),
        );
        Self {
            settings,
            provider,
            cache,
        }
    }

    /// Request birth time, or the configured default when absent or empty
    pub fn birth_time<'a>(&'a self, requested: Option<&'a str>) -> &'a str {
        requested
            .filter(|t| !t.is_empty())
            .unwrap_or(&self.settings.chart.default_birth_time)
    }
}
