//! Build-time configuration

use smiles_core::SiteConfig;

/// Backend base URL baked in when the bundle is built
const BACKEND_URL: Option<&str> = option_env!("BACKEND_URL");

/// Resolve the site config, falling back to defaults on a bad URL
pub fn site_config() -> SiteConfig {
    SiteConfig::new(BACKEND_URL).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Ignoring backend URL");
        SiteConfig::default()
    })
}

pub fn log_startup(config: &SiteConfig) {
    match config.leads_endpoint() {
        Some(endpoint) => tracing::info!(%endpoint, "Lead backend configured but not used; submissions are logged locally"),
        None => tracing::info!("No lead backend configured; submissions are logged locally"),
    }
}
