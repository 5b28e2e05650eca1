//! Site Configuration

use url::Url;

use crate::error::{Result, SiteError};

/// Environment variable naming the optional lead backend
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Runtime configuration for the landing page
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SiteConfig {
    /// Base URL of a lead backend. Nothing is sent to it yet.
    pub backend_url: Option<Url>,
}

impl SiteConfig {
    /// Build from a raw base URL; blank means unset
    pub fn new(backend_url: Option<&str>) -> Result<Self> {
        let backend_url = match backend_url.map(str::trim).filter(|s| !s.is_empty()) {
            None => None,
            Some(raw) => {
                let url = Url::parse(raw)
                    .map_err(|e| SiteError::Config(format!("{BACKEND_URL_VAR}={raw:?}: {e}")))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(SiteError::Config(format!(
                        "{BACKEND_URL_VAR} must be http or https, got {}",
                        url.scheme()
                    )));
                }
                Some(url)
            }
        };

        Ok(Self { backend_url })
    }

    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let raw = std::env::var(BACKEND_URL_VAR).ok();
        Self::new(raw.as_deref())
    }

    /// Where leads would be posted once a backend exists
    pub fn leads_endpoint(&self) -> Option<String> {
        self.backend_url
            .as_ref()
            .map(|base| format!("{}/leads", base.as_str().trim_end_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_and_blank() {
        assert_eq!(SiteConfig::new(None).unwrap(), SiteConfig::default());
        assert_eq!(SiteConfig::new(Some("  ")).unwrap().backend_url, None);
        assert_eq!(SiteConfig::default().leads_endpoint(), None);
    }

    #[test]
    fn test_leads_endpoint() {
        let config = SiteConfig::new(Some("https://api.wescalesmiles.com/")).unwrap();
        assert_eq!(
            config.leads_endpoint().as_deref(),
            Some("https://api.wescalesmiles.com/leads")
        );

        let nested = SiteConfig::new(Some("http://localhost:8000/v1")).unwrap();
        assert_eq!(nested.leads_endpoint().as_deref(), Some("http://localhost:8000/v1/leads"));
    }

    #[test]
    fn test_rejects_bad_urls() {
        assert!(matches!(SiteConfig::new(Some("not a url")), Err(SiteError::Config(_))));
        assert!(matches!(SiteConfig::new(Some("ftp://files.example")), Err(SiteError::Config(_))));
    }
}
