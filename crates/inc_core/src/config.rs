//! Site constants and harvester defaults.

use std::time::Duration;

pub const BASE_URL: &str = "https://coratolive.it";
pub const WP_API_BASE: &str = "https://coratolive.it/wp-json/wp/v2";
pub const USER_AGENT: &str = "IncidentiScraper/0.1 (+https://github.com/)";

pub const DEFAULT_KEYWORDS: &[&str] = &[
    "incidente",
    "sinistro",
    "tamponamento",
    "investimento",
    "scontro",
    "travolto",
    "schianto",
    "ribaltamento",
    "feriti",
    "morto",
];

/// WordPress tag id of "incidente" on the site.
pub const INCIDENT_TAG_ID: u32 = 242;

#[derive(Debug, Clone)]
pub struct ScraperConfig {
    pub api_base: String,
    pub user_agent: String,
    pub throttle: Duration,
    pub timeout: Duration,
    pub per_page: u32,
    pub max_retries: u32,
    pub backoff: Duration,
    pub max_backoff: Duration,
    pub keywords: Vec<String>,
    pub incident_tag_id: u32,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            api_base: WP_API_BASE.to_string(),
            user_agent: USER_AGENT.to_string(),
            throttle: Duration::from_millis(500),
            timeout: Duration::from_secs(90),
            per_page: 100,
            max_retries: 7,
            backoff: Duration::from_secs(1),
            max_backoff: Duration::from_secs(120),
            keywords: DEFAULT_KEYWORDS.iter().map(|k| k.to_string()).collect(),
            incident_tag_id: INCIDENT_TAG_ID,
        }
    }
}

impl ScraperConfig {
    /// Points the client at another WordPress site, `base_url` being its home page.
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.api_base = format!("{}/wp-json/wp/v2", base_url.trim_end_matches('/'));
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ScraperConfig::default();
        assert_eq!(config.api_base, WP_API_BASE);
        assert_eq!(config.keywords.len(), DEFAULT_KEYWORDS.len());
        assert_eq!(config.incident_tag_id, 242);
        assert!(WP_API_BASE.starts_with(BASE_URL));
    }

    #[test]
    fn test_with_base_url() {
        let config = ScraperConfig::default().with_base_url("https://example.org/");
        assert_eq!(config.api_base, "https://example.org/wp-json/wp/v2");
    }
}
