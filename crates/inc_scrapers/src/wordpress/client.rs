use async_trait::async_trait;
use inc_core::config::ScraperConfig;
use inc_core::{Error, PostQuery, PostSource, Result, WpPost};
use reqwest::{Client, StatusCode};
use url::Url;

use super::retry::RetryPolicy;

/// Reads posts from the WordPress REST API (`/wp-json/wp/v2/posts`).
#[derive(Debug, Clone)]
pub struct WordPressClient {
    client: Client,
    posts_url: Url,
    retry: RetryPolicy,
}

impl WordPressClient {
    pub fn new(config: &ScraperConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(config.timeout)
            .build()?;
        Ok(Self {
            client,
            posts_url: posts_url(&config.api_base)?,
            retry: RetryPolicy::from_config(config),
        })
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    pub fn posts_url(&self) -> &Url {
        &self.posts_url
    }
}

fn posts_url(api_base: &str) -> Result<Url> {
    let raw = format!("{}/posts", api_base.trim_end_matches('/'));
    Url::parse(&raw).map_err(|e| Error::Scraping(format!("Failed to parse URL {}: {}", raw, e)))
}

/// Query string of one listing page, newest posts first.
pub fn query_params(query: &PostQuery, page: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("per_page", query.per_page.to_string()),
        ("page", page.to_string()),
        ("orderby", "date".to_string()),
        ("order", "desc".to_string()),
    ];
    if let Some(search) = &query.search {
        params.push(("search", search.clone()));
    }
    if !query.tags.is_empty() {
        params.push(("tags", join_ids(&query.tags)));
    }
    if !query.categories.is_empty() {
        params.push(("categories", join_ids(&query.categories)));
    }
    if let Some(after) = &query.after {
        params.push(("after", after.clone()));
    }
    if let Some(before) = &query.before {
        params.push(("before", before.clone()));
    }
    if query.embed {
        params.push(("_embed", "1".to_string()));
    }
    params
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter().map(|id| id.to_string()).collect::<Vec<_>>().join(",")
}

#[async_trait]
impl PostSource for WordPressClient {
    fn name(&self) -> &str {
        self.posts_url.host_str().unwrap_or("wordpress")
    }

    async fn fetch_page(&self, query: &PostQuery, page: u32) -> Result<Vec<WpPost>> {
        let params = query_params(query, page);
        let mut retries = 0;
        loop {
            tracing::debug!("GET {} page {} ({})", self.posts_url, page, query.describe());
            let response = match self.client.get(self.posts_url.clone()).query(&params).send().await {
                Ok(response) => response,
                Err(e) if (e.is_connect() || e.is_timeout()) && self.retry.should_retry(retries) => {
                    retries += 1;
                    let delay = self.retry.delay_for(retries);
                    tracing::warn!("Request failed ({}), retry {} in {:?}", e, retries, delay);
                    tokio::time::sleep(delay).await;
                    continue;
                }
                Err(e) => return Err(e.into()),
            };

            let status = response.status();
            if RetryPolicy::is_retryable(status.as_u16()) {
                if self.retry.should_retry(retries) {
                    retries += 1;
                    let delay = self.retry.delay_for(retries);
                    tracing::warn!("HTTP {} from {}, retry {} in {:?}", status, self.posts_url, retries, delay);
                    tokio::time::sleep(delay).await;
                    continue;
                }
                return Err(Error::TransientFetch {
                    status: status.as_u16(),
                    attempts: retries + 1,
                });
            }

            // WordPress answers 400 once `page` is past the last one.
            if status == StatusCode::BAD_REQUEST && page > 1 {
                tracing::debug!("Page {} is past the end of the listing", page);
                return Ok(Vec::new());
            }

            let response = response.error_for_status()?;
            return Ok(response.json::<Vec<WpPost>>().await?);
        }
    }
}
