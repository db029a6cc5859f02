use std::collections::BTreeMap;
use std::time::Duration;

use futures::StreamExt;
use inc_core::config::ScraperConfig;
use inc_core::logging::Logger;
use inc_core::text::normalize;
use inc_core::{ArticleRecord, PostQuery, PostSource, WpPost};

use crate::features::{post_to_record, strip_html};
use crate::pager::post_stream;

/// What to harvest and how much of it.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub keywords: Vec<String>,
    pub tag_id: u32,
    pub max_pages: Option<u32>,
    pub limit: Option<usize>,
    pub per_page: u32,
    pub throttle: Duration,
}

impl CollectOptions {
    pub fn from_config(config: &ScraperConfig) -> Self {
        Self {
            keywords: config.keywords.clone(),
            tag_id: config.incident_tag_id,
            max_pages: None,
            limit: None,
            per_page: config.per_page,
            throttle: config.throttle,
        }
    }

    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages.filter(|&max| max > 0);
        self
    }

    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    fn query(&self, query: PostQuery) -> PostQuery {
        query.with_per_page(self.per_page).with_max_pages(self.max_pages)
    }
}

/// A keyword hit counts when the post talks about accidents or repeats the keyword.
fn is_relevant(post: &WpPost, keyword: &str) -> bool {
    let text = normalize(&format!(
        "{} {}",
        strip_html(&post.title.rendered),
        strip_html(&post.content.rendered)
    ));
    text.contains("inciden") || text.contains(normalize(keyword).as_str())
}

/// Harvests tagged posts plus keyword search hits, newest first.
pub async fn collect_incidents(source: &dyn PostSource, options: &CollectOptions) -> Vec<ArticleRecord> {
    let logger = Logger::new().with_prefix("[collect]".to_string());
    let mut posts: BTreeMap<i64, WpPost> = BTreeMap::new();

    let tag_query = options.query(PostQuery::tag(options.tag_id));
    logger.info(&format!(
        "Fetching {} from {} (max pages: {})",
        tag_query.describe(),
        source.name(),
        describe_limit(options.max_pages)
    ));
    let before = posts.len();
    let mut stream = Box::pin(post_stream(source, tag_query, options.throttle));
    while let Some(post) = stream.next().await {
        posts.insert(post.id, post);
    }
    logger.info(&format!("  -> {} new posts with the incident tag", posts.len() - before));

    for keyword in &options.keywords {
        let query = options.query(PostQuery::search(keyword));
        logger.info(&format!("Fetching {}", query.describe()));
        let before = posts.len();
        let mut stream = Box::pin(post_stream(source, query, options.throttle));
        while let Some(post) = stream.next().await {
            if is_relevant(&post, keyword) {
                posts.insert(post.id, post);
            }
        }
        logger.info(&format!("  -> {} new posts for keyword '{}'", posts.len() - before, keyword));
    }
    logger.info(&format!("Total posts: {}", posts.len()));

    let mut records: Vec<ArticleRecord> = posts
        .values()
        .filter_map(|post| match post_to_record(post, &options.keywords) {
            Ok(record) => Some(record),
            Err(e) => {
                logger.warn(&format!("Skipping post {}: {}", post.id, e));
                None
            }
        })
        .collect();

    records.sort_by(|a, b| (&b.date, &b.id).cmp(&(&a.date, &a.id)));
    if let Some(limit) = options.limit {
        records.truncate(limit);
    }
    records
}

fn describe_limit(max_pages: Option<u32>) -> String {
    max_pages.map_or_else(|| "unlimited".to_string(), |n| n.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use inc_core::{RecordId, Result};
    use std::collections::HashMap;

    /// Answers the tag listing and each search term from a fixed table.
    struct SiteFixture {
        tagged: Vec<WpPost>,
        searches: HashMap<String, Vec<WpPost>>,
    }

    #[async_trait]
    impl PostSource for SiteFixture {
        fn name(&self) -> &str {
            "fixture"
        }

        async fn fetch_page(&self, query: &PostQuery, page: u32) -> Result<Vec<WpPost>> {
            if page > 1 {
                return Ok(Vec::new());
            }
            Ok(match &query.search {
                Some(term) => self.searches.get(term).cloned().unwrap_or_default(),
                None => self.tagged.clone(),
            })
        }
    }

    fn post(id: i64, date: &str, title: &str) -> WpPost {
        let mut post = WpPost {
            id,
            date: date.to_string(),
            ..Default::default()
        };
        post.title.rendered = title.to_string();
        post
    }

    fn options() -> CollectOptions {
        CollectOptions {
            keywords: vec!["schianto".to_string(), "travolto".to_string()],
            tag_id: 242,
            max_pages: Some(1),
            limit: None,
            per_page: 100,
            throttle: Duration::ZERO,
        }
    }

    fn fixture() -> SiteFixture {
        SiteFixture {
            tagged: vec![
                post(1, "2024-01-10T08:00:00", "Incidente sulla SP 231"),
                post(2, "2024-02-01T08:00:00", "Tamponamento in via Roma"),
            ],
            searches: HashMap::from([
                (
                    "schianto".to_string(),
                    vec![
                        post(2, "2024-02-01T08:00:00", "Tamponamento in via Roma"),
                        post(3, "2024-03-05T08:00:00", "Schianto all'alba"),
                        post(4, "2024-03-06T08:00:00", "Mercato settimanale"),
                    ],
                ),
                (
                    "travolto".to_string(),
                    vec![
                        post(5, "2024-03-06T08:00:00", "Pedone travolto"),
                        post(6, "non una data", "Incidente senza data"),
                    ],
                ),
            ]),
        }
    }

    fn ids(records: &[ArticleRecord]) -> Vec<RecordId> {
        records.iter().map(|r| r.id.clone()).collect()
    }

    #[tokio::test]
    async fn test_merges_dedups_and_sorts_newest_first() {
        let records = collect_incidents(&fixture(), &options()).await;
        assert_eq!(
            ids(&records),
            vec![RecordId::Int(5), RecordId::Int(3), RecordId::Int(2), RecordId::Int(1)]
        );
    }

    #[tokio::test]
    async fn test_limit() {
        let records = collect_incidents(&fixture(), &options().with_limit(Some(2))).await;
        assert_eq!(ids(&records), vec![RecordId::Int(5), RecordId::Int(3)]);
    }

    #[test]
    fn test_relevance_filter() {
        assert!(is_relevant(&post(1, "", "Grave incidente"), "scontro"));
        assert!(is_relevant(&post(1, "", "Scontro frontale"), "scontro"));
        assert!(!is_relevant(&post(1, "", "Mercato settimanale"), "scontro"));
    }

    #[test]
    fn test_options_from_config() {
        let options = CollectOptions::from_config(&ScraperConfig::default()).with_max_pages(Some(3));
        assert_eq!(options.tag_id, 242);
        assert_eq!(options.keywords.len(), 10);
        assert_eq!(options.max_pages, Some(3));
        assert_eq!(options.throttle, Duration::from_millis(500));
    }

    #[test]
    fn test_zero_max_pages_means_unlimited() {
        let options = CollectOptions::from_config(&ScraperConfig::default()).with_max_pages(Some(0));
        assert_eq!(options.max_pages, None);
        assert_eq!(describe_limit(options.max_pages), "unlimited");
    }
}
