use async_trait::async_trait;

use crate::types::WpPost;
use crate::Result;

/// Parameters of one paginated post listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostQuery {
    pub search: Option<String>,
    pub tags: Vec<u32>,
    pub categories: Vec<u32>,
    pub after: Option<String>,
    pub before: Option<String>,
    pub per_page: u32,
    pub max_pages: Option<u32>,
    pub embed: bool,
}

impl Default for PostQuery {
    fn default() -> Self {
        Self {
            search: None,
            tags: Vec::new(),
            categories: Vec::new(),
            after: None,
            before: None,
            per_page: 100,
            max_pages: None,
            embed: true,
        }
    }
}

impl PostQuery {
    pub fn search(term: &str) -> Self {
        Self {
            search: Some(term.to_string()),
            ..Default::default()
        }
    }

    pub fn tag(tag_id: u32) -> Self {
        Self {
            tags: vec![tag_id],
            ..Default::default()
        }
    }

    /// `Some(0)` means no ceiling, same as `None`.
    pub fn with_max_pages(mut self, max_pages: Option<u32>) -> Self {
        self.max_pages = max_pages.filter(|&max| max > 0);
        self
    }

    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    pub fn describe(&self) -> String {
        match (&self.search, self.tags.as_slice()) {
            (Some(term), _) => format!("keyword '{}'", term),
            (None, []) => "all posts".to_string(),
            (None, tags) => format!(
                "tag {}",
                tags.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(",")
            ),
        }
    }
}

#[async_trait]
pub trait PostSource: Send + Sync {
    /// Human readable name of the site
    fn name(&self) -> &str;

    /// Fetch one page (1-based) of posts matching `query`.
    ///
    /// An empty page means the listing is exhausted.
    async fn fetch_page(&self, query: &PostQuery, page: u32) -> Result<Vec<WpPost>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_builders() {
        let q = PostQuery::search("schianto").with_max_pages(Some(3));
        assert_eq!(q.search.as_deref(), Some("schianto"));
        assert_eq!(q.max_pages, Some(3));
        assert_eq!(q.per_page, 100);
        assert!(q.embed);
        assert_eq!(q.describe(), "keyword 'schianto'");

        let q = PostQuery::tag(242).with_per_page(0);
        assert_eq!(q.tags, vec![242]);
        assert_eq!(q.per_page, 1);
        assert_eq!(q.describe(), "tag 242");
        assert_eq!(PostQuery::default().describe(), "all posts");
    }

    #[test]
    fn test_zero_max_pages_is_unlimited() {
        assert_eq!(PostQuery::tag(242).with_max_pages(Some(0)).max_pages, None);
        assert_eq!(PostQuery::tag(242).with_max_pages(Some(1)).max_pages, Some(1));
    }
}
