//! Harvesting of accident news from the WordPress REST API.

pub mod collector;
pub mod features;
pub mod pager;
pub mod wordpress;

pub use collector::{collect_incidents, CollectOptions};
pub use features::{detect_locations, extract_date_parts, flag_keywords, post_to_record, strip_html};
pub use pager::{collect_posts, post_stream};
pub use wordpress::{RetryPolicy, WordPressClient};
