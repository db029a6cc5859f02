pub mod config;
pub mod error;
pub mod logging;
pub mod source;
pub mod text;
pub mod types;

pub use error::{Error, Result};
pub use source::{PostQuery, PostSource};
pub use text::normalize;
pub use types::{ArticleRecord, RecordId, Severity, WpPost};
