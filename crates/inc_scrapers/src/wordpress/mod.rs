pub mod client;
pub mod retry;

pub use client::WordPressClient;
pub use retry::RetryPolicy;
