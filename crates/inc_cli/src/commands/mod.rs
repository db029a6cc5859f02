pub mod clean;
pub mod metrics;
pub mod pipeline;

pub use clean::CleanArgs;
pub use metrics::MetricsArgs;
pub use pipeline::PipelineArgs;
