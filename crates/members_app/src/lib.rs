//! Members app: fixed configuration and the scrape-render-download pipeline.
mod config;
mod pipeline;

pub use config::{PipelineConfig, SearchFilter};
pub use pipeline::{run_pipeline, run_with_fetcher, RunSummary};
