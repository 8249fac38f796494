use log::LevelFilter;
use members_app::{run_pipeline, PipelineConfig};
use members_logging::members_info;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    members_logging::initialize_terminal(LevelFilter::Info);

    let summary = run_pipeline(&PipelineConfig::default()).await?;
    members_info!(
        "Done: {} members, {} images",
        summary.records.len(),
        summary.images.written
    );
    Ok(())
}
