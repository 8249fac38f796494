use std::path::PathBuf;

use anyhow::{Context, Result};
use members_core::{render_table, MemberRecord};
use members_engine::{
    download_images, fetch_members, save_html, DownloadSummary, Fetcher, MemberQuery,
    ReqwestFetcher, TileSchema,
};
use members_logging::members_info;
use url::Url;

use crate::PipelineConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub records: Vec<MemberRecord>,
    pub html_path: PathBuf,
    pub images: DownloadSummary,
}

/// Runs the whole scrape against the network with a fresh HTTP client.
pub async fn run_pipeline(config: &PipelineConfig) -> Result<RunSummary> {
    let fetcher = ReqwestFetcher::new(config.fetch.clone()).context("building HTTP client")?;
    run_with_fetcher(&fetcher, config).await
}

/// Fetches every search, renders and saves the table, then downloads images.
///
/// Nothing is written until all searches have been extracted.
pub async fn run_with_fetcher(fetcher: &dyn Fetcher, config: &PipelineConfig) -> Result<RunSummary> {
    let base_url = Url::parse(&config.base_url)
        .with_context(|| format!("invalid base url {}", config.base_url))?;
    let schema = TileSchema::compile(&config.markers).context("compiling tile markers")?;

    let mut records = Vec::new();
    for search in &config.searches {
        let query = MemberQuery {
            base_url: config.base_url.clone(),
            query: search.query.clone(),
            gender: search.gender,
            image_host: config.image_host.clone(),
        };
        let batch = fetch_members(fetcher, &schema, &query)
            .await
            .with_context(|| format!("collecting {} members from {}", search.gender, query.url()))?;
        records.extend(batch);
    }

    let table = render_table(&records, &base_url);
    let html_path = save_html(&table, &config.output_file)
        .with_context(|| format!("saving table to {}", config.output_file.display()))?;
    members_info!(
        "Wrote {} members to {}",
        records.len(),
        html_path.display()
    );

    let images = download_images(fetcher, &records, &config.image_dir, config.collision)
        .await
        .with_context(|| format!("downloading images into {}", config.image_dir.display()))?;

    Ok(RunSummary {
        records,
        html_path,
        images,
    })
}
