use members_core::{build_query_url, Gender, MemberRecord};
use members_logging::{members_debug, members_info, members_warn};
use scraper::Html;
use thiserror::Error;

use crate::extract::{ExtractError, TileSchema};
use crate::fetch::{fetch_page, Fetcher};
use crate::FetchError;

#[derive(Debug, Error)]
pub enum CollectError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] FetchError),
    #[error("tile {index} could not be read: {source}")]
    Extract {
        index: usize,
        #[source]
        source: ExtractError,
    },
}

/// One filtered directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberQuery {
    pub base_url: String,
    pub query: String,
    pub gender: Gender,
    pub image_host: String,
}

impl MemberQuery {
    pub fn url(&self) -> String {
        build_query_url(&self.base_url, &self.query)
    }
}

/// Extracts every tile of `html` in document order.
///
/// A document without tiles yields an empty list.
pub fn extract_members(
    html: &Html,
    schema: &TileSchema,
    gender: Gender,
    image_host: &str,
) -> Result<Vec<MemberRecord>, CollectError> {
    html.select(schema.tile_selector())
        .enumerate()
        .map(|(index, tile)| {
            schema
                .extract(tile, gender, image_host)
                .map_err(|source| CollectError::Extract { index, source })
        })
        .collect()
}

/// Fetches one search page and extracts its member tiles.
pub async fn fetch_members(
    fetcher: &dyn Fetcher,
    schema: &TileSchema,
    query: &MemberQuery,
) -> Result<Vec<MemberRecord>, CollectError> {
    let url = query.url();
    members_info!("Fetching {} members from {}", query.gender, url);

    let page = fetch_page(fetcher, &url).await?;
    let records = extract_members(&page.document(), schema, query.gender, &query.image_host)?;

    if records.is_empty() {
        members_warn!(
            "No tiles matching `{}` at {}",
            schema.markers().tile,
            page.metadata.final_url
        );
    }
    for record in &records {
        members_debug!("{} ({}, {})", record.name, record.party, record.constituency);
    }
    members_info!("Extracted {} {} members", records.len(), query.gender);
    Ok(records)
}
