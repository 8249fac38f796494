use std::collections::HashSet;
use std::path::{Path, PathBuf};

use members_core::MemberRecord;
use members_logging::{members_debug, members_info, members_warn};
use thiserror::Error;

use crate::fetch::Fetcher;
use crate::filename::{disambiguated_filename, image_filename, CollisionPolicy};
use crate::persist::{ensure_output_dir, write_bytes, PersistError};
use crate::FetchError;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("download of {url} failed: {source}")]
    Fetch {
        url: String,
        #[source]
        source: FetchError,
    },
    #[error("cannot derive a file name from {url}")]
    InvalidFilename { url: String },
    #[error(transparent)]
    Persist(#[from] PersistError),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DownloadSummary {
    /// Number of images fetched and written.
    pub written: usize,
    /// Number of images whose file name was already used in this run.
    pub collisions: usize,
    /// Distinct files on disk after the run, in first-written order.
    pub paths: Vec<PathBuf>,
}

/// Downloads every record's image into `dir`, one request at a time.
///
/// The directory and its parents are created if missing. The first failed
/// request (transport error or non-2xx status) aborts the remaining downloads.
pub async fn download_images(
    fetcher: &dyn Fetcher,
    records: &[MemberRecord],
    dir: &Path,
    policy: CollisionPolicy,
) -> Result<DownloadSummary, DownloadError> {
    ensure_output_dir(dir)?;

    let mut summary = DownloadSummary::default();
    let mut used: HashSet<String> = HashSet::new();

    for record in records {
        let url = record.image_url.as_str();
        let mut name = image_filename(url)?;

        let output = fetcher
            .fetch(url)
            .await
            .and_then(|output| output.require_success())
            .map_err(|source| DownloadError::Fetch {
                url: url.to_string(),
                source,
            })?;

        if used.contains(&name) {
            summary.collisions += 1;
            match policy {
                CollisionPolicy::Overwrite => {
                    members_warn!(
                        "{} overwrites {} already written in this run",
                        url,
                        name
                    );
                }
                CollisionPolicy::Disambiguate => {
                    let renamed = disambiguated_filename(&name, url);
                    members_warn!("{} collides on {}; saving as {}", url, name, renamed);
                    name = renamed;
                }
            }
        }

        let path = write_bytes(&output.bytes, &dir.join(&name))?;
        members_debug!("Saved {} ({} bytes)", path.display(), output.bytes.len());
        if used.insert(name) {
            summary.paths.push(path);
        }
        summary.written += 1;
    }

    members_info!(
        "Downloaded {} images into {} ({} name collisions)",
        summary.written,
        dir.display(),
        summary.collisions
    );
    Ok(summary)
}
