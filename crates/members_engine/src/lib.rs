//! Members engine: fetching, extraction and file output for the directory scrape.
mod collect;
mod decode;
mod download;
mod extract;
mod fetch;
mod filename;
mod persist;
mod types;

pub use collect::{extract_members, fetch_members, CollectError, MemberQuery};
pub use decode::{decode_html, DecodedHtml};
pub use download::{download_images, DownloadError, DownloadSummary};
pub use extract::{ExtractError, Field, TileMarkers, TileSchema};
pub use fetch::{fetch_page, FetchSettings, FetchedPage, Fetcher, ReqwestFetcher};
pub use filename::{disambiguated_filename, image_filename, CollisionPolicy};
pub use persist::{ensure_output_dir, save_html, write_bytes, PersistError};
pub use types::{FailureKind, FetchError, FetchMetadata, FetchOutput};
