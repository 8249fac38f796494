use std::path::PathBuf;

use members_core::Gender;
use members_engine::{CollisionPolicy, FetchSettings, TileMarkers};

/// One gender-filtered directory search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilter {
    pub gender: Gender,
    /// Appended verbatim to `PipelineConfig::base_url`.
    pub query: String,
}

/// Everything the pipeline needs. `Default` is the live House of Commons
/// directory; the binary never changes it.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub base_url: String,
    pub image_host: String,
    /// Run in order; records are concatenated in the same order.
    pub searches: Vec<SearchFilter>,
    pub output_file: PathBuf,
    pub image_dir: PathBuf,
    pub markers: TileMarkers,
    pub collision: CollisionPolicy,
    pub fetch: FetchSettings,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.ourcommons.ca/Members/en/".to_string(),
            image_host: "https://www.ourcommons.ca/".to_string(),
            searches: vec![
                SearchFilter {
                    gender: Gender::Male,
                    query: "search?caucusId=all&province=all&gender=M".to_string(),
                },
                SearchFilter {
                    gender: Gender::Female,
                    query: "search?caucusId=all&province=all&gender=F".to_string(),
                },
            ],
            output_file: PathBuf::from("main.html"),
            image_dir: PathBuf::from("output"),
            markers: TileMarkers::default(),
            collision: CollisionPolicy::Overwrite,
            fetch: FetchSettings::default(),
        }
    }
}
