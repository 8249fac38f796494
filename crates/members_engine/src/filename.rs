use sha2::{Digest, Sha256};

use crate::download::DownloadError;

/// What to do when two images in one run map to the same file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CollisionPolicy {
    /// Later image replaces the earlier file; each collision is logged.
    #[default]
    Overwrite,
    /// Later image gets a short hash of its URL inserted before the extension.
    Disambiguate,
}

/// File name for an image: everything after the last `/` of its URL.
pub fn image_filename(url: &str) -> Result<String, DownloadError> {
    let name = url.rsplit('/').next().unwrap_or_default();
    if name.is_empty() || name == "." || name == ".." || name.contains('\\') {
        return Err(DownloadError::InvalidFilename {
            url: url.to_string(),
        });
    }
    Ok(name.to_string())
}

/// `{stem}--{short_hash(url)}.{ext}`, keeping the extension last.
pub fn disambiguated_filename(name: &str, url: &str) -> String {
    let hash = short_hash(url);
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => format!("{stem}--{hash}.{ext}"),
        _ => format!("{name}--{hash}"),
    }
}

fn short_hash(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let mut hex = String::with_capacity(8);
    for byte in digest.iter().take(4) {
        use std::fmt::Write;
        let _ = write!(&mut hex, "{byte:02x}");
    }
    hex
}

#[cfg(test)]
mod tests {
    use super::{disambiguated_filename, image_filename};

    #[test]
    fn takes_final_path_segment() {
        assert_eq!(
            image_filename("https://www.ourcommons.ca//content/photo123.jpg").unwrap(),
            "photo123.jpg"
        );
    }

    #[test]
    fn query_string_stays_in_name() {
        assert_eq!(
            image_filename("https://host/a/b.png?v=2").unwrap(),
            "b.png?v=2"
        );
    }

    #[test]
    fn trailing_slash_and_dot_segments_are_rejected() {
        assert!(image_filename("https://host/images/").is_err());
        assert!(image_filename("https://host/images/..").is_err());
    }

    #[test]
    fn disambiguation_is_stable_and_keeps_extension() {
        let a = disambiguated_filename("photo.jpg", "https://host/a/photo.jpg");
        let b = disambiguated_filename("photo.jpg", "https://host/b/photo.jpg");
        assert!(a.starts_with("photo--") && a.ends_with(".jpg"));
        assert_eq!(a.len(), "photo--".len() + 8 + ".jpg".len());
        assert_ne!(a, b);
        assert_eq!(a, disambiguated_filename("photo.jpg", "https://host/a/photo.jpg"));
        assert!(disambiguated_filename("README", "u").starts_with("README--"));
    }
}
