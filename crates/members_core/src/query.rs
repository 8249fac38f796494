use url::Url;

/// Appends the query suffix to the base URL verbatim.
///
/// No separator is inserted and nothing is percent-encoded, so the base is
/// expected to end with `/` and the suffix to be ready for the wire.
pub fn build_query_url(base_url: &str, query: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + query.len());
    url.push_str(base_url);
    url.push_str(query);
    url
}

/// Resolves a profile link against the directory base URL.
///
/// Absolute references pass through unchanged. If the reference cannot be
/// joined it is returned as written.
pub fn resolve_profile_url(base: &Url, reference: &str) -> String {
    match base.join(reference) {
        Ok(url) => url.into(),
        Err(_) => reference.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{build_query_url, resolve_profile_url};
    use url::Url;

    fn base() -> Url {
        Url::parse("https://www.ourcommons.ca/Members/en/").unwrap()
    }

    #[test]
    fn query_is_concatenated_without_encoding() {
        let url = build_query_url(
            "https://www.ourcommons.ca/Members/en/",
            "search?caucusId=all&province=all&gender=F",
        );
        assert_eq!(
            url,
            "https://www.ourcommons.ca/Members/en/search?caucusId=all&province=all&gender=F"
        );
    }

    #[test]
    fn root_relative_profile_joins_host() {
        assert_eq!(
            resolve_profile_url(&base(), "/Members/en/a"),
            "https://www.ourcommons.ca/Members/en/a"
        );
    }

    #[test]
    fn path_relative_profile_joins_directory() {
        assert_eq!(
            resolve_profile_url(&base(), "ziad-aboultaif(89156)"),
            "https://www.ourcommons.ca/Members/en/ziad-aboultaif(89156)"
        );
    }

    #[test]
    fn absolute_profile_passes_through() {
        assert_eq!(
            resolve_profile_url(&base(), "https://example.org/mp/1"),
            "https://example.org/mp/1"
        );
    }
}
