//! Building the report endpoint URL from configuration.

use url::Url;

/// Errors raised while building an endpoint URL.
#[derive(Debug, thiserror::Error)]
pub enum EndpointError {
    #[error("Invalid base URL: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("Base URL cannot carry a path")]
    CannotBeABase,
}

/// Appends `path` to the path of `base`.
///
/// Unlike [`Url::join`], an absolute `path` does not replace a path prefix
/// already present on `base`, so `http://reports/api` + `/bootcamp-reports`
/// becomes `http://reports/api/bootcamp-reports`. Query and fragment of the
/// base are dropped.
///
/// # Errors
///
/// Returns [`EndpointError::InvalidFormat`] for malformed base URLs.
/// Returns [`EndpointError::UnsupportedProtocol`] for non-HTTP(S) schemes.
pub fn join_endpoint(base: &str, path: &str) -> Result<Url, EndpointError> {
    let mut url = Url::parse(base).map_err(|e| EndpointError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(EndpointError::UnsupportedProtocol),
    }

    url.set_query(None);
    url.set_fragment(None);

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    url.path_segments_mut()
        .map_err(|_| EndpointError::CannotBeABase)?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}
