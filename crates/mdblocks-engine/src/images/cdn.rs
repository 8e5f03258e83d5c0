use log::{error, info, warn};
use serde::Deserialize;

use super::{ImageResolver, ResolveError, SECURE_SCHEME, with_scheme};

/// Fetches the body of a CDN request. The HTTP client lives with the caller.
pub trait CdnTransport {
    fn get(&self, request_url: &str) -> Result<String, ResolveError>;
}

impl<F> CdnTransport for F
where
    F: Fn(&str) -> Result<String, ResolveError>,
{
    fn get(&self, request_url: &str) -> Result<String, ResolveError> {
        self(request_url)
    }
}

#[derive(Deserialize)]
struct CdnResponse {
    url: Option<String>,
}

/// Rehosts images through a CDN reachable at `{base}/{image_url}`.
///
/// The CDN answers with JSON `{"url": "https://..."}`. Anything else, or a
/// transport failure, keeps the original URL.
pub struct CdnResolver<T> {
    base: String,
    transport: T,
}

impl<T: CdnTransport> CdnResolver<T> {
    pub fn new(base: impl Into<String>, transport: T) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
            transport,
        }
    }

    /// The request URL for an already scheme-normalized image URL.
    pub fn request_url(&self, image_url: &str) -> String {
        format!("{}/{}", self.base, image_url)
    }

    /// Asks the CDN for a rehosted URL without any fallback.
    pub fn try_resolve(&self, image_url: &str) -> Result<String, ResolveError> {
        let request_url = self.request_url(image_url);
        let body = self.transport.get(&request_url)?;
        let response: CdnResponse =
            serde_json::from_str(&body).map_err(|e| ResolveError::InvalidResponse {
                url: request_url.clone(),
                reason: e.to_string(),
            })?;
        let url = response.url.ok_or_else(|| ResolveError::InvalidResponse {
            url: request_url.clone(),
            reason: "missing url field".to_string(),
        })?;
        if !url.starts_with(SECURE_SCHEME) {
            return Err(ResolveError::InsecureUrl { url });
        }
        Ok(url)
    }
}

impl<T: CdnTransport> ImageResolver for CdnResolver<T> {
    fn resolve(&self, url: &str) -> String {
        let image_url = with_scheme(url);
        info!("uploading image to CDN: {image_url}");
        match self.try_resolve(&image_url) {
            Ok(cdn_url) => {
                info!("CDN url for {image_url}: {cdn_url}");
                cdn_url
            }
            Err(e @ ResolveError::Transport { .. }) => {
                error!("{e}; keeping {image_url}");
                image_url
            }
            Err(e) => {
                warn!("{e}; keeping {image_url}");
                image_url
            }
        }
    }
}
