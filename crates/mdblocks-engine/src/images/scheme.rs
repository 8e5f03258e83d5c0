pub const SECURE_SCHEME: &str = "https://";
const PLAIN_SCHEME: &str = "http://";

/// True if the URL starts with `http://` or `https://`.
pub fn has_scheme(url: &str) -> bool {
    url.starts_with(SECURE_SCHEME) || url.starts_with(PLAIN_SCHEME)
}

/// Prepends `https://` to a URL that has no scheme.
pub fn with_scheme(url: &str) -> String {
    if has_scheme(url) {
        url.to_string()
    } else {
        format!("{SECURE_SCHEME}{url}")
    }
}

/// Forces the secure scheme: `http://` is replaced, a missing scheme added.
pub fn ensure_https(url: &str) -> String {
    if url.starts_with(SECURE_SCHEME) {
        url.to_string()
    } else if let Some(rest) = url.strip_prefix(PLAIN_SCHEME) {
        format!("{SECURE_SCHEME}{rest}")
    } else {
        format!("{SECURE_SCHEME}{url}")
    }
}
