//! Endpoint construction.

/// Scheme prepended to hosts that do not carry one.
const DEFAULT_SCHEME: &str = "http://";

/// Combine a host and an API path into a fully qualified URL.
///
/// Hosts starting with `http:` or `https:` are used verbatim; anything else
/// gets `http://` prepended. The host is not validated.
///
/// # Example
///
/// ```
/// use aqts::create_endpoint;
///
/// assert_eq!(
///     create_endpoint("https://example.com", "/AQUARIUS/Publish/v2"),
///     "https://example.com/AQUARIUS/Publish/v2"
/// );
/// assert_eq!(
///     create_endpoint("example.com", "/AQUARIUS/Publish/v2"),
///     "http://example.com/AQUARIUS/Publish/v2"
/// );
/// ```
pub fn create_endpoint(host: &str, path: &str) -> String {
    if has_scheme(host) {
        format!("{}{}", host, path)
    } else {
        format!("{}{}{}", DEFAULT_SCHEME, host, path)
    }
}

fn has_scheme(host: &str) -> bool {
    host.starts_with("http:") || host.starts_with("https:")
}
