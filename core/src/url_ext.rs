//! URL helpers used for suggestion matching and deduplication.

use url::Url;

/// Extension methods on [`Url`] used when comparing suggestions
pub trait UrlExt {
    /// Canonical key used only for equality checks.
    ///
    /// Drops the scheme, credentials, fragment, a single leading `www.` label
    /// and a trailing slash. Host case is ignored, a non-default port and the
    /// query string are kept.
    fn naked(&self) -> String;

    /// Whether the URL points at the root of its site
    fn is_root(&self) -> bool;
}

impl UrlExt for Url {
    fn naked(&self) -> String {
        let mut naked = String::new();

        if let Some(host) = self.host_str() {
            let host = host.to_lowercase();
            naked.push_str(host.strip_prefix("www.").unwrap_or(&host));

            // `port()` is None for the scheme's default port
            if let Some(port) = self.port() {
                naked.push_str(&format!(":{}", port));
            }
        }

        naked.push_str(self.path().trim_end_matches('/'));

        if let Some(query) = self.query() {
            naked.push('?');
            naked.push_str(query);
        }

        naked
    }

    fn is_root(&self) -> bool {
        let path = self.path();
        (path.is_empty() || path == "/") && self.query().is_none() && self.fragment().is_none()
    }
}
