//! Resolution of `href` values into link targets.
//!
//! The walker never interprets an `href` itself; it hands the raw attribute to a
//! [`UriResolver`] and either wraps the result in a link run or aborts the
//! conversion with `InvalidUri`.

use url::Url;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UriError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
    #[error("scheme `{0}` is not allowed")]
    SchemeNotAllowed(String),
}

/// Turns an `href` attribute value into a validated link target.
pub trait UriResolver {
    fn resolve(&self, href: &str) -> Result<Url, UriError>;
}

impl<R: UriResolver + ?Sized> UriResolver for &R {
    fn resolve(&self, href: &str) -> Result<Url, UriError> {
        (**self).resolve(href)
    }
}

/// Default resolver backed by the `url` crate.
///
/// Without a base, only absolute URIs resolve. With a base, relative references
/// are joined onto it. An optional scheme allow-list is checked after parsing.
#[derive(Debug, Clone, Default)]
pub struct UrlResolver {
    base: Option<Url>,
    allowed_schemes: Option<Vec<String>>,
}

impl UrlResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base(mut self, base: Url) -> Self {
        self.base = Some(base);
        self
    }

    /// Restricts resolved links to the given schemes (compared case-insensitively).
    pub fn with_allowed_schemes<I, T>(mut self, schemes: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        self.allowed_schemes = Some(
            schemes
                .into_iter()
                .map(|s| s.into().to_ascii_lowercase())
                .collect(),
        );
        self
    }
}

impl UriResolver for UrlResolver {
    fn resolve(&self, href: &str) -> Result<Url, UriError> {
        let url = match &self.base {
            Some(base) => base.join(href)?,
            None => Url::parse(href)?,
        };

        if let Some(allowed) = &self.allowed_schemes
            && !allowed.iter().any(|s| s == url.scheme())
        {
            return Err(UriError::SchemeNotAllowed(url.scheme().to_string()));
        }

        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn absolute_uri_resolves_without_base() {
        let url = UrlResolver::new().resolve("https://example.com/a").unwrap();
        assert_eq!(url.as_str(), "https://example.com/a");
    }

    #[test]
    fn relative_uri_needs_a_base() {
        let err = UrlResolver::new().resolve("/docs").unwrap_err();
        assert_eq!(
            err,
            UriError::Parse(url::ParseError::RelativeUrlWithoutBase)
        );
    }

    #[test]
    fn relative_uri_joins_onto_base() {
        let resolver =
            UrlResolver::new().with_base(Url::parse("https://example.com/cards/").unwrap());
        let url = resolver.resolve("help.html").unwrap();
        assert_eq!(url.as_str(), "https://example.com/cards/help.html");
    }

    #[test]
    fn scheme_allow_list_is_enforced() {
        let resolver = UrlResolver::new().with_allowed_schemes(["HTTPS", "mailto"]);

        assert!(resolver.resolve("mailto:someone@example.com").is_ok());
        assert_eq!(
            resolver.resolve("javascript:alert(1)").unwrap_err(),
            UriError::SchemeNotAllowed("javascript".to_string())
        );
    }
}
