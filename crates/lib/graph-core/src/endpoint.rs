//! Endpoint routing for the people-graph HTTP service.
//!
//! An [`Endpoint`] is a method plus unencoded path segments and query pairs.
//! Segments are percent-encoded only when resolved against a base URL, so a
//! name like `Ann/Marie` always addresses a single path segment. URL
//! normalization would drop `.` and `..`, so those are never resolved.

use reqwest::{Method, Url};

use crate::client::ClientError;

pub const SEG_PEOPLE: &str = "people";
pub const SEG_FRIENDS: &str = "friends";
pub const SEG_LOCATION: &str = "location";
pub const SEG_RELATIONSHIPS: &str = "relationships";
pub const SEG_RELATIONSHIP: &str = "relationship";
pub const SEG_EXPLAIN: &str = "explain";
pub const SEG_PATH: &str = "path";

/// Whether `value` addresses exactly one path segment once encoded.
#[must_use]
pub fn is_single_segment(value: &str) -> bool {
    !matches!(value, "" | "." | "..")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    method: Method,
    segments: Vec<String>,
    query: Vec<(&'static str, String)>,
}

impl Endpoint {
    #[must_use]
    pub fn new<I, S>(method: Method, segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            method,
            segments: segments.into_iter().map(Into::into).collect(),
            query: Vec::new(),
        }
    }

    #[must_use]
    pub fn get<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::GET, segments)
    }

    #[must_use]
    pub fn post<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::POST, segments)
    }

    #[must_use]
    pub fn patch<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::PATCH, segments)
    }

    #[must_use]
    pub fn delete<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(Method::DELETE, segments)
    }

    /// Appends a query pair. Values are form-encoded on resolve.
    #[must_use]
    pub fn with_query(mut self, key: &'static str, value: impl Into<String>) -> Self {
        self.query.push((key, value.into()));
        self
    }

    #[must_use]
    pub const fn method(&self) -> &Method {
        &self.method
    }

    /// Joins the raw segments for display, e.g. `/people/Alice`.
    #[must_use]
    pub fn path(&self) -> String {
        let mut path = String::new();
        for segment in &self.segments {
            path.push('/');
            path.push_str(segment);
        }
        if path.is_empty() {
            path.push('/');
        }
        path
    }

    /// Resolves the endpoint against `base`, keeping any path prefix on the base.
    ///
    /// # Errors
    /// Returns `ClientError::InvalidUrl` if `base` cannot carry path segments and
    /// `ClientError::InvalidSegment` if a segment is empty, `.` or `..`.
    pub fn resolve(&self, base: &Url) -> Result<Url, ClientError> {
        if let Some(segment) = self.segments.iter().find(|s| !is_single_segment(s)) {
            return Err(ClientError::InvalidSegment(segment.clone()));
        }

        let mut url = base.clone();
        url.set_query(None);
        url.set_fragment(None);
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|()| ClientError::InvalidUrl(base.to_string()))?;
            path.pop_if_empty();
            path.extend(self.segments.iter().map(String::as_str));
        }
        if !self.query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base(raw: &str) -> Url {
        Url::parse(raw).expect("valid base url")
    }

    #[test]
    fn resolves_against_bare_origin() {
        let endpoint = Endpoint::get([SEG_PEOPLE, "Alice"]);
        let url = endpoint
            .resolve(&base("http://localhost:3000"))
            .expect("resolve");
        assert_eq!(url.as_str(), "http://localhost:3000/people/Alice");
    }

    #[test]
    fn keeps_base_path_prefix() {
        let endpoint = Endpoint::get([SEG_PEOPLE]);
        let with_slash = endpoint
            .resolve(&base("http://graph.local/api/"))
            .expect("resolve");
        let without_slash = endpoint
            .resolve(&base("http://graph.local/api"))
            .expect("resolve");
        assert_eq!(with_slash.as_str(), "http://graph.local/api/people");
        assert_eq!(without_slash.as_str(), "http://graph.local/api/people");
    }

    #[test]
    fn percent_encodes_segments() {
        let endpoint = Endpoint::get([SEG_PEOPLE, "Ann/Marie O'Neil?"]);
        let url = endpoint
            .resolve(&base("http://localhost:3000"))
            .expect("resolve");
        assert_eq!(url.path(), "/people/Ann%2FMarie%20O'Neil%3F");
        assert_eq!(url.path_segments().map(Iterator::count), Some(2));
    }

    #[test]
    fn form_encodes_query_pairs() {
        let endpoint = Endpoint::get([SEG_RELATIONSHIP, SEG_EXPLAIN])
            .with_query("from", "A")
            .with_query("to", "B & C");
        let url = endpoint
            .resolve(&base("http://localhost:3000"))
            .expect("resolve");
        assert_eq!(
            url.as_str(),
            "http://localhost:3000/relationship/explain?from=A&to=B+%26+C"
        );
    }

    #[test]
    fn dot_segments_are_not_resolved() {
        for name in [".", "..", ""] {
            let endpoint = Endpoint::delete([SEG_PEOPLE, name]);
            let err = endpoint
                .resolve(&base("http://localhost:3000"))
                .expect_err("dot segment");
            assert!(matches!(err, ClientError::InvalidSegment(ref s) if s == name), "{name:?}");
        }
    }

    #[test]
    fn single_segment_check() {
        assert!(is_single_segment("Alice"));
        assert!(is_single_segment("..."));
        assert!(is_single_segment(".hidden"));
        assert!(!is_single_segment("."));
        assert!(!is_single_segment(".."));
        assert!(!is_single_segment(""));
    }

    #[test]
    fn display_path_is_unencoded() {
        assert_eq!(Endpoint::get([SEG_PEOPLE, "Bob"]).path(), "/people/Bob");
        assert_eq!(Endpoint::get(Vec::<String>::new()).path(), "/");
    }

    #[test]
    fn rejects_cannot_be_a_base_urls() {
        let endpoint = Endpoint::get([SEG_PEOPLE]);
        let err = endpoint
            .resolve(&base("mailto:graph@example.com"))
            .expect_err("mailto is not a base");
        assert!(matches!(err, ClientError::InvalidUrl(_)));
    }
}
