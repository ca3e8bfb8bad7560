//! Star API endpoint construction.
//!
//! Resolves the `/api/star` route against the configured base URL and
//! attaches the star name as the `name` query parameter.

use crate::constants::{STAR_API_PATH, STAR_NAME_PARAM};
use crate::validation::InputValidator;
use crate::{Result, StarSearchError};
use url::Url;

/// Location of the star lookup route on the remote service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StarEndpoint {
    route: Url,
}

impl StarEndpoint {
    /// Build the endpoint from a raw base URL string
    pub fn new(base_url: &str) -> Result<Self> {
        let base = InputValidator::validate_base_url(base_url)?;
        Self::from_base(base)
    }

    /// Build the endpoint from an already validated base URL
    pub fn from_base(mut base: Url) -> Result<Self> {
        // A base path prefix is kept: `/prefix` must become `/prefix/` before joining
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let route = base
            .join(STAR_API_PATH)
            .map_err(|e| StarSearchError::invalid_base_url(base.as_str(), &e.to_string()))?;

        Ok(Self { route })
    }

    /// The route without any query string
    pub fn route(&self) -> &Url {
        &self.route
    }

    /// Full request URL for a star name, sent as-is apart from form encoding
    pub fn star_url(&self, name: &str) -> Url {
        crate::logging::debug_log(&format!("Building star URL for name: {:?}", name));
        let mut url = self.route.clone();
        url.query_pairs_mut().append_pair(STAR_NAME_PARAM, name);
        url
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_star_url_for_default_host() {
        let endpoint = StarEndpoint::new("https://stellarium.onrender.com").unwrap();
        assert_eq!(
            endpoint.star_url("Sirius").as_str(),
            "https://stellarium.onrender.com/api/star?name=Sirius"
        );
    }

    #[test]
    fn test_route_respects_base_path_prefix() {
        let cases = [
            ("http://localhost:8080", "http://localhost:8080/api/star"),
            ("http://localhost:8080/", "http://localhost:8080/api/star"),
            ("http://localhost:8080/v1", "http://localhost:8080/v1/api/star"),
            ("http://localhost:8080/v1/", "http://localhost:8080/v1/api/star"),
        ];

        for (base, expected) in cases {
            let endpoint = StarEndpoint::new(base).unwrap();
            assert_eq!(endpoint.route().as_str(), expected, "base: {}", base);
        }
    }

    #[test]
    fn test_empty_name_is_sent() {
        let endpoint = StarEndpoint::new("http://localhost").unwrap();
        assert_eq!(
            endpoint.star_url("").as_str(),
            "http://localhost/api/star?name="
        );
    }

    #[test]
    fn test_name_is_form_encoded() {
        let endpoint = StarEndpoint::new("http://localhost").unwrap();
        let url = endpoint.star_url("Alpha Centauri & co");

        assert_eq!(url.path(), "/api/star");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert_eq!(
            pairs,
            vec![("name".to_string(), "Alpha Centauri & co".to_string())]
        );
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        assert!(StarEndpoint::new("not a url").is_err());
        assert!(StarEndpoint::new("ftp://example.com").is_err());
    }
}
