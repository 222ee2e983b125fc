//! HTTP fetch of PSL text, behind the `fetch` feature and outside the
//! core dependency-free path.
//!
//! Uses `ureq`'s blocking client; see `DESIGN.md` for why.

use crate::errors::{Error, Result};
use crate::matcher::Matcher;
use crate::ruleset::RuleSet;

pub(crate) fn get(url: &str) -> Result<String> {
    let agent = ureq::agent();
    agent
        .get(url)
        .call()
        .map_err(|e| Error::Fetch(Box::new(e)))?
        .into_string()
        .map_err(Error::Io)
}

impl Matcher {
    /// Fetches PSL text over HTTP and builds a `Matcher` from it.
    ///
    /// Malformed rule lines in the fetched text are skipped and tallied
    /// (not propagated), matching [`Matcher::from_text`]; only the fetch
    /// itself can fail.
    pub fn from_url(url: &str) -> Result<Self> {
        let text = get(url)?;
        Ok(Self::from_text(&text))
    }
}

impl RuleSet {
    /// Fetches PSL text over HTTP and builds a `RuleSet` from it.
    ///
    /// Malformed rule lines in the fetched text are skipped and tallied
    /// (not propagated), matching [`RuleSet::from_text`]; only the fetch
    /// itself can fail.
    pub fn from_url(url: &str) -> Result<Self> {
        let text = get(url)?;
        Ok(Self::from_text(&text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[test]
    fn test_get_success() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/dat")
            .with_status(200)
            .with_header("content-type", "text/plain")
            .with_body("test data")
            .create();

        let url = server.url();
        let result = get(&format!("{}/dat", url));

        mock.assert();
        assert!(result.is_ok());
        assert_eq!(result.unwrap(), "test data");
    }

    #[test]
    fn test_get_failure() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/dat")
            .with_status(500)
            .with_body("server error")
            .create();

        let url = server.url();
        let result = get(&format!("{}/dat", url));

        mock.assert();
        assert!(result.is_err());
        match result.unwrap_err() {
            Error::Fetch(_) => {} // Expected error
            e => panic!("Expected Error::Fetch, but got {:?}", e),
        }
    }

    #[test]
    fn from_url_builds_matcher_from_fetched_text() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/psl")
            .with_status(200)
            .with_body("com\nco.uk\n")
            .create();

        let matcher = Matcher::from_url(&format!("{}/psl", server.url())).expect("fetch");
        mock.assert();
        assert_eq!(matcher.match_str("example.co.uk").tld, "co.uk");
    }

    #[test]
    fn ruleset_from_url_builds_ruleset_from_fetched_text() {
        let mut server = Server::new();
        let mock = server
            .mock("GET", "/psl")
            .with_status(200)
            .with_body("com\nco.uk\n")
            .create();

        let rules = RuleSet::from_url(&format!("{}/psl", server.url())).expect("fetch");
        mock.assert();
        assert_eq!(rules.len(), 2);
    }
}
