//! A Public Suffix List (PSL) rule-matching engine.
//!
//! Given PSL rule text and a queried hostname, this crate decides which
//! registrable suffix applies and splits the hostname into an effective
//! top-level domain (eTLD), the registrable label immediately below it,
//! and the remaining subdomain prefix.
//!
//! The engine is total and synchronous: matching and segmentation never
//! fail (an implicit `*` fallback rule guarantees a result even for
//! hosts under no known suffix), and a built [`Matcher`] is immutable and
//! safe to share across threads without synchronization.
//!
//! ```
//! use etld_engine::Matcher;
//!
//! let matcher = Matcher::from_text("com\nco.uk\n");
//! let info = matcher.match_str("www.example.co.uk");
//! assert_eq!(info.tld, "co.uk");
//! assert_eq!(info.domain, "example");
//! assert_eq!(info.subdomain, "www");
//! ```

pub mod domain;
pub mod domain_info;
pub mod errors;
#[cfg(feature = "fetch")]
mod http;
pub mod label;
#[cfg(feature = "std")]
mod loader;
pub mod matcher;
pub mod parser;
pub mod rule;
pub mod ruleset;

pub use domain::Domain;
pub use domain_info::DomainInfo;
pub use errors::{Error, Result};
pub use label::Label;
pub use matcher::Matcher;
pub use parser::{parse_text, parse_text_with_options, LineKind, ParseOptions, ParseResult};
pub use rule::{Rule, SerializedRule};
pub use ruleset::{MatchResult, RuleSet};

#[cfg(feature = "std")]
use once_cell::sync::Lazy;

/// A small, hand-curated excerpt of the Mozilla Public Suffix List,
/// embedded for the global singleton and exercised by the integration
/// test suite. Fetching or generating the *real* PSL is an external
/// collaborator outside this crate's scope.
#[cfg(feature = "std")]
const BUILTIN_PSL: &str = include_str!("../tests/fixtures/mini_psl.dat");

#[cfg(feature = "std")]
static GLOBAL_MATCHER: Lazy<Matcher> = Lazy::new(|| Matcher::from_text(BUILTIN_PSL));

/// Returns a reference to a process-wide, lazily-initialized `Matcher`
/// built from a small embedded PSL excerpt.
///
/// A process-wide singleton seeded from a compiled-in rule table:
/// lazily built on first access, immutable thereafter, safe to share
/// across threads, no teardown required.
#[cfg(feature = "std")]
pub fn global_matcher() -> &'static Matcher {
    &GLOBAL_MATCHER
}
