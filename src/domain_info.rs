/// The result of splitting a hostname under a governing PSL rule.
///
/// Each field is a dotted rendering (possibly empty). Concatenating the
/// non-empty segments with separating dots, in the order
/// `subdomain.domain.tld`, reconstructs the original hostname.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DomainInfo {
    /// The effective top-level domain (public suffix).
    pub tld: String,
    /// The registrable label immediately left of the tld, if any.
    pub domain: String,
    /// Everything left of `domain`, if any.
    pub subdomain: String,
}

impl DomainInfo {
    /// Rejoins the non-empty segments with `.`, in
    /// `subdomain.domain.tld` order.
    pub fn to_dotted_string(&self) -> String {
        [&self.subdomain, &self.domain, &self.tld]
            .into_iter()
            .filter(|s| !s.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join(".")
    }
}
