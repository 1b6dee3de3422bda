use std::sync::OnceLock;

use regex::Regex;

/// Rewrites `git describe` output into a dotted release identifier.
///
/// The first `<count>-g` occurrence marks the commit distance and gets
/// rewritten to `r<count>`, then every remaining hyphen becomes a period.
/// Plain tags pass through unchanged.
#[must_use]
pub fn normalize_tag(raw: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"([^-]*-)g").unwrap());

    re.replace(raw, "r$1").replace('-', ".")
}
