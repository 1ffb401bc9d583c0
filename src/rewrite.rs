//! The rewriting core: turn `[text](url)` into `[domain](url)`.

use regex::{Captures, Regex};
use std::sync::LazyLock;
use url::Url;

/// Matches one inline Markdown link: `[text](url)` or `[](url)`.
///
/// The anchor text may be empty but may not contain `]`; the URL span may not
/// contain `)`. Links whose text holds a literal `]` or whose URL holds a
/// literal `)` are out of scope.
static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([^\]]*)\]\(([^)]+)\)").expect("link pattern is valid"));

/// Extracts the display domain for a link target.
///
/// Returns `None` when the URL does not parse or parses without an authority
/// (relative paths, `mailto:` references and the like); callers leave those
/// occurrences untouched. A leading `www.` is stripped once, as a plain
/// string prefix.
fn link_domain(url: &str) -> Option<String> {
    let parsed = Url::parse(url).ok()?;
    let host = parsed.host_str()?;
    let domain = host.strip_prefix("www.").unwrap_or(host);
    if domain.is_empty() {
        return None;
    }
    Some(domain.to_string())
}

/// Rewrites every inline Markdown link so its anchor text is the target's
/// domain name. Occurrences that yield no domain are emitted verbatim, and
/// all text outside link occurrences is copied through unchanged.
pub fn rewrite_links(content: &str) -> String {
    LINK_RE
        .replace_all(content, |caps: &Captures| match link_domain(&caps[2]) {
            Some(domain) => format!("[{}]({})", domain, &caps[2]),
            None => caps[0].to_string(),
        })
        .into_owned()
}

/// Number of inline link occurrences in `content`.
pub fn count_links(content: &str) -> usize {
    LINK_RE.find_iter(content).count()
}
