//! Route-decorator normalization, applied only at IDL render time.
//!
//! A decorator whose text looks like a `router.<method>(...)` call is
//! rewritten into a canonical `Route(...)` annotation; everything else
//! passes through unchanged. The model keeps the raw decorator string, so
//! this rewrite exists in exactly one place.

use once_cell::sync::Lazy;
use regex::Regex;

static METHOD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"router\.(?i:(get|post|put|delete|patch))\b").expect("method pattern")
});
static QUOTED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#""([^"]*)"|'([^']*)'"#).expect("quoted pattern"));
static TAGS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"tags\s*=\s*\[([^\]]*)\]").expect("tags pattern"));

/// Rewrite a routing decorator into canonical form, or hand back the
/// original text when it does not match or its path cannot be extracted.
pub(crate) fn normalize(decorator: &str) -> String {
    try_normalize(decorator).unwrap_or_else(|| decorator.to_string())
}

fn try_normalize(decorator: &str) -> Option<String> {
    if !decorator.contains("router.") {
        return None;
    }
    let method = METHOD.captures(decorator)?.get(1)?.as_str().to_uppercase();

    let open = decorator.find('(')?;
    let close = decorator.rfind(')')?;
    let args = decorator.get(open + 1..close)?;

    let path = QUOTED
        .captures(args)
        .and_then(|c| c.get(1).or_else(|| c.get(2)))?
        .as_str()
        .to_string();

    let tags = TAGS
        .captures(args)
        .map(|c| split_tags(c.get(1).map(|m| m.as_str()).unwrap_or("")))
        .unwrap_or_default();

    let mut out = format!("Route(method={}, path=\"{}\"", method, path);
    if !tags.is_empty() {
        out.push_str(&format!(", tags=[{}]", tags.join(", ")));
    }
    out.push(')');
    Some(out)
}

fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|tag| tag.trim().trim_matches(|c| c == '\'' || c == '"').trim().to_string())
        .filter(|tag| !tag.is_empty())
        .collect()
}
