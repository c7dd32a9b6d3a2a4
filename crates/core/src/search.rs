//! Product name search helpers.

/// Character used to escape LIKE wildcards (PostgreSQL's default).
pub const LIKE_ESCAPE: char = '\\';

/// Trim a raw `?q=` value, treating blank input as "no filter".
pub fn normalize_search_term(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|t| !t.is_empty())
}

/// Escape `%`, `_` and the escape character itself so the term matches
/// literally inside a `LIKE '%' || $1 || '%'` pattern.
pub fn escape_like(term: &str) -> String {
    let mut out = String::with_capacity(term.len());
    for c in term.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            out.push(LIKE_ESCAPE);
        }
        out.push(c);
    }
    out
}
