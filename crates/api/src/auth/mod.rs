//! Placeholder authentication.
//!
//! Login accepts any non-blank credentials and hands back an opaque random
//! token. Nothing is stored server-side and no request is ever checked
//! against a token, so this is not an access-control boundary.

/// Role reported for every login.
pub const ADMIN_ROLE: &str = "ADMIN";

/// Generate a fresh opaque token (random UUID v4, hyphenated).
pub fn issue_token() -> String {
    uuid::Uuid::new_v4().to_string()
}
