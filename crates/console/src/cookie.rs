//! Session cookie string handling.
//!
//! The browser store in the frontend writes `document.cookie` with the
//! strings built here; keeping the string work out of the wasm module keeps
//! it testable on the host.

use warden_auth::{SESSION_COOKIE, SESSION_TTL_SECS};

/// `document.cookie` assignment that stores the session token.
pub fn set_cookie(token: &str) -> String {
    format!("{SESSION_COOKIE}={token}; Max-Age={SESSION_TTL_SECS}; Path=/; SameSite=Lax")
}

/// `document.cookie` assignment that expires the session cookie.
pub fn clear_cookie() -> String {
    format!("{SESSION_COOKIE}=; Max-Age=0; Path=/; SameSite=Lax")
}

/// Extract the session token from a `document.cookie` header value.
pub fn read_cookie(header: &str) -> Option<String> {
    header
        .split(';')
        .map(str::trim)
        .find_map(|pair| pair.strip_prefix(SESSION_COOKIE)?.strip_prefix('='))
        .map(str::to_string)
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_cookie_scopes_and_expires() {
        let cookie = set_cookie("tok-123");
        assert!(cookie.starts_with("warden_session=tok-123;"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("SameSite=Lax"));
    }

    #[test]
    fn read_cookie_finds_the_session_among_others() {
        let header = "theme=dark; warden_session=tok-9; locale=en";
        assert_eq!(read_cookie(header).as_deref(), Some("tok-9"));
    }

    #[test]
    fn read_cookie_ignores_lookalike_names() {
        assert_eq!(read_cookie("warden_session_old=stale"), None);
        assert_eq!(read_cookie("xwarden_session=tok"), None);
    }

    #[test]
    fn cleared_or_absent_cookie_reads_as_none() {
        assert_eq!(read_cookie(""), None);
        assert_eq!(read_cookie("warden_session="), None);
        assert_eq!(read_cookie(&clear_cookie()), None);
    }
}
