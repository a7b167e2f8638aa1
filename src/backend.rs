//! The ambient storage seam and an in-process host emulation.
//!
//! The host exposes one string-valued cookie property with asymmetric
//! semantics: reading yields the full `;`-joined list of visible
//! name/value pairs, writing hands the host a single cookie's attribute
//! list which it applies as an upsert. [`AmbientCookies`] captures
//! exactly that contract so stores can run against a real document
//! binding or against [`MemoryDocument`] in tests.

use std::sync::{Mutex, PoisonError};

use cookie::Cookie;
use time::OffsetDateTime;

/// Access to the host's ambient cookie property.
///
/// Both operations are infallible: the host never surfaces a write
/// rejection (a refused write is simply a no-op on the next read).
pub trait AmbientCookies {
    /// The full serialized list of currently visible pairs,
    /// e.g. `"a=1; b=2"`. Empty when no cookies are visible.
    fn read(&self) -> String;

    /// Assign one cookie's write attributes. The host interprets this
    /// as "upsert one cookie", never as "replace the cookie set".
    fn write(&self, directive: &str);
}

impl<T: AmbientCookies + ?Sized> AmbientCookies for &T {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, directive: &str) {
        (**self).write(directive);
    }
}

/// One cookie as retained by the emulated host.
#[derive(Debug, Clone)]
struct StoredCookie {
    name: String,
    value: String,
    domain: Option<String>,
    path: String,
    expires: Option<OffsetDateTime>,
}

impl StoredCookie {
    fn is_expired(&self, now: OffsetDateTime) -> bool {
        self.expires.is_some_and(|t| t <= now)
    }
}

/// An in-process emulation of the host side of the cookie property.
///
/// Write directives are interpreted the way a document context would:
/// cookies are keyed by (name, domain, path), a directive whose
/// expiration is already in the past deletes the matching cookie, and
/// reads serve the live pairs joined with `"; "`. Malformed directives
/// are dropped, like a real host. The emulation has no notion of a
/// request scheme, so `secure` is accepted and ignored.
#[derive(Debug, Default)]
pub struct MemoryDocument {
    cookies: Mutex<Vec<StoredCookie>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cookies currently retained, expired ones included.
    pub fn cookie_count(&self) -> usize {
        self.lock().len()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<StoredCookie>> {
        self.cookies.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl AmbientCookies for MemoryDocument {
    fn read(&self) -> String {
        let now = OffsetDateTime::now_utc();
        self.lock()
            .iter()
            .filter(|c| !c.is_expired(now))
            .map(|c| format!("{}={}", c.name, c.value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write(&self, directive: &str) {
        let parsed = match Cookie::parse(directive.trim_end_matches(';')) {
            Ok(parsed) => parsed,
            Err(error) => {
                tracing::debug!(%error, directive, "dropping malformed cookie write");
                return;
            }
        };

        let now = OffsetDateTime::now_utc();

        // max-age takes precedence over expires, per RFC 6265.
        let expires = match parsed.max_age() {
            Some(age) => Some(now + age),
            None => parsed.expires().and_then(|e| e.datetime()),
        };

        let name = parsed.name().to_string();
        let domain = parsed.domain().map(str::to_string);
        let path = parsed.path().unwrap_or("/").to_string();

        let mut cookies = self.lock();

        // Writes double as the purge point for entries whose absolute
        // expiry has lapsed since they were stored.
        cookies.retain(|c| !c.is_expired(now));

        if expires.is_some_and(|t| t <= now) {
            cookies.retain(|c| c.name != name || c.domain != domain || c.path != path);
            return;
        }

        let cookie = StoredCookie {
            name,
            value: parsed.value().to_string(),
            domain,
            path,
            expires,
        };

        match cookies
            .iter_mut()
            .find(|c| c.name == cookie.name && c.domain == cookie.domain && c.path == cookie.path)
        {
            Some(existing) => *existing = cookie,
            None => cookies.push(cookie),
        }
    }
}
