//! The cookie store facade.
//!
//! [`CookieStore`] is stateless: every operation reads or writes the
//! ambient cookie string through its [`AmbientCookies`] backend and
//! retains nothing between calls. The ambient string is shared mutable
//! state with every other script in the document context, so there is
//! no locking or compare-and-swap here; the last write wins.

use std::collections::HashMap;

use time::OffsetDateTime;

use crate::backend::{AmbientCookies, MemoryDocument};
use crate::entry::{write_directive, CookieEntry, SetOptions};

/// Get, set, remove and enumerate cookies through the host's single
/// string-valued cookie property.
///
/// No operation fails: absence is [`None`], malformed stored segments
/// are skipped, and writes are fire-and-forget (a host that rejects a
/// write does so invisibly).
///
/// Values are stored as given. A value containing `;`, `=`, `%` or
/// whitespace corrupts the ambient string unless pre-encoded, see
/// [`crate::encode`].
#[derive(Debug)]
pub struct CookieStore<B: AmbientCookies = MemoryDocument> {
    backend: B,
}

impl CookieStore<MemoryDocument> {
    /// A store over an in-process [`MemoryDocument`], the backend of
    /// choice outside a real document context.
    pub fn in_memory() -> Self {
        Self::new(MemoryDocument::new())
    }
}

impl<B: AmbientCookies> CookieStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The value of the first cookie named `name`, compared
    /// case-sensitively and returned without decoding.
    pub fn get(&self, name: &str) -> Option<String> {
        let ambient = self.backend.read();
        let value = pairs(&ambient)
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.to_string());
        value
    }

    /// Every visible name/value pair. When the ambient string carries
    /// the same name more than once, the last occurrence wins.
    pub fn get_all(&self) -> HashMap<String, String> {
        let ambient = self.backend.read();
        let mut all = HashMap::new();
        for (name, value) in pairs(&ambient) {
            all.insert(name.to_string(), value.to_string());
        }
        all
    }

    /// Upsert one cookie and return the value it replaced, if any.
    ///
    /// The previous value is captured before the write, so overwriting
    /// returns the old value while a subsequent [`get`](Self::get)
    /// yields the new one.
    pub fn set(&self, name: &str, value: &str, options: &SetOptions) -> Option<String> {
        let previous = self.get(name);
        let directive = write_directive(name, value, options);
        tracing::debug!(name, path = %options.path, "writing cookie");
        self.backend.write(&directive);
        previous
    }

    /// Set every pair in the map with default options.
    pub fn set_from_map(&self, entries: &HashMap<String, String>) {
        for (name, value) in entries {
            self.set(name, value, &SetOptions::default());
        }
    }

    /// Set each entry with its own option set, in sequence order.
    ///
    /// There is no atomicity across entries: if the host drops a write
    /// partway through, earlier entries remain committed.
    pub fn set_many(&self, entries: &[CookieEntry]) {
        for entry in entries {
            self.set(&entry.name, &entry.value, &entry.options);
        }
    }

    /// Delete one cookie by writing it back already expired, and return
    /// the value it held, if any.
    pub fn unset(&self, name: &str) -> Option<String> {
        let previous = self.get(name);
        let expired = SetOptions::new().expires(OffsetDateTime::UNIX_EPOCH);
        tracing::debug!(name, "expiring cookie");
        self.backend.write(&write_directive(name, "", &expired));
        previous
    }

    /// Delete every cookie visible in one [`get_all`](Self::get_all)
    /// snapshot.
    ///
    /// Cookies scoped to a non-default path or domain may survive: the
    /// expiring write only reaches cookies the host matches against
    /// `path=/` on the current host.
    pub fn clear(&self) {
        let snapshot = self.get_all();
        tracing::debug!(count = snapshot.len(), "clearing cookies");
        for name in snapshot.keys() {
            self.unset(name);
        }
    }
}

/// Split an ambient cookie string into name/value pairs.
///
/// Segments are separated by `;` with optional surrounding whitespace
/// and split on the first `=`. Segments without an `=`, or with an
/// empty name, are skipped rather than reported.
fn pairs(ambient: &str) -> impl Iterator<Item = (&str, &str)> {
    ambient.split(';').filter_map(|segment| {
        let (name, value) = segment.trim().split_once('=')?;
        if name.is_empty() {
            return None;
        }
        Some((name, value))
    })
}
