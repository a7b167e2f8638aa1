//! # doccookie
//!
//! A browser-style convenience layer over the document cookie string.
//!
//! `doccookie` wraps the host environment's single string-valued cookie
//! property behind a small facade, so client-side code can get, set and
//! remove name/value pairs without touching the raw string protocol.
//!
//! ## Features
//!
//! - **Facade**: [`CookieStore`] with get/set/remove/enumerate operations
//! - **Write attributes**: path, expires, max-age, domain, secure, samesite
//! - **Pluggable storage**: the [`AmbientCookies`] trait decouples the
//!   store from a real document context
//! - **Host emulation**: [`MemoryDocument`] honors the read/write
//!   asymmetry of the real property, including upsert and expiry
//! - **Encoding helpers**: explicit percent-encoding contract for values
//!   carrying delimiter characters
//!
//! ## Quick Start
//!
//! ```rust
//! use doccookie::{CookieStore, SetOptions};
//!
//! let store = CookieStore::in_memory();
//! store.set("theme", "dark", &SetOptions::default());
//! assert_eq!(store.get("theme").as_deref(), Some("dark"));
//!
//! let previous = store.unset("theme");
//! assert_eq!(previous.as_deref(), Some("dark"));
//! assert_eq!(store.get("theme"), None);
//! ```
//!
//! ## Modules
//!
//! - [`store`] - The [`CookieStore`] facade
//! - [`entry`] - Entry types, write-time options, the directive format
//! - [`backend`] - The ambient storage trait and the in-process emulation
//! - [`encode`] - Percent-encoding helpers for cookie values
//!
//! ## The ambient string
//!
//! The cookie property is asymmetric: reading yields the full list of
//! visible pairs (`"a=1; b=2"`), while writing assigns one cookie's
//! attribute list (`"a=1;path=/;secure;"`) which the host applies as an
//! upsert. The property is shared with every other script in the same
//! document context; this crate performs no locking, and concurrent
//! writers race with last-write-wins semantics.

pub mod backend;
pub mod encode;
pub mod entry;
pub mod store;

pub use backend::{AmbientCookies, MemoryDocument};
pub use entry::{CookieEntry, SameSite, SetOptions};
pub use store::CookieStore;
