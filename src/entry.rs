//! Cookie entries and the write-directive format.
//!
//! A write against the ambient cookie string is a single cookie's
//! attribute list, e.g. `session=abc;path=/;secure;`. This module owns
//! the option-to-attribute mapping: [`SetOptions`] holds the write-time
//! attributes and [`write_directive`] serializes them in the fixed
//! order `path`, `expires`, `max-age`, `domain`, `secure`, `samesite`.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, UtcOffset};

/// IMF-fixdate, the HTTP date format hosts expect in `expires` attributes.
const HTTP_DATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

/// Format an absolute timestamp as an HTTP date (`Thu, 01 Jan 1970 00:00:00 GMT`).
pub fn format_http_date(t: OffsetDateTime) -> String {
    // Formatting into a String only fails on an allocation error.
    t.to_offset(UtcOffset::UTC)
        .format(&HTTP_DATE)
        .unwrap_or_default()
}

/// The `SameSite` policy of a cookie.
///
/// The underlying standard defines three values; `Unspecified` means the
/// attribute is omitted from the write directive and the host applies its
/// own default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SameSite {
    #[default]
    Unspecified,
    #[serde(rename = "none")]
    NoRestriction,
    Lax,
    Strict,
}

impl SameSite {
    /// Attribute value emitted in a write directive, if any.
    pub fn attribute(self) -> Option<&'static str> {
        match self {
            SameSite::Unspecified => None,
            SameSite::NoRestriction => Some("none"),
            SameSite::Lax => Some("lax"),
            SameSite::Strict => Some("strict"),
        }
    }
}

/// Write-time attributes for a cookie.
///
/// The defaults reproduce a bare `set`: path `/`, session lifetime (no
/// `expires`, no `max-age`), current host, not secure, same-site
/// unspecified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SetOptions {
    pub path: String,
    pub expires: Option<OffsetDateTime>,
    pub max_age: Option<i64>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: SameSite,
}

impl Default for SetOptions {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            expires: None,
            max_age: None,
            domain: None,
            secure: false,
            same_site: SameSite::Unspecified,
        }
    }
}

impl SetOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    /// Relative expiration in seconds from write time.
    pub fn max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }
}

/// A cookie name/value pair with its full option set, the element type
/// of [`CookieStore::set_many`](crate::CookieStore::set_many).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CookieEntry {
    pub name: String,
    pub value: String,
    #[serde(flatten)]
    pub options: SetOptions,
}

impl CookieEntry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            options: SetOptions::default(),
        }
    }

    pub fn with_options(mut self, options: SetOptions) -> Self {
        self.options = options;
        self
    }

    /// The write directive for this entry.
    pub fn directive(&self) -> String {
        write_directive(&self.name, &self.value, &self.options)
    }
}

/// Build the single-cookie attribute string assigned to the ambient
/// property on a write.
///
/// The value is emitted as given. Values containing `;`, `=`, `%` or
/// whitespace must be pre-encoded by the caller, see [`crate::encode`].
pub fn write_directive(name: &str, value: &str, options: &SetOptions) -> String {
    let mut directive = String::with_capacity(name.len() + value.len() + 16);
    let _ = write!(directive, "{}={};path={};", name, value, options.path);

    if let Some(expires) = options.expires {
        let _ = write!(directive, "expires={};", format_http_date(expires));
    }
    if let Some(max_age) = options.max_age {
        let _ = write!(directive, "max-age={};", max_age);
    }
    if let Some(domain) = &options.domain {
        let _ = write!(directive, "domain={};", domain);
    }
    if options.secure {
        directive.push_str("secure;");
    }
    if let Some(same_site) = options.same_site.attribute() {
        let _ = write!(directive, "samesite={};", same_site);
    }

    directive
}
