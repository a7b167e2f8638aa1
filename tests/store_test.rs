use std::collections::HashMap;
use std::sync::Mutex;

use doccookie::{
    encode, AmbientCookies, CookieEntry, CookieStore, MemoryDocument, SameSite, SetOptions,
};

// Serves a fixed ambient string and records every write directive.
#[derive(Default)]
struct RecordingDocument {
    ambient: String,
    writes: Mutex<Vec<String>>,
}

impl RecordingDocument {
    fn with_ambient(ambient: &str) -> Self {
        Self {
            ambient: ambient.to_string(),
            writes: Mutex::new(Vec::new()),
        }
    }

    fn writes(&self) -> Vec<String> {
        self.writes.lock().unwrap().clone()
    }
}

impl AmbientCookies for RecordingDocument {
    fn read(&self) -> String {
        self.ambient.clone()
    }

    fn write(&self, directive: &str) {
        self.writes.lock().unwrap().push(directive.to_string());
    }
}

#[test]
fn test_set_then_get_round_trip() {
    let store = CookieStore::in_memory();
    assert_eq!(store.set("session", "abc123", &SetOptions::default()), None);
    assert_eq!(store.get("session").as_deref(), Some("abc123"));
}

#[test]
fn test_get_on_empty_ambient() {
    let store = CookieStore::in_memory();
    assert_eq!(store.get("anything"), None);
}

#[test]
fn test_get_all_on_empty_ambient() {
    let store = CookieStore::in_memory();
    assert!(store.get_all().is_empty());
}

#[test]
fn test_unset_returns_previous_value() {
    let store = CookieStore::in_memory();
    store.set("user", "john", &SetOptions::default());

    assert_eq!(store.unset("user").as_deref(), Some("john"));
    assert_eq!(store.get("user"), None);
    assert_eq!(store.unset("user"), None);
}

#[test]
fn test_set_overwrites_and_returns_old_value() {
    let store = CookieStore::in_memory();
    store.set("color", "red", &SetOptions::default());

    let previous = store.set("color", "blue", &SetOptions::default());
    assert_eq!(previous.as_deref(), Some("red"));
    assert_eq!(store.get("color").as_deref(), Some("blue"));
}

#[test]
fn test_clear_removes_default_scoped_cookies() {
    let store = CookieStore::in_memory();
    store.set("a", "1", &SetOptions::default());
    store.set("b", "2", &SetOptions::default());
    assert_eq!(store.get_all().len(), 2);

    store.clear();
    assert!(store.get_all().is_empty());
}

#[test]
fn test_ambient_string_parsing_scenario() {
    let document = RecordingDocument::with_ambient("a=1; b=2;c=3");
    let store = CookieStore::new(document);

    let all = store.get_all();
    assert_eq!(all.len(), 3);
    assert_eq!(all["a"], "1");
    assert_eq!(all["b"], "2");
    assert_eq!(all["c"], "3");

    assert_eq!(store.get("b").as_deref(), Some("2"));
    assert_eq!(store.get("z"), None);
}

#[test]
fn test_set_many_directive_format() {
    let document = RecordingDocument::default();
    let store = CookieStore::new(document);

    let entries = vec![CookieEntry::new("x", "5").with_options(SetOptions::new().secure(true))];
    store.set_many(&entries);

    let writes = store.backend().writes();
    assert_eq!(writes, vec!["x=5;path=/;secure;".to_string()]);
}

#[test]
fn test_set_many_applies_entries_in_order() {
    let document = RecordingDocument::default();
    let store = CookieStore::new(document);

    store.set_many(&[
        CookieEntry::new("first", "1"),
        CookieEntry::new("second", "2").with_options(
            SetOptions::new()
                .path("/app")
                .domain("example.com")
                .same_site(SameSite::Lax),
        ),
    ]);

    let writes = store.backend().writes();
    assert_eq!(writes.len(), 2);
    assert_eq!(writes[0], "first=1;path=/;");
    assert_eq!(
        writes[1],
        "second=2;path=/app;domain=example.com;samesite=lax;"
    );
}

#[test]
fn test_set_from_map_uses_default_options() {
    let store = CookieStore::in_memory();
    let mut entries = HashMap::new();
    entries.insert("a".to_string(), "1".to_string());
    entries.insert("b".to_string(), "2".to_string());

    store.set_from_map(&entries);

    assert_eq!(store.get_all(), entries);
}

#[test]
fn test_unset_writes_epoch_expiry() {
    let document = RecordingDocument::default();
    let store = CookieStore::new(document);

    store.unset("stale");

    let writes = store.backend().writes();
    assert_eq!(
        writes,
        vec!["stale=;path=/;expires=Thu, 01 Jan 1970 00:00:00 GMT;".to_string()]
    );
}

#[test]
fn test_stores_share_one_ambient_backend() {
    let document = MemoryDocument::new();
    let writer = CookieStore::new(&document);
    let reader = CookieStore::new(&document);

    writer.set("shared", "1", &SetOptions::default());
    assert_eq!(reader.get("shared").as_deref(), Some("1"));

    assert_eq!(reader.unset("shared").as_deref(), Some("1"));
    assert_eq!(writer.get("shared"), None);
}

#[test]
fn test_encoded_values_survive_round_trip() {
    let store = CookieStore::in_memory();
    let raw = "hello world; key=value";

    store.set("msg", &encode::value(raw), &SetOptions::default());

    let stored = store.get("msg").unwrap();
    assert_eq!(encode::decode(&stored).unwrap(), raw);
}

#[test]
fn test_max_age_zero_deletes_through_host() {
    let store = CookieStore::in_memory();
    store.set("temp", "1", &SetOptions::default());

    store.set("temp", "1", &SetOptions::new().max_age(0));
    assert_eq!(store.get("temp"), None);
}
