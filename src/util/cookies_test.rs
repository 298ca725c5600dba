use chrono::TimeZone;

use super::*;

fn store() -> CookieStore<MemoryJar> {
    CookieStore::new(MemoryJar::new())
}

fn fixed_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

// =============================================================
// Round-trip
// =============================================================

#[test]
fn round_trip_plain_value() {
    let mut store = store();
    store.create_or_rewrite("dark-mode", "true", None);
    assert_eq!(store.get("dark-mode").as_deref(), Some("true"));
}

#[test]
fn round_trip_value_requiring_escaping() {
    let mut store = store();
    store.create_or_rewrite("session", "hello world; fun=100%", None);
    assert_eq!(store.get("session").as_deref(), Some("hello world; fun=100%"));
}

#[test]
fn round_trip_non_ascii_value() {
    let mut store = store();
    store.create_or_rewrite("greeting", "café 你好", None);
    assert_eq!(store.get("greeting").as_deref(), Some("café 你好"));
}

#[test]
fn round_trip_with_full_attribute_set() {
    let mut store = store();
    let options = CookieOptions {
        expires: Some(Expiry::Days(10)),
        secure: true,
        same_site: Some(SameSite::Strict),
        ..CookieOptions::default()
    };
    store.create_or_rewrite("dark-mode", "true", Some(&options));
    assert_eq!(store.get("dark-mode").as_deref(), Some("true"));
}

#[test]
fn escaped_value_is_encoded_on_the_wire() {
    let mut store = store();
    store.create_or_rewrite("session", "hello world; fun=100%", None);
    assert_eq!(
        store.jar().read_all(),
        "session=hello%20world%3B%20fun%3D100%25"
    );
}

// =============================================================
// Absence
// =============================================================

#[test]
fn get_missing_name_is_none() {
    let store = store();
    assert_eq!(store.get("never-written"), None);
}

#[test]
fn get_expired_cookie_is_none() {
    let mut store = store();
    let options = CookieOptions {
        expires: Some(Expiry::At(DateTime::UNIX_EPOCH)),
        ..CookieOptions::default()
    };
    store.create_or_rewrite("stale", "value", Some(&options));
    assert_eq!(store.get("stale"), None);
}

#[test]
fn names_match_exactly() {
    let mut store = store();
    store.create_or_rewrite("dark-mode", "true", None);
    assert_eq!(store.get("dark"), None);
    assert_eq!(store.get("dark-mode-extra"), None);
}

// =============================================================
// Overwrite
// =============================================================

#[test]
fn overwrite_keeps_only_last_value() {
    let mut store = store();
    store.create_or_rewrite("dark-mode", "true", None);
    store.create_or_rewrite("dark-mode", "false", None);
    assert_eq!(store.get("dark-mode").as_deref(), Some("false"));
    assert_eq!(store.jar().read_all(), "dark-mode=false");
}

#[test]
fn distinct_names_are_listed_in_insertion_order() {
    let mut store = store();
    store.create_or_rewrite("first", "1", None);
    store.create_or_rewrite("second", "2", None);
    assert_eq!(store.jar().read_all(), "first=1; second=2");
}

// =============================================================
// Removal
// =============================================================

#[test]
fn remove_makes_get_absent() {
    let mut store = store();
    store.create_or_rewrite("dark-mode", "true", None);
    store.remove("dark-mode");
    assert_eq!(store.get("dark-mode"), None);
}

#[test]
fn remove_of_missing_name_is_harmless() {
    let mut store = store();
    store.remove("never-written");
    assert_eq!(store.get("never-written"), None);
}

// =============================================================
// Attribute serialization
// =============================================================

#[test]
fn serialized_form_matches_wire_contract() {
    let options = CookieOptions {
        expires: Some(Expiry::Days(10)),
        secure: true,
        same_site: Some(SameSite::Strict),
        ..CookieOptions::default()
    };
    let serialized = serialize_cookie("dark-mode", "true", Some(&options), fixed_now());
    assert_eq!(
        serialized,
        "dark-mode=true; expires=Mon, 11 Mar 2024 12:00:00 GMT; secure; samesite=strict"
    );
}

#[test]
fn no_options_is_a_bare_pair() {
    assert_eq!(serialize_cookie("a", "b", None, fixed_now()), "a=b");
}

#[test]
fn absolute_expiry_renders_directly() {
    let at = Utc.with_ymd_and_hms(2030, 1, 15, 8, 30, 0).unwrap();
    let options = CookieOptions {
        expires: Some(Expiry::At(at)),
        ..CookieOptions::default()
    };
    let serialized = serialize_cookie("k", "v", Some(&options), fixed_now());
    assert_eq!(serialized, "k=v; expires=Tue, 15 Jan 2030 08:30:00 GMT");
}

#[test]
fn epoch_expiry_renders_as_the_epoch_date() {
    let options = CookieOptions {
        expires: Some(Expiry::At(DateTime::UNIX_EPOCH)),
        ..CookieOptions::default()
    };
    let serialized = serialize_cookie("k", "", Some(&options), fixed_now());
    assert_eq!(serialized, "k=; expires=Thu, 01 Jan 1970 00:00:00 GMT");
}

#[test]
fn path_and_domain_render_when_non_empty() {
    let options = CookieOptions {
        path: Some("/guide".to_owned()),
        domain: Some("example.com".to_owned()),
        ..CookieOptions::default()
    };
    let serialized = serialize_cookie("k", "v", Some(&options), fixed_now());
    assert_eq!(serialized, "k=v; path=/guide; domain=example.com");
}

#[test]
fn empty_path_and_domain_are_not_rendered() {
    let options = CookieOptions {
        path: Some(String::new()),
        domain: Some(String::new()),
        ..CookieOptions::default()
    };
    assert_eq!(serialize_cookie("k", "v", Some(&options), fixed_now()), "k=v");
}

#[test]
fn secure_renders_as_a_bare_flag() {
    let options = CookieOptions {
        secure: true,
        ..CookieOptions::default()
    };
    assert_eq!(
        serialize_cookie("k", "v", Some(&options), fixed_now()),
        "k=v; secure"
    );
}

#[test]
fn samesite_renders_lower_cased() {
    for (policy, rendered) in [
        (SameSite::Strict, "k=v; samesite=strict"),
        (SameSite::Lax, "k=v; samesite=lax"),
        (SameSite::None, "k=v; samesite=none"),
    ] {
        let options = CookieOptions {
            same_site: Some(policy),
            ..CookieOptions::default()
        };
        assert_eq!(serialize_cookie("k", "v", Some(&options), fixed_now()), rendered);
    }
}

// =============================================================
// Pair parsing
// =============================================================

#[test]
fn value_containing_equals_splits_on_first() {
    let mut jar = MemoryJar::new();
    jar.write_one("token=abc=def");
    let store = CookieStore::new(jar);
    assert_eq!(store.get("token").as_deref(), Some("abc=def"));
}

#[test]
fn malformed_pair_falls_through_to_absent() {
    let mut jar = MemoryJar::new();
    jar.write_one("not-a-pair");
    let store = CookieStore::new(jar);
    assert_eq!(store.jar().read_all(), "");
    assert_eq!(store.get("not-a-pair"), None);
}

#[test]
fn http_date_round_trips_through_parse() {
    let at = Utc.with_ymd_and_hms(2027, 12, 31, 23, 59, 59).unwrap();
    assert_eq!(parse_http_date(&http_date(at)), Some(at));
}
