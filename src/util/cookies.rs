//! Cookie jar access and wire-format serialization.
//!
//! The browser's cookie jar is ambient, document-level state. Everything
//! here goes through the [`CookieJar`] port so serialization and lookup
//! can be exercised natively against [`MemoryJar`]; [`DocumentJar`] is
//! the `document.cookie` adapter used in the browser.
//!
//! TRADE-OFFS
//! ==========
//! Writes are fire-and-forget: the browser silently drops invalid cookies
//! (for example `secure` on an insecure origin) and no read-back
//! verification is performed here.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters escaped in cookie values, matching `encodeURIComponent`:
/// everything except ASCII alphanumerics and `- _ . ! ~ * ' ( )`.
const VALUE_ESCAPE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// HTTP-date layout used for the `expires` attribute, matching the
/// browser's `toUTCString` rendering (`Thu, 01 Jan 1970 00:00:00 GMT`).
const HTTP_DATE_FORMAT: &str = "%a, %d %b %Y %H:%M:%S GMT";

/// Read/write port over an ambient cookie jar.
///
/// `read_all` returns the serialized `name=value` pair list exactly as
/// `document.cookie` would; `write_one` installs a single serialized
/// cookie. The store holds no cache of its own on top of this.
pub trait CookieJar {
    fn read_all(&self) -> String;
    fn write_one(&mut self, serialized: &str);
}

/// Cross-site send policy for a cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    Strict,
    Lax,
    None,
}

impl SameSite {
    fn as_attribute(self) -> &'static str {
        match self {
            Self::Strict => "strict",
            Self::Lax => "lax",
            Self::None => "none",
        }
    }
}

/// Expiry of a cookie: a whole-day count relative to "now", or an
/// absolute instant. Omitting expiry entirely makes a session cookie.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Expiry {
    Days(i64),
    At(DateTime<Utc>),
}

impl Expiry {
    fn resolve(self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Days(days) => now + Duration::days(days),
            Self::At(at) => at,
        }
    }
}

/// Optional attributes serialized after the `name=value` pair.
#[derive(Clone, Debug, Default)]
pub struct CookieOptions {
    pub expires: Option<Expiry>,
    pub path: Option<String>,
    pub domain: Option<String>,
    pub secure: bool,
    pub same_site: Option<SameSite>,
}

impl CookieOptions {
    /// Render the `; `-joined attribute clauses, in the fixed order
    /// expires, path, domain, secure, samesite. Empty `path`/`domain`
    /// values are skipped; `secure` is a bare flag.
    fn attribute_suffix(&self, now: DateTime<Utc>) -> String {
        let mut out = String::new();
        if let Some(expires) = self.expires {
            out.push_str("; expires=");
            out.push_str(&http_date(expires.resolve(now)));
        }
        if let Some(path) = &self.path {
            if !path.is_empty() {
                out.push_str("; path=");
                out.push_str(path);
            }
        }
        if let Some(domain) = &self.domain {
            if !domain.is_empty() {
                out.push_str("; domain=");
                out.push_str(domain);
            }
        }
        if self.secure {
            out.push_str("; secure");
        }
        if let Some(same_site) = self.same_site {
            out.push_str("; samesite=");
            out.push_str(same_site.as_attribute());
        }
        out
    }
}

/// Translation layer between typed cookie operations and a [`CookieJar`].
pub struct CookieStore<J: CookieJar> {
    jar: J,
}

impl<J: CookieJar> CookieStore<J> {
    pub fn new(jar: J) -> Self {
        Self { jar }
    }

    /// The underlying jar, for callers that need the raw serialized view.
    pub fn jar(&self) -> &J {
        &self.jar
    }

    /// Install `name=value` (value percent-encoded) plus any attribute
    /// clauses, overwriting an existing cookie of the same name. There is
    /// no success signal; rejected writes are indistinguishable from
    /// accepted ones.
    pub fn create_or_rewrite(&mut self, name: &str, value: &str, options: Option<&CookieOptions>) {
        let serialized = serialize_cookie(name, value, options, Utc::now());
        self.jar.write_one(&serialized);
    }

    /// The percent-decoded value of the first pair whose name matches
    /// exactly, or `None`. Pairs without a `=` never match.
    pub fn get(&self, name: &str) -> Option<String> {
        let all = self.jar.read_all();
        for pair in all.split("; ") {
            if let Some((pair_name, raw_value)) = pair.split_once('=') {
                if pair_name == name {
                    return Some(percent_decode_str(raw_value).decode_utf8_lossy().into_owned());
                }
            }
        }
        None
    }

    /// Overwrite with an empty value and an epoch expiry; the jar evicts
    /// the cookie on its next access. Not a distinct wire operation.
    pub fn remove(&mut self, name: &str) {
        let options = CookieOptions {
            expires: Some(Expiry::At(DateTime::UNIX_EPOCH)),
            ..CookieOptions::default()
        };
        self.create_or_rewrite(name, "", Some(&options));
    }
}

fn serialize_cookie(
    name: &str,
    value: &str,
    options: Option<&CookieOptions>,
    now: DateTime<Utc>,
) -> String {
    let mut out = format!("{name}={}", utf8_percent_encode(value, VALUE_ESCAPE_SET));
    if let Some(options) = options {
        out.push_str(&options.attribute_suffix(now));
    }
    out
}

fn http_date(at: DateTime<Utc>) -> String {
    at.format(HTTP_DATE_FORMAT).to_string()
}

fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    NaiveDateTime::parse_from_str(raw, HTTP_DATE_FORMAT)
        .ok()
        .map(|naive| naive.and_utc())
}

/// Jar backed by the browser's `document.cookie`. Reads return the empty
/// string and writes are no-ops outside a browser.
pub struct DocumentJar;

impl CookieJar for DocumentJar {
    fn read_all(&self) -> String {
        #[cfg(target_arch = "wasm32")]
        {
            html_document()
                .and_then(|document| document.cookie().ok())
                .unwrap_or_default()
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            String::new()
        }
    }

    fn write_one(&mut self, serialized: &str) {
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(document) = html_document() {
                let _ = document.set_cookie(serialized);
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = serialized;
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn html_document() -> Option<web_sys::HtmlDocument> {
    use wasm_bindgen::JsCast;

    web_sys::window()?.document()?.dyn_into().ok()
}

/// In-memory jar mimicking browser behavior: one entry per name, pairs
/// listed in insertion order, entries with a past `expires` evicted on
/// access. Backs unit tests and any non-browser target.
#[derive(Clone, Debug, Default)]
pub struct MemoryJar {
    entries: Vec<StoredCookie>,
}

#[derive(Clone, Debug)]
struct StoredCookie {
    name: String,
    raw_value: String,
    expires: Option<DateTime<Utc>>,
}

impl MemoryJar {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CookieJar for MemoryJar {
    fn read_all(&self) -> String {
        let now = Utc::now();
        self.entries
            .iter()
            .filter(|cookie| cookie.expires.is_none_or(|at| at > now))
            .map(|cookie| format!("{}={}", cookie.name, cookie.raw_value))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn write_one(&mut self, serialized: &str) {
        let mut clauses = serialized.split("; ");
        let Some(pair) = clauses.next() else {
            return;
        };
        let Some((name, raw_value)) = pair.split_once('=') else {
            return;
        };

        let mut expires = None;
        for clause in clauses {
            if let Some(raw_date) = clause.strip_prefix("expires=") {
                expires = parse_http_date(raw_date);
            }
        }

        self.entries.retain(|cookie| cookie.name != name);
        if expires.is_some_and(|at| at <= Utc::now()) {
            return;
        }
        self.entries.push(StoredCookie {
            name: name.to_owned(),
            raw_value: raw_value.to_owned(),
            expires,
        });
    }
}
