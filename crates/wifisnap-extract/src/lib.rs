//! Best-effort extraction of a `{ssid, password}` guess from OCR text.
//!
//! WiFi cards come in three recognizable shapes, tried in this order per
//! line:
//!
//! 1. the QR-for-WiFi grammar (`WIFI:S:<ssid>;T:WPA;P:<password>;;`),
//!    frequently printed next to the code it encodes;
//! 2. the join-URI scheme (`wifi:ssid=…;password=…;`);
//! 3. plain `key: value` / `key = value` labels with SSID-ish and
//!    password-ish keys.
//!
//! Extraction is a guess, not a parse: the caller seeds an editor with
//! the result and lets the user correct it. Returns `None` only when no
//! SSID candidate is found anywhere in the text.

use percent_encoding::percent_decode_str;
use tracing::debug;

use wifisnap_core::Credentials;

/// Scan OCR text for a credential guess.
pub fn extract(text: &str) -> Option<Credentials> {
    let mut ssid: Option<String> = None;
    let mut password: Option<String> = None;

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // A wire-format line carries both fields at once and beats any
        // label guess.
        if let Some(credentials) = parse_qr_payload(line).or_else(|| parse_join_uri(line)) {
            debug!(ssid = %credentials.ssid, "extracted from wire format");
            return Some(credentials);
        }

        if let Some((key, value)) = split_label(line) {
            if value.is_empty() {
                continue;
            }
            if password.is_none() && is_password_key(&key) {
                password = Some(value);
            } else if ssid.is_none() && is_ssid_key(&key) {
                ssid = Some(value);
            }
        }

        if ssid.is_some() && password.is_some() {
            break;
        }
    }

    let ssid = ssid?;
    Some(Credentials::new(ssid, password.unwrap_or_default()))
}

// ── Wire formats ────────────────────────────────────────────────────

/// Parse a printed `WIFI:S:…;T:…;P:…;;` payload, honoring the grammar's
/// backslash escapes for `\ ; , :`.
fn parse_qr_payload(line: &str) -> Option<Credentials> {
    let rest = line.strip_prefix("WIFI:")?;

    let mut ssid = None;
    let mut password = None;
    for segment in split_unescaped(rest, ';') {
        if let Some(value) = segment.strip_prefix("S:") {
            ssid = Some(unescape(value));
        } else if let Some(value) = segment.strip_prefix("P:") {
            password = Some(unescape(value));
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    Some(Credentials::new(ssid, password.unwrap_or_default()))
}

/// Parse a printed `wifi:ssid=…;password=…;` join URI, percent-decoding
/// both fields.
fn parse_join_uri(line: &str) -> Option<Credentials> {
    let rest = line.strip_prefix("wifi:")?;

    let mut ssid = None;
    let mut password = None;
    for segment in rest.split(';') {
        if let Some(value) = segment.strip_prefix("ssid=") {
            ssid = percent_decode_str(value).decode_utf8().ok().map(String::from);
        } else if let Some(value) = segment.strip_prefix("password=") {
            password = percent_decode_str(value).decode_utf8().ok().map(String::from);
        }
    }

    let ssid = ssid.filter(|s| !s.is_empty())?;
    Some(Credentials::new(ssid, password.unwrap_or_default()))
}

/// Split on `separator`, treating `\x` as a literal `x`. Keeps the
/// escape resolution to [`unescape`] so segments stay slice-shaped.
fn split_unescaped(input: &str, separator: char) -> Vec<&str> {
    let mut segments = Vec::new();
    let mut start = 0;
    let mut escaped = false;
    for (idx, ch) in input.char_indices() {
        if escaped {
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else if ch == separator {
            segments.push(&input[start..idx]);
            start = idx + ch.len_utf8();
        }
    }
    segments.push(&input[start..]);
    segments
}

fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut escaped = false;
    for ch in value.chars() {
        if escaped {
            out.push(ch);
            escaped = false;
        } else if ch == '\\' {
            escaped = true;
        } else {
            out.push(ch);
        }
    }
    out
}

// ── Labeled lines ───────────────────────────────────────────────────

/// Split `key: value` or `key = value`; the key is lowercased, the value
/// trimmed and stripped of surrounding quotes.
fn split_label(line: &str) -> Option<(String, String)> {
    let (key, value) = line.split_once(':').or_else(|| line.split_once('='))?;
    let key = key.trim().to_lowercase();
    if key.is_empty() {
        return None;
    }
    let value = value
        .trim()
        .trim_matches(|c| c == '"' || c == '\'')
        .to_owned();
    Some((key, value))
}

/// Password-ish keys win over SSID-ish ones so "wifi password" lands in
/// the right field.
fn is_password_key(key: &str) -> bool {
    key.contains("pass") || key.contains("pwd") || key.contains("key")
}

fn is_ssid_key(key: &str) -> bool {
    key.contains("ssid")
        || key.contains("network")
        || key.contains("wifi")
        || key.contains("wi-fi")
        || key == "name"
}
