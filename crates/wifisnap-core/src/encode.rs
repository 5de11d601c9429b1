// ── Wire-format encoders ──
//
// Two external grammars, both pure functions over `Credentials`:
//
//   join URI:   wifi:ssid=<pct>;password=<pct>;
//   QR payload: WIFI:S:<esc>;T:WPA;P:<esc>;;
//
// Both reject an empty SSID up front -- this is the only validation the
// engine performs, deliberately later than `save()` (see editor.rs).

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::error::CoreError;
use crate::model::Credentials;

/// Percent-encoding set matching JS `encodeURIComponent`: everything but
/// alphanumerics and `- _ . ! ~ * ' ( )` is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode credentials into the platform join-URI scheme.
///
/// SSID and password are percent-encoded independently. The password
/// field is always emitted, empty-encoded for open networks -- the OS
/// handler treats a missing field and an empty field differently.
pub fn join_uri(credentials: &Credentials) -> Result<String, CoreError> {
    if credentials.ssid.is_empty() {
        return Err(CoreError::EmptyNetworkName);
    }

    let ssid = utf8_percent_encode(&credentials.ssid, COMPONENT);
    let password = utf8_percent_encode(&credentials.password, COMPONENT);
    Ok(format!("wifi:ssid={ssid};password={password};"))
}

/// Encode credentials into the standard QR-for-WiFi payload grammar.
///
/// Auth type is fixed to WPA. `\`, `;`, `,`, and `:` inside SSID and
/// password are backslash-escaped so scanners can still parse the
/// field boundaries -- required by the grammar, not hardening.
pub fn qr_payload(credentials: &Credentials) -> Result<String, CoreError> {
    if credentials.ssid.is_empty() {
        return Err(CoreError::EmptyNetworkName);
    }

    let ssid = escape_field(&credentials.ssid);
    let password = escape_field(&credentials.password);
    Ok(format!("WIFI:S:{ssid};T:WPA;P:{password};;"))
}

/// Backslash-escape the QR grammar's reserved characters.
///
/// Backslash itself is reserved, so it must be handled by the same pass
/// rather than a chained replace (which would double-escape).
fn escape_field(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '\\' | ';' | ',' | ':') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn join_uri_percent_encodes_both_fields() {
        let uri = join_uri(&Credentials::new("My Net", "p@ss")).expect("encodable");
        assert_eq!(uri, "wifi:ssid=My%20Net;password=p%40ss;");
    }

    #[test]
    fn join_uri_emits_empty_password_field() {
        let uri = join_uri(&Credentials::new("Open", "")).expect("encodable");
        assert_eq!(uri, "wifi:ssid=Open;password=;");
    }

    #[test]
    fn join_uri_leaves_unreserved_marks_alone() {
        // encodeURIComponent keeps - _ . ! ~ * ' ( )
        let uri = join_uri(&Credentials::new("a-b_c.d!e~f", "*'()")).expect("encodable");
        assert_eq!(uri, "wifi:ssid=a-b_c.d!e~f;password=*'();");
    }

    #[test]
    fn join_uri_rejects_empty_ssid() {
        let err = join_uri(&Credentials::new("", "secret")).expect_err("must fail");
        assert!(matches!(err, CoreError::EmptyNetworkName));
    }

    #[test]
    fn qr_payload_basic() {
        let payload = qr_payload(&Credentials::new("Home", "secret1")).expect("encodable");
        assert_eq!(payload, "WIFI:S:Home;T:WPA;P:secret1;;");
    }

    #[test]
    fn qr_payload_escapes_reserved_characters() {
        let payload =
            qr_payload(&Credentials::new(r"a;b", r"c:d,e\f")).expect("encodable");
        assert_eq!(payload, r"WIFI:S:a\;b;T:WPA;P:c\:d\,e\\f;;");
    }

    #[test]
    fn qr_payload_empty_password_is_open_network() {
        let payload = qr_payload(&Credentials::new("Cafe", "")).expect("encodable");
        assert_eq!(payload, "WIFI:S:Cafe;T:WPA;P:;;");
    }

    #[test]
    fn qr_payload_rejects_empty_ssid() {
        let err = qr_payload(&Credentials::new("", "")).expect_err("must fail");
        assert!(matches!(err, CoreError::EmptyNetworkName));
    }
}
