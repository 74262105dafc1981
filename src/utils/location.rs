use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Bytes that may not appear raw in a `Location` header. Non-ASCII is
/// always escaped; `%` is handled separately so existing escapes survive.
const LOCATION_UNSAFE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Makes a stored destination safe to send as a redirect target.
///
/// Already-valid URLs pass through unchanged. Control characters, spaces and
/// non-ASCII are percent-encoded as UTF-8, and a `%` that does not start a
/// `%XX` escape becomes `%25`.
pub fn encode_location(url: &str) -> String {
    let escaped_percents = escape_stray_percents(url);
    utf8_percent_encode(&escaped_percents, LOCATION_UNSAFE).to_string()
}

fn escape_stray_percents(url: &str) -> String {
    let bytes = url.as_bytes();
    let mut out = String::with_capacity(url.len());
    for (i, c) in url.char_indices() {
        let starts_escape = bytes.len() > i + 2
            && bytes[i + 1].is_ascii_hexdigit()
            && bytes[i + 2].is_ascii_hexdigit();
        if c == '%' && !starts_escape {
            out.push_str("%25");
        } else {
            out.push(c);
        }
    }
    out
}
