//! Form body decoding module
//!
//! Minimal `application/x-www-form-urlencoded` parser for the save
//! endpoint: `+` decodes to space, `%XX` percent-decodes, pairs split on
//! `&` and `=`. Malformed escapes are kept literally rather than rejected.

/// Extract one field from an urlencoded form body
///
/// # Arguments
/// * `body` - raw request body bytes
/// * `field` - form field name to look up
///
/// # Returns
/// The decoded value of the first matching field, or `None` if absent
pub fn form_value(body: &[u8], field: &str) -> Option<Vec<u8>> {
    let text = std::str::from_utf8(body).ok()?;
    for pair in text.split('&') {
        let (name, value) = match pair.split_once('=') {
            Some((n, v)) => (n, v),
            None => (pair, ""),
        };
        if decode_component(name) == field.as_bytes() {
            return Some(decode_component(value));
        }
    }
    None
}

/// Decode one urlencoded component into bytes
fn decode_component(component: &str) -> Vec<u8> {
    let bytes = component.as_bytes();
    let mut decoded = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'+' => {
                decoded.push(b' ');
                i += 1;
            }
            b'%' if i + 2 < bytes.len() => match hex_pair(bytes[i + 1], bytes[i + 2]) {
                Some(byte) => {
                    decoded.push(byte);
                    i += 3;
                }
                None => {
                    decoded.push(b'%');
                    i += 1;
                }
            },
            other => {
                decoded.push(other);
                i += 1;
            }
        }
    }
    decoded
}

fn hex_pair(hi: u8, lo: u8) -> Option<u8> {
    let hi = hex_value(hi)?;
    let lo = hex_value(lo)?;
    Some(hi << 4 | lo)
}

const fn hex_value(digit: u8) -> Option<u8> {
    match digit {
        b'0'..=b'9' => Some(digit - b'0'),
        b'a'..=b'f' => Some(digit - b'a' + 10),
        b'A'..=b'F' => Some(digit - b'A' + 10),
        _ => None,
    }
}
