//! Reference value decoding
//!
//! Manifest reference values arrive doubly encoded: URL-style percent escapes
//! and markup entities. Decoding runs as two ordered passes, percent first,
//! so that an encoded entity delimiter (`%26amp%3B`) decodes to the literal
//! entity text `&amp;` and only then collapses to `&`.

/// Decode `%HH` percent escapes.
///
/// Malformed escapes (non-hex digits, truncated at end of input) are passed
/// through literally; manifest values are diagnosed, never rejected.
pub fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).copied().and_then(hex_digit),
                bytes.get(i + 2).copied().and_then(hex_digit),
            ) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

/// Decode markup entities: the five named XML entities plus numeric
/// `&#NNN;` / `&#xHH;` character references.
///
/// Unknown or unterminated entities are passed through literally.
pub fn entity_decode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(start) = rest.find('&') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        match decode_entity(tail) {
            Some((ch, consumed)) => {
                out.push(ch);
                rest = &tail[consumed..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Decode one entity at the start of `tail` (which begins with `&`).
/// Returns the character and the byte length consumed.
fn decode_entity(tail: &str) -> Option<(char, usize)> {
    let end = tail.find(';')?;
    let name = &tail[1..end];
    let consumed = end + 1;
    let ch = match name {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        _ => {
            let code = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
                u32::from_str_radix(hex, 16).ok()?
            } else if let Some(dec) = name.strip_prefix('#') {
                dec.parse::<u32>().ok()?
            } else {
                return None;
            };
            char::from_u32(code)?
        }
    };
    Some((ch, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("plain.txt", "plain.txt")]
    #[case("dir%20name/file.txt", "dir name/file.txt")]
    #[case("a%2fb.txt", "a/b.txt")]
    #[case("100%25.txt", "100%.txt")]
    // Malformed escapes pass through
    #[case("bad%G1.txt", "bad%G1.txt")]
    #[case("trunc%2", "trunc%2")]
    #[case("lone%", "lone%")]
    fn percent_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(percent_decode(input), expected);
    }

    #[rstest]
    #[case("plain.txt", "plain.txt")]
    #[case("d&amp;e.txt", "d&e.txt")]
    #[case("a&lt;b&gt;.txt", "a<b>.txt")]
    #[case("q&quot;p&apos;.txt", "q\"p'.txt")]
    #[case("num&#65;.txt", "numA.txt")]
    #[case("hex&#x41;.txt", "hexA.txt")]
    // Unknown or unterminated entities pass through
    #[case("r&d.txt", "r&d.txt")]
    #[case("x&bogus;.txt", "x&bogus;.txt")]
    #[case("tail&amp", "tail&amp")]
    fn entity_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(entity_decode(input), expected);
    }

    #[test]
    fn percent_runs_before_entities() {
        // %26amp%3B percent-decodes to "&amp;", which then collapses to "&".
        let value = "d%26amp%3Be.txt";
        assert_eq!(entity_decode(&percent_decode(value)), "d&e.txt");
    }

    #[test]
    fn combined_encoded_reference() {
        let value = "dir%20name/d&amp;e.txt";
        assert_eq!(entity_decode(&percent_decode(value)), "dir name/d&e.txt");
    }
}
