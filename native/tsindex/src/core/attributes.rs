//! Attribute Parsing
//!
//! Tolerant parser for the raw attribute text of an opening tag. Values are
//! returned as written; entity references are not decoded.

/// A parsed attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Attribute<'a> {
    pub name: &'a str,
    /// Empty for valueless attributes
    pub value: &'a str,
}

/// Parse attributes from raw tag content (after the element name)
///
/// Input should be the content between element name and '>' or '/>'.
/// Malformed fragments are skipped; this never fails.
pub fn parse_attributes(input: &str) -> Vec<Attribute<'_>> {
    let bytes = input.as_bytes();
    let mut attrs = Vec::new();
    let mut pos = 0;

    while pos < bytes.len() {
        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() || bytes[pos] == b'/' || bytes[pos] == b'>' {
            break;
        }

        let name_start = pos;
        while pos < bytes.len() && is_name_char(bytes[pos]) {
            pos += 1;
        }

        if pos == name_start {
            // Not a name character: skip it
            pos += 1;
            continue;
        }

        let name = &input[name_start..pos];

        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() || bytes[pos] != b'=' {
            attrs.push(Attribute { name, value: "" });
            continue;
        }

        pos += 1; // Skip '='

        while pos < bytes.len() && is_whitespace(bytes[pos]) {
            pos += 1;
        }

        if pos >= bytes.len() {
            attrs.push(Attribute { name, value: "" });
            break;
        }

        let quote = bytes[pos];
        if quote != b'"' && quote != b'\'' {
            // Unquoted value (non-standard but handle it)
            let value_start = pos;
            while pos < bytes.len()
                && !is_whitespace(bytes[pos])
                && bytes[pos] != b'/'
                && bytes[pos] != b'>'
            {
                pos += 1;
            }
            attrs.push(Attribute {
                name,
                value: &input[value_start..pos],
            });
            continue;
        }

        pos += 1; // Skip opening quote
        let value_start = pos;
        while pos < bytes.len() && bytes[pos] != quote {
            pos += 1;
        }

        attrs.push(Attribute {
            name,
            value: &input[value_start..pos],
        });

        if pos < bytes.len() {
            pos += 1; // Skip closing quote
        }
    }

    attrs
}

/// Value of the first attribute named `key`
pub fn attribute_value<'a>(input: &'a str, key: &str) -> Option<&'a str> {
    parse_attributes(input)
        .into_iter()
        .find(|attr| attr.name == key)
        .map(|attr| attr.value)
}

/// Check if byte is whitespace
#[inline]
fn is_whitespace(b: u8) -> bool {
    super::scanner::is_whitespace(b)
}

/// Check if byte is valid in a name (non-ASCII accepted as-is)
#[inline]
fn is_name_char(b: u8) -> bool {
    matches!(b, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b':') || b >= 0x80
}
