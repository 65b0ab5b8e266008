use memchr::memchr;

use super::{RoutePattern, TemplatePart};

#[inline]
fn is_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

// `:` followed by `[A-Za-z0-9_]+` is a parameter anywhere in the template
#[tracing::instrument(level = "trace", skip(template), fields(template=%template))]
pub fn compile(template: &str) -> RoutePattern {
    let bytes = template.as_bytes();
    let mut parts = Vec::new();
    let mut literal = String::new();
    let mut i = 0usize;

    while i < bytes.len() {
        let Some(rel) = memchr(b':', &bytes[i..]) else {
            literal.push_str(&template[i..]);
            break;
        };
        let colon = i + rel;
        literal.push_str(&template[i..colon]);

        let mut end = colon + 1;
        while end < bytes.len() && is_name_byte(bytes[end]) {
            end += 1;
        }

        if end == colon + 1 {
            literal.push(':');
        } else {
            if !literal.is_empty() {
                parts.push(TemplatePart::Literal(std::mem::take(&mut literal)));
            }
            parts.push(TemplatePart::Param(template[colon + 1..end].to_string()));
        }
        i = end;
    }

    if !literal.is_empty() {
        parts.push(TemplatePart::Literal(literal));
    }

    RoutePattern::new(template.to_string(), parts)
}
