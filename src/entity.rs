use std::borrow::Cow;

use crate::error::Error;

// Decoded character and its entity form. Encoding happens in a single pass,
// which is equivalent to replacing `&` before anything else.
const ENTITIES: [(char, &str); 4] = [('&', "&amp;"), ('<', "&lt;"), ('>', "&gt;"), ('"', "&quot;")];

/// Escape the reserved characters `&`, `<`, `>` and `"` in a string.
///
/// Apostrophes are left alone: attribute values are always written in
/// double quotes. When nothing needs escaping the input is returned
/// borrowed.
///
/// ```rust
/// assert_eq!(xmltree::encode_entities(r#"a < "b" & c"#), "a &lt; &quot;b&quot; &amp; c");
/// assert_eq!(xmltree::encode_entities("it's"), "it's");
/// ```
pub fn encode_entities(content: &str) -> Cow<'_, str> {
    if !content.contains(|c: char| ENTITIES.iter().any(|(decoded, _)| *decoded == c)) {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len() + 8);
    for c in content.chars() {
        match ENTITIES.iter().find(|(decoded, _)| *decoded == c) {
            Some((_, encoded)) => result.push_str(encoded),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Reverse [`encode_entities`].
///
/// Only `&amp;`, `&lt;`, `&gt;` and `&quot;` are recognized. Anything else
/// that starts with `&` is passed through untouched. The string is scanned
/// once, so `&amp;lt;` decodes to `&lt;` and not to `<`.
///
/// ```rust
/// assert_eq!(xmltree::decode_entities("&amp;lt;"), "&lt;");
/// assert_eq!(xmltree::decode_entities("&apos;"), "&apos;");
/// ```
pub fn decode_entities(content: &str) -> Cow<'_, str> {
    if !content.contains('&') {
        return Cow::Borrowed(content);
    }
    let mut result = String::with_capacity(content.len());
    let mut rest = content;
    while let Some(position) = rest.find('&') {
        result.push_str(&rest[..position]);
        rest = &rest[position..];
        match ENTITIES
            .iter()
            .find(|(_, encoded)| rest.starts_with(encoded))
        {
            Some((decoded, encoded)) => {
                result.push(*decoded);
                rest = &rest[encoded.len()..];
            }
            None => {
                result.push('&');
                rest = &rest[1..];
            }
        }
    }
    result.push_str(rest);
    Cow::Owned(result)
}

// Strict decoding of entity and character references as found in parsed
// documents. Unlike `decode_entities` this knows `&apos;` and numeric
// references, and rejects anything else.
pub(crate) fn parse_entities(content: &str) -> Result<Cow<'_, str>, Error> {
    if !content.contains('&') {
        return Ok(Cow::Borrowed(content));
    }
    let mut result = String::with_capacity(content.len());
    let mut chars = content.chars();
    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }
        let mut entity = String::new();
        let mut is_complete = false;
        for c in chars.by_ref() {
            if c == ';' {
                is_complete = true;
                break;
            }
            entity.push(c);
        }
        if !is_complete {
            return Err(Error::UnclosedEntity(entity));
        }
        match entity.as_str() {
            "amp" => result.push('&'),
            "apos" => result.push('\''),
            "gt" => result.push('>'),
            "lt" => result.push('<'),
            "quot" => result.push('"'),
            _ => {
                let c = parse_char_reference(&entity)
                    .ok_or_else(|| Error::InvalidEntity(entity.clone()))?;
                result.push(c);
            }
        }
    }
    Ok(Cow::Owned(result))
}

fn parse_char_reference(entity: &str) -> Option<char> {
    let reference = entity.strip_prefix('#')?;
    let code = match reference.strip_prefix('x') {
        Some(hex) => u32::from_str_radix(hex, 16).ok()?,
        None => reference.parse::<u32>().ok()?,
    };
    char::from_u32(code)
}
