use std::borrow::Cow;

use encoding_rs::Encoding;
use xhtmlchardet::detect;

use crate::error::Error;

fn encoding(data: &[u8]) -> Option<&'static Encoding> {
    let mut cursor = std::io::Cursor::new(data);
    let charsets = detect(&mut cursor, None).ok()?;
    // no encoding detected
    let label = charsets.first().map(String::as_str).unwrap_or("UTF-8");
    Encoding::for_label(label.as_bytes())
}

// Decode a document to a string. A byte order mark overrides the detected
// encoding and is stripped.
pub(crate) fn decode(data: &[u8]) -> Result<Cow<'_, str>, Error> {
    let encoding = encoding(data).ok_or(Error::UnsupportedEncoding)?;
    let (xml, _, _) = encoding.decode(data);
    Ok(xml)
}
