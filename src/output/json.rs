//! JSON output formatting

use serde::Serialize;
use serde_json::Serializer;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};

/// Indentation used for JSON output
const INDENT: &[u8] = b"    ";

/// Format data as JSON indented with four spaces.
///
/// Field order follows the model declaration, so identical input always
/// produces identical bytes.
pub fn format_json<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
    data.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|e| Error::Render(e.to_string()))
}
