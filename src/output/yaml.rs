//! YAML output formatting

use serde::Serialize;

use crate::error::Result;

/// Format data as block-style YAML without a trailing newline
pub fn format_yaml<T: Serialize + ?Sized>(data: &T) -> Result<String> {
    let output = serde_yaml::to_string(data)?;
    Ok(output.trim_end().to_string())
}
