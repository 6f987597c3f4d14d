//! Output formatting for CLI results
//!
//! Every command funnels its fetched resource through [`render`], which picks
//! one rendering per [`OutputMode`].

use serde::Serialize;

use crate::error::{Error, Result};

pub mod json;
pub mod table;
pub mod yaml;

/// Rendering requested for a command's result
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Human-oriented default: YAML for one resource, a table for a list
    #[default]
    Default,
    /// Indented JSON with the server's field names
    Json,
    /// Block-style YAML with the same fields as JSON
    Yaml,
    /// List table with extra columns
    Wide,
}

/// Trait for resources that can be rendered for output
pub trait Formattable: Serialize {
    /// Render for [`OutputMode::Default`]
    fn format_default(&self) -> Result<String>;

    /// Render for [`OutputMode::Wide`]. Only lists support it.
    fn format_wide(&self) -> Result<String> {
        Err(Error::Render(
            "wide output is only available for lists".to_string(),
        ))
    }
}

/// Render data in the requested mode
pub fn render<T: Formattable + ?Sized>(data: &T, mode: OutputMode) -> Result<String> {
    match mode {
        OutputMode::Default => data.format_default(),
        OutputMode::Json => json::format_json(data),
        OutputMode::Yaml => yaml::format_yaml(data),
        OutputMode::Wide => data.format_wide(),
    }
}
