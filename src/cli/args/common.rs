//! Common CLI types shared across commands

use crate::output::OutputMode;

/// Output formats offered by list commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ListOutput {
    /// Indented JSON
    Json,
    /// Block-style YAML
    Yaml,
    /// Table with additional columns
    Wide,
}

/// Output formats offered by view commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ViewOutput {
    /// Indented JSON
    Json,
}

impl From<ListOutput> for OutputMode {
    fn from(output: ListOutput) -> Self {
        match output {
            ListOutput::Json => OutputMode::Json,
            ListOutput::Yaml => OutputMode::Yaml,
            ListOutput::Wide => OutputMode::Wide,
        }
    }
}

impl From<ViewOutput> for OutputMode {
    fn from(output: ViewOutput) -> Self {
        match output {
            ViewOutput::Json => OutputMode::Json,
        }
    }
}
