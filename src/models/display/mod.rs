//! Display model implementations for table and document output
//!
//! Single resources render as YAML documents with every field. Lists of
//! repositories render as tables built from the display rows in [`repo`].

pub mod repo;

use crate::client::{Build, Deployment};
use crate::error::Result;
use crate::output::{Formattable, yaml};

impl Formattable for Build {
    fn format_default(&self) -> Result<String> {
        yaml::format_yaml(self)
    }
}

impl Formattable for Deployment {
    fn format_default(&self) -> Result<String> {
        yaml::format_yaml(self)
    }
}
