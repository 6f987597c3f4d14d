//! Vela API data models
//!
//! Every model carries a flattened `extra` map so fields added by the server
//! survive a decode/encode cycle in json and yaml output.

mod build;
mod deployment;
mod repo;

pub use build::Build;
pub use deployment::Deployment;
pub use repo::Repository;
