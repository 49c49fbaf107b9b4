pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::config::{cli::LocalStorage, CliConfig};
pub use crate::core::packager::Packager;
pub use crate::domain::model::ArchiveJob;
pub use crate::utils::error::{PackagerError, Result};
