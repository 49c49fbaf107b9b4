pub mod packager;

pub use crate::domain::model::ArchiveJob;
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
