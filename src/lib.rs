pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{toml_config::ResolvedConfig, CliConfig};
pub use core::printer::StatusPrinter;
pub use domain::model::Announcement;
pub use utils::error::{Result, StatusError};
