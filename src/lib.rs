pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{TerminalUi, ZipcloudClient};
pub use app::{LookupSession, SessionSummary};
pub use config::TomlConfig;
pub use crate::core::handler::LookupHandler;
pub use domain::model::{AddressResult, LookupOutcome, Notices, PostalCode};
pub use utils::error::{LookupError, Result};
