pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::SessionConfig;
pub use crate::core::{items::get_items, session::Session};
pub use domain::item::{Item, ItemGetParams};
pub use domain::params::{GetParameters, SelectQuery};
pub use domain::ports::Transport;
pub use utils::error::{Result, ZabbixError};
