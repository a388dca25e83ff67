//! CLI commands module.

mod config;
mod encode;
mod info;
mod models;
mod util;

pub use config::ConfigCommand;
pub use encode::EncodeCommand;
pub use info::InfoCommand;
pub use models::ModelsCommand;

pub(crate) use util::*;
