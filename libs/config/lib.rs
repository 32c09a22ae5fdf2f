mod config;
mod load_config;

pub use config::{Config, CoreConfig, StorageSection};
pub use load_config::load;
