use std::str::FromStr;

pub mod storage {
    pub mod in_memory;
    pub mod json_file;
}

pub mod utils {
    pub(crate) mod files;
}

pub use taskflow_storage_core::{
    PinFuture, Priority, Storage, StorageBox, StorageConfig, Task, TaskId, TaskQuery, TaskUpdate,
};

use storage::{in_memory::InMemoryStorageConfig, json_file::JsonFileStorageConfig};
use strum_macros::{Display, EnumString};
use taskflow_config::StorageSection;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumString, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum BuiltinStorageType {
    JsonFile,
    InMemory,
}

/// Build the storage backend named by the `[storage]` section of the
/// configuration, feeding it the rest of the section as its own config.
pub fn from_storage_section(section: &StorageSection) -> eyre::Result<StorageBox> {
    let storage_type = BuiltinStorageType::from_str(&section.storage_type).map_err(|_| {
        eyre::eyre!(
            "unknown storage type '{}', expected 'json-file' or 'in-memory'",
            section.storage_type
        )
    })?;

    let storage = match storage_type {
        BuiltinStorageType::JsonFile => {
            let config: JsonFileStorageConfig = section.details.clone().try_into()?;
            config.to_storage()
        }
        BuiltinStorageType::InMemory => {
            let config: InMemoryStorageConfig = section.details.clone().try_into()?;
            config.to_storage()
        }
    };

    Ok(storage)
}
