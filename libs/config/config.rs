use serde_derive::Deserialize;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CoreConfig {
    /// Name of the user owning the task list, stamped on created tasks
    pub owner: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct StorageSection {
    /// Type of storage (e.g. json-file)
    pub storage_type: String,

    // Rest of the storage config as a flexible structure
    #[serde(flatten)]
    pub details: toml::Value,
}

#[derive(Debug, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub core: CoreConfig,
    pub storage: StorageSection,
}
