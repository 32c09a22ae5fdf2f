use crate::Core;

/// Build a [`Core`] from the configuration file: the `[storage]` section
/// selects and configures the backend, the `[core]` section feeds the core
/// itself.
pub fn load(config_path: &str) -> eyre::Result<Core> {
    let config = taskflow_config::load(config_path).map_err(|e| {
        eyre::eyre!(
            "An error occured when trying to open the configuration file '{}': {}",
            config_path,
            e
        )
    })?;

    let storage = taskflow_storage::from_storage_section(&config.storage)?;

    Ok(Core::with_storage(config.core, storage))
}
