use std::path::Path;

use crate::Config;

pub fn load(config_path: &str) -> eyre::Result<Config> {
    let content = read_file_content_if_exist(config_path)?
        .ok_or_else(|| eyre::eyre!("config path '{config_path}' was not found"))?;

    parse(&content)
}

fn parse(content: &str) -> eyre::Result<Config> {
    let config: Config = toml::from_str(content)?;
    Ok(config)
}

fn read_file_content_if_exist(file_path: &str) -> eyre::Result<Option<String>> {
    let path = Path::new(file_path);

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    Ok(Some(content))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse(
            r#"
            [core]
            owner = "alice"

            [storage]
            storage_type = "json-file"
            tasks_file = "/tmp/tasks.json"
            "#,
        )
        .unwrap();

        assert_eq!(config.core.owner.as_deref(), Some("alice"));
        assert_eq!(config.storage.storage_type, "json-file");
        assert_eq!(
            config.storage.details.get("tasks_file").and_then(|v| v.as_str()),
            Some("/tmp/tasks.json")
        );
    }

    #[test]
    fn test_core_section_is_optional() {
        let config = parse(
            r#"
            [storage]
            storage_type = "in-memory"
            "#,
        )
        .unwrap();

        assert_eq!(config.core.owner, None);
        assert_eq!(config.storage.storage_type, "in-memory");
    }

    #[test]
    fn test_missing_storage_section_is_an_error() {
        assert!(parse("[core]\n").is_err());
    }
}
