use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use tictactoe_engine::logger::LogLevel;
use tictactoe_engine::tictactoe::{HumanSide, SearchAlgorithm};

const CONFIG_FILE_NAME: &str = "tictactoe_client_config.yaml";

fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: Option<&str>,
) -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer> {
    match path {
        Some(path) => ConfigManager::from_yaml_file(path),
        None => ConfigManager::from_yaml_file(&default_config_path()),
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct LogConfig {
    #[serde(default)]
    pub prefix: Option<String>,
    #[serde(default)]
    pub level: LogLevel,
}

impl Validate for LogConfig {
    fn validate(&self) -> Result<(), String> {
        if let Some(prefix) = &self.prefix
            && prefix.trim().is_empty()
        {
            return Err("Log prefix must not be blank".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub human_side: HumanSide,
    #[serde(default)]
    pub algorithm: SearchAlgorithm,
    #[serde(default)]
    pub log: LogConfig,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.log.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::config::{ConfigContentProvider, ConfigSerializer};

    fn get_temp_file_path() -> String {
        let mut path = std::env::temp_dir();
        let random_number: u32 = rand::random();
        path.push(format!("temp_tictactoe_client_config_{}.yaml", random_number));
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_string() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let serialized: String = serializer.serialize(&default_config).unwrap();
        let deserialized: Config = serializer.deserialize(&serialized).unwrap();
        assert_eq!(default_config, deserialized);
    }

    #[test]
    fn test_default_config_can_be_serialized_and_deserialized_file() {
        let default_config = Config::default();
        let serializer = YamlConfigSerializer::new();
        let content_provider = FileContentConfigProvider::new(get_temp_file_path());

        let serialized: String = serializer.serialize(&default_config).unwrap();
        content_provider.set_config_content(&serialized).unwrap();
        let read_back = content_provider.get_config_content().unwrap().unwrap();
        let deserialized: Config = serializer.deserialize(&read_back).unwrap();
        assert_eq!(default_config, deserialized);

        let _ = std::fs::remove_file(content_provider.file_path());
    }

    #[test]
    fn test_missing_file_falls_back_to_default() {
        let manager = get_config_manager(Some(&get_temp_file_path()));
        assert_eq!(manager.get_config().unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let serializer = YamlConfigSerializer::new();
        let config: Config = serializer
            .deserialize("human_side: Random\nalgorithm: Minimax\n")
            .unwrap();
        assert_eq!(config.human_side, HumanSide::Random);
        assert_eq!(config.algorithm, SearchAlgorithm::Minimax);
        assert_eq!(config.log, LogConfig::default());
    }

    #[test]
    fn test_unknown_algorithm_is_rejected() {
        let serializer = YamlConfigSerializer::new();
        let result: Result<Config, _> = serializer.deserialize("algorithm: Greedy\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_prefix_fails_validation() {
        let config = Config {
            log: LogConfig {
                prefix: Some("  ".to_string()),
                level: LogLevel::Info,
            },
            ..Config::default()
        };
        assert!(config.validate().is_err());
    }
}
