mod defaults;
mod types;

pub use types::*;

use crate::error::ConfigError;
use defaults::*;
use std::path::Path;

impl Default for Config {
    fn default() -> Self {
        Self {
            version: default_version(),
            data_dir: default_data_dir(),
            timeout_sec: default_timeout_sec(),
            agent: AgentConfig::default(),
            flows: FlowsConfig::default(),
        }
    }
}

impl Config {
    /// Load config from a YAML file, falling back to defaults when absent
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Load config from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = serde_yaml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the config
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.agent.base_url.trim().is_empty() {
            return Err(ConfigError::MissingAgentUrl);
        }
        if self.flows.base_url.trim().is_empty() {
            return Err(ConfigError::MissingFlowUrl);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.version, 1);
        assert_eq!(config.timeout_sec, 60);
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let yaml = r#"
agent:
  base_url: "https://agents.example.com"
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.agent.base_url, "https://agents.example.com");
        assert_eq!(config.agent.project_location, "us-central1");
        assert_eq!(config.flows.extract, "extractTripDetailsFlow");
    }

    #[test]
    fn test_empty_agent_url_rejected() {
        let yaml = r#"
agent:
  base_url: ""
"#;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingAgentUrl)
        ));
    }
}
