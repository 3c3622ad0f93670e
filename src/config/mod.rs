#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::seed::sample_directory;
use crate::core::service::ActivityService;
use crate::core::store::InMemoryActivityStore;
use crate::core::{CapacityPolicy, Directory};
use crate::utils::error::Result;
use crate::utils::validation::{validate_bind_address, Validate};
use toml_config::{validate_activity, TomlConfig};

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 8000;

/// 合併命令列與 TOML 後，實際用來啟動服務的設定
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub capacity_policy: CapacityPolicy,
    pub directory: Directory,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            capacity_policy: CapacityPolicy::default(),
            directory: sample_directory(),
        }
    }
}

impl Settings {
    pub fn from_toml(config: TomlConfig) -> Self {
        let defaults = Self::default();
        Self {
            host: config.host().unwrap_or(&defaults.host).to_string(),
            port: config.port().unwrap_or(defaults.port),
            capacity_policy: CapacityPolicy::from_flag(config.enforce_capacity()),
            directory: match config.activities {
                Some(activities) => activities.into_iter().collect(),
                None => defaults.directory,
            },
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn build_service(self) -> ActivityService<InMemoryActivityStore> {
        let store = InMemoryActivityStore::with_policy(self.directory, self.capacity_policy);
        ActivityService::new(store)
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_bind_address("server", &self.host, self.port)?;
        for (name, activity) in self.directory.iter() {
            validate_activity(name, activity)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_sample_directory() {
        let settings = Settings::default();
        assert_eq!(settings.bind_address(), "127.0.0.1:8000");
        assert_eq!(settings.capacity_policy, CapacityPolicy::Descriptive);
        assert!(settings.directory.get("Chess Club").is_some());
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_toml_activities_replace_sample_directory() {
        let config = TomlConfig::from_toml_str(
            r#"
[server]
port = 9100
enforce_capacity = true

[activities."Robotics"]
description = "Build robots"
schedule = "Saturdays"
max_participants = 8
"#,
        )
        .unwrap();

        let settings = Settings::from_toml(config);
        assert_eq!(settings.bind_address(), "127.0.0.1:9100");
        assert_eq!(settings.capacity_policy, CapacityPolicy::Enforced);
        assert_eq!(settings.directory.len(), 1);
        assert!(settings.directory.get("Chess Club").is_none());
    }

    #[test]
    fn test_build_service_applies_policy() {
        let settings = Settings {
            capacity_policy: CapacityPolicy::Enforced,
            ..Settings::default()
        };
        let service = settings.build_service();
        assert_eq!(service.store().policy(), CapacityPolicy::Enforced);
    }
}
