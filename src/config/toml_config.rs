use crate::core::Activity;
use crate::utils::error::{Result, SignupError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_unique_entries,
    Validate,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub activities: Option<BTreeMap<String, Activity>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub enforce_capacity: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| SignupError::ConfigError {
                message: format!("Cannot read {}: {}", path.as_ref().display(), e),
            })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SignupError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${SIGNUP_PORT})，找不到的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SignupError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn host(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.host.as_deref())
    }

    pub fn port(&self) -> Option<u16> {
        self.server.as_ref().and_then(|s| s.port)
    }

    pub fn enforce_capacity(&self) -> bool {
        self.server
            .as_ref()
            .and_then(|s| s.enforce_capacity)
            .unwrap_or(false)
    }
}

pub(crate) fn validate_activity(name: &str, activity: &Activity) -> Result<()> {
    validate_non_empty_string("activities", name)?;

    let field = format!("activities.\"{}\"", name);
    validate_positive_number(
        &format!("{}.max_participants", field),
        activity.max_participants,
        1,
    )?;

    let participants_field = format!("{}.participants", field);
    for email in &activity.participants {
        validate_non_empty_string(&participants_field, email)?;
    }
    validate_unique_entries(&participants_field, &activity.participants)
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        if let Some(host) = self.host() {
            validate_non_empty_string("server.host", host)?;
        }
        if let Some(port) = self.port() {
            validate_range("server.port", port, 1, u16::MAX)?;
        }
        if let Some(activities) = &self.activities {
            for (name, activity) in activities {
                validate_activity(name, activity)?;
            }
        }
        Ok(())
    }
}
