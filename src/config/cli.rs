use crate::config::toml_config::TomlConfig;
use crate::config::Settings;
use crate::core::CapacityPolicy;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "activity-signup")]
#[command(about = "Sign-up service for extracurricular activities")]
pub struct ServerConfig {
    /// Address to bind (default 127.0.0.1)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (default 8000)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject signups once an activity reaches max_participants
    #[arg(long)]
    pub enforce_capacity: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

impl ServerConfig {
    /// 載入 TOML (若有指定) 並套用命令列覆蓋設定
    pub fn resolve(&self) -> Result<Settings> {
        let file_config = match &self.config {
            Some(path) => {
                validate_path("config", path)?;
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = TomlConfig::from_file(path)?;
                config.validate()?;
                config
            }
            None => TomlConfig::default(),
        };

        let mut settings = Settings::from_toml(file_config);

        if let Some(host) = &self.host {
            settings.host = host.clone();
        }
        if let Some(port) = self.port {
            settings.port = port;
        }
        if self.enforce_capacity {
            settings.capacity_policy = CapacityPolicy::Enforced;
        }

        settings.validate()?;
        Ok(settings)
    }
}
