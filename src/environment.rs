// src/environment.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::info;

use crate::render::TemplateId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnvironmentConfig {
    /// Template used when a request names none.
    pub default_template: String,
    /// Where the CLI writes rendered documents and letters.
    pub output_path: PathBuf,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            default_template: "modern".to_string(),
            output_path: PathBuf::from("output"),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ConfigFile {
    local: EnvironmentConfig,
    production: EnvironmentConfig,
}

impl EnvironmentConfig {
    /// Load configuration based on environment. A missing config.yaml
    /// falls back to defaults so the CLI works without setup.
    pub fn load() -> Result<Self> {
        let environment = Self::get_environment();
        info!("Loading configuration for environment: {}", environment);

        let config_path = PathBuf::from("config.yaml");
        if !config_path.exists() {
            info!("config.yaml not found, using defaults");
            return Ok(Self::default());
        }

        Self::load_from_file(&environment)
    }

    pub fn default_template_id(&self) -> TemplateId {
        TemplateId::from_name(&self.default_template)
    }

    fn get_environment() -> String {
        std::env::var("CVFORGE_ENV")
            .or_else(|_| std::env::var("ENVIRONMENT"))
            .or_else(|_| std::env::var("ENV"))
            .unwrap_or_else(|_| "local".to_string())
    }

    fn load_from_file(environment: &str) -> Result<Self> {
        let config_content =
            std::fs::read_to_string("config.yaml").context("Failed to read config.yaml")?;

        let config_file: ConfigFile =
            serde_yaml::from_str(&config_content).context("Failed to parse config.yaml")?;

        let env_config = match environment {
            "production" => config_file.production,
            _ => config_file.local,
        };

        Ok(Self {
            default_template: env_config.default_template,
            output_path: Self::resolve_path(&env_config.output_path)?,
        })
    }

    fn resolve_path(path: &PathBuf) -> Result<PathBuf> {
        if path.is_absolute() {
            Ok(path.clone())
        } else {
            let current_dir = std::env::current_dir().context("Failed to get current directory")?;
            Ok(current_dir.join(path))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_modern() {
        let config = EnvironmentConfig::default();
        assert_eq!(config.default_template_id(), TemplateId::Modern);
        assert_eq!(config.output_path, PathBuf::from("output"));
    }

    #[test]
    fn unknown_template_name_still_resolves() {
        let config = EnvironmentConfig {
            default_template: "retro".into(),
            output_path: PathBuf::from("out"),
        };
        assert_eq!(config.default_template_id(), TemplateId::Modern);
    }
}
