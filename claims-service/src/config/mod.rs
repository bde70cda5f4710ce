use serde::Deserialize;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone, Deserialize)]
pub struct ClaimsConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub openai: OpenAiConfig,
    pub data: DataConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OpenAiConfig {
    /// Azure OpenAI resource endpoint, e.g. https://my-resource.openai.azure.com
    pub endpoint: String,
    pub api_key: String,
    /// Deployment (model) name, e.g. gpt-4o-mini
    pub deployment: String,
    pub api_version: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub claims_path: String,
    pub notes_path: String,
}

impl ClaimsConfig {
    pub fn load() -> Result<Self, AppError> {
        let common_config = core_config::Config::load()?;
        let is_prod = env::var("ENVIRONMENT").unwrap_or_else(|_| "dev".to_string()) == "prod";

        Ok(ClaimsConfig {
            common: common_config,
            openai: OpenAiConfig {
                endpoint: get_env("OPENAI_ENDPOINT", None, is_prod)?,
                api_key: get_env("OPENAI_API_KEY", None, is_prod)?,
                deployment: get_env("OPENAI_DEPLOYMENT", Some("gpt-4o-mini"), is_prod)?,
                api_version: get_env("OPENAI_API_VERSION", Some("2024-02-01"), is_prod)?,
            },
            data: DataConfig {
                claims_path: get_env("CLAIMS_DATA_PATH", Some("mocks/claims.json"), is_prod)?,
                notes_path: get_env("NOTES_DATA_PATH", Some("mocks/notes.json"), is_prod)?,
            },
        })
    }
}

fn get_env(key: &str, default: Option<&str>, is_prod: bool) -> Result<String, AppError> {
    match env::var(key) {
        Ok(val) => Ok(val),
        Err(_) => {
            if is_prod {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required in production but not set",
                    key
                )))
            } else if let Some(def) = default {
                Ok(def.to_string())
            } else {
                Err(AppError::ConfigError(anyhow::anyhow!(
                    "{} is required but not set",
                    key
                )))
            }
        }
    }
}
