use std::{env, fs};

use crate::engine::EngineConfig;
use crate::error::{CoreError, Result};

pub(crate) const ENGINE_CONFIG_PATH_ENV: &str = "TENNIS_ENGINE_CONFIG_PATH";

/// `EngineConfig` named by `TENNIS_ENGINE_CONFIG_PATH`, if the variable is set.
pub(crate) fn engine_config_from_env() -> Result<Option<EngineConfig>> {
    let Ok(path) = env::var(ENGINE_CONFIG_PATH_ENV) else {
        return Ok(None);
    };
    load_engine_config(path.trim())
}

pub(crate) fn load_engine_config(path: &str) -> Result<Option<EngineConfig>> {
    if path.is_empty() {
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    let config = EngineConfig::from_json(&content)?;
    config.validate().map_err(|e| match e {
        CoreError::InvalidParameter { field, value, reason } => CoreError::InvalidParameter {
            field,
            value,
            reason: format!("{reason} (from {ENGINE_CONFIG_PATH_ENV}='{path}')"),
        },
        other => other,
    })?;

    log::info!("Loaded engine config from {ENGINE_CONFIG_PATH_ENV}='{path}'");
    Ok(Some(config))
}
