use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use super::config_env::engine_config_from_env;
use crate::engine::EngineConfig;
use crate::error::{CoreError, Result};
use crate::models::{MatchFormat, PlayerProfile};
use crate::simulation::{BatchConfig, BatchRunner, BatchSummary, MatchRecord};
use crate::SCHEMA_VERSION;

#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SimulationRequest {
    pub schema_version: u8,
    pub player1: PlayerProfile,
    pub player2: PlayerProfile,
    pub format: MatchFormat,
    pub simulations: u32,
    /// Match i is seeded with base_seed + i (default 0)
    #[serde(default)]
    pub base_seed: u64,
    /// Overrides TENNIS_ENGINE_CONFIG_PATH when present
    #[serde(default)]
    pub engine_config: Option<EngineConfig>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct SimulationResponse {
    pub schema_version: u8,
    pub records: Vec<MatchRecord>,
    pub summary: BatchSummary,
}

impl SimulationRequest {
    pub fn from_json(json: &str) -> Result<Self> {
        let request: SimulationRequest = serde_json::from_str(json)?;
        if request.schema_version != SCHEMA_VERSION {
            return Err(CoreError::invalid(
                "schema_version",
                request.schema_version,
                format!("only version {SCHEMA_VERSION} is supported"),
            ));
        }
        Ok(request)
    }

    pub fn batch(&self) -> BatchConfig {
        BatchConfig::new(self.simulations).with_base_seed(self.base_seed)
    }

    /// Explicit request config, else the env-named file, else defaults.
    fn resolve_engine_config(&self) -> Result<EngineConfig> {
        if let Some(config) = &self.engine_config {
            return Ok(config.clone());
        }
        Ok(engine_config_from_env()?.unwrap_or_default())
    }
}

pub fn simulate_batch(request: &SimulationRequest) -> Result<SimulationResponse> {
    let config = request.resolve_engine_config()?;
    let runner =
        BatchRunner::new(&request.player1, &request.player2, request.format, request.batch(), config)?;
    let records = runner.run();
    let summary = BatchSummary::from_records(&records, request.format.num_sets.as_u8());
    Ok(SimulationResponse { schema_version: SCHEMA_VERSION, records, summary })
}

/// JSON in, JSON out.
pub fn simulate_batch_json(request_json: &str) -> Result<String> {
    let request = SimulationRequest::from_json(request_json)?;
    let response = simulate_batch(&request)?;
    Ok(serde_json::to_string(&response)?)
}

/// JSON Schema of [`SimulationRequest`], pretty-printed.
pub fn request_schema_json() -> Result<String> {
    Ok(serde_json::to_string_pretty(&schema_for!(SimulationRequest))?)
}
