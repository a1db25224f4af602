pub mod json_api;

mod config_env;

pub use json_api::{
    request_schema_json, simulate_batch, simulate_batch_json, SimulationRequest,
    SimulationResponse,
};
