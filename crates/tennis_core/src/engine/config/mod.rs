//! # Engine Configuration Module
//!
//! All tuning constants of the pressure evaluator and the point simulator.
//!
//! ## Usage
//! ```rust
//! use tennis_core::engine::config::EngineConfig;
//!
//! let config = EngineConfig::default();
//! let noiseless = EngineConfig::deterministic();
//! assert!(config.validate().is_ok());
//! assert_eq!(noiseless.point.variability_scale, 0.0);
//! ```

mod point_config;
mod pressure_config;

pub use point_config::PointConfig;
pub use pressure_config::PressureConfig;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub pressure: PressureConfig,
    #[serde(default)]
    pub point: PointConfig,
}

impl EngineConfig {
    /// Default model
    pub fn realistic() -> Self {
        Self::default()
    }

    /// No execution noise: a 100% server always holds, a 0% server never
    /// wins a point. Used to drive the state machines in tests.
    pub fn deterministic() -> Self {
        let mut cfg = Self::default();
        cfg.point.variability_scale = 0.0;
        cfg
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn validate(&self) -> Result<()> {
        for (field, weight) in self.pressure.weights() {
            if !(weight >= 0.0 && weight.is_finite()) {
                return Err(CoreError::invalid(field, weight, "must be a finite value >= 0"));
            }
        }
        if !(self.pressure.cap > 0.0 && self.pressure.cap <= 10.0) {
            return Err(CoreError::invalid("cap", self.pressure.cap, "must be within (0, 10]"));
        }
        if !self.point.clutch_swing_per_point.is_finite() {
            return Err(CoreError::invalid(
                "clutch_swing_per_point",
                self.point.clutch_swing_per_point,
                "must be finite",
            ));
        }
        if !(self.point.variability_scale >= 0.0 && self.point.variability_scale.is_finite()) {
            return Err(CoreError::invalid(
                "variability_scale",
                self.point.variability_scale,
                "must be a finite value >= 0",
            ));
        }
        Ok(())
    }
}

// ========== Tests ==========
