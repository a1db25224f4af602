//! Point outcome configuration

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Point simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PointConfig {
    /// Serve-win swing in percentage points per clutch unit at pressure 10
    /// (default: 1.0, so clutch +5 at full pressure adds 5 points)
    pub clutch_swing_per_point: f64,
    /// Multiplier on each profile's serve variability (default: 1.0)
    pub variability_scale: f64,
}

impl Default for PointConfig {
    fn default() -> Self {
        Self { clutch_swing_per_point: 1.0, variability_scale: 1.0 }
    }
}
