//! Player Profile - matchup-specific serve parameters
//!
//! A profile describes how a player performs against ONE specific opponent,
//! not a general ability level. The same player carries different numbers
//! into different matchups.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

pub const SERVE_WIN_PCT_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;
pub const SERVE_VARIABILITY_RANGE: std::ops::RangeInclusive<f64> = 1.0..=8.0;
pub const CLUTCH_FACTOR_RANGE: std::ops::RangeInclusive<f64> = -5.0..=5.0;

/// Immutable, validated player profile.
///
/// Deserialization goes through [`PlayerProfile::new`], so a profile read
/// from JSON is held to the same bounds as one built in code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "PlayerProfileData")]
pub struct PlayerProfile {
    name: String,
    serve_win_pct: f64,
    serve_variability: f64,
    clutch_factor: f64,
}

/// Unvalidated wire form of a [`PlayerProfile`].
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct PlayerProfileData {
    pub name: String,
    /// Serve point win % against this opponent (0-100)
    pub serve_win_pct: f64,
    /// Point-to-point standard deviation in percentage points (1-8)
    pub serve_variability: f64,
    /// Pressure-point modifier (-5 to +5)
    pub clutch_factor: f64,
}

impl TryFrom<PlayerProfileData> for PlayerProfile {
    type Error = CoreError;

    fn try_from(data: PlayerProfileData) -> Result<Self> {
        PlayerProfile::new(data.name, data.serve_win_pct, data.serve_variability, data.clutch_factor)
    }
}

impl PlayerProfile {
    pub fn new(
        name: impl Into<String>,
        serve_win_pct: f64,
        serve_variability: f64,
        clutch_factor: f64,
    ) -> Result<Self> {
        check_range("serve_win_pct", serve_win_pct, SERVE_WIN_PCT_RANGE)?;
        check_range("serve_variability", serve_variability, SERVE_VARIABILITY_RANGE)?;
        check_range("clutch_factor", clutch_factor, CLUTCH_FACTOR_RANGE)?;

        Ok(Self { name: name.into(), serve_win_pct, serve_variability, clutch_factor })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn serve_win_pct(&self) -> f64 {
        self.serve_win_pct
    }

    pub fn serve_variability(&self) -> f64 {
        self.serve_variability
    }

    pub fn clutch_factor(&self) -> f64 {
        self.clutch_factor
    }
}

fn check_range(
    field: &'static str,
    value: f64,
    range: std::ops::RangeInclusive<f64>,
) -> Result<()> {
    if range.contains(&value) {
        Ok(())
    } else {
        Err(CoreError::invalid(
            field,
            value,
            format!("must be within {}..={}", range.start(), range.end()),
        ))
    }
}
