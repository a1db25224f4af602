//! Match Format - set/tiebreak/scoring variants
//!
//! Every derived quantity (games to win, tiebreak trigger, tiebreak target,
//! starting score) is computed from the variant on demand and never stored.

use schemars::gen::SchemaGenerator;
use schemars::schema::Schema;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Number of sets contested.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum SetCount {
    One,
    Three,
    Five,
}

impl SetCount {
    pub const fn as_u8(self) -> u8 {
        match self {
            SetCount::One => 1,
            SetCount::Three => 3,
            SetCount::Five => 5,
        }
    }

    /// ceil(num_sets / 2)
    pub const fn sets_to_win(self) -> u8 {
        (self.as_u8() + 1) / 2
    }
}

impl TryFrom<u8> for SetCount {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(SetCount::One),
            3 => Ok(SetCount::Three),
            5 => Ok(SetCount::Five),
            other => Err(CoreError::invalid("num_sets", other, "must be 1, 3 or 5")),
        }
    }
}

// Serialized as the bare set count.
impl JsonSchema for SetCount {
    fn schema_name() -> String {
        "SetCount".to_string()
    }

    fn json_schema(gen: &mut SchemaGenerator) -> Schema {
        u8::json_schema(gen)
    }
}

impl From<SetCount> for u8 {
    fn from(count: SetCount) -> u8 {
        count.as_u8()
    }
}

/// Set format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SetFormat {
    /// First to 6 with 2-game lead, tiebreak at 6-6
    Traditional,
    /// First to 4 with 2-game lead, tiebreak at 3-3
    Fast4,
    /// First to 8 with 2-game lead, tiebreak at 8-8
    ProSet,
    /// First to 4 with 2-game lead from 0-0, tiebreak at 3-3
    ShortZero,
    /// First to 4 with 2-game lead from 2-2, tiebreak at 3-3
    ShortTwo,
}

impl SetFormat {
    pub const ALL: [SetFormat; 5] = [
        SetFormat::Traditional,
        SetFormat::Fast4,
        SetFormat::ProSet,
        SetFormat::ShortZero,
        SetFormat::ShortTwo,
    ];

    pub const fn games_to_win(self) -> u8 {
        match self {
            SetFormat::Traditional => 6,
            SetFormat::Fast4 => 4,
            SetFormat::ProSet => 8,
            SetFormat::ShortZero | SetFormat::ShortTwo => 4,
        }
    }

    /// Game score (each side) at which the set goes to a tiebreak.
    pub const fn tiebreak_threshold(self) -> u8 {
        match self {
            SetFormat::Traditional => 6,
            SetFormat::Fast4 => 3,
            SetFormat::ProSet => 8,
            SetFormat::ShortZero | SetFormat::ShortTwo => 3,
        }
    }

    pub const fn starting_games(self) -> (u8, u8) {
        match self {
            SetFormat::ShortTwo => (2, 2),
            SetFormat::Traditional
            | SetFormat::Fast4
            | SetFormat::ProSet
            | SetFormat::ShortZero => (0, 0),
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SetFormat::Traditional => "Traditional (to 6)",
            SetFormat::Fast4 => "Fast4 (to 4)",
            SetFormat::ProSet => "Pro Set (to 8)",
            SetFormat::ShortZero => "Short Set from 0-0 (to 4)",
            SetFormat::ShortTwo => "Short Set from 2-2 (to 4)",
        }
    }
}

/// Tiebreak format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TiebreakFormat {
    /// 7 points in non-final sets, 10 points in the final set
    Slam,
    Five,
    Ten,
    Twelve,
}

impl TiebreakFormat {
    pub const ALL: [TiebreakFormat; 4] =
        [TiebreakFormat::Slam, TiebreakFormat::Five, TiebreakFormat::Ten, TiebreakFormat::Twelve];

    pub const fn target_points(self, is_final_set: bool) -> u8 {
        match self {
            TiebreakFormat::Slam => {
                if is_final_set {
                    10
                } else {
                    7
                }
            }
            TiebreakFormat::Five => 5,
            TiebreakFormat::Ten => 10,
            TiebreakFormat::Twelve => 12,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            TiebreakFormat::Slam => "Slam (7pt regular, 10pt final)",
            TiebreakFormat::Five => "5 Points All Sets",
            TiebreakFormat::Ten => "10 Points All Sets",
            TiebreakFormat::Twelve => "12 Points All Sets",
        }
    }
}

/// Complete, immutable match format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct MatchFormat {
    pub num_sets: SetCount,
    pub set_format: SetFormat,
    pub tiebreak_format: TiebreakFormat,
    /// true = advantage scoring, false = sudden-death deciding point
    pub ad_scoring: bool,
}

impl MatchFormat {
    pub fn new(
        num_sets: u8,
        set_format: SetFormat,
        tiebreak_format: TiebreakFormat,
        ad_scoring: bool,
    ) -> Result<Self> {
        Ok(Self { num_sets: SetCount::try_from(num_sets)?, set_format, tiebreak_format, ad_scoring })
    }

    /// Best-of-3, traditional sets, slam tiebreaks, advantage scoring
    pub fn best_of_three() -> Self {
        Self {
            num_sets: SetCount::Three,
            set_format: SetFormat::Traditional,
            tiebreak_format: TiebreakFormat::Slam,
            ad_scoring: true,
        }
    }

    /// Best-of-5 grand slam format
    pub fn best_of_five() -> Self {
        Self { num_sets: SetCount::Five, ..Self::best_of_three() }
    }

    pub fn games_to_win(&self) -> u8 {
        self.set_format.games_to_win()
    }

    pub fn tiebreak_threshold(&self) -> u8 {
        self.set_format.tiebreak_threshold()
    }

    pub fn tiebreak_points(&self, is_final_set: bool) -> u8 {
        self.tiebreak_format.target_points(is_final_set)
    }

    pub fn starting_games(&self) -> (u8, u8) {
        self.set_format.starting_games()
    }

    pub fn sets_to_win(&self) -> u8 {
        self.num_sets.sets_to_win()
    }

    pub fn describe(&self) -> String {
        let length = match self.num_sets {
            SetCount::One => "Single Set",
            SetCount::Three => "Best of 3 Sets",
            SetCount::Five => "Best of 5 Sets",
        };
        let scoring = if self.ad_scoring { "Advantage Scoring" } else { "No-Ad Scoring" };
        format!(
            "{}, {}, {}, {}",
            length,
            self.set_format.label(),
            self.tiebreak_format.label(),
            scoring
        )
    }
}
