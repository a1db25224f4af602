//! Configuration and result records shared by the engine and its consumers.

pub mod format;
pub mod player;
pub mod result;

pub use format::{MatchFormat, SetCount, SetFormat, TiebreakFormat};
pub use player::{PlayerProfile, PlayerProfileData};
pub use result::{percentage, MatchResult, PlayerTotals, SetResult, Side};
