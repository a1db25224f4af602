//! CSV and text-report export of a finished batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Local};

use tennis_core::{BatchSummary, MatchFormat, MatchRecord, PlayerProfile};

/// Players, format and size of a batch, for report headers and file names.
pub struct BatchInfo<'a> {
    pub player1: &'a PlayerProfile,
    pub player2: &'a PlayerProfile,
    pub format: &'a MatchFormat,
    pub simulations: u32,
}

impl BatchInfo<'_> {
    /// `tennis_sim_<p1>_vs_<p2>_<YYYYmmdd_HHMMSS>.csv`
    pub fn csv_file_name(&self, at: &DateTime<Local>) -> String {
        format!(
            "tennis_sim_{}_vs_{}_{}.csv",
            file_safe(self.player1.name()),
            file_safe(self.player2.name()),
            at.format("%Y%m%d_%H%M%S")
        )
    }

    pub fn summary_file_name(&self, at: &DateTime<Local>) -> String {
        format!(
            "tennis_sim_SUMMARY_{}_vs_{}_{}.txt",
            file_safe(self.player1.name()),
            file_safe(self.player2.name()),
            at.format("%Y%m%d_%H%M%S")
        )
    }
}

fn file_safe(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect()
}

/// A directory target gets a generated file name; anything else is used as is.
pub fn resolve_target(path: &Path, default_name: impl FnOnce() -> String) -> PathBuf {
    if path.is_dir() {
        path.join(default_name())
    } else {
        path.to_path_buf()
    }
}

pub fn write_csv(path: &Path, records: &[MatchRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create CSV file {}", path.display()))?;
    writer.write_record(MatchRecord::csv_header())?;
    for record in records {
        writer.write_record(record.csv_row())?;
    }
    writer.flush().with_context(|| format!("Failed to write CSV file {}", path.display()))?;
    Ok(())
}

fn describe_player(profile: &PlayerProfile) -> String {
    format!(
        "{}:\n  Serve Win %: {}%\n  Variability: {}%\n  Clutch Factor: {:+.1}",
        profile.name(),
        profile.serve_win_pct(),
        profile.serve_variability(),
        profile.clutch_factor()
    )
}

pub fn render_report(info: &BatchInfo<'_>, summary: &BatchSummary, at: &DateTime<Local>) -> String {
    let rule = "=".repeat(80);
    let mut lines = vec![
        rule.clone(),
        "TENNIS MATCH SIMULATION SUMMARY".to_string(),
        rule.clone(),
        String::new(),
        format!("Simulation Date: {}", at.format("%Y-%m-%d %H:%M:%S")),
        format!("Number of Simulations: {}", info.simulations),
        String::new(),
        format!("Match Format: {}", info.format.describe()),
        String::new(),
        rule.clone(),
        "PLAYER PARAMETERS (HEAD-TO-HEAD MATCHUP)".to_string(),
        rule,
        String::new(),
        describe_player(info.player1),
        String::new(),
        describe_player(info.player2),
        String::new(),
    ];
    lines.push(summary.render_text((info.player1.name(), info.player2.name())));
    lines.join("\n")
}

pub fn write_report(path: &Path, report: &str) -> Result<()> {
    std::fs::write(path, report)
        .with_context(|| format!("Failed to write summary file {}", path.display()))
}
