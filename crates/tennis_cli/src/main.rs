//! Tennis Simulator CLI
//!
//! `run`  - simulate a batch from command-line player/format flags
//! `json` - run a JSON request file through the library API

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use tennis_core::{
    BatchConfig, BatchRunner, BatchSummary, EngineConfig, MatchFormat, PlayerProfile, SetFormat,
    TiebreakFormat,
};

mod export;

use export::BatchInfo;

#[derive(Parser)]
#[command(name = "tennis-sim")]
#[command(about = "Monte Carlo tennis match simulator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Simulate a batch of matches between two players
    Run(RunArgs),

    /// Run a JSON simulation request
    Json {
        /// Request JSON file path
        #[arg(long)]
        r#in: PathBuf,

        /// Response JSON file path (stdout when omitted)
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RunArgs {
    #[arg(long, default_value = "Player 1")]
    p1_name: String,
    /// Player 1 serve points won against this opponent (%)
    #[arg(long, default_value_t = 65.0)]
    p1_serve: f64,
    #[arg(long, default_value_t = 4.0)]
    p1_variability: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    p1_clutch: f64,

    #[arg(long, default_value = "Player 2")]
    p2_name: String,
    /// Player 2 serve points won against this opponent (%)
    #[arg(long, default_value_t = 65.0)]
    p2_serve: f64,
    #[arg(long, default_value_t = 4.0)]
    p2_variability: f64,
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    p2_clutch: f64,

    /// Number of sets: 1, 3 or 5
    #[arg(long, default_value_t = 3)]
    sets: u8,
    #[arg(long, value_enum, default_value_t = SetFormatArg::Traditional)]
    set_format: SetFormatArg,
    #[arg(long, value_enum, default_value_t = TiebreakArg::Slam)]
    tiebreak: TiebreakArg,
    /// Sudden-death deciding point at deuce
    #[arg(long)]
    no_ad: bool,

    #[arg(long, default_value_t = 500)]
    simulations: u32,
    /// Match i uses seed + i
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Write per-match records as CSV (a directory gets a timestamped name)
    #[arg(long)]
    csv: Option<PathBuf>,
    /// Write the text summary report (a directory gets a timestamped name)
    #[arg(long)]
    summary: Option<PathBuf>,
    /// Engine config JSON file
    #[arg(long)]
    engine_config: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum SetFormatArg {
    Traditional,
    Fast4,
    ProSet,
    ShortZero,
    ShortTwo,
}

impl From<SetFormatArg> for SetFormat {
    fn from(arg: SetFormatArg) -> Self {
        match arg {
            SetFormatArg::Traditional => SetFormat::Traditional,
            SetFormatArg::Fast4 => SetFormat::Fast4,
            SetFormatArg::ProSet => SetFormat::ProSet,
            SetFormatArg::ShortZero => SetFormat::ShortZero,
            SetFormatArg::ShortTwo => SetFormat::ShortTwo,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TiebreakArg {
    Slam,
    Five,
    Ten,
    Twelve,
}

impl From<TiebreakArg> for TiebreakFormat {
    fn from(arg: TiebreakArg) -> Self {
        match arg {
            TiebreakArg::Slam => TiebreakFormat::Slam,
            TiebreakArg::Five => TiebreakFormat::Five,
            TiebreakArg::Ten => TiebreakFormat::Ten,
            TiebreakArg::Twelve => TiebreakFormat::Twelve,
        }
    }
}

impl RunArgs {
    fn players(&self) -> Result<(PlayerProfile, PlayerProfile)> {
        let p1 = PlayerProfile::new(&self.p1_name, self.p1_serve, self.p1_variability, self.p1_clutch)
            .context("Invalid player 1")?;
        let p2 = PlayerProfile::new(&self.p2_name, self.p2_serve, self.p2_variability, self.p2_clutch)
            .context("Invalid player 2")?;
        Ok((p1, p2))
    }

    fn format(&self) -> Result<MatchFormat> {
        Ok(MatchFormat::new(self.sets, self.set_format.into(), self.tiebreak.into(), !self.no_ad)?)
    }

    fn engine_config(&self) -> Result<EngineConfig> {
        let Some(path) = &self.engine_config else {
            return Ok(EngineConfig::default());
        };
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config {}", path.display()))?;
        let config = EngineConfig::from_json(&content)
            .with_context(|| format!("Failed to parse engine config {}", path.display()))?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run(&args),
        Commands::Json { r#in, out } => run_json(&r#in, out.as_deref()),
    }
}

fn run(args: &RunArgs) -> Result<()> {
    let (p1, p2) = args.players()?;
    let format = args.format()?;
    let batch = BatchConfig::new(args.simulations).with_base_seed(args.seed);
    let runner = BatchRunner::new(&p1, &p2, format, batch, args.engine_config()?)?;

    println!("🎾 {} vs {}", p1.name(), p2.name());
    println!("   Format:      {}", format.describe());
    println!("   Simulations: {}", args.simulations);

    let records = runner.run();
    let summary = BatchSummary::from_records(&records, format.num_sets.as_u8());
    println!();
    print!("{}", summary.render_text((p1.name(), p2.name())));

    let now = chrono::Local::now();
    let info = BatchInfo { player1: &p1, player2: &p2, format: &format, simulations: args.simulations };

    if let Some(path) = &args.csv {
        let path = export::resolve_target(path, || info.csv_file_name(&now));
        export::write_csv(&path, &records)?;
        println!("\n📄 Results saved to: {}", path.display());
    }
    if let Some(path) = &args.summary {
        let path = export::resolve_target(path, || info.summary_file_name(&now));
        export::write_report(&path, &export::render_report(&info, &summary, &now))?;
        println!("📝 Summary saved to: {}", path.display());
    }
    Ok(())
}

fn run_json(input: &std::path::Path, output: Option<&std::path::Path>) -> Result<()> {
    let request = std::fs::read_to_string(input)
        .with_context(|| format!("Failed to read request {}", input.display()))?;
    let response = tennis_core::simulate_batch_json(&request)?;

    match output {
        Some(path) => {
            std::fs::write(path, &response)
                .with_context(|| format!("Failed to write response {}", path.display()))?;
            log::info!("Response written to {}", path.display());
        }
        None => println!("{response}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tennis-sim").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_run_defaults() {
        let Commands::Run(args) = parse(&["run"]).command else {
            panic!("expected run");
        };
        assert_eq!(args.simulations, 500);
        assert_eq!(args.seed, 0);
        assert_eq!(args.format().unwrap(), MatchFormat::best_of_three());
        let (p1, p2) = args.players().unwrap();
        assert_eq!(p1.serve_win_pct(), 65.0);
        assert_eq!(p2.name(), "Player 2");
    }

    #[test]
    fn test_run_flags() {
        let Commands::Run(args) = parse(&[
            "run",
            "--p1-name",
            "Iga",
            "--p1-clutch",
            "-2.5",
            "--sets",
            "5",
            "--set-format",
            "short-two",
            "--tiebreak",
            "ten",
            "--no-ad",
        ])
        .command
        else {
            panic!("expected run");
        };
        let format = args.format().unwrap();
        assert_eq!(format.set_format, SetFormat::ShortTwo);
        assert_eq!(format.tiebreak_format, TiebreakFormat::Ten);
        assert!(!format.ad_scoring);
        assert_eq!(format.num_sets.as_u8(), 5);
        assert_eq!(args.players().unwrap().0.clutch_factor(), -2.5);
    }

    #[test]
    fn test_invalid_inputs_are_errors() {
        let Commands::Run(args) = parse(&["run", "--p2-serve", "120"]).command else {
            panic!("expected run");
        };
        assert!(args.players().is_err());

        let Commands::Run(args) = parse(&["run", "--sets", "4"]).command else {
            panic!("expected run");
        };
        assert!(args.format().is_err());
    }

    #[test]
    fn test_run_writes_exports() {
        let dir = tempfile::tempdir().unwrap();
        let dir_str = dir.path().to_str().unwrap();
        let Commands::Run(args) =
            parse(&["run", "--simulations", "5", "--csv", dir_str, "--summary", dir_str]).command
        else {
            panic!("expected run");
        };
        run(&args).unwrap();

        let names: Vec<String> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert!(names.iter().any(|n| n.starts_with("tennis_sim_Player_1_vs_Player_2_") && n.ends_with(".csv")));
        assert!(names.iter().any(|n| n.starts_with("tennis_sim_SUMMARY_") && n.ends_with(".txt")));
    }

    #[test]
    fn test_json_command() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("request.json");
        let output = dir.path().join("response.json");
        std::fs::write(
            &input,
            r#"{
                "schema_version": 1,
                "player1": { "name": "A", "serve_win_pct": 65.0, "serve_variability": 4.0, "clutch_factor": 0.0 },
                "player2": { "name": "B", "serve_win_pct": 62.0, "serve_variability": 4.0, "clutch_factor": 0.0 },
                "format": { "num_sets": 3, "set_format": "traditional", "tiebreak_format": "slam", "ad_scoring": true },
                "simulations": 4,
                "engine_config": {}
            }"#,
        )
        .unwrap();

        run_json(&input, Some(&output)).unwrap();
        let response: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();
        assert_eq!(response["records"].as_array().unwrap().len(), 4);
    }
}
