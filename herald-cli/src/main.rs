//! herald - Heralded entanglement swapping
//! Command-line harness: detector exercise, heralding audit and swap trials

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use colored::*;
use herald_core::{Port, SimClock};
use herald_orchestration::{
    AuditSummary, HeraldingAudit, RetryPolicy, SwapConfig, SwapOrchestrator, Tally, TrialReport,
    TrialVerdict,
};
use herald_photonic::{ClickDetector, Detector, DetectorConfig};
use herald_quantum::StateVectorBackend;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "herald")]
#[command(version)]
#[command(about = "Heralded entanglement swapping simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Send two single photons into a twin detector and print each outcome
    Detectors {
        /// Number of photon pairs
        #[arg(short, long, default_value_t = 10)]
        trials: usize,

        /// RNG seed
        #[arg(short, long)]
        seed: Option<u64>,

        /// Detector cannot tell one photon from two
        #[arg(long)]
        no_num_resolving: bool,
    },

    /// Check every herald decision against the spins it announces
    Heralding {
        /// Number of generation attempts
        #[arg(short, long, default_value_t = 1000)]
        attempts: u64,

        #[command(flatten)]
        run: RunArgs,
    },

    /// Run swap trials and print transcripts and the tally
    Swap {
        #[command(flatten)]
        run: RunArgs,

        /// Number of trials (overrides the config file)
        #[arg(short, long)]
        trials: Option<usize>,

        /// Give up on a link after this many failed attempts
        #[arg(long, value_name = "N")]
        max_attempts: Option<u64>,

        /// Print only the tally
        #[arg(short, long)]
        quiet: bool,
    },
}

#[derive(Args)]
struct RunArgs {
    /// TOML configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Bright-state population, in (0, 1)
    #[arg(long)]
    alpha: Option<f64>,

    /// RNG seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Detectors {
            trials,
            seed,
            no_num_resolving,
        } => detectors_command(trials, seed, !no_num_resolving),

        Commands::Heralding { attempts, run } => heralding_command(attempts, &run),

        Commands::Swap {
            run,
            trials,
            max_attempts,
            quiet,
        } => swap_command(&run, trials, max_attempts, quiet),
    };

    if let Err(e) = result {
        eprintln!("{} {:#}", "error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "herald=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// ============================================================================
// Configuration
// ============================================================================

/// Config file (or defaults) with the command-line overrides applied
fn load_config(args: &RunArgs) -> Result<SwapConfig> {
    let mut config = match &args.config {
        Some(path) => SwapConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => SwapConfig::default(),
    };

    if let Some(alpha) = args.alpha {
        config.alpha = alpha;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    tracing::debug!(
        file = ?args.config,
        alpha = config.alpha,
        trials = config.trials,
        seed = ?config.seed,
        "config loaded"
    );
    Ok(config)
}

fn backend_for(seed: Option<u64>) -> StateVectorBackend {
    match seed {
        Some(seed) => StateVectorBackend::seeded(seed),
        None => StateVectorBackend::new(),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn detectors_command(trials: usize, seed: Option<u64>, num_resolving: bool) -> Result<()> {
    let mut backend = backend_for(seed);
    let mut detector = Detector::with_config("twin", DetectorConfig { num_resolving });
    tracing::debug!(trials, ?seed, num_resolving, "detectors command");

    println!(
        "{} {} photon pairs into {}",
        "Sending".green().bold(),
        trials,
        detector.name().cyan()
    );

    let mut bunched = 0;
    for trial in 0..trials {
        let left = backend.emit_photon(true)?;
        let right = backend.emit_photon(true)?;
        detector.tx_input(Port::Qin0, left)?;
        detector.tx_input(Port::Qin1, right)?;
        detector.classify_and_emit(&mut backend)?;

        let outcome = detector.pop().context("detector produced no outcome")?;
        if outcome.is_bunched() {
            bunched += 1;
        }
        println!("  {:>4}  {}", trial, outcome);
        backend.advance(1);
    }

    println!();
    println!(
        "{} {}/{} outcomes bunched",
        "Done".green().bold(),
        bunched,
        trials
    );
    Ok(())
}

fn heralding_command(attempts: u64, run: &RunArgs) -> Result<()> {
    let config = load_config(run)?;
    config.validate()?;

    tracing::debug!(attempts, "heralding command");
    let mut backend = backend_for(config.seed);
    let mut audit = HeraldingAudit::new(config.alpha, &config.link_ab, &config.detector);
    let summary = audit.run(&mut backend, attempts)?;

    if run.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_audit(&summary);
    }

    if !summary.is_clean() {
        bail!("{} herald decisions contradicted by the spins", summary.violations.len());
    }
    Ok(())
}

fn swap_command(
    run: &RunArgs,
    trials: Option<usize>,
    max_attempts: Option<u64>,
    quiet: bool,
) -> Result<()> {
    let mut config = load_config(run)?;
    if let Some(trials) = trials {
        config.trials = trials;
    }
    if let Some(max) = max_attempts {
        config.retry = RetryPolicy::MaxAttempts(max);
    }
    tracing::debug!(retry = ?config.retry, quiet, json = run.json, "swap command");

    let backend = backend_for(config.seed);
    let mut orch = SwapOrchestrator::new(backend, config)?;

    if run.json {
        let mut reports = Vec::new();
        let tally = orch.run_with(|report| reports.push(report.clone()))?;
        let output = serde_json::json!({
            "config": orch.config(),
            "reports": reports,
            "tally": tally,
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {} trials (alpha = {})",
        "Swapping".green().bold(),
        orch.config().trials,
        orch.config().alpha
    );

    let tally = orch.run_with(|report| {
        if !quiet {
            print_report(report);
        }
    })?;

    println!();
    print_tally(&tally);
    Ok(())
}

// ============================================================================
// Output
// ============================================================================

fn print_report(report: &TrialReport) {
    let verdict = match report.verdict {
        TrialVerdict::Success => "ok".green().bold(),
        TrialVerdict::Mismatch(state) => format!("mismatch {}", state).red().bold(),
    };

    println!(
        "  {:>4}  AB {} ({})  CD {} ({})  BSM {}  -> {}  {}  -> {}  {}",
        report.index,
        report.state_ab.to_string().cyan(),
        report.attempts_ab,
        report.state_cd.to_string().cyan(),
        report.attempts_cd,
        report.swap_bits,
        report.swapped_state,
        report.correction.to_string().yellow(),
        report.final_state,
        verdict
    );
}

fn print_tally(tally: &Tally) {
    let line = tally.to_string();
    if tally.failed == 0 {
        println!("{}", line.green().bold());
    } else {
        println!("{}", line.yellow().bold());
    }
    println!(
        "{} {:.1} generation attempts per trial",
        "   Mean".bold(),
        tally.mean_attempts()
    );
}

fn print_audit(summary: &AuditSummary) {
    println!(
        "{} {} attempts: {} heralded, {} failed",
        "Audited".green().bold(),
        summary.attempts,
        summary.heralded,
        summary.failed
    );

    for violation in &summary.violations {
        println!(
            "  {} attempt {}: {} announced {:?}, spins showed {:?}",
            "violation".red().bold(),
            violation.attempt,
            violation.outcome,
            violation.expected,
            violation.observed
        );
    }

    if summary.is_clean() {
        println!("{}", "Every herald matched its spins".green().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn run_args(alpha: Option<f64>, seed: Option<u64>) -> RunArgs {
        RunArgs {
            config: None,
            alpha,
            seed,
            json: false,
        }
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_swap_flags() {
        let cli = Cli::try_parse_from([
            "herald",
            "swap",
            "--trials",
            "5",
            "--alpha",
            "0.3",
            "--seed",
            "9",
            "--max-attempts",
            "100",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Swap {
                run,
                trials,
                max_attempts,
                quiet,
            } => {
                assert_eq!(trials, Some(5));
                assert_eq!(run.alpha, Some(0.3));
                assert_eq!(run.seed, Some(9));
                assert_eq!(max_attempts, Some(100));
                assert!(run.json);
                assert!(!quiet);
            }
            _ => panic!("expected swap"),
        }
    }

    #[test]
    fn test_overrides_apply_over_defaults() {
        let config = load_config(&run_args(Some(0.35), Some(4))).unwrap();
        assert_eq!(config.alpha, 0.35);
        assert_eq!(config.seed, Some(4));
        assert_eq!(config.trials, SwapConfig::default().trials);
    }

    #[test]
    fn test_reference_config_loads() {
        let path = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../herald.toml"));
        let args = RunArgs {
            config: Some(path),
            ..run_args(None, None)
        };
        let config = load_config(&args).unwrap();
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.retry, RetryPolicy::Unbounded);
    }

    #[test]
    fn test_missing_config_file_is_reported() {
        let args = RunArgs {
            config: Some(PathBuf::from("/nonexistent/herald.toml")),
            ..run_args(None, None)
        };
        let err = load_config(&args).unwrap_err();
        assert!(err.to_string().contains("failed to load"));
    }

    #[test]
    fn test_detectors_command_runs() {
        assert!(detectors_command(5, Some(1), true).is_ok());
    }

    #[test]
    fn test_swap_command_rejects_bad_alpha() {
        let err = swap_command(&run_args(Some(1.5), Some(1)), Some(1), None, true).unwrap_err();
        assert!(err.to_string().contains("alpha"));
    }
}
