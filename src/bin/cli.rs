//! parlcrawl CLI
//!
//! Reports which affairs of a list changed recently, which are done, and
//! which also appear in a comparison list.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::Local;
use clap::Parser;
use parlcrawl::{
    error::{AppError, Result},
    models::{Config, Report, RunConfig, SourceMode},
    pipeline::{self, TrackOutcome},
    storage::LocalCache,
    utils::console::{self, Level},
};

const DEFAULT_CONFIG: &str = "parlcrawl.toml";

/// parlcrawl - Parliament Affair Tracker
#[derive(Parser, Debug)]
#[command(name = "parlcrawl", version, about = "Tracks status changes of parliamentary affairs")]
struct Cli {
    /// Text file with affair numbers, one per line, as ID (20212355) or short form (21.2355)
    #[arg(value_name = "LISTFILE")]
    list_file: PathBuf,

    /// Second list; reports which of its affairs are also in LISTFILE
    #[arg(long, value_name = "FILE")]
    compare: Option<PathBuf>,

    /// Store fetched data in the local cache
    #[arg(long, conflicts_with = "from_cache")]
    create_cache: bool,

    /// Only check the list file, without querying the service
    #[arg(long)]
    dry: bool,

    /// Read affair data from the cache instead of the service
    #[arg(long)]
    from_cache: bool,

    /// Hide affairs that are done
    #[arg(long)]
    ignore_done: bool,

    /// Show the latest status (affairs with several drafts: draft 1 only)
    #[arg(long)]
    print_state: bool,

    /// Window in days for which updated affairs are shown [default: 7]
    #[arg(short = 't', value_name = "DAYS")]
    days: Option<i64>,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Path to configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Cache directory (overrides the configuration file)
    #[arg(long, value_name = "DIR")]
    cache_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Only print warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Initialize logging based on verbosity flag.
fn init_logging(level: &str) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Load the configuration file; a missing default file is not worth a warning.
fn load_config(path: Option<&Path>) -> Config {
    match path {
        Some(path) => Config::load_or_default(path),
        None if Path::new(DEFAULT_CONFIG).exists() => Config::load_or_default(DEFAULT_CONFIG),
        None => Config::default(),
    }
}

fn run_config(cli: &Cli, config: &Config) -> RunConfig {
    let mut run = RunConfig::from_config(config);
    run.mode = if cli.from_cache {
        SourceMode::Cache
    } else {
        SourceMode::Network {
            write_through: cli.create_cache,
        }
    };
    if let Some(days) = cli.days {
        run.window_days = days;
    }
    run.dry_run = cli.dry;
    run.ignore_done = cli.ignore_done;
    run.print_status = cli.print_state;
    run
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    // "Now" is fixed for the whole run.
    let now = Local::now().naive_local();
    let cli = Cli::parse();

    let mut config = load_config(cli.config.as_deref());
    if let Some(dir) = &cli.cache_dir {
        config.cache.dir = dir.clone();
    }

    let level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        config.logging.level.as_str()
    };
    init_logging(level);
    console::init(if cli.quiet { Level::Warn } else { Level::Info });

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }
    let run = run_config(&cli, &config);
    if run.window_days < 0 {
        let e = AppError::validation("-t must be >= 0");
        log::error!("{}", e);
        return Err(e);
    }

    let cache = LocalCache::new(&config.cache.dir);
    if run.mode == (SourceMode::Network { write_through: true }) && !run.dry_run {
        if let Err(e) = cache.ensure_root().await {
            log::error!(
                "Could not create cache directory {}: {}",
                cache.root().display(),
                e
            );
        }
    }

    console::header("Loading affairs...");
    let outcome = match pipeline::run_tracker(
        &run,
        &cli.list_file,
        cli.compare.as_deref(),
        Arc::new(cache),
        now,
    )
    .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            console::error(&e.to_string());
            return Err(e);
        }
    };

    match (&outcome.report, cli.json) {
        (Some(report), true) => println!("{}", serde_json::to_string_pretty(report)?),
        _ => render(&run, &outcome),
    }
    Ok(())
}

fn render(run: &RunConfig, outcome: &TrackOutcome) {
    // Invalid and duplicate lines were already logged by the loader.
    let primary = &outcome.primary;
    console::info(&format!(
        "{} affairs loaded ({} invalid, {} duplicate).",
        primary.list.len(),
        primary.invalid.len(),
        primary.duplicates.len()
    ));

    if let Some(comparison) = &outcome.comparison {
        console::header("Comparing affair list with comparison list...");
        for id in &comparison.matches {
            console::sub_item(&format!("{id} is contained in the comparison list."));
        }
        console::info(&format!(
            "{} affair(s) found in comparison list.",
            comparison.count()
        ));
    }

    match &outcome.report {
        Some(report) => render_report(run, report),
        None => console::info("Dry run: affairs are not checked against the service."),
    }
}

fn render_report(run: &RunConfig, report: &Report) {
    console::header("Checking affair list for updated affairs...");
    for entry in &report.updated {
        console::sub_item(&format!(
            "{}: {} ({})",
            entry.short_id, entry.title, entry.updated_date
        ));
        if run.print_status {
            console::sub_item(&format!("    {}", entry.status_text));
        }
    }

    if !run.ignore_done && !report.done.is_empty() {
        console::header("Done affairs");
        for entry in &report.done {
            console::sub_item(&format!("{}: {}", entry.short_id, entry.title));
        }
    }

    if run.print_status {
        let shown: HashSet<&str> = report.updated.iter().map(|e| e.short_id.as_str()).collect();
        let others: Vec<_> = report
            .statuses
            .iter()
            .filter(|line| !shown.contains(line.short_id.as_str()))
            .collect();
        if !others.is_empty() {
            console::header("Latest status of other affairs");
            for line in others {
                console::sub_item(&format!("{}: {}", line.short_id, line.status_text));
            }
        }
    }

    for warning in &report.cache_warnings {
        console::warn(&warning.message);
    }
    for failure in &report.failures {
        console::warn(&failure.message);
    }

    let mut items = vec![
        ("Updated", report.updated_count().to_string()),
        ("Failed", report.failure_count().to_string()),
    ];
    if !run.ignore_done {
        items.insert(1, ("Done", report.done_count().to_string()));
    }
    console::summary(
        &format!(
            "{} affair(s) updated within the last {} days.",
            report.updated_count(),
            report.window_days
        ),
        &items,
    );
}
