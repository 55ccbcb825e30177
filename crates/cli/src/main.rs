//! Concurrent cache simulator CLI.
//!
//! This binary provides two entry points:
//! 1. **Interactive:** The menu loop (run simulation, display cache, change policy, exit).
//! 2. **Run:** Select a policy, run one simulation, print the cache and statistics, and exit.
//!
//! Without `--policy`, both entry points use `cache.policy` from the config
//! file; the interactive menu starts uninitialized only when neither is given.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use cachesim_core::config::{Config, ReplacementPolicy};
use cachesim_core::{CacheError, CacheSession};

#[derive(Parser, Debug)]
#[command(
    name = "cachesim",
    author,
    version,
    about = "Concurrent cache replacement simulator",
    long_about = "Simulate concurrent workers hitting a fixed-capacity cache under LRU or LFU replacement.\n\nWith no subcommand the interactive menu starts.\n\nExamples:\n  cachesim\n  cachesim --cache-size 8 --workers 2\n  cachesim run --policy lfu --delay-ms 0 --seed 42\n  cachesim --config sim.json run"
)]
struct Cli {
    /// JSON configuration file; command-line flags override its values.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Number of cache slots.
    #[arg(long, global = true)]
    cache_size: Option<usize>,

    /// Size of the address universe.
    #[arg(long, global = true)]
    memory_size: Option<u64>,

    /// Number of concurrent workers.
    #[arg(long, global = true)]
    workers: Option<usize>,

    /// Accesses issued by each worker.
    #[arg(long, global = true)]
    accesses: Option<usize>,

    /// Pause between a worker's accesses, in milliseconds.
    #[arg(long, global = true)]
    delay_ms: Option<u64>,

    /// Seed for reproducible address streams.
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log filter (e.g. `info`, `debug`, `cachesim_core=trace`); `RUST_LOG` wins when set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Show per-access worker and cache events (`cachesim_core=debug`).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run one simulation non-interactively and print the result.
    Run {
        /// Replacement policy (`lru`, `lfu`, `1`, `2`); unrecognized values fall back to LRU.
        /// Defaults to `cache.policy` from the config.
        #[arg(short, long)]
        policy: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&log_filter(&cli.log_level, cli.verbose));

    let config = match build_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    let result = match cli.command {
        Some(Commands::Run { policy }) => cmd_run(config, policy.as_deref()),
        None => {
            let preselect = cli.config.is_some();
            interactive(config, preselect)
        }
    };
    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Filter directive for `--log-level`, raised to debug for the core crate under `--verbose`.
fn log_filter(level: &str, verbose: bool) -> String {
    if verbose {
        format!("{level},cachesim_core=debug")
    } else {
        level.to_owned()
    }
}

/// Installs the `tracing` subscriber; `RUST_LOG` takes precedence over the directive.
fn init_tracing(directive: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

/// Loads the optional config file and applies command-line overrides.
fn build_config(cli: &Cli) -> Result<Config, CacheError> {
    let mut config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            debug!(path = %path.display(), policy = config.cache.policy.name(), "loaded config");
            config
        }
        None => Config::default(),
    };
    if let Some(v) = cli.cache_size {
        config.cache.capacity = v;
    }
    if let Some(v) = cli.memory_size {
        config.simulation.memory_size = v;
    }
    if let Some(v) = cli.workers {
        config.simulation.workers = v;
    }
    if let Some(v) = cli.accesses {
        config.simulation.accesses_per_worker = v;
    }
    if let Some(v) = cli.delay_ms {
        config.simulation.access_delay_ms = v;
    }
    if cli.seed.is_some() {
        config.simulation.seed = cli.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Opens a session with a cache: `choice` when given, otherwise `cache.policy`.
fn open_session(config: Config, choice: Option<&str>) -> Result<CacheSession, CacheError> {
    match choice {
        Some(choice) => {
            let mut session = CacheSession::new(config);
            announce_selection(&mut session, choice)?;
            Ok(session)
        }
        None => {
            let session = CacheSession::with_cache(config)?;
            let policy = session.config().cache.policy;
            info!(policy = policy.name(), "using configured policy");
            println!("{} Cache selected.", policy.name());
            Ok(session)
        }
    }
}

/// Runs one simulation with the chosen policy and prints the cache and statistics.
fn cmd_run(config: Config, policy: Option<&str>) -> Result<(), CacheError> {
    let session = open_session(config, policy)?;
    let report = session.simulate()?;
    println!("{}", session.display()?);
    report.print();
    if let Some(cache) = session.cache() {
        cache.stats().print();
    }
    Ok(())
}

/// Constructs a cache for `choice` and tells the operator what was selected.
fn announce_selection(session: &mut CacheSession, choice: &str) -> Result<(), CacheError> {
    let selection = session.select_policy(choice)?;
    info!(
        policy = selection.policy.name(),
        fallback = selection.fallback,
        "policy selected"
    );
    if selection.fallback {
        println!("Invalid policy choice. Using default LRU Cache.");
    } else {
        println!("{} Cache selected.", selection.policy.name());
    }
    Ok(())
}

/// Runs the operator menu until the user exits or stdin closes.
///
/// With `preselect`, the session starts with the configured policy instead
/// of uninitialized.
fn interactive(config: Config, preselect: bool) -> Result<(), CacheError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Cache size: {}", config.cache.capacity);
    let mut session = if preselect {
        open_session(config, None)?
    } else {
        CacheSession::new(config)
    };

    loop {
        println!(
            "\nOptions:\n1. Access Memory (Multi-threaded)\n2. Display Cache\n3. Change Cache Replacement Policy\n4. Exit"
        );
        let Some(choice) = prompt(&mut lines, "Enter your choice: ") else {
            break;
        };

        match choice.trim() {
            "1" => match session.simulate() {
                Ok(report) => report.print(),
                Err(CacheError::Uninitialized) => {
                    println!(
                        "Cache is not initialized. Please select a replacement policy first."
                    );
                }
                Err(e) => return Err(e),
            },
            "2" => match session.display() {
                Ok(snapshot) => println!("{snapshot}"),
                Err(CacheError::Uninitialized) => {
                    println!("Cache is not initialized. Please select a replacement policy.");
                }
                Err(e) => return Err(e),
            },
            "3" => {
                let _ = session.destroy();
                let Some(policy) = prompt(
                    &mut lines,
                    &format!(
                        "Select Cache Replacement Policy:\n1. {}\n2. {}\nEnter your choice: ",
                        ReplacementPolicy::Lru.name(),
                        ReplacementPolicy::Lfu.name()
                    ),
                ) else {
                    break;
                };
                announce_selection(&mut session, &policy)?;
            }
            "4" => break,
            _ => println!("Invalid choice. Try again."),
        }
    }

    if let Some(stats) = session.destroy() {
        stats.print();
    }
    Ok(())
}

/// Prints `message` and reads one line; `None` on end of input.
fn prompt<B: BufRead>(lines: &mut io::Lines<B>, message: &str) -> Option<String> {
    print!("{message}");
    let _ = io::stdout().flush();
    lines.next().and_then(Result::ok)
}
