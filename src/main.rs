//! Affix Drill - CLI
//!
//! Pattern browser and affix drills with TUI and line modes.

use affix_drill::{
    browse::PatternQuery,
    catalog::Catalog,
    commands::{browse_patterns, run_simple},
    config::AppConfig,
    core::{Rarity, SideFilter},
    drill::{DrillMode, Session},
    output::{print_browse_result, print_drill_list, print_session_summary, print_stats},
};
use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "affix_drill",
    about = "Learn the prefixes and suffixes of a word list",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word list file, one word per line (default: embedded list)
    #[arg(short = 'w', long, global = true)]
    words: Option<PathBuf>,

    /// Pattern vocabulary file, `.json` or `pattern length` lines (default: embedded)
    #[arg(short = 'p', long, global = true)]
    patterns: Option<PathBuf>,

    /// Records shown per browse page
    #[arg(long, global = true)]
    page_size: Option<usize>,

    /// Fewest words a pattern side needs to be drilled
    #[arg(long, global = true)]
    min_words: Option<usize>,

    /// Most words a pattern side may have to be drilled
    #[arg(long, global = true)]
    max_words: Option<usize>,

    /// Shortest declared pattern length that can be drilled
    #[arg(long, global = true)]
    min_length: Option<usize>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play {
        /// Drill mode: find or repeat
        #[arg(short, long, default_value = "find")]
        mode: DrillMode,
    },

    /// Simple line mode (drill without TUI)
    Simple {
        /// Drill mode: find or repeat
        #[arg(short, long, default_value = "find")]
        mode: DrillMode,

        /// Side filter: ends, starts, or all
        #[arg(short, long, default_value = "all")]
        side: SideFilter,

        /// Only patterns anchored by this affix
        #[arg(short, long)]
        affix: Option<String>,

        /// Drill this many random patterns instead of all of them
        #[arg(long)]
        pick: Option<usize>,
    },

    /// Browse pattern records
    Browse {
        /// Patterns starting or ending with this text
        query: Option<String>,

        /// Only patterns of this declared length
        #[arg(short, long)]
        length: Option<usize>,

        /// Only this rarity: ultra-rare, rare, uncommon, common, very-common
        #[arg(short, long)]
        rarity: Option<Rarity>,

        /// Page number (1-indexed)
        #[arg(long, default_value = "1")]
        page: usize,
    },

    /// List drillable patterns
    Drills {
        /// Side filter: ends, starts, or all
        #[arg(short, long, default_value = "all")]
        side: SideFilter,

        /// Only patterns anchored by this affix
        #[arg(short, long)]
        affix: Option<String>,
    },

    /// Show catalog statistics
    Stats,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // RUST_LOG wins over -v
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn app_config(cli: &Cli) -> AppConfig {
    let mut config = AppConfig::default();
    if let Some(page_size) = cli.page_size {
        config.browse.page_size = page_size;
    }
    if let Some(min_words) = cli.min_words {
        config.drill.min_words = min_words;
    }
    if let Some(max_words) = cli.max_words {
        config.drill.max_words = max_words;
    }
    if let Some(min_length) = cli.min_length {
        config.drill.min_pattern_length = min_length;
    }
    config
}

/// Build the catalog, with a spinner for line-mode commands
fn load_catalog(cli: &Cli, config: AppConfig, show_spinner: bool) -> Result<Catalog> {
    let spinner = show_spinner.then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message("Indexing words...");
        pb.enable_steady_tick(Duration::from_millis(80));
        pb
    });

    let catalog = Catalog::load(cli.words.as_deref(), cli.patterns.as_deref(), config)
        .context("failed to build the pattern catalog");

    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    catalog
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();
    init_logging(cli.verbose);

    let config = app_config(&cli);
    debug!(?config, "configuration");

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play {
        mode: DrillMode::FindWords,
    });
    let show_spinner = !matches!(command, Commands::Play { .. });
    let catalog = load_catalog(&cli, config, show_spinner)?;

    match command {
        Commands::Play { mode } => run_play_command(&catalog, mode),
        Commands::Simple {
            mode,
            side,
            affix,
            pick,
        } => run_simple_command(&catalog, mode, side, affix.as_deref(), pick),
        Commands::Browse {
            query,
            length,
            rarity,
            page,
        } => {
            let mut filter = PatternQuery::default();
            if let Some(text) = query {
                filter = filter.with_text(text);
            }
            if let Some(length) = length {
                filter = filter.with_length(length);
            }
            if let Some(rarity) = rarity {
                filter = filter.with_rarity(rarity);
            }
            print_browse_result(&browse_patterns(&catalog, filter, page));
            Ok(())
        }
        Commands::Drills { side, affix } => {
            print_drill_list(&catalog.drill_set(side, affix.as_deref()));
            Ok(())
        }
        Commands::Stats => {
            print_stats(&catalog.stats());
            Ok(())
        }
    }
}

fn run_simple_command(
    catalog: &Catalog,
    mode: DrillMode,
    side: SideFilter,
    affix: Option<&str>,
    pick: Option<usize>,
) -> Result<()> {
    let mut session = Session::with_config(catalog.drill_set(side, affix), catalog.config().session);
    match pick {
        Some(count) => session.select_random(count, &mut rand::rng()),
        None => session.select_all(),
    }

    let snapshot = run_simple(&mut session, mode).context("line mode I/O failed")?;
    print_session_summary(&snapshot);
    Ok(())
}

fn run_play_command(catalog: &Catalog, mode: DrillMode) -> Result<()> {
    use affix_drill::interactive::{App, run_tui};

    let app = App::new(catalog, mode);
    run_tui(app)
}
