//! ccref: Claude Code reference browser
//!
//! An interactive terminal reference for Claude Code commands, keyboard
//! shortcuts, CLI flags, and configuration.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::Result;
use ccref::cli::{self, BrowseOptions, ListOptions, OutputFormat, SearchOptions};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{Shell, generate};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with dataset info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nReference Dataset:",
        "\n  19 categories, 112 entries",
        "\n  slash commands, keyboard shortcuts, CLI flags, vim bindings,",
        "\n  hooks, prefixes, modes, features",
        "\n\nOutput Formats:",
        "\n  tui (default), text, json"
    )
}

#[derive(Parser)]
#[command(name = "ccref")]
#[command(author = "Binarly.io")]
#[command(version, long_version = build_long_version())]
#[command(about = "Interactive Claude Code command reference", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success (search: at least one match)
    1  Search found no matches
    2  Error occurred (bad arguments, unknown category or type name)

EXAMPLES:
    # Open the full-screen browser
    ccref

    # Open scoped to a category with a query pre-filled
    ccref browse --category Hooks --query tool

    # Pipeline-friendly search
    ccref search hook --type hook --output json | jq '.matches[].command'

    # Regex search, case-sensitive
    ccref search --regex --case-sensitive 'Ctrl\\+[A-Z]'

    # Per-type totals
    ccref list --kinds")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

// ============================================================================
// Command argument structs (extracted for readability)
// ============================================================================

/// Arguments for the `browse` subcommand
#[derive(Parser)]
struct BrowseArgs {
    /// Open scoped to a category (case-insensitive name)
    #[arg(long)]
    category: Option<String>,

    /// Open with a type facet active (slash, keyboard, flag, ...)
    #[arg(long = "type", value_name = "KIND")]
    kind: Option<String>,

    /// Pre-fill the search box
    #[arg(long)]
    query: Option<String>,

    /// Interpret --query as a regular expression
    #[arg(long)]
    regex: bool,

    /// Match exact letter case
    #[arg(long)]
    case_sensitive: bool,

    /// Initial color theme
    #[arg(long, value_parser = ["dark", "light", "high-contrast"])]
    theme: Option<String>,
}

/// Arguments for the `search` subcommand
#[derive(Parser)]
struct SearchArgs {
    /// Query text (literal substring, or regex with --regex)
    query: String,

    /// Interpret QUERY as a regular expression
    #[arg(short, long)]
    regex: bool,

    /// Match exact letter case
    #[arg(short, long)]
    case_sensitive: bool,

    /// Restrict to a single category (case-insensitive name)
    #[arg(long)]
    category: Option<String>,

    /// Restrict to a single item type (slash, keyboard, flag, ...)
    #[arg(long = "type", value_name = "KIND")]
    kind: Option<String>,

    /// Output format (auto: json when writing a .json file, text otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Maximum number of results to return
    #[arg(long)]
    limit: Option<usize>,
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    /// List the item types with per-type totals instead of categories
    #[arg(long)]
    kinds: bool,

    /// Output format (auto: json when writing a .json file, text otherwise)
    #[arg(short, long, default_value = "auto")]
    output: OutputFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the full-screen reference browser (default)
    Browse(BrowseArgs),

    /// Search the reference non-interactively
    Search(SearchArgs),

    /// List categories, or item types with --kinds
    List(ListArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:?}");
        std::process::exit(2);
    }
}

fn run() -> Result<()> {
    let cli_args = Cli::parse();

    // Initialize logging. The browser owns stdout, so logs go to stderr.
    let log_level = if cli_args.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr)
                .with_ansi(cli::should_use_color(cli_args.no_color)),
        )
        .init();

    // Dispatch to command handlers. No subcommand opens the browser.
    match cli_args.command {
        None => cli::run_browse(BrowseOptions::default()),

        Some(Commands::Browse(args)) => cli::run_browse(BrowseOptions {
            category: args.category,
            kind: args.kind,
            query: args.query,
            use_regex: args.regex,
            case_sensitive: args.case_sensitive,
            theme: args.theme,
        }),

        Some(Commands::Search(args)) => cli::run_search(SearchOptions {
            query: args.query,
            use_regex: args.regex,
            case_sensitive: args.case_sensitive,
            category: args.category,
            kind: args.kind,
            limit: args.limit,
            format: args.output,
            output_file: args.output_file,
            quiet: cli_args.quiet,
        }),

        Some(Commands::List(args)) => cli::run_list(ListOptions {
            kinds: args.kinds,
            format: args.output,
            output_file: args.output_file,
            quiet: cli_args.quiet,
        }),

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "ccref", &mut io::stdout());
            Ok(())
        }
    }
}
