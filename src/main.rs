use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use docsight::cli::commands::analyze::AnalyzeRunOptions;
use docsight::cli::{CommandContext, OutputFormat};

#[derive(Parser)]
#[command(name = "docsight")]
#[command(version, about = "Document content analysis and document tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Use this config file instead of the global/project chain
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[arg(long, global = true)]
    verbose: bool,

    #[arg(long, short, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze text from a file or stdin
    Analyze {
        #[arg(help = "Text file or document tree (.json); stdin when omitted")]
        file: Option<PathBuf>,
        #[arg(long, help = "Extract keywords")]
        keywords: bool,
        #[arg(long, help = "Produce an extractive summary")]
        summarize: bool,
        #[arg(long, help = "Extract links")]
        links: bool,
        #[arg(long, help = "Detect language")]
        language: bool,
        #[arg(long, help = "Enable every analysis")]
        all: bool,
        #[arg(long = "no-stats", help = "Skip statistics")]
        no_stats: bool,
        #[arg(long, help = "Maximum number of keywords")]
        top: Option<usize>,
        #[arg(long, help = "Maximum number of summary sentences")]
        sentences: Option<usize>,
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Extract tables from a document tree
    Tables {
        #[arg(help = "Document tree JSON file")]
        tree: PathBuf,
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Search text inside a file or document tree
    Search {
        file: PathBuf,
        query: String,
        #[arg(short = 'f', long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Run a JSON tool request against the document store
    Tool {
        #[arg(help = "Request JSON file; stdin when omitted")]
        request: Option<PathBuf>,
        #[arg(long, help = "Print tool definitions and exit")]
        list: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
enum ConfigAction {
    /// Show current configuration (merged from all sources)
    Show {
        #[arg(
            short = 'f',
            long,
            default_value = "toml",
            value_parser = ["toml", "json"],
            help = "Output format: toml, json"
        )]
        format: String,
    },
    /// Show configuration file paths
    Path,
    /// Initialize configuration
    Init {
        #[arg(long, short, help = "Initialize global config")]
        global: bool,
        #[arg(long, help = "Overwrite existing config")]
        force: bool,
    },
}

/// Set up panic handler for graceful error reporting
fn setup_panic_handler() {
    let default_hook = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |panic_info| {
        let message = if let Some(s) = panic_info.payload().downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = panic_info.payload().downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        eprintln!("\n\x1b[1;31m━━━ PANIC ━━━\x1b[0m");
        eprintln!("\x1b[31mdocsight encountered an unexpected error:\x1b[0m");
        eprintln!("  {}", message);

        if let Some(location) = panic_info.location() {
            eprintln!(
                "\x1b[90mLocation: {}:{}:{}\x1b[0m",
                location.file(),
                location.line(),
                location.column()
            );
        }
        eprintln!();

        // Call default hook for backtrace (if RUST_BACKTRACE=1)
        default_hook(panic_info);
    }));
}

fn main() -> ExitCode {
    setup_panic_handler();

    match run_cli() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("\x1b[31mError:\x1b[0m {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_cli() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let load_context = || CommandContext::load(cli.config.as_deref());

    match cli.command {
        Commands::Analyze {
            file,
            keywords,
            summarize,
            links,
            language,
            all,
            no_stats,
            top,
            sentences,
            format,
        } => {
            let context = load_context()?;
            docsight::cli::commands::analyze::run(
                &context,
                AnalyzeRunOptions {
                    file,
                    keywords,
                    summarize,
                    links,
                    language,
                    all,
                    no_stats,
                    top,
                    sentences,
                    format,
                },
            )?;
        }
        Commands::Tables { tree, format } => {
            docsight::cli::commands::tables::run(&tree, format)?;
        }
        Commands::Search {
            file,
            query,
            format,
        } => {
            docsight::cli::commands::search::run(&file, &query, format)?;
        }
        Commands::Tool { request, list } => {
            let context = load_context()?;
            if !docsight::cli::commands::tool::run(&context, request.as_deref(), list)? {
                return Ok(ExitCode::FAILURE);
            }
        }
        Commands::Config { action } => match action {
            ConfigAction::Show { format } => {
                let context = load_context()?;
                docsight::cli::commands::config::show(&context, &format)?;
            }
            ConfigAction::Path => {
                docsight::cli::commands::config::path()?;
            }
            ConfigAction::Init { global, force } => {
                if global {
                    docsight::cli::commands::config::init_global(force)?;
                } else {
                    docsight::cli::commands::config::init_project(force)?;
                }
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}
