//! CLI definitions and entry point

use clap::{Parser, Subcommand};

use crate::commands;
use folio::output::OutputMode;

/// folio - Portfolio site generator and preview server
#[derive(Parser, Debug)]
#[command(
    name = "folio",
    version,
    about = "Portfolio site generator and preview server",
    long_about = "Render a single-page portfolio site from compiled-in content.\n\n\
                  Build writes the page and stylesheet to an output directory.\n\
                  Serve previews them locally; check audits the rendered page."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the page and stylesheet into the output directory
    Build {
        /// Output directory (defaults to folio.toml's build.out_dir, then "dist")
        #[arg(short, long)]
        out: Option<String>,
    },

    /// Serve the page locally for preview
    Serve {
        /// Port to bind (defaults to folio.toml's serve.port, then 8080)
        #[arg(short, long)]
        port: Option<u16>,

        /// Open the browser once the server is up
        #[arg(long)]
        open: bool,
    },

    /// Audit the rendered page (exits non-zero when a check fails)
    Check,

    /// Show content and reveal summary
    Status,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Build { out }) => commands::build(out.as_deref(), output_mode),
        Some(Command::Serve { port, open }) => commands::serve(port, open),
        Some(Command::Check) => commands::check(output_mode),
        Some(Command::Status) => commands::status(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("folio v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("folio v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'folio --help' for usage");
                println!("Run 'folio build' to render the site");
            }
            Ok(())
        },
    }
}
