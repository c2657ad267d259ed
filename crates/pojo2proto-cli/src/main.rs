//! pojo2proto CLI - proto3 schema generator
//!
//! Commands:
//! - `pojo2proto generate` - Generate schema documents from a declaration set
//! - `pojo2proto check` - Validate a pojo2proto.toml manifest

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod generate;
mod manifest;

#[derive(Parser)]
#[command(name = "pojo2proto")]
#[command(author, version, about = "Generate proto3 schemas from data-class declarations", long_about = None)]
struct Cli {
    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate proto3 schema documents
    Generate {
        /// Path to the declaration set (JSON)
        #[arg(short, long)]
        input: String,

        /// Output directory for generated schemas
        #[arg(short, long)]
        output: String,

        /// Path to pojo2proto.toml manifest (default: ./pojo2proto.toml if present)
        #[arg(short, long)]
        manifest: Option<String>,

        /// Schema package, overriding the manifest
        #[arg(short, long)]
        package: Option<String>,

        /// Emit a single aggregate schema document
        #[arg(short, long)]
        single_file: bool,

        /// Base name of the aggregate document, overriding the manifest
        #[arg(long)]
        project_name: Option<String>,
    },

    /// Validate a pojo2proto.toml manifest
    Check {
        /// Path to pojo2proto.toml (default: ./pojo2proto.toml)
        #[arg(short, long)]
        manifest: Option<String>,
    },
}

fn init_logging(verbose: bool, level: &str) {
    let default_level = if verbose { "debug" } else { level };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            manifest,
            package,
            single_file,
            project_name,
        } => {
            let overrides = generate::Overrides {
                package,
                single_file,
                project_name,
            };
            let config = generate::resolve_config(manifest.as_deref(), overrides)?;
            init_logging(cli.verbose, &config.log_level);
            generate::run(&input, &output, &config)?;
        }
        Commands::Check { manifest } => {
            init_logging(cli.verbose, "info");
            manifest::check(manifest)?;
        }
    }

    Ok(())
}
