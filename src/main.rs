use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dotver::cli::{self, Command, EXIT_ERROR};
use dotver::{config, ui, Component};

#[derive(Parser)]
#[command(
    name = "dotver",
    version,
    about = "Parse, compare and bump MAJOR.MINOR.PATCH versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(short, long, global = true, help = "Log diagnostics to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every derived value of a version
    Show {
        #[arg(value_name = "VERSION")]
        input: String,
    },

    /// Print a version with one component bumped by one
    Bump {
        #[arg(value_name = "VERSION")]
        input: String,

        #[arg(help = "Component to bump: major, minor or patch")]
        component: Component,

        #[arg(long, help = "Decrement instead of increment")]
        down: bool,
    },

    /// Evaluate an expression such as "2024.6.1 + 1" or "1.2.3 < 1.3.0"
    Eval {
        #[arg(required = true, num_args = 1.., allow_hyphen_values = true)]
        expression: Vec<String>,
    },

    /// Validate a version; exits non-zero when it is malformed
    Check {
        #[arg(value_name = "VERSION")]
        input: String,
    },
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Show { input } => Command::Show { version: input },
            Commands::Bump {
                input,
                component,
                down,
            } => Command::Bump {
                version: input,
                component,
                down,
            },
            Commands::Eval { expression } => Command::Eval {
                expression: expression.join(" "),
            },
            Commands::Check { input } => Command::Check { version: input },
        }
    }
}

fn init_tracing(verbose: bool) -> Result<()> {
    let default_filter = if verbose { "dotver=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialise logging: {}", e))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(EXIT_ERROR);
        }
    };

    let command = Command::from(args.command);
    if args.verbose {
        ui::display_status(&format!("Running {:?}", command));
    }

    match cli::run(&command, &config) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            if let Command::Check { version } = &command {
                ui::display_success(&format!("'{}' is a valid version", version));
            }
            std::process::exit(outcome.exit_code);
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(EXIT_ERROR);
        }
    }
}
