use anyhow::Result;
use cambio::cli::ui::{StyleType, style_text};
use cambio::core::log::init_logging;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for cambio::AppCommand {
    fn from(cmd: Commands) -> cambio::AppCommand {
        match cmd {
            Commands::Convert { amount } => cambio::AppCommand::Convert { amount },
            Commands::Rates => cambio::AppCommand::Rates,
            Commands::Interactive => cambio::AppCommand::Interactive,
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Convert a BRL amount into USD and EUR
    Convert {
        /// Amount in BRL, e.g. 100 or 12.50
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },
    /// Display the current exchange rates
    Rates,
    /// Convert amounts typed one per line, reusing fetched rates
    Interactive,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => cambio::cli::setup::setup(),
        Some(cmd) => cambio::run_command(cmd.into(), cli.config_path.as_deref()).await,
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = ?e, "Application failed");
        eprintln!("{}", style_text(&e.to_string(), StyleType::Error));
        std::process::exit(1);
    }
    Ok(())
}
