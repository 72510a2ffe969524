use clap::{CommandFactory, Parser, Subcommand};
use lconv::cli::ui;
use lconv::core::log::init_logging;
use std::process::ExitCode;
use lconv::core::token::Direction;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(short, long, global = true)]
    config_path: Option<String>,

    /// Wallet account to connect with (overrides the config file)
    #[arg(short, long, global = true)]
    account: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for lconv::AppCommand {
    fn from(cmd: Commands) -> lconv::AppCommand {
        match cmd {
            Commands::Rates { mode, pair } => lconv::AppCommand::Rates { mode, pair },
            Commands::Quote {
                mode,
                direction,
                amount,
            } => lconv::AppCommand::Quote {
                mode,
                direction,
                amount,
            },
            Commands::Convert {
                mode,
                direction,
                amount,
            } => lconv::AppCommand::Convert {
                mode,
                direction,
                amount,
            },
            Commands::Dashboard { json } => lconv::AppCommand::Dashboard { json },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Show the conversion rate tables
    Rates {
        /// Asset family: btc or lusd (all when omitted)
        #[arg(short, long)]
        mode: Option<String>,
        /// Look up a single pair, e.g. LUSD-sLUSD
        #[arg(short, long)]
        pair: Option<String>,
    },
    /// Estimate the output of a conversion
    Quote {
        /// Asset family: btc or lusd
        #[arg(short, long)]
        mode: Option<String>,
        /// stake or unstake
        #[arg(short, long, default_value = "stake")]
        direction: Direction,
        /// Amount of the source token
        #[arg(long, default_value = "")]
        amount: String,
    },
    /// Run a simulated stake or unstake
    Convert {
        /// Asset family: btc or lusd
        #[arg(short, long)]
        mode: Option<String>,
        /// stake or unstake
        #[arg(short, long, default_value = "stake")]
        direction: Direction,
        /// Amount of the source token
        #[arg(long)]
        amount: String,
    },
    /// Display balances, yield and vault allocation
    Dashboard {
        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => lconv::cli::setup::setup(cli.account.as_deref()),
        Some(cmd) => {
            lconv::run_command(
                cmd.into(),
                cli.config_path.as_deref(),
                cli.account.as_deref(),
            )
            .await
        }
        None => Cli::command().print_help().map_err(anyhow::Error::from),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match lconv::cli::error_message(&e) {
                Some(message) => {
                    tracing::debug!(error = ?e, "Command failed");
                    eprintln!("{}", ui::style_text(&message, ui::StyleType::Error));
                }
                None => tracing::error!(error = %e, "Application failed"),
            }
            ExitCode::FAILURE
        }
    }
}
