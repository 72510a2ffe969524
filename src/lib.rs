pub mod cli;
pub mod core;
pub mod providers;

use crate::core::config::AppConfig;
use crate::core::conversion::ConversionEngine;
use crate::core::token::{ConversionMode, Direction, TokenPair};
use crate::providers::SimulatedSettlement;
use anyhow::Result;
use tracing::{debug, info};

pub enum AppCommand {
    Rates {
        mode: Option<String>,
        pair: Option<String>,
    },
    Quote {
        mode: Option<String>,
        direction: Direction,
        amount: String,
    },
    Convert {
        mode: Option<String>,
        direction: Direction,
        amount: String,
    },
    Dashboard {
        json: bool,
    },
}

fn resolve_mode(mode: Option<&str>, config: &AppConfig) -> Result<ConversionMode> {
    match mode {
        Some(m) => Ok(m.parse::<ConversionMode>()?),
        None => Ok(config.mode),
    }
}

fn build_engine(
    config: &AppConfig,
    mode: ConversionMode,
    direction: Direction,
    amount: String,
) -> ConversionEngine {
    let settlement = SimulatedSettlement::from_millis(config.settlement.latency_ms);
    let mut engine = ConversionEngine::new(mode, direction, Box::new(settlement));
    engine.set_amount(amount);
    engine
}

pub async fn run_command(
    command: AppCommand,
    config_path: Option<&str>,
    account: Option<&str>,
) -> Result<()> {
    info!("lconv starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let wallet = config.wallet(account);

    match command {
        AppCommand::Rates { mode, pair } => {
            let mode = mode.as_deref().map(str::parse::<ConversionMode>).transpose()?;
            let pair = pair.as_deref().map(str::parse::<TokenPair>).transpose()?;
            cli::rates::run(mode, pair.as_ref());
        }
        AppCommand::Quote {
            mode,
            direction,
            amount,
        } => {
            let mode = resolve_mode(mode.as_deref(), &config)?;
            let engine = build_engine(&config, mode, direction, amount);
            cli::quote::run(&engine, &wallet);
        }
        AppCommand::Convert {
            mode,
            direction,
            amount,
        } => {
            let mode = resolve_mode(mode.as_deref(), &config)?;
            let mut engine = build_engine(&config, mode, direction, amount);
            cli::convert::run(&mut engine, &wallet).await?;
        }
        AppCommand::Dashboard { json } => cli::dashboard::run(&wallet, json)?,
    }

    Ok(())
}
