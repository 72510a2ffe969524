use lconv::core::conversion::{ConversionEngine, SwapPhase};
use lconv::core::dashboard;
use lconv::core::error::ConversionError;
use lconv::core::token::{ConversionMode, Direction, Token, TokenPair, select_pair};
use lconv::core::wallet::WalletConnection;
use lconv::providers::SimulatedSettlement;
use std::fs;
use tracing::info;

mod test_utils {
    use std::fs;

    pub fn write_config(content: &str) -> tempfile::NamedTempFile {
        let config_file = tempfile::NamedTempFile::new().expect("Failed to create temp file");
        fs::write(config_file.path(), content).expect("Failed to write config file");
        config_file
    }
}

#[test_log::test(tokio::test)]
async fn test_full_convert_flow_with_config() {
    let config_file = test_utils::write_config(
        r#"
        mode: lusd
        wallet:
          account: "0x1234567890abcdef"
        settlement:
          latency_ms: 5
    "#,
    );

    let result = lconv::run_command(
        lconv::AppCommand::Convert {
            mode: None,
            direction: Direction::Unstake,
            amount: "100".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result.is_ok(),
        "Convert command failed with: {:?}",
        result.err()
    );
}

#[test_log::test(tokio::test)]
async fn test_convert_without_wallet_reports_prompt() {
    let config_file = test_utils::write_config("settlement:\n  latency_ms: 5\n");

    let result = lconv::run_command(
        lconv::AppCommand::Convert {
            mode: Some("btc".to_string()),
            direction: Direction::Stake,
            amount: "0.5".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;

    let err = result.expect_err("conversion must not start without a wallet");
    info!(%err, "Conversion rejected");
    assert_eq!(err.to_string(), "Please connect your wallet first");
}

#[test_log::test(tokio::test)]
async fn test_account_flag_connects_wallet() {
    let config_file = test_utils::write_config("settlement:\n  latency_ms: 5\n");

    let result = lconv::run_command(
        lconv::AppCommand::Convert {
            mode: Some("btc".to_string()),
            direction: Direction::Stake,
            amount: "0.5".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
        Some("cli-account"),
    )
    .await;
    assert!(result.is_ok(), "Convert failed with: {:?}", result.err());
}

#[test_log::test(tokio::test)]
async fn test_invalid_mode_is_rejected() {
    let config_file = test_utils::write_config("{}\n");

    let result = lconv::run_command(
        lconv::AppCommand::Quote {
            mode: Some("eth".to_string()),
            direction: Direction::Stake,
            amount: "1".to_string(),
        },
        Some(config_file.path().to_str().unwrap()),
        None,
    )
    .await;

    let err = result.expect_err("unknown mode must fail");
    assert!(matches!(
        err.downcast_ref::<ConversionError>(),
        Some(ConversionError::InvalidMode(m)) if m == "eth"
    ));
}

#[test_log::test(tokio::test)]
async fn test_read_only_commands() {
    let config_file = test_utils::write_config("mode: btc\n");
    let path = config_file.path().to_str().unwrap();

    let commands = vec![
        lconv::AppCommand::Rates {
            mode: None,
            pair: None,
        },
        lconv::AppCommand::Rates {
            mode: Some("lusd".to_string()),
            pair: None,
        },
        lconv::AppCommand::Rates {
            mode: None,
            pair: Some("sLUSD-LUSD".to_string()),
        },
        lconv::AppCommand::Quote {
            mode: None,
            direction: Direction::Stake,
            amount: "0.5".to_string(),
        },
        lconv::AppCommand::Quote {
            mode: Some("lusd".to_string()),
            direction: Direction::Unstake,
            amount: "not a number".to_string(),
        },
        lconv::AppCommand::Dashboard { json: false },
        lconv::AppCommand::Dashboard { json: true },
    ];

    for command in commands {
        let result = lconv::run_command(command, Some(path), None).await;
        assert!(result.is_ok(), "Command failed with: {:?}", result.err());
    }
}

#[test_log::test(tokio::test)]
async fn test_unreadable_config_fails() {
    let dir = tempfile::TempDir::new().expect("Failed to create temp dir");
    let missing = dir.path().join("missing.yaml");

    let result = lconv::run_command(
        lconv::AppCommand::Dashboard { json: false },
        Some(missing.to_str().unwrap()),
        None,
    )
    .await;
    assert!(result.is_err());

    let broken = dir.path().join("broken.yaml");
    fs::write(&broken, "settlement: [not, a, map]\n").expect("Failed to write config file");
    let result = lconv::run_command(
        lconv::AppCommand::Dashboard { json: false },
        Some(broken.to_str().unwrap()),
        None,
    )
    .await;
    assert!(
        result
            .unwrap_err()
            .to_string()
            .contains("Failed to parse config file")
    );
}

#[test_log::test(tokio::test)]
async fn test_panel_session_round_trip() {
    let wallet = WalletConnection::connected("0x1234567890abcdef");
    let mut engine = ConversionEngine::new(
        ConversionMode::Btc,
        Direction::Stake,
        Box::new(SimulatedSettlement::from_millis(5)),
    );

    engine.set_amount("0.5");
    let quote = engine.quote();
    assert_eq!(engine.pair(), TokenPair::new(Token::Btc, Token::Lbtc));
    assert_eq!(quote.estimated_output.to_string(), "0.500000");
    assert!(engine.button_state(&wallet).enabled);

    let receipt = engine
        .execute_conversion(&wallet)
        .await
        .expect("simulated settlement succeeds");
    info!(%receipt, "Settled");

    assert_eq!(engine.amount(), "");
    assert_eq!(engine.phase(), SwapPhase::Idle);
    assert!(!engine.button_state(&wallet).enabled);
    assert_eq!(
        select_pair(engine.mode(), engine.direction()),
        engine.pair()
    );

    // Switching tabs after a swap picks up the reverse pair
    engine.set_direction(Direction::Unstake);
    engine.set_amount("0.25");
    assert_eq!(engine.pair(), TokenPair::new(Token::Lbtc, Token::Btc));
    assert_eq!(engine.quote().estimated_output.to_string(), "0.250000");

    // Reads stay pure while nothing is in flight
    assert_eq!(dashboard::snapshot(wallet.is_connected()).total_allocation(), 100);
}
