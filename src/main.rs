use clap::Parser;
use postal_lookup::core::ConfigProvider;
use postal_lookup::utils::error::{ErrorSeverity, LookupError};
use postal_lookup::utils::{logger, validation::Validate};
use postal_lookup::{
    CliConfig, LookupHandler, LookupOutcome, LookupSession, TerminalUi, TomlConfig,
    ZipcloudClient,
};
use tokio::io::BufReader;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting postal-lookup");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = match &cli.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => {
                tracing::info!("Loaded configuration from {}", path.display());
                run(&cli, config).await
            }
            Err(e) => report_failure(&e),
        },
        None => run(&cli, cli.clone()).await,
    };

    std::process::exit(exit_code);
}

async fn run<C: ConfigProvider + Validate>(cli: &CliConfig, config: C) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        return report_failure(&e);
    }

    let client = match ZipcloudClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => return report_failure(&e),
    };
    let handler = LookupHandler::with_notices(TerminalUi::stdio(), client, config.notices());

    match &cli.zipcode {
        Some(code) => {
            handler.ui().set_input(code);
            match handler.handle().await {
                Ok(LookupOutcome::Success(_)) => 0,
                Ok(LookupOutcome::NotFound(_)) => 1,
                Ok(LookupOutcome::TransportError(_)) => 2,
                Err(_) => 1,
            }
        }
        None => {
            eprintln!("Enter a postal code per line (quit to exit)");
            let session = LookupSession::new(handler);
            match session.run(BufReader::new(tokio::io::stdin())).await {
                Ok(_) => 0,
                Err(e) => report_failure(&e),
            }
        }
    }
}

fn report_failure(e: &LookupError) -> i32 {
    tracing::error!(
        "❌ postal-lookup failed: {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    // 根據錯誤嚴重程度決定退出碼
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}
