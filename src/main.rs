use activity_signup::utils::error::ErrorSeverity;
use activity_signup::utils::logger;
use activity_signup::{ActivityServer, ServerConfig, SignupError};
use clap::Parser;

fn report_and_exit(stage: &str, e: &SignupError) -> ! {
    tracing::error!(
        "❌ {} failed: {} (Category: {:?}, Severity: {:?})",
        stage,
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1, // 設定錯誤
        ErrorSeverity::Critical => 3, // 無法啟動伺服器
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting activity-signup");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 載入並驗證配置
    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => report_and_exit("Configuration", &e),
    };

    tracing::info!(
        "✅ Loaded {} activities (capacity policy: {:?})",
        settings.directory.len(),
        settings.capacity_policy
    );

    let bind_address = settings.bind_address();
    let service = settings.build_service();
    let server = match ActivityServer::bind(&bind_address, service) {
        Ok(server) => server,
        Err(e) => report_and_exit("Server startup", &e),
    };

    let shutdown = server.shutdown_handle();
    let mut serving = server.spawn();

    tokio::select! {
        result = &mut serving => {
            result?;
            tracing::warn!("Server loop exited unexpectedly");
        }
        signal = tokio::signal::ctrl_c() => {
            signal?;
            shutdown.shutdown();
            serving.await?;
        }
    }

    Ok(())
}
