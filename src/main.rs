use clap::Parser;
use perswap::core::ConfigProvider;
use perswap::utils::{logger, validation::Validate};
use perswap::{CliConfig, ConvertEngine, LocalStorage, SwapPipeline};
use std::fs;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting perswap CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if config.dry_run {
        tracing::info!("🔍 DRY RUN MODE - No files will be written");
        perform_dry_run(&config).await?;
        return Ok(());
    }

    let monitor_enabled = config.monitor;
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    // 創建存儲和管道
    let storage = LocalStorage::default();
    let pipeline = SwapPipeline::new(storage, config);

    // 創建轉換引擎並運行
    let engine = ConvertEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Conversion completed successfully!");
            tracing::info!("📁 Output saved to: {}", output_path);
            println!("✅ Conversion completed successfully!");
            println!("📁 Output saved to: {}", output_path);
        }
        Err(e) => {
            // 記錄詳細錯誤信息
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            // 輸出用戶友好的錯誤信息
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 建議: {}", e.recovery_suggestion());

            // 每種錯誤有固定退出碼，方便腳本判斷
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

async fn perform_dry_run(config: &CliConfig) -> Result<(), Box<dyn std::error::Error>> {
    println!("🔍 Dry Run Analysis:");
    println!();

    // 輸入檔分析
    println!("📂 Data Source Analysis:");
    println!("  Case: {}", config.case_name());
    println!("  Input: {}", config.input_path());

    match fs::read_to_string(config.input_path()) {
        Ok(content) => {
            let pairs = content.lines().filter(|line| !line.is_empty()).count();
            println!("  📊 Found {} node pairs to convert", pairs);
        }
        Err(e) => {
            println!("  ⚠️ Input file could not be opened: {}", e);
            println!("  ⚠️ A real run would exit with code 3");
        }
    }

    // 輸出分析
    println!();
    println!("💾 Output Configuration:");
    println!("  Path: {}", config.output_path());
    println!("  Column order: master slave");

    println!();
    println!("✅ Dry run analysis complete. No files were written.");

    Ok(())
}
