use clap::error::ErrorKind;
use clap::Parser;
use ecchecker::utils::logger;
use ecchecker::{CheckError, Checker, CheckerConfig, LocalStorage};

fn main() {
    let config = match CheckerConfig::try_parse() {
        Ok(config) => config,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // 參數錯誤：不讀取任何檔案
            let err = CheckError::InvalidArguments;
            println!("{}", err);
            eprint!("{}", e);
            std::process::exit(err.exit_code());
        }
    };

    // 初始化日誌
    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    let settings = match config.resolve() {
        Ok(settings) => settings,
        Err(e) => exit_with_error(e),
    };

    let checker = Checker::new(LocalStorage::default(), settings);

    match checker.run() {
        Ok(verdict) => {
            println!("{}", verdict.message());
            std::process::exit(verdict.exit_code());
        }
        Err(e) => exit_with_error(e),
    }
}

fn exit_with_error(e: CheckError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    std::process::exit(e.exit_code());
}
