use clap::Parser;
use solvestat::utils::logger;
use solvestat::{app, CliConfig};

fn main() {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting solvestat");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let exit_code = app::run_cli(cli);
    if exit_code > 0 {
        std::process::exit(exit_code);
    }
}
