// Application layer: resolves settings and turns a run into a process exit code.

use crate::core::ConfigProvider;
use crate::utils::validation::Validate;
use crate::{ExtractionEngine, LocalStorage, LogPipeline};
use std::fmt::Write as _;

#[cfg(feature = "cli")]
use crate::{CliConfig, TomlConfig};

/// Exit code for a config file that cannot be loaded or parsed.
pub const CONFIG_LOAD_EXIT_CODE: i32 = 2;

/// Loads the optional TOML file, lets the flags override it, then runs.
#[cfg(feature = "cli")]
pub fn run_cli(cli: CliConfig) -> i32 {
    let dry_run = cli.dry_run;
    match cli.config.clone() {
        Some(path) => {
            tracing::info!("📁 Loading configuration from: {}", path);
            let mut config = match TomlConfig::from_file(&path) {
                Ok(config) => config,
                Err(e) => {
                    tracing::error!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("❌ Failed to load config file '{}': {}", path, e);
                    eprintln!("💡 Make sure the file exists and is valid TOML format");
                    return CONFIG_LOAD_EXIT_CODE;
                }
            };
            // 命令列參數優先於設定檔
            cli.apply_to(&mut config);
            run(config, dry_run)
        }
        None => run(cli, dry_run),
    }
}

/// Validates, then either prints the dry-run summary or runs the engine
/// against local storage. Returns the process exit code.
pub fn run<C: ConfigProvider + Validate>(config: C, dry_run: bool) -> i32 {
    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        return e.severity().exit_code();
    }

    if dry_run {
        print!("{}", config_summary(&config));
        return 0;
    }

    let pipeline = LogPipeline::new(LocalStorage::default(), config);
    let engine = ExtractionEngine::new(pipeline);

    match engine.run() {
        Ok(destination) => {
            tracing::info!("✅ Extraction completed, output in {}", destination);
            0
        }
        Err(e) => {
            tracing::error!(
                "❌ Extraction failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            e.severity().exit_code()
        }
    }
}

pub fn config_summary<C: ConfigProvider>(config: &C) -> String {
    let layout = config.layout();
    let delimiter = match layout.delimiter {
        Some(d) => format!("'{}'", d),
        None => "(whole token)".to_string(),
    };

    let mut out = String::new();
    // String 寫入不會失敗
    let _ = writeln!(out, "📋 Configuration Summary:");
    let _ = writeln!(out, "  Input: {}", config.input_path());
    let _ = writeln!(out, "  Max lines: {}", config.max_lines());
    let _ = writeln!(out, "  Metric: {}", config.metric_label());
    let _ = writeln!(out, "  Record size: {}", layout.record_size);
    let _ = writeln!(out, "  Target line: {}", layout.target_line);
    let _ = writeln!(out, "  Target token: {}", layout.target_token);
    let _ = writeln!(out, "  Delimiter: {}", delimiter);
    let _ = writeln!(out, "  Format: {}", config.output_format().as_str());
    let _ = writeln!(out, "  Output: {}", config.output_path().unwrap_or("stdout"));
    let _ = writeln!(out, "🔍 DRY RUN MODE - input was not read");
    out
}
