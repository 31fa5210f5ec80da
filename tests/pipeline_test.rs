use anyhow::Result;
use solvestat::core::{ConfigProvider, Pipeline};
use solvestat::utils::validation::Validate;
use solvestat::{CliConfig, ExtractionEngine, LocalStorage, LogPipeline, OutputFormat, TomlConfig};
use tempfile::TempDir;

const SAMPLE: &str = "\
q = [1, 3, 0, 2];
----------
%%  runtime:       0.004 (4.500 ms)
%%  solvetime:     0.001 (1.500 ms)
%%  solutions:     1
%%  variables:     4
%%  propagators:   6
%%  propagations:  31
%%  nodes:         5
%%  failures:      2
%%  restarts:      0
%%  peak depth:    3
q = [2, 0, 3, 1];
----------
%%  runtime:       0.006 (6.500 ms)
%%  solvetime:     0.002 (2.500 ms)
%%  solutions:     1
%%  variables:     4
%%  propagators:   6
%%  propagations:  44
%%  nodes:         7
%%  failures:      3
%%  restarts:      0
%%  peak depth:    3
";

fn write_sample(dir: &TempDir) -> Result<String> {
    let path = dir.path().join("q2_mzn_med_result");
    std::fs::write(&path, SAMPLE)?;
    Ok(path.to_str().unwrap().to_string())
}

#[test]
fn test_end_to_end_json_report() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_sample(&temp_dir)?;
    let output = temp_dir.path().join("reports/solve.json");

    let config = CliConfig {
        input: Some(input.clone()),
        format: Some(OutputFormat::Json),
        output: Some(output.to_str().unwrap().to_string()),
        ..CliConfig::default()
    };
    assert!(config.validate().is_ok());

    let engine = ExtractionEngine::new(LogPipeline::new(LocalStorage::default(), config));
    let destination = engine.run()?;
    assert!(destination.ends_with("solve.json"));

    let report: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&output)?)?;
    assert_eq!(report["source"], input.as_str());
    assert_eq!(report["metric"], "solvetime");
    assert_eq!(report["values"], serde_json::json!(["1.500", "2.500"]));
    assert_eq!(report["summary"]["count"], 2);
    assert_eq!(report["summary"]["mean"], 2.0);
    Ok(())
}

#[test]
fn test_runtime_metric_to_csv() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_sample(&temp_dir)?;

    let config = CliConfig {
        input: Some(input),
        metric: Some(solvestat::Metric::Runtime),
        format: Some(OutputFormat::Csv),
        output: Some("runtime.csv".to_string()),
        ..CliConfig::default()
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
    let engine = ExtractionEngine::new(LogPipeline::new(storage, config));
    engine.run()?;

    let csv = std::fs::read_to_string(temp_dir.path().join("runtime.csv"))?;
    assert_eq!(csv, "index,value\n0,4.500\n1,6.500\n");
    Ok(())
}

#[test]
fn test_list_dump_matches_plain_print() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_sample(&temp_dir)?;

    let config = CliConfig {
        input: Some(input),
        output: Some("values.txt".to_string()),
        ..CliConfig::default()
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
    ExtractionEngine::new(LogPipeline::new(storage, config)).run()?;

    let dump = std::fs::read_to_string(temp_dir.path().join("values.txt"))?;
    assert_eq!(dump, "['1.500', '2.500']\n");
    Ok(())
}

#[test]
fn test_toml_config_with_cli_overrides() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = write_sample(&temp_dir)?;
    let config_path = temp_dir.path().join("solvestat.toml");
    let normalized_input = input.replace('\\', "/");
    std::fs::write(
        &config_path,
        format!(
            r#"
[source]
path = "{}"
max_lines = 12

[layout]
metric = "runtime"

[output]
format = "lines"
"#,
            normalized_input
        ),
    )?;

    let mut config = TomlConfig::from_file(&config_path)?;
    let cli = CliConfig {
        metric: Some(solvestat::Metric::Solvetime),
        max_lines: Some(240),
        ..CliConfig::default()
    };
    cli.apply_to(&mut config);

    assert!(config.validate().is_ok());
    assert_eq!(config.max_lines(), 240);
    assert_eq!(config.metric_label(), "solvetime");
    assert_eq!(config.output_format(), OutputFormat::Lines);

    let pipeline = LogPipeline::new(LocalStorage::default(), config);
    let extraction = pipeline.extract()?;
    assert_eq!(extraction.values, vec!["1.500", "2.500"]);
    Ok(())
}

#[test]
fn test_malformed_line_stops_pipeline_before_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let input = temp_dir.path().join("broken");
    std::fs::write(&input, "a\nb\nc\nsolvetime 0.002\n")?;

    let config = CliConfig {
        input: Some(input.to_str().unwrap().to_string()),
        output: Some("never.txt".to_string()),
        ..CliConfig::default()
    };
    let storage = LocalStorage::new(temp_dir.path().to_str().unwrap());
    let result = ExtractionEngine::new(LogPipeline::new(storage, config)).run();

    assert!(result.is_err());
    assert!(!temp_dir.path().join("never.txt").exists());
    Ok(())
}
