use crate::domain::model::{OutputFormat, Report};
use crate::utils::error::{Result, StatError};

pub fn render(report: &Report, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::List => Ok(render_list(&report.values)),
        OutputFormat::Lines => Ok(render_lines(&report.values)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Csv => render_csv(&report.values),
    }
}

/// `['2.101', '3.5']`, the dump a plain list print gives.
pub fn render_list(values: &[String]) -> String {
    let items: Vec<String> = values.iter().map(|v| quote(v)).collect();
    format!("[{}]\n", items.join(", "))
}

fn quote(value: &str) -> String {
    let escaped = value.replace('\\', "\\\\");
    if escaped.contains('\'') && !escaped.contains('"') {
        format!("\"{}\"", escaped)
    } else {
        format!("'{}'", escaped.replace('\'', "\\'"))
    }
}

pub fn render_lines(values: &[String]) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
    out
}

pub fn render_json(report: &Report) -> Result<String> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    Ok(json)
}

pub fn render_csv(values: &[String]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["index", "value"])?;
    for (index, value) in values.iter().enumerate() {
        writer.write_record([index.to_string().as_str(), value.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| StatError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| StatError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
