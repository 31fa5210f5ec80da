use crate::config::{metric_label, resolve_layout};
use crate::core::ConfigProvider;
use crate::domain::model::{
    Metric, OutputFormat, RecordLayout, DEFAULT_INPUT_PATH, DEFAULT_MAX_LINES,
};
use crate::utils::error::{Result, StatError};
use crate::utils::validation::{validate_path, validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub path: Option<String>,
    pub max_lines: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub metric: Option<Metric>,
    pub record_size: Option<usize>,
    pub target_line: Option<usize>,
    pub target_token: Option<usize>,
    /// One character, or `""` to keep the whole token.
    pub delimiter: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: Option<OutputFormat>,
    pub path: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(StatError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${RESULT_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| StatError::ConfigValidationError {
            field: "env_substitution".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    fn metric(&self) -> Metric {
        self.layout.metric.unwrap_or_default()
    }

    fn delimiter(&self) -> Option<Option<char>> {
        self.layout.delimiter.as_deref().map(|d| d.chars().next())
    }
}

impl ConfigProvider for TomlConfig {
    fn input_path(&self) -> &str {
        self.source.path.as_deref().unwrap_or(DEFAULT_INPUT_PATH)
    }

    fn max_lines(&self) -> usize {
        self.source.max_lines.unwrap_or(DEFAULT_MAX_LINES)
    }

    fn layout(&self) -> RecordLayout {
        resolve_layout(
            self.metric(),
            self.layout.record_size,
            self.layout.target_line,
            self.layout.target_token,
            self.delimiter(),
        )
    }

    fn metric_label(&self) -> String {
        metric_label(self.metric(), &self.layout())
    }

    fn output_format(&self) -> OutputFormat {
        self.output.format.unwrap_or_default()
    }

    fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source.path", self.input_path())?;
        validate_positive_number("source.max_lines", self.max_lines(), 1)?;

        if let Some(delimiter) = &self.layout.delimiter {
            if delimiter.chars().count() > 1 {
                return Err(StatError::InvalidConfigValueError {
                    field: "layout.delimiter".to_string(),
                    value: delimiter.clone(),
                    reason: "Delimiter must be a single character or empty".to_string(),
                });
            }
        }

        if let Some(path) = &self.output.path {
            validate_path("output.path", path)?;
        }

        self.layout().validate()
    }
}
