use crate::domain::model::RecordLayout;
use crate::utils::error::{Result, StatError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(StatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(StatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(StatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(StatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_delimiter(field_name: &str, delimiter: Option<char>) -> Result<()> {
    match delimiter {
        Some(c) if c.is_whitespace() => Err(StatError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{:?}", c),
            reason: "Delimiter cannot be whitespace; tokens are already split on it".to_string(),
        }),
        _ => Ok(()),
    }
}

impl Validate for RecordLayout {
    fn validate(&self) -> Result<()> {
        validate_positive_number("layout.record_size", self.record_size, 1)?;
        validate_range("layout.target_line", self.target_line, 0, self.record_size - 1)?;
        validate_delimiter("layout.delimiter", self.delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input", "q2_mzn_med_result").is_ok());
        assert!(validate_path("input", "").is_err());
        assert!(validate_path("input", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("max_lines", 240, 1).is_ok());
        assert!(validate_positive_number("max_lines", 0, 1).is_err());
    }

    #[test]
    fn test_layout_validation() {
        assert!(RecordLayout::default().validate().is_ok());

        let zero_size = RecordLayout {
            record_size: 0,
            ..RecordLayout::default()
        };
        assert!(zero_size.validate().is_err());

        let line_outside_block = RecordLayout {
            target_line: 12,
            ..RecordLayout::default()
        };
        assert!(line_outside_block.validate().is_err());

        let blank_delimiter = RecordLayout {
            delimiter: Some(' '),
            ..RecordLayout::default()
        };
        assert!(blank_delimiter.validate().is_err());

        let whole_token = RecordLayout {
            delimiter: None,
            ..RecordLayout::default()
        };
        assert!(whole_token.validate().is_ok());
    }
}
