use crate::domain::model::FieldPair;
use crate::utils::error::{CheckError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let as_str = path.to_string_lossy();

    if as_str.is_empty() {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if as_str.contains('\0') {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: as_str.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: usize, min_value: usize) -> Result<()> {
    if value < min_value {
        return Err(CheckError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_fields(field_name: &str, fields: FieldPair) -> Result<()> {
    validate_positive_number(&format!("{}[0]", field_name), fields.first, 1)?;
    validate_positive_number(&format!("{}[1]", field_name), fields.second, 1)?;
    Ok(())
}

/// Parses `"A,B"` into a [`FieldPair`].
pub fn parse_field_pair(value: &str) -> Result<FieldPair> {
    let invalid = |reason: &str| CheckError::InvalidConfigValueError {
        field: "fields".to_string(),
        value: value.to_string(),
        reason: reason.to_string(),
    };

    let positions = value
        .split(',')
        .map(|part| part.trim().parse::<usize>())
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|_| invalid("Positions must be non-negative integers"))?;

    match positions.as_slice() {
        [first, second] => {
            let fields = FieldPair::new(*first, *second);
            validate_fields("fields", fields)?;
            Ok(fields)
        }
        _ => Err(invalid("Exactly two comma-separated positions are required")),
    }
}
