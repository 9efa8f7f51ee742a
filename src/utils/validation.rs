use crate::domain::model::Species;
use crate::utils::error::{Result, ShelterError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ShelterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "value cannot be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ShelterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ShelterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_species(field_name: &str, value: &str) -> Result<Species> {
    value
        .parse::<Species>()
        .map_err(|reason| ShelterError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason,
        })
}
