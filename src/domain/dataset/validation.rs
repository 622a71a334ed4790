//! Dataset name and label validation

use thiserror::Error;

/// Errors that can occur during dataset validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetValidationError {
    #[error("Dataset name cannot be empty")]
    EmptyName,

    #[error("Dataset name cannot exceed {0} characters")]
    NameTooLong(usize),

    #[error("Dataset name can only contain lowercase letters, digits, '-' and '_'")]
    InvalidNameCharacters,

    #[error("Dataset name cannot start with '-' or '_'")]
    InvalidNameFormat,

    #[error("Label schema must contain at least one label")]
    EmptyLabelSchema,

    #[error("Labels cannot be empty")]
    EmptyLabel,

    #[error("Label '{0}' exceeds {1} characters")]
    LabelTooLong(String, usize),
}

pub const MAX_DATASET_NAME_LENGTH: usize = 128;
pub const MAX_LABEL_LENGTH: usize = 128;

/// Validate a dataset name
pub fn validate_dataset_name(name: &str) -> Result<(), DatasetValidationError> {
    if name.is_empty() {
        return Err(DatasetValidationError::EmptyName);
    }

    if name.len() > MAX_DATASET_NAME_LENGTH {
        return Err(DatasetValidationError::NameTooLong(MAX_DATASET_NAME_LENGTH));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
    {
        return Err(DatasetValidationError::InvalidNameCharacters);
    }

    if name.starts_with('-') || name.starts_with('_') {
        return Err(DatasetValidationError::InvalidNameFormat);
    }

    Ok(())
}

/// Validate a single (already trimmed) label
pub fn validate_label(label: &str) -> Result<(), DatasetValidationError> {
    if label.is_empty() {
        return Err(DatasetValidationError::EmptyLabel);
    }

    if label.chars().count() > MAX_LABEL_LENGTH {
        return Err(DatasetValidationError::LabelTooLong(
            label.to_string(),
            MAX_LABEL_LENGTH,
        ));
    }

    Ok(())
}
