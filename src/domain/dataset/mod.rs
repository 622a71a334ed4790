//! Dataset domain module
//!
//! A dataset is created for a single annotation task and owned by the user
//! that created it. Its settings carry the label schema and must always match
//! the dataset task.

mod entity;
mod repository;
mod settings;
mod validation;

pub use entity::{Dataset, DatasetName};
pub use repository::{concurrent_modification, DatasetRepository};
pub use settings::{
    LabelSchema, Settings, TaskType, TextClassificationSettings, TokenClassificationSettings,
};
pub use validation::{
    validate_dataset_name, validate_label, DatasetValidationError, MAX_DATASET_NAME_LENGTH,
    MAX_LABEL_LENGTH,
};

#[cfg(test)]
pub use repository::mock;
