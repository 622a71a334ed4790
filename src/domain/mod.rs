//! Domain layer - Core business logic and entities

pub mod dataset;
pub mod error;
pub mod user;

pub use dataset::{
    Dataset, DatasetName, DatasetRepository, DatasetValidationError, LabelSchema, Settings,
    TaskType, TextClassificationSettings, TokenClassificationSettings,
};
pub use error::DomainError;
pub use user::{User, UserRepository, UserRole, UserValidationError};
