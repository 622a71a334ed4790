//! API wire types

pub mod dataset;
pub mod error;
pub mod json;

pub use dataset::{
    CreateDatasetApiRequest, DatasetResponse, DeleteDatasetResponse, ListDatasetsResponse,
    UserResponse,
};
pub use error::{ApiError, ApiErrorDetail, ApiErrorResponse, ApiErrorType, TASK_MISMATCH_CODE};
pub use json::Json;
