//! Shared HTTP types

pub mod envelope;
pub mod error;
pub mod json;

pub use envelope::{AccountResponse, GeneralResponse};
pub use error::{ApiError, ApiErrorResponse};
pub use json::Json;
