//! Shared API types

pub mod error;
pub mod json;

pub use error::{ApiError, ProblemDetails};
pub use json::Json;
