/// Prediction service client module
///
/// Two operations against the external service:
/// - Image classification (`POST /predict`)
/// - Model retraining (`POST /train`)

pub mod client;

pub use client::{predict, train, ApiConfig, ApiError, Classification};
