use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassPrediction {
    pub class: String,
    pub confidence: f64,
}

/// Response body of the prediction service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_class: String,
    pub top_4_predictions: Vec<ClassPrediction>,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClassifyError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("service responded with {status}: {message}")]
    Status { status: u16, message: String },
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

pub trait DishClassifier {
    /// Uploads one image and returns the service's predictions.
    fn classify(&self, file_name: &str, image: &[u8]) -> Result<PredictionResult, ClassifyError>;
}
