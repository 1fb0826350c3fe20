use crate::dish_classifier::interface::PredictionResult;
use crate::dish_detector::labels::{dish_name, dish_style, Gradient};
use thiserror::Error;

pub const CLASS_PREFIX: &str = "class_";
pub const UNKNOWN_DISH: &str = "Unknown dish";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum MappingError {
    #[error("invalid class identifier {0:?}")]
    InvalidClassId(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionRow {
    pub class_id: usize,
    pub name: String,
    pub style: Gradient,
    pub confidence_text: String,
    pub bar_fraction: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionView {
    pub primary_class_id: usize,
    pub primary_name: String,
    pub rows: Vec<PredictionRow>,
}

/// Parses `"class_<N>"` into `N`.
pub fn parse_class_id(class: &str) -> Result<usize, MappingError> {
    class
        .trim()
        .strip_prefix(CLASS_PREFIX)
        .and_then(|suffix| suffix.parse::<usize>().ok())
        .ok_or_else(|| MappingError::InvalidClassId(class.to_string()))
}

pub fn display_name(class_id: usize) -> String {
    dish_name(class_id).unwrap_or(UNKNOWN_DISH).to_string()
}

/// Percentage with two decimals. Ties round away from zero and negative zero
/// prints as `0.00%`.
pub fn format_confidence(confidence: f64) -> String {
    let percent = confidence * 100.0;
    let rounded = (percent * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}%", rounded)
}

pub fn map_prediction(result: &PredictionResult) -> Result<PredictionView, MappingError> {
    let primary_class_id = parse_class_id(&result.predicted_class)?;

    let rows = result
        .top_4_predictions
        .iter()
        .map(|prediction| {
            let class_id = parse_class_id(&prediction.class)?;
            Ok(PredictionRow {
                class_id,
                name: display_name(class_id),
                style: dish_style(class_id),
                confidence_text: format_confidence(prediction.confidence),
                bar_fraction: prediction.confidence.clamp(0.0, 1.0) as f32,
            })
        })
        .collect::<Result<Vec<_>, MappingError>>()?;

    Ok(PredictionView {
        primary_class_id,
        primary_name: display_name(primary_class_id),
        rows,
    })
}
