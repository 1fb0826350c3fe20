use crate::dish_classifier::interface::{
    ClassPrediction, ClassifyError, DishClassifier, PredictionResult,
};
use crate::dish_detector::labels::DISH_NAMES;
use crate::library::logger::interface::Logger;
use rand::distr::{Distribution, Uniform};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq)]
pub struct Upload {
    pub file_name: String,
    pub size: usize,
}

/// Answers with scripted results in order, then with random predictions once
/// the script runs out.
pub struct DishClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    script: Mutex<VecDeque<Result<PredictionResult, ClassifyError>>>,
    uploads: Mutex<Vec<Upload>>,
    latency: Duration,
}

impl DishClassifierFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger: logger.with_namespace("dish_classifier").with_namespace("fake"),
            script: Mutex::new(VecDeque::new()),
            uploads: Mutex::new(vec![]),
            latency: Duration::ZERO,
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    #[allow(dead_code)]
    pub fn push_response(&self, response: Result<PredictionResult, ClassifyError>) {
        if let Ok(mut script) = self.script.lock() {
            script.push_back(response);
        }
    }

    #[allow(dead_code)]
    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().map(|u| u.clone()).unwrap_or_default()
    }

    fn random_prediction(&self) -> Result<PredictionResult, ClassifyError> {
        let mut rng = rand::rng();

        let picked = rand::seq::index::sample(&mut rng, DISH_NAMES.len(), 4).into_vec();

        let weight_dist =
            Uniform::new(0.05, 1.0).map_err(|e| ClassifyError::Transport(e.to_string()))?;
        let mut weights: Vec<f64> = picked.iter().map(|_| weight_dist.sample(&mut rng)).collect();
        weights.sort_by(|a, b| b.total_cmp(a));
        let total: f64 = weights.iter().sum();

        let top_4_predictions: Vec<ClassPrediction> = picked
            .iter()
            .zip(weights.iter())
            .map(|(class_id, weight)| ClassPrediction {
                class: format!("class_{}", class_id),
                confidence: (weight / total * 10_000.0).round() / 10_000.0,
            })
            .collect();

        Ok(PredictionResult {
            predicted_class: top_4_predictions[0].class.clone(),
            top_4_predictions,
        })
    }
}

impl DishClassifier for DishClassifierFake {
    fn classify(&self, file_name: &str, image: &[u8]) -> Result<PredictionResult, ClassifyError> {
        let _ = self
            .logger
            .info(&format!("Classifying {} ({} bytes)...", file_name, image.len()));

        if let Ok(mut uploads) = self.uploads.lock() {
            uploads.push(Upload {
                file_name: file_name.to_string(),
                size: image.len(),
            });
        }

        if !self.latency.is_zero() {
            std::thread::sleep(self.latency);
        }

        let scripted = self.script.lock().ok().and_then(|mut s| s.pop_front());

        match scripted {
            Some(response) => response,
            None => self.random_prediction(),
        }
    }
}

#[cfg(test)]
mod impl_fake_test {
    use super::DishClassifierFake;
    use crate::dish_classifier::interface::{ClassifyError, DishClassifier};
    use crate::dish_detector::result_view::map_prediction;
    use crate::library::logger::impl_fake::LoggerFake;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_scripted_responses_are_returned_in_order() {
        let classifier = DishClassifierFake::new(Arc::new(LoggerFake::new()));
        classifier.push_response(Err(ClassifyError::Transport("offline".to_string())));

        let first = classifier.classify("a.jpg", b"a");
        let second = classifier.classify("b.jpg", b"bb");

        assert_eq!(first, Err(ClassifyError::Transport("offline".to_string())));
        assert!(second.is_ok());
        assert_eq!(classifier.uploads().len(), 2);
        assert_eq!(classifier.uploads()[1].size, 2);
    }

    #[test]
    fn test_random_prediction_is_well_formed() {
        let classifier = DishClassifierFake::new(Arc::new(LoggerFake::new()));

        let result = classifier.classify("dish.jpg", b"jpeg").unwrap();

        assert_eq!(result.top_4_predictions.len(), 4);
        assert_eq!(result.predicted_class, result.top_4_predictions[0].class);

        let classes: HashSet<&str> = result
            .top_4_predictions
            .iter()
            .map(|p| p.class.as_str())
            .collect();
        assert_eq!(classes.len(), 4);

        let confidences: Vec<f64> = result
            .top_4_predictions
            .iter()
            .map(|p| p.confidence)
            .collect();
        assert!(confidences.windows(2).all(|w| w[0] >= w[1]));
        assert!((confidences.iter().sum::<f64>() - 1.0).abs() < 0.001);

        let view = map_prediction(&result).unwrap();
        assert!(view.rows.iter().all(|r| r.class_id < 26));
    }
}
