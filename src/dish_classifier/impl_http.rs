use crate::config::Config;
use crate::dish_classifier::interface::{ClassifyError, DishClassifier, PredictionResult};
use crate::library::logger::interface::Logger;
use reqwest::blocking::multipart::{Form, Part};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::sync::Arc;

pub const IMAGE_FIELD: &str = "image";

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct DishClassifierHttp {
    client: Client,
    endpoint: String,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DishClassifierHttp {
    pub fn new(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, ClassifyError> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: config.endpoint.clone(),
            logger: logger.with_namespace("dish_classifier").with_namespace("http"),
        })
    }
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}

impl DishClassifier for DishClassifierHttp {
    fn classify(&self, file_name: &str, image: &[u8]) -> Result<PredictionResult, ClassifyError> {
        let _ = self.logger.info(&format!(
            "POST {} ({}, {} bytes)",
            self.endpoint,
            file_name,
            image.len()
        ));

        let part = Part::bytes(image.to_vec()).file_name(file_name.to_string());
        let form = Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ClassifyError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(ClassifyError::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        let prediction = serde_json::from_str::<PredictionResult>(&body)
            .map_err(|e| ClassifyError::MalformedResponse(e.to_string()))?;

        let _ = self
            .logger
            .info(&format!("Predicted {}", prediction.predicted_class));

        Ok(prediction)
    }
}
