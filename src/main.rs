use config::Config;
use dish_classifier::impl_fake::DishClassifierFake;
use dish_classifier::impl_http::DishClassifierHttp;
use dish_classifier::interface::DishClassifier;
use dish_detector::app::DishDetectorApp;
use library::logger::impl_console::LoggerConsole;
use library::logger::interface::Logger;
use std::sync::Arc;

mod config;
mod dish_classifier;
mod dish_detector;
mod library;
mod preview_store;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    let dish_classifier: Arc<dyn DishClassifier + Send + Sync> = if config.use_fake_classifier {
        logger.info("Using fake dish classifier")?;
        Arc::new(
            DishClassifierFake::new(logger.clone()).with_latency(config.fake_classifier_latency),
        )
    } else {
        logger.info(&format!("Using prediction service at {}", config.endpoint))?;
        Arc::new(DishClassifierHttp::new(&config, logger.clone())?)
    };

    DishDetectorApp::run(&config, logger, dish_classifier)?;

    Ok(())
}
