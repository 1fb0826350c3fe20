use crate::dish_classifier::interface::DishClassifier;
use crate::dish_detector::core::{Effect, Msg};
use crate::library::logger::interface::Logger;
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::Sender;
use std::sync::Arc;

pub type Waker = Arc<dyn Fn() + Send + Sync>;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    dish_classifier: Arc<dyn DishClassifier + Send + Sync>,
    preview_store: Arc<dyn PreviewStore + Send + Sync>,
    waker: Waker,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        dish_classifier: Arc<dyn DishClassifier + Send + Sync>,
        preview_store: Arc<dyn PreviewStore + Send + Sync>,
        waker: Waker,
    ) -> Self {
        Self {
            logger: logger.with_namespace("dish_detector"),
            dish_classifier,
            preview_store,
            waker,
        }
    }

    pub fn run_effect(&self, effect: Effect, msg_sender: Sender<Msg>) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect.to_display_string()));

        match effect {
            Effect::CreatePreview { generation, bytes } => {
                let result = self.preview_store.create(&bytes);
                self.send(&msg_sender, Msg::PreviewCreated { generation, result });
            }
            Effect::ReleasePreview { preview } => {
                let result = self.preview_store.release(preview);
                self.send(&msg_sender, Msg::PreviewReleased { preview, result });
            }
            Effect::ClassifyImage {
                generation,
                file_name,
                bytes,
            } => {
                let result = self.dish_classifier.classify(&file_name, &bytes);
                self.send(&msg_sender, Msg::ClassifyDone { generation, result });
            }
            Effect::LogInfo { message } => {
                let _ = self.logger.info(&message);
            }
            Effect::LogError { message } => {
                let _ = self.logger.error(&message);
            }
        }
    }

    fn send(&self, msg_sender: &Sender<Msg>, msg: Msg) {
        // The receiver is gone once the window has closed; late replies are dropped.
        if msg_sender.send(msg).is_ok() {
            (self.waker)();
        }
    }
}
