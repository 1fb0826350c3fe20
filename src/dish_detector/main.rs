use crate::dish_classifier::interface::DishClassifier;
use crate::dish_detector::core::{init, transition, Effect, Model, Msg};
use crate::dish_detector::run_effect::{RunEffect, Waker};
use crate::library::logger::interface::Logger;
use crate::library::state_machine::StateMachine;
use crate::preview_store::interface::PreviewStore;
use std::sync::mpsc::Sender;
use std::sync::Arc;

type TransitionFn = fn(Model, Msg) -> (Model, Vec<Effect>);
type RunEffectFn = Box<dyn Fn(Effect, Sender<Msg>) + Send + Sync>;

pub struct DishDetector {
    machine: StateMachine<Model, Msg, Effect, TransitionFn, RunEffectFn>,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl DishDetector {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        dish_classifier: Arc<dyn DishClassifier + Send + Sync>,
        preview_store: Arc<dyn PreviewStore + Send + Sync>,
        waker: Waker,
    ) -> Self {
        let run_effect = RunEffect::new(logger.clone(), dish_classifier, preview_store, waker);
        let run_effect_fn: RunEffectFn =
            Box::new(move |effect, msg_sender| run_effect.run_effect(effect, msg_sender));

        Self {
            machine: StateMachine::new(init(), transition as TransitionFn, run_effect_fn),
            logger: logger.with_namespace("dish_detector"),
        }
    }

    pub fn model(&self) -> &Model {
        self.machine.state()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        let _ = self.logger.info(&format!("msg: {}", msg_display(&msg)));
        self.machine.dispatch(msg);
    }

    /// Applies everything the effect threads reported since the last call.
    pub fn poll(&mut self) -> usize {
        self.machine.poll()
    }

    /// Releases the preview before returning. Replies still in flight are
    /// ignored once this has run.
    pub fn teardown(&mut self) {
        if self.model().closed {
            return;
        }
        let _ = self.logger.info("Tearing down");
        self.machine.dispatch_inline(Msg::Teardown);
        self.machine.poll();
    }
}

fn msg_display(msg: &Msg) -> String {
    match msg {
        Msg::FileSelected { file_name, bytes } => format!(
            "FileSelected {{ file_name: {:?}, bytes: {} }}",
            file_name,
            bytes.len()
        ),
        msg => format!("{:?}", msg),
    }
}
