use crate::dish_classifier::interface::{ClassifyError, PredictionResult};
use crate::dish_detector::result_view::{map_prediction, PredictionView};
use crate::preview_store::interface::{PreviewError, PreviewId};
use std::sync::Arc;

pub const MISSING_IMAGE_MESSAGE: &str = "Please select an image first.";
pub const PREDICTION_FAILED_MESSAGE: &str = "Failed to get prediction.";

#[derive(Debug, Clone, PartialEq)]
pub struct SelectedImage {
    /// Bumped on every selection so late replies for older files can be told apart.
    pub generation: u64,
    pub file_name: String,
    pub bytes: Arc<Vec<u8>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub result: PredictionResult,
    pub view: PredictionView,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    pub selected: Option<SelectedImage>,
    pub preview: Option<PreviewId>,
    pub prediction: Option<Prediction>,
    pub busy: bool,
    pub notification: Option<String>,
    pub last_generation: u64,
    pub closed: bool,
}

impl Model {
    pub fn submit_label(&self) -> &'static str {
        if self.busy {
            "Detecting..."
        } else {
            "Detect Dish"
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.busy && self.can_select()
    }

    /// A new file may be chosen while a request is in flight.
    pub fn can_select(&self) -> bool {
        !self.closed && self.notification.is_none()
    }

    fn current_generation(&self) -> Option<u64> {
        self.selected.as_ref().map(|s| s.generation)
    }
}

#[derive(Debug)]
pub enum Msg {
    FileSelected {
        file_name: String,
        bytes: Vec<u8>,
    },
    FileReadFailed {
        path: String,
        reason: String,
    },
    PreviewCreated {
        generation: u64,
        result: Result<PreviewId, PreviewError>,
    },
    PreviewReleased {
        preview: PreviewId,
        result: Result<(), PreviewError>,
    },
    SubmitClicked,
    ClassifyDone {
        generation: u64,
        result: Result<PredictionResult, ClassifyError>,
    },
    NotificationDismissed,
    Teardown,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    CreatePreview {
        generation: u64,
        bytes: Arc<Vec<u8>>,
    },
    ReleasePreview {
        preview: PreviewId,
    },
    ClassifyImage {
        generation: u64,
        file_name: String,
        bytes: Arc<Vec<u8>>,
    },
    LogInfo {
        message: String,
    },
    LogError {
        message: String,
    },
}

impl Effect {
    pub fn to_display_string(&self) -> String {
        match self {
            Effect::CreatePreview { generation, bytes } => {
                format!("CreatePreview {{ generation: {}, bytes: {} }}", generation, bytes.len())
            }
            Effect::ClassifyImage {
                generation,
                file_name,
                bytes,
            } => format!(
                "ClassifyImage {{ generation: {}, file_name: {:?}, bytes: {} }}",
                generation,
                file_name,
                bytes.len()
            ),
            effect => format!("{:?}", effect),
        }
    }
}

pub fn init() -> (Model, Vec<Effect>) {
    (Model::default(), vec![])
}

pub fn transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    if model.closed {
        return closed_transition(model, msg);
    }

    match msg {
        Msg::FileSelected { file_name, bytes } => {
            let mut model = model;
            let mut effects = vec![];

            if let Some(preview) = model.preview.take() {
                effects.push(Effect::ReleasePreview { preview });
            }

            let generation = model.last_generation + 1;
            let bytes = Arc::new(bytes);

            effects.push(Effect::LogInfo {
                message: format!("Selected {} ({} bytes)", file_name, bytes.len()),
            });
            effects.push(Effect::CreatePreview {
                generation,
                bytes: bytes.clone(),
            });

            model.last_generation = generation;
            model.selected = Some(SelectedImage {
                generation,
                file_name,
                bytes,
            });
            model.prediction = None;

            (model, effects)
        }

        Msg::FileReadFailed { path, reason } => (
            Model {
                notification: Some(format!("Could not read {}.", path)),
                ..model
            },
            vec![Effect::LogError {
                message: format!("Reading {} failed: {}", path, reason),
            }],
        ),

        Msg::PreviewCreated { generation, result } => match result {
            Ok(preview) if model.current_generation() == Some(generation) => (
                Model {
                    preview: Some(preview),
                    ..model
                },
                vec![],
            ),
            Ok(preview) => (model, vec![Effect::ReleasePreview { preview }]),
            Err(error) => (
                model,
                vec![Effect::LogError {
                    message: format!("Preview unavailable: {}", error),
                }],
            ),
        },

        Msg::PreviewReleased { preview, result } => match result {
            Ok(()) => (model, vec![]),
            Err(error) => (
                model,
                vec![Effect::LogError {
                    message: format!("Releasing preview {:?} failed: {}", preview, error),
                }],
            ),
        },

        Msg::SubmitClicked => {
            if model.busy {
                return (model, vec![]);
            }

            match model.selected.clone() {
                None => (
                    Model {
                        notification: Some(MISSING_IMAGE_MESSAGE.to_string()),
                        ..model
                    },
                    vec![],
                ),
                Some(selected) => (
                    Model {
                        busy: true,
                        ..model
                    },
                    vec![Effect::ClassifyImage {
                        generation: selected.generation,
                        file_name: selected.file_name,
                        bytes: selected.bytes,
                    }],
                ),
            }
        }

        Msg::ClassifyDone { generation, result } => {
            let model = Model {
                busy: false,
                ..model
            };

            if model.current_generation() != Some(generation) {
                return (
                    model,
                    vec![Effect::LogInfo {
                        message: format!(
                            "Discarding prediction for superseded selection {}",
                            generation
                        ),
                    }],
                );
            }

            let mapped = result
                .map_err(|e| e.to_string())
                .and_then(|result| match map_prediction(&result) {
                    Ok(view) => Ok(Prediction { result, view }),
                    Err(e) => Err(format!("malformed prediction: {}", e)),
                });

            match mapped {
                Ok(prediction) => {
                    let message = format!("Predicted {}", prediction.view.primary_name);
                    (
                        Model {
                            prediction: Some(prediction),
                            ..model
                        },
                        vec![Effect::LogInfo { message }],
                    )
                }
                Err(reason) => (
                    Model {
                        prediction: None,
                        notification: Some(PREDICTION_FAILED_MESSAGE.to_string()),
                        ..model
                    },
                    vec![Effect::LogError {
                        message: format!("Prediction failed: {}", reason),
                    }],
                ),
            }
        }

        Msg::NotificationDismissed => (
            Model {
                notification: None,
                ..model
            },
            vec![],
        ),

        Msg::Teardown => {
            let mut model = model;
            let effects = model
                .preview
                .take()
                .map(|preview| vec![Effect::ReleasePreview { preview }])
                .unwrap_or_default();

            model.selected = None;
            model.prediction = None;
            model.notification = None;
            model.closed = true;

            (model, effects)
        }
    }
}

/// After teardown nothing changes state; previews that finish decoding late
/// are released straight away.
fn closed_transition(model: Model, msg: Msg) -> (Model, Vec<Effect>) {
    match msg {
        Msg::PreviewCreated {
            result: Ok(preview),
            ..
        } => (model, vec![Effect::ReleasePreview { preview }]),
        Msg::ClassifyDone { .. } => (
            Model {
                busy: false,
                ..model
            },
            vec![],
        ),
        _ => (model, vec![]),
    }
}
