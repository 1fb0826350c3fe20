use crate::config::Config;
use crate::dish_classifier::interface::DishClassifier;
use crate::dish_detector::core::Msg;
use crate::dish_detector::main::DishDetector;
use crate::dish_detector::render::{render_form, render_notification, render_prediction};
use crate::library::logger::interface::Logger;
use crate::preview_store::impl_egui::PreviewStoreEgui;
use eframe::egui;
use std::path::Path;
use std::sync::Arc;

const IMAGE_EXTENSIONS: [&str; 7] = ["jpg", "jpeg", "png", "webp", "gif", "bmp", "tiff"];

pub struct DishDetectorApp {
    detector: DishDetector,
    preview_store: Arc<PreviewStoreEgui>,
}

impl DishDetectorApp {
    pub fn new(
        ctx: &egui::Context,
        logger: Arc<dyn Logger + Send + Sync>,
        dish_classifier: Arc<dyn DishClassifier + Send + Sync>,
    ) -> Self {
        let preview_store = Arc::new(PreviewStoreEgui::new(ctx.clone()));
        let repaint_ctx = ctx.clone();

        let detector = DishDetector::new(
            logger,
            dish_classifier,
            preview_store.clone(),
            Arc::new(move || repaint_ctx.request_repaint()),
        );

        Self {
            detector,
            preview_store,
        }
    }

    pub fn run(
        config: &Config,
        logger: Arc<dyn Logger + Send + Sync>,
        dish_classifier: Arc<dyn DishClassifier + Send + Sync>,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size(config.window_size)
                .with_drag_and_drop(true),
            ..Default::default()
        };

        eframe::run_native(
            "AI Dish Detector",
            options,
            Box::new(move |cc| {
                Box::new(DishDetectorApp::new(&cc.egui_ctx, logger, dish_classifier))
            }),
        )
        .map_err(|e| e.to_string())?;

        Ok(())
    }

    fn dispatch_all(&mut self, msgs: Vec<Msg>) {
        for msg in msgs {
            self.detector.dispatch(msg);
        }
    }
}

fn read_image(path: &Path) -> Msg {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    match std::fs::read(path) {
        Ok(bytes) => Msg::FileSelected { file_name, bytes },
        Err(e) => Msg::FileReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        },
    }
}

fn pick_image() -> Option<Msg> {
    rfd::FileDialog::new()
        .add_filter("Images", &IMAGE_EXTENSIONS)
        .pick_file()
        .map(|path| read_image(&path))
}

fn dropped_image(file: &egui::DroppedFile) -> Option<Msg> {
    if let Some(bytes) = &file.bytes {
        return Some(Msg::FileSelected {
            file_name: file.name.clone(),
            bytes: bytes.to_vec(),
        });
    }
    file.path.as_deref().map(read_image)
}

impl eframe::App for DishDetectorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.detector.poll();

        let model = self.detector.model().clone();
        let mut msgs = vec![];

        if model.can_select() {
            let dropped = ctx.input(|i| i.raw.dropped_files.first().and_then(dropped_image));
            msgs.extend(dropped);
        }

        let preview = model
            .preview
            .and_then(|preview| self.preview_store.texture(preview));

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(16.0);
                ui.label(
                    egui::RichText::new("🍽 AI Dish Detector")
                        .size(36.0)
                        .strong(),
                );
                ui.add_space(24.0);
            });

            ui.columns(2, |columns| {
                msgs.extend(render_form(
                    &mut columns[0],
                    &model,
                    preview.as_ref(),
                    &mut pick_image,
                ));

                if let Some(prediction) = &model.prediction {
                    egui::ScrollArea::vertical().show(&mut columns[1], |ui| {
                        render_prediction(ui, prediction);
                    });
                }
            });
        });

        msgs.extend(render_notification(ctx, &model));

        self.dispatch_all(msgs);
    }
}

impl Drop for DishDetectorApp {
    fn drop(&mut self) {
        self.detector.teardown();
    }
}
