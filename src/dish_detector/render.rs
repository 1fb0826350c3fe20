use crate::dish_detector::core::{Model, Msg, Prediction};
use crate::dish_detector::labels::Gradient;
use crate::dish_detector::result_view::PredictionRow;
use eframe::egui;

const ROW_HEIGHT: f32 = 64.0;
const BAR_HEIGHT: f32 = 12.0;
const PREVIEW_HEIGHT: f32 = 256.0;
const ACCENT: egui::Color32 = egui::Color32::from_rgb(168, 85, 247);

fn color(rgb: [u8; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(rgb[0], rgb[1], rgb[2])
}

fn paint_gradient(painter: &egui::Painter, rect: egui::Rect, gradient: Gradient) {
    let from = color(gradient.from);
    let to = color(gradient.to);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(rect.left_top(), from);
    mesh.colored_vertex(rect.right_top(), to);
    mesh.colored_vertex(rect.right_bottom(), to);
    mesh.colored_vertex(rect.left_bottom(), from);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(0, 2, 3);

    painter.add(egui::Shape::mesh(mesh));
}

/// Upload form: picker, preview and submit button. Returns the messages the
/// user triggered this frame.
pub fn render_form(
    ui: &mut egui::Ui,
    model: &Model,
    preview: Option<&egui::TextureHandle>,
    pick_image: &mut dyn FnMut() -> Option<Msg>,
) -> Vec<Msg> {
    let mut msgs = vec![];

    ui.vertical_centered(|ui| {
        if ui
            .add_enabled(model.can_select(), egui::Button::new("Choose image..."))
            .clicked()
        {
            if let Some(msg) = pick_image() {
                msgs.push(msg);
            }
        }

        match &model.selected {
            Some(selected) => ui.label(selected.file_name.as_str()),
            None => ui.weak("No file chosen"),
        };

        ui.add_space(12.0);

        if let Some(texture) = preview {
            let size = texture.size_vec2();
            let scale = (PREVIEW_HEIGHT / size.y).min(ui.available_width() / size.x);
            ui.add(egui::Image::new((texture.id(), size * scale)).rounding(12.0));
            ui.add_space(12.0);
        }

        let button = egui::Button::new(
            egui::RichText::new(model.submit_label())
                .strong()
                .color(egui::Color32::WHITE),
        )
        .fill(ACCENT)
        .min_size(egui::vec2(ui.available_width(), 40.0));

        if ui.add_enabled(model.can_submit(), button).clicked() {
            msgs.push(Msg::SubmitClicked);
        }
    });

    msgs
}

pub fn render_prediction(ui: &mut egui::Ui, prediction: &Prediction) {
    ui.vertical_centered(|ui| {
        ui.horizontal_wrapped(|ui| {
            ui.heading("Predicted Dish:");
            ui.heading(egui::RichText::new(prediction.view.primary_name.as_str()).color(ACCENT));
        });
        ui.add_space(8.0);
        ui.label(egui::RichText::new("Top Predictions").size(18.0).strong());
    });

    ui.add_space(8.0);

    for (index, row) in prediction.view.rows.iter().enumerate() {
        render_row(ui, index, row);
        ui.add_space(8.0);
    }
}

fn render_row(ui: &mut egui::Ui, index: usize, row: &PredictionRow) {
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(ui.available_width(), ROW_HEIGHT),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);
    paint_gradient(&painter, rect, row.style);

    let inner = rect.shrink(12.0);
    let font = egui::FontId::proportional(16.0);
    painter.text(
        inner.left_top(),
        egui::Align2::LEFT_TOP,
        &row.name,
        font.clone(),
        egui::Color32::WHITE,
    );
    painter.text(
        inner.right_top(),
        egui::Align2::RIGHT_TOP,
        &row.confidence_text,
        font,
        egui::Color32::WHITE,
    );

    let track = egui::Rect::from_min_size(
        egui::pos2(inner.left(), inner.bottom() - BAR_HEIGHT),
        egui::vec2(inner.width(), BAR_HEIGHT),
    );
    painter.rect_filled(
        track,
        BAR_HEIGHT / 2.0,
        egui::Color32::from_white_alpha(77),
    );

    let fraction = ui.ctx().animate_value_with_time(
        egui::Id::new(("prediction_bar", index, row.class_id)),
        row.bar_fraction,
        1.0,
    );
    let fill = egui::Rect::from_min_size(
        track.min,
        egui::vec2(track.width() * fraction, BAR_HEIGHT),
    );
    painter.rect_filled(fill, BAR_HEIGHT / 2.0, egui::Color32::WHITE);
}

/// Modal notification. While it is open the rest of the form is disabled.
pub fn render_notification(ctx: &egui::Context, model: &Model) -> Vec<Msg> {
    let mut msgs = vec![];

    if let Some(message) = &model.notification {
        egui::Window::new("Dish Detector")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label(message.as_str());
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    msgs.push(Msg::NotificationDismissed);
                }
            });
    }

    msgs
}
