// src/ui/helpers.rs
use egui::{Button, Ui, Vec2};

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Línea de mensaje destacada (vacía = no pinta nada).
pub fn message_line(ui: &mut Ui, message: &str) {
    if !message.is_empty() {
        ui.add_space(8.0);
        ui.label(
            egui::RichText::new(message)
                .color(egui::Color32::YELLOW)
                .strong(),
        );
        ui.add_space(8.0);
    }
}
