use crate::HomeApp;
use crate::model::Language;
use egui::{Align, Button, CentralPanel, Context, RichText};

pub fn ui_language_select(app: &mut HomeApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        // 1) Vertical centering aproximado
        let total_height = 280.0;
        let extra_space = (ui.available_height() - total_height).max(0.0) / 2.0;
        ui.add_space(extra_space);

        // 2) Máximo ancho de contenido
        let max_width = 540.0;
        let content_width = ui.available_width().min(max_width);

        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    ui.set_width(content_width);

                    ui.heading("👋 ¡Bienvenido a kotoba_quiz!");
                    ui.add_space(18.0);
                    ui.label("¿Qué idioma quieres aprender?");
                    ui.add_space(18.0);

                    let button_width = ((content_width - 40.0) / 2.0).clamp(120.0, 280.0);

                    ui.vertical_centered(|ui| {
                        let btn_ja = ui.add_sized(
                            [button_width, 40.0],
                            Button::new(Language::Japanese.display_name()),
                        );
                        ui.add_space(5.0);
                        let btn_ko = ui.add_sized(
                            [button_width, 40.0],
                            Button::new(Language::Korean.display_name()),
                        );
                        ui.add_space(5.0);

                        #[cfg(not(target_arch = "wasm32"))]
                        let btn_exit = ui.add_sized([button_width, 40.0], Button::new("Salir"));

                        if btn_ja.clicked() {
                            app.seleccionar_idioma(Language::Japanese);
                        }
                        if btn_ko.clicked() {
                            app.seleccionar_idioma(Language::Korean);
                        }
                        #[cfg(not(target_arch = "wasm32"))]
                        if btn_exit.clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });

                    ui.add_space(12.0);
                    if !app.message.is_empty() {
                        ui.label(
                            RichText::new(&app.message)
                                .color(egui::Color32::YELLOW)
                                .strong(),
                        );
                    }
                });
        });
    });
}
