use crate::HomeApp;
use crate::ui::layout::centered_panel;
use egui::{Button, Context, RichText};

/// Punto de entrada del duelo. El emparejamiento en vivo llegará con el
/// modo multijugador; de momento la vista sólo presenta el modo.
pub fn ui_duel(app: &mut HomeApp, ctx: &Context) {
    centered_panel(ctx, 260.0, 420.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("⚔ Duelo de vocabulario");
            ui.add_space(12.0);
            ui.label("Reta a otro estudiante: misma lista de palabras, contra reloj.");
            ui.add_space(18.0);

            ui.add_enabled(false, Button::new("Buscar oponente (próximamente)"));
            ui.add_space(8.0);
            ui.label(RichText::new("Los duelos no afectan a tu progreso de la ruta.").weak());

            ui.add_space(18.0);
            if ui.button("Volver al inicio").clicked() {
                app.ir_a_inicio();
            }
        });
    });
}
