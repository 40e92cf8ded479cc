use crate::HomeApp;
use crate::ui::layout::simple_panel;
use egui::{Context, RichText, Spinner};

pub fn ui_leaderboard(app: &mut HomeApp, ctx: &Context) {
    // Si se entra directamente, asegura que la petición está lanzada.
    app.ensure_home_data();

    let rows = app.leaderboard_rows();

    simple_panel(ctx, 480.0, |ui| {
        ui.heading("🏆 Clasificación semanal");
        ui.add_space(12.0);

        match &rows {
            None => {
                ui.add(Spinner::new());
            }
            Some(rows) if rows.is_empty() => {
                ui.label("La clasificación no está disponible ahora mismo.");
            }
            Some(rows) => {
                for row in rows {
                    if row.is_self {
                        ui.label(RichText::new(row.label()).strong());
                    } else {
                        ui.label(row.label());
                    }
                }
            }
        }

        ui.add_space(16.0);
        if ui.button("Volver al inicio").clicked() {
            app.ir_a_inicio();
        }
    });
}
