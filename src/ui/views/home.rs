use crate::HomeApp;
use crate::app::WordOfDayState;
use crate::ui::helpers::message_line;
use crate::ui::layout::{centered_panel, simple_panel};
use egui::{Button, Context, RichText, Spinner};

/// Panel de inicio: sugerencia, palabra del día, ruta, clasificación y duelo.
pub fn ui_home(app: &mut HomeApp, ctx: &Context) {
    // Sin perfil no hay nada que personalizar: "todavía no listo".
    if app.profile().is_none() {
        centered_panel(ctx, 160.0, 400.0, |ui| {
            ui.vertical_centered(|ui| {
                ui.add(Spinner::new());
                ui.add_space(8.0);
                ui.label("Preparando tu perfil…");
            });
        });
        return;
    }

    // Activación del panel: dispara (como mucho) los fetches pendientes.
    app.ensure_home_data();

    // Precomputar datos para no mantener borrows dentro de las closures
    let greeting = {
        let profile = app.profile().expect("perfil comprobado arriba");
        let lang = app
            .selected_language
            .map(|l| l.display_name())
            .unwrap_or("…");
        format!("¡Hola, {}! Hoy toca {}.", profile.display_name, lang)
    };
    let suggestion = app.sugerencia_actual();
    let word_state = app.word_state.clone();
    let snippet = app.leaderboard_snippet();
    let topic_levels: Vec<(crate::model::Topic, u32)> = {
        let profile = app.profile().expect("perfil comprobado arriba");
        crate::model::Topic::ALL
            .iter()
            .map(|t| (*t, profile.max_completed_level(*t)))
            .collect()
    };
    let quiz_pending = app.quiz_request_pending;
    let message = app.message.clone();

    simple_panel(ctx, 620.0, |ui| {
        ui.heading(greeting);
        message_line(ui, &message);
        ui.add_space(8.0);

        // --- Tarjeta de sugerencia ---
        if let Some(s) = suggestion {
            ui.group(|ui| {
                if s.smart {
                    ui.label(RichText::new("💡 Sugerencia inteligente").strong());
                } else {
                    ui.label(RichText::new("Tu siguiente paso").strong());
                }
                ui.add_space(4.0);
                ui.label(&s.text);
                ui.add_space(6.0);
                let btn = ui.add_enabled(!quiz_pending, Button::new(&s.button_label));
                if btn.clicked() {
                    app.ejecutar_sugerencia(s.action.clone());
                }
            });
            ui.add_space(10.0);
        }

        // --- Palabra del día ---
        ui.group(|ui| {
            ui.label(RichText::new("📖 Palabra del día").strong());
            ui.add_space(4.0);
            match &word_state {
                WordOfDayState::Idle | WordOfDayState::Loading => {
                    ui.add(Spinner::new());
                }
                WordOfDayState::Ready(word) => {
                    let title = match &word.native {
                        Some(native) => format!("{} ({})", word.romaji, native),
                        None => word.romaji.clone(),
                    };
                    ui.label(RichText::new(title).size(20.0).strong());
                    ui.label(&word.definition);
                    for example in &word.examples {
                        ui.add_space(4.0);
                        ui.label(format!("「{}」", example.sentence));
                        ui.label(
                            RichText::new(&example.translation)
                                .italics()
                                .weak(),
                        );
                    }
                }
                WordOfDayState::Unavailable => {
                    ui.label("La palabra del día no está disponible ahora mismo.");
                }
            }
        });
        ui.add_space(10.0);

        // --- Ruta de aprendizaje (resumen) ---
        ui.group(|ui| {
            ui.label(RichText::new("🗺 Tu ruta").strong());
            ui.add_space(4.0);
            for (topic, max_level) in &topic_levels {
                ui.label(format!(
                    "{} — nivel {} completado",
                    topic.display_name(),
                    max_level
                ));
            }
            ui.add_space(6.0);
            if ui.button("Ver ruta completa").clicked() {
                app.ir_a_ruta();
            }
        });
        ui.add_space(10.0);

        // --- Clasificación (recorte) ---
        ui.group(|ui| {
            ui.label(RichText::new("🏆 Clasificación").strong());
            ui.add_space(4.0);
            match &snippet {
                None => {
                    ui.add(Spinner::new());
                }
                Some(s) if s.top.is_empty() => {
                    ui.label("La clasificación no está disponible ahora mismo.");
                }
                Some(s) => {
                    for e in &s.top {
                        ui.label(format!("{}. {} — {} pts", e.rank, e.name, e.score));
                    }
                    if let Some(own) = &s.own_row {
                        ui.label(
                            RichText::new(format!(
                                "{}. {} (tú) — {} pts",
                                own.rank, own.name, own.score
                            ))
                            .strong(),
                        );
                    }
                    if let Some(delta) = s.catch_up {
                        ui.add_space(4.0);
                        ui.label(format!(
                            "Te faltan {delta} puntos para subir un puesto."
                        ));
                    }
                }
            }
            ui.add_space(6.0);
            if ui.button("Ver clasificación completa").clicked() {
                app.ir_a_clasificacion();
            }
        });
        ui.add_space(10.0);

        // --- Duelo ---
        if ui
            .add_sized([220.0, 36.0], Button::new("⚔ Desafiar a un amigo"))
            .clicked()
        {
            app.ir_al_duelo();
        }
    });
}
