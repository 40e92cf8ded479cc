use crate::HomeApp;
use crate::ui::helpers::message_line;
use crate::ui::layout::simple_panel;
use egui::{Context, Key, RichText, TextEdit};

pub fn ui_quiz(app: &mut HomeApp, ctx: &Context) {
    if app.active_quiz.is_none() {
        // Sin partida en curso no hay nada que pintar aquí.
        app.ir_a_inicio();
        return;
    }

    let message = app.message.clone();
    let mut enviar = false;
    let mut saltar = false;
    let mut ver_solucion = false;
    let mut abandonar = false;

    simple_panel(ctx, 560.0, |ui| {
        let Some(session) = app.active_quiz.as_mut() else {
            return;
        };
        let total = session.quiz.questions.len();
        let Some(question) = session.quiz.questions.get(session.current) else {
            return;
        };

        ui.heading(format!("Pregunta {}/{}", session.current + 1, total));
        ui.add_space(10.0);
        ui.label(RichText::new(&question.prompt).size(20.0));
        if let Some(hint) = &question.hint {
            ui.add_space(4.0);
            ui.label(RichText::new(format!("Pista: {hint}")).weak());
        }
        ui.add_space(10.0);

        if session.show_solution {
            ui.label(
                RichText::new(format!("Solución: {}", question.answer))
                    .color(egui::Color32::LIGHT_GREEN)
                    .strong(),
            );
            ui.add_space(8.0);
        }

        let response = ui.add(
            TextEdit::singleline(&mut session.input).hint_text("Escribe tu respuesta…"),
        );
        if response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            enviar = true;
        }
        ui.add_space(8.0);

        ui.horizontal(|ui| {
            if ui.button("Enviar").clicked() {
                enviar = true;
            }
            if ui.button("⏩ Saltar").clicked() {
                saltar = true;
            }
            if !session.show_solution && ui.button("Ver solución").clicked() {
                ver_solucion = true;
            }
        });

        message_line(ui, &message);

        ui.add_space(12.0);
        if ui.button("Abandonar quiz").clicked() {
            abandonar = true;
        }
    });

    if enviar {
        let respuesta = app
            .active_quiz
            .as_ref()
            .map(|s| s.input.clone())
            .unwrap_or_default();
        app.procesar_respuesta(&respuesta);
    }
    if saltar {
        app.saltar_pregunta();
    }
    if ver_solucion {
        app.ver_solucion();
    }
    if abandonar {
        app.abandonar_quiz();
    }
}
