use crate::HomeApp;
use crate::model::{MAX_REVIEW_QUIZ_WORDS, QuizMode};
use crate::ui::layout::simple_panel;
use egui::{Context, RichText};

/// Vista de repaso de errores: muestra el análisis externo y las últimas
/// palabras falladas, con la opción de repasarlas en un quiz.
pub fn ui_mistakes(app: &mut HomeApp, ctx: &Context) {
    let analysis = app
        .profile()
        .and_then(|p| p.mistake_analysis.clone())
        .filter(|a| !a.trim().is_empty());

    // Últimas palabras falladas, sin repetidos, la más reciente primero
    let failed_words: Vec<String> = app
        .profile()
        .map(|p| {
            let mut seen = std::collections::HashSet::new();
            p.word_history
                .iter()
                .rev()
                .filter(|e| !e.correct)
                .filter(|e| seen.insert(e.word.to_lowercase()))
                .take(MAX_REVIEW_QUIZ_WORDS)
                .map(|e| e.word.clone())
                .collect()
        })
        .unwrap_or_default();

    simple_panel(ctx, 560.0, |ui| {
        ui.heading("🔁 Repaso de errores");
        ui.add_space(12.0);

        match &analysis {
            Some(text) => {
                ui.group(|ui| {
                    ui.label(RichText::new("Análisis de tus errores").strong());
                    ui.add_space(4.0);
                    ui.label(text);
                });
            }
            None => {
                ui.label("Todavía no hay un análisis de errores para ti.");
            }
        }
        ui.add_space(12.0);

        if failed_words.is_empty() {
            ui.label("No tienes palabras falladas recientes. ¡Buen trabajo!");
        } else {
            ui.label(RichText::new("Palabras que se te resisten:").strong());
            ui.add_space(4.0);
            ui.label(failed_words.join(" · "));
            ui.add_space(8.0);
            if ui.button("Repasarlas en un quiz").clicked() {
                app.start_quiz_generation(QuizMode::Review, None, failed_words.clone());
            }
        }

        ui.add_space(16.0);
        if ui.button("Volver al inicio").clicked() {
            app.ir_a_inicio();
        }
    });
}
