use crate::HomeApp;
use crate::model::{QuizMode, Topic};
use crate::ui::helpers::{big_list_button, message_line};
use crate::ui::layout::simple_panel;
use egui::{Context, RichText};

pub fn ui_learning_path(app: &mut HomeApp, ctx: &Context) {
    let selected = app.path_topic;
    let nodes = app.path_nodes(selected);
    let message = app.message.clone();

    simple_panel(ctx, 560.0, |ui| {
        ui.heading("🗺 Ruta de aprendizaje");
        message_line(ui, &message);
        ui.add_space(8.0);

        // Pestañas de tema en orden fijo
        ui.horizontal(|ui| {
            for topic in Topic::ALL {
                if ui
                    .selectable_label(topic == selected, topic.display_name())
                    .clicked()
                {
                    app.path_topic = topic;
                }
            }
        });
        ui.add_space(12.0);

        if nodes.is_empty() {
            ui.label("Este tema todavía no tiene niveles definidos.");
        }

        let width = ui.available_width().min(420.0);
        for node in &nodes {
            let clicked = big_list_button(ui, node.label(), width, 34.0, node.unlocked);
            if clicked && node.unlocked {
                app.start_quiz_generation(
                    QuizMode::Lesson {
                        topic: selected,
                        level: node.level,
                    },
                    None,
                    Vec::new(),
                );
            }
            ui.add_space(6.0);
        }

        ui.add_space(8.0);
        ui.label(
            RichText::new("Completa un nivel con un 80 % de aciertos para desbloquear el siguiente.")
                .weak(),
        );
    });
}
