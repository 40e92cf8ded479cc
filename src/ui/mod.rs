mod helpers;
pub mod layout;
pub mod views;

use crate::app::HomeApp;
use crate::model::AppState;
use eframe::{APP_KEY, App, Frame, set_value};
use egui::Context;
use layout::{bottom_panel, top_panel};

impl App for HomeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        // Consumir resultados de red pendientes antes de pintar
        self.poll_fetches();

        if self.state != AppState::LanguageSelect {
            top_panel(self, ctx);
        }

        // PANEL INFERIOR TEMA OSCURO O CLARO
        bottom_panel(ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::LanguageSelect => views::language::ui_language_select(self, ctx),
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::LearningPath => views::learning_path::ui_learning_path(self, ctx),
            AppState::Leaderboard => views::leaderboard::ui_leaderboard(self, ctx),
            AppState::Mistakes => views::mistakes::ui_mistakes(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Duel => views::duel::ui_duel(self, ctx),
        }

        if self.confirm_reset {
            self.confirm_reset(ctx);
        }

        // Mientras haya peticiones en vuelo, repintar para consumirlas.
        if self.has_pending_fetches() {
            ctx.request_repaint_after(std::time::Duration::from_millis(150));
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        set_value(storage, APP_KEY, self);
    }
}
