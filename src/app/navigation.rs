use super::*;
use crate::model::{QuizMode, SuggestionAction};

impl HomeApp {
    /// Vuelve al panel de inicio y reactiva sus datos: la clasificación se
    /// vuelve a pedir siempre; la palabra del día pasa por la caché diaria.
    pub fn ir_a_inicio(&mut self) {
        self.leaderboard_state = LeaderboardState::Idle;
        if self.word_state != WordOfDayState::Loading {
            self.word_state = WordOfDayState::Idle;
        }
        self.state = AppState::Home;
        self.message.clear();
    }

    pub fn ir_a_ruta(&mut self) {
        self.state = AppState::LearningPath;
        self.message.clear();
    }

    pub fn ir_a_clasificacion(&mut self) {
        self.state = AppState::Leaderboard;
        self.message.clear();
    }

    pub fn ir_a_errores(&mut self) {
        self.state = AppState::Mistakes;
        self.message.clear();
    }

    pub fn ir_al_duelo(&mut self) {
        self.state = AppState::Duel;
        self.message.clear();
    }

    pub fn cambiar_idioma(&mut self) {
        self.state = AppState::LanguageSelect;
    }

    /// Ejecuta la acción de la sugerencia elegida.
    pub fn ejecutar_sugerencia(&mut self, action: SuggestionAction) {
        match action {
            SuggestionAction::ReviewMistakes => self.ir_a_errores(),
            SuggestionAction::GenerateReviewQuiz { words } => {
                self.start_quiz_generation(QuizMode::Review, None, words);
            }
            SuggestionAction::ContinueTopic { topic, level } => {
                self.start_quiz_generation(QuizMode::Lesson { topic, level }, None, Vec::new());
            }
            SuggestionAction::StartTopic { topic } => {
                self.start_quiz_generation(QuizMode::Lesson { topic, level: 1 }, None, Vec::new());
            }
            SuggestionAction::OpenLearningPath => self.ir_a_ruta(),
        }
    }

    /// Abandona el quiz en curso sin registrar la partida como terminada.
    pub fn abandonar_quiz(&mut self) {
        self.active_quiz = None;
        self.ir_a_inicio();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::cache::fecha_utc_hoy;
    use crate::model::{Language, UserProfile, WordOfTheDay};

    fn app_with_profile() -> HomeApp {
        let mut app = HomeApp::default();
        app.selected_language = Some(Language::Japanese);
        app.profiles
            .insert(Language::Japanese, UserProfile::new("local", "Tú"));
        app
    }

    #[test]
    fn returning_home_reactivates_the_panel() {
        let mut app = app_with_profile();
        app.leaderboard_state = LeaderboardState::Ready(Vec::new());
        app.word_state = WordOfDayState::Unavailable;

        app.ir_a_inicio();

        assert_eq!(app.state, AppState::Home);
        assert_eq!(app.leaderboard_state, LeaderboardState::Idle);
        assert_eq!(app.word_state, WordOfDayState::Idle);
    }

    #[test]
    fn an_in_flight_word_fetch_survives_reactivation() {
        let mut app = app_with_profile();
        app.word_state = WordOfDayState::Loading;

        app.ir_a_inicio();

        assert_eq!(app.word_state, WordOfDayState::Loading);
    }

    #[test]
    fn navigation_suggestions_change_the_view() {
        let mut app = app_with_profile();
        app.ejecutar_sugerencia(SuggestionAction::ReviewMistakes);
        assert_eq!(app.state, AppState::Mistakes);

        app.ejecutar_sugerencia(SuggestionAction::OpenLearningPath);
        assert_eq!(app.state, AppState::LearningPath);
    }

    #[test]
    fn changing_language_invalidates_the_word_cache() {
        let mut app = app_with_profile();
        let today = fecha_utc_hoy();
        let word = WordOfTheDay {
            romaji: "mizu".into(),
            native: None,
            definition: "agua".into(),
            examples: vec![],
        };
        app.word_cache.store(&word, &today);
        let seq = app.wod_seq;

        app.seleccionar_idioma(Language::Korean);

        assert!(app.word_cache.lookup(&today).is_none());
        assert!(app.wod_seq > seq);
        assert_eq!(app.state, AppState::Home);
        assert!(app.profiles.contains_key(&Language::Korean));
    }
}
