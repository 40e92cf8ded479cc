use crate::data::read_learning_path_embedded;
use crate::model::{
    AppState, Language, LeaderboardEntry, Quiz, Topic, TopicPath, UserProfile, WordOfTheDay,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::mpsc::Receiver;

// Submódulos
pub mod actions;
pub mod cache;
pub mod fetches;
pub mod navigation;
pub mod progress;
pub mod repetition;
pub mod resets;
pub mod suggestion;
pub mod view_models;

use cache::WordOfDayCache;
use fetches::FetchMsg;

/// Estado de la tarjeta "palabra del día".
#[derive(Clone, Debug, Default, PartialEq)]
pub enum WordOfDayState {
    /// Aún no se ha activado (o toca reactivar la tarjeta).
    #[default]
    Idle,
    Loading,
    Ready(WordOfTheDay),
    /// El servicio falló: estado degradado, sin reintentos automáticos.
    Unavailable,
}

/// Estado de la clasificación. Un fallo de red degrada a `Ready(vec![])`.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum LeaderboardState {
    #[default]
    Idle,
    Loading,
    Ready(Vec<LeaderboardEntry>),
}

/// Partida de quiz en curso (sólo en memoria, no se persiste).
#[derive(Clone, Debug)]
pub struct QuizSession {
    pub quiz: Quiz,
    pub current: usize,
    pub correct: usize,
    pub input: String,
    pub show_solution: bool,
}

#[derive(Serialize, Deserialize)]
pub struct HomeApp {
    pub profiles: HashMap<Language, UserProfile>,
    pub selected_language: Option<Language>,
    pub message: String,
    #[serde(skip, default = "read_learning_path_embedded")]
    pub learning_path: Vec<TopicPath>,
    #[serde(skip)]
    pub state: AppState,
    /// Tema seleccionado en la vista de ruta.
    #[serde(skip)]
    pub path_topic: Topic,
    #[serde(skip)]
    pub word_state: WordOfDayState,
    #[serde(skip)]
    pub word_cache: WordOfDayCache,
    #[serde(skip)]
    pub leaderboard_state: LeaderboardState,
    #[serde(skip)]
    pub active_quiz: Option<QuizSession>,
    #[serde(skip)]
    pub quiz_request_pending: bool,
    #[serde(skip)]
    pub confirm_reset: bool,

    // Canales de las peticiones en vuelo. El número de secuencia marca cuál
    // es la petición activa; ver `fetches`.
    #[serde(skip)]
    pub(crate) wod_rx: Option<Receiver<FetchMsg<WordOfTheDay>>>,
    #[serde(skip)]
    pub(crate) wod_seq: u64,
    #[serde(skip)]
    pub(crate) lb_rx: Option<Receiver<FetchMsg<Vec<LeaderboardEntry>>>>,
    #[serde(skip)]
    pub(crate) lb_seq: u64,
    #[serde(skip)]
    pub(crate) quiz_rx: Option<Receiver<FetchMsg<Quiz>>>,
    #[serde(skip)]
    pub(crate) quiz_seq: u64,
}

impl Default for HomeApp {
    fn default() -> Self {
        Self {
            profiles: HashMap::new(),
            selected_language: None,
            message: String::new(),
            learning_path: read_learning_path_embedded(),
            state: AppState::LanguageSelect,
            path_topic: Topic::Vocabulary,
            word_state: WordOfDayState::Idle,
            word_cache: WordOfDayCache::default(),
            leaderboard_state: LeaderboardState::Idle,
            active_quiz: None,
            quiz_request_pending: false,
            confirm_reset: false,
            wod_rx: None,
            wod_seq: 0,
            lb_rx: None,
            lb_seq: 0,
            quiz_rx: None,
            quiz_seq: 0,
        }
    }
}

impl HomeApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        if let Some(storage) = cc.storage {
            if let Some(mut app) = eframe::get_value::<HomeApp>(storage, eframe::APP_KEY) {
                app.after_restore();
                return app;
            }
        }
        Self::default()
    }

    /// Ajusta el estado transitorio tras restaurar desde el almacenamiento.
    fn after_restore(&mut self) {
        if self.selected_language.is_some() {
            self.state = AppState::Home;
        } else {
            self.state = AppState::LanguageSelect;
        }
        self.message.clear();
    }

    /// Entrypoint para cambiar de idioma: crea el perfil si no existía y
    /// descarta cualquier dato de red del idioma anterior.
    pub fn seleccionar_idioma(&mut self, lang: Language) {
        self.selected_language = Some(lang);
        self.profiles
            .entry(lang)
            .or_insert_with(|| UserProfile::new("local", "Tú"));

        // La palabra del día depende del idioma: invalidación explícita y
        // descarte de la petición en vuelo (si la hay).
        self.word_cache.invalidate();
        self.word_state = WordOfDayState::Idle;
        self.wod_seq += 1;
        self.wod_rx = None;

        self.ir_a_inicio();
    }
}
