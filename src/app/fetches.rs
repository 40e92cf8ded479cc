use super::cache::fecha_utc_hoy;
use super::*;
use crate::backend;
use crate::model::QuizMode;
use std::sync::mpsc::channel;

/// Resultado terminal de una petición en vuelo. `seq` identifica la petición
/// activa: un mensaje con una secuencia antigua pertenece a una petición ya
/// descartada (cambio de idioma, reactivación) y se ignora al consumirlo.
pub(crate) struct FetchMsg<T> {
    pub seq: u64,
    pub result: Result<T, String>,
}

impl HomeApp {
    /// Activa los datos del panel de inicio. Idempotente por frame: sólo
    /// lanza peticiones cuando el estado correspondiente está en `Idle`.
    pub fn ensure_home_data(&mut self) {
        self.ensure_word_of_the_day();
        self.ensure_leaderboard();
    }

    fn ensure_word_of_the_day(&mut self) {
        if self.word_state != WordOfDayState::Idle {
            return;
        }
        let Some(lang) = self.selected_language else {
            return;
        };

        // Primero la caché diaria; sólo si falla toca red.
        let today = fecha_utc_hoy();
        if let Some(word) = self.word_cache.lookup(&today) {
            self.word_state = WordOfDayState::Ready(word);
            return;
        }

        self.word_state = WordOfDayState::Loading;
        self.wod_seq += 1;
        let seq = self.wod_seq;
        let (tx, rx) = channel();
        self.wod_rx = Some(rx);
        let base = backend::base_url();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = backend::word_of_day::fetch(&base, lang);
            let _ = tx.send(FetchMsg { seq, result });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = backend::word_of_day::fetch(&base, lang).await;
            let _ = tx.send(FetchMsg { seq, result });
        });
    }

    fn ensure_leaderboard(&mut self) {
        if self.leaderboard_state != LeaderboardState::Idle {
            return;
        }
        self.leaderboard_state = LeaderboardState::Loading;
        self.lb_seq += 1;
        let seq = self.lb_seq;
        let (tx, rx) = channel();
        self.lb_rx = Some(rx);
        let base = backend::base_url();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = backend::leaderboard::fetch(&base);
            let _ = tx.send(FetchMsg { seq, result });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = backend::leaderboard::fetch(&base).await;
            let _ = tx.send(FetchMsg { seq, result });
        });
    }

    /// Pide al backend un quiz generado. La acción es "dispara y olvida":
    /// si falla, simplemente no empieza ningún quiz.
    pub fn start_quiz_generation(&mut self, mode: QuizMode, word: Option<String>, words: Vec<String>) {
        if self.quiz_request_pending {
            self.message = "⏳ Ya hay un quiz en preparación. Espera un momento.".into();
            return;
        }
        self.quiz_request_pending = true;
        self.message = "⏳ Preparando tu quiz…".into();
        self.quiz_seq += 1;
        let seq = self.quiz_seq;
        let (tx, rx) = channel();
        self.quiz_rx = Some(rx);
        let base = backend::base_url();

        #[cfg(not(target_arch = "wasm32"))]
        std::thread::spawn(move || {
            let result = backend::quiz_gen::generate(&base, &mode, word.as_deref(), &words);
            let _ = tx.send(FetchMsg { seq, result });
        });

        #[cfg(target_arch = "wasm32")]
        wasm_bindgen_futures::spawn_local(async move {
            let result = backend::quiz_gen::generate(&base, &mode, word.as_deref(), &words).await;
            let _ = tx.send(FetchMsg { seq, result });
        });
    }

    /// Consume los resultados pendientes. Se llama una vez por frame.
    pub fn poll_fetches(&mut self) {
        self.poll_word_fetch();
        self.poll_leaderboard_fetch();
        self.poll_quiz_fetch();
    }

    fn poll_word_fetch(&mut self) {
        let Some(msg) = self.wod_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        if msg.seq != self.wod_seq {
            // Respuesta de una petición ya descartada.
            return;
        }
        self.wod_rx = None;
        match msg.result {
            Ok(word) => {
                self.word_cache.store(&word, &fecha_utc_hoy());
                self.word_state = WordOfDayState::Ready(word);
            }
            Err(err) => {
                log::warn!("Palabra del día no disponible: {err}");
                self.word_state = WordOfDayState::Unavailable;
            }
        }
    }

    fn poll_leaderboard_fetch(&mut self) {
        let Some(msg) = self.lb_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        if msg.seq != self.lb_seq {
            return;
        }
        self.lb_rx = None;
        match msg.result {
            Ok(entries) => self.leaderboard_state = LeaderboardState::Ready(entries),
            Err(err) => {
                // Degradación a lista vacía, sin propagar el error.
                log::warn!("Clasificación no disponible: {err}");
                self.leaderboard_state = LeaderboardState::Ready(Vec::new());
            }
        }
    }

    fn poll_quiz_fetch(&mut self) {
        let Some(msg) = self.quiz_rx.as_ref().and_then(|rx| rx.try_recv().ok()) else {
            return;
        };
        if msg.seq != self.quiz_seq {
            return;
        }
        self.quiz_rx = None;
        self.quiz_request_pending = false;
        match msg.result {
            Ok(quiz) => self.empezar_quiz(quiz),
            Err(err) => {
                log::warn!("Generación de quiz fallida: {err}");
                self.message = "⚠ No se pudo generar el quiz. Inténtalo de nuevo.".into();
            }
        }
    }

    pub fn has_pending_fetches(&self) -> bool {
        self.wod_rx.is_some() || self.lb_rx.is_some() || self.quiz_rx.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Language, UserProfile, WordOfTheDay};

    fn app_with_profile() -> HomeApp {
        let mut app = HomeApp::default();
        app.selected_language = Some(Language::Japanese);
        app.profiles
            .insert(Language::Japanese, UserProfile::new("local", "Tú"));
        app
    }

    fn word() -> WordOfTheDay {
        WordOfTheDay {
            romaji: "mizu".into(),
            native: Some("水".into()),
            definition: "agua".into(),
            examples: vec![],
        }
    }

    #[test]
    fn same_day_reactivations_resolve_from_cache_without_fetch() {
        let mut app = app_with_profile();
        app.word_cache.store(&word(), &fecha_utc_hoy());

        // Dos activaciones el mismo día: ninguna lanza petición.
        for _ in 0..2 {
            app.word_state = WordOfDayState::Idle;
            app.ensure_word_of_the_day();
            assert_eq!(app.word_state, WordOfDayState::Ready(word()));
            assert!(app.wod_rx.is_none());
        }
    }

    #[test]
    fn a_successful_word_fetch_lands_in_state_and_cache() {
        let mut app = app_with_profile();
        let (tx, rx) = channel();
        app.wod_rx = Some(rx);
        app.wod_seq = 1;
        app.word_state = WordOfDayState::Loading;

        tx.send(FetchMsg {
            seq: 1,
            result: Ok(word()),
        })
        .expect("canal vivo");
        app.poll_fetches();

        assert_eq!(app.word_state, WordOfDayState::Ready(word()));
        assert_eq!(app.word_cache.lookup(&fecha_utc_hoy()), Some(word()));
        assert!(app.wod_rx.is_none());
    }

    #[test]
    fn a_failed_word_fetch_degrades_to_unavailable() {
        let mut app = app_with_profile();
        let (tx, rx) = channel();
        app.wod_rx = Some(rx);
        app.wod_seq = 1;
        app.word_state = WordOfDayState::Loading;

        tx.send(FetchMsg {
            seq: 1,
            result: Err("backend caído".into()),
        })
        .expect("canal vivo");
        app.poll_fetches();

        assert_eq!(app.word_state, WordOfDayState::Unavailable);
        assert!(app.word_cache.lookup(&fecha_utc_hoy()).is_none());
    }

    #[test]
    fn stale_word_results_are_discarded() {
        let mut app = app_with_profile();
        let (tx, rx) = channel();
        app.wod_rx = Some(rx);
        // La petición activa es la 2; llega un resultado de la 1.
        app.wod_seq = 2;
        app.word_state = WordOfDayState::Loading;

        tx.send(FetchMsg {
            seq: 1,
            result: Ok(word()),
        })
        .expect("canal vivo");
        app.poll_fetches();

        assert_eq!(app.word_state, WordOfDayState::Loading);
        assert!(app.word_cache.lookup(&fecha_utc_hoy()).is_none());
    }

    #[test]
    fn leaderboard_failure_degrades_to_an_empty_list() {
        let mut app = app_with_profile();
        let (tx, rx) = channel();
        app.lb_rx = Some(rx);
        app.lb_seq = 1;
        app.leaderboard_state = LeaderboardState::Loading;

        tx.send(FetchMsg {
            seq: 1,
            result: Err("sin red".into()),
        })
        .expect("canal vivo");
        app.poll_fetches();

        assert_eq!(app.leaderboard_state, LeaderboardState::Ready(Vec::new()));
    }

    #[test]
    fn a_failed_quiz_generation_starts_no_quiz() {
        let mut app = app_with_profile();
        let (tx, rx) = channel();
        app.quiz_rx = Some(rx);
        app.quiz_seq = 1;
        app.quiz_request_pending = true;

        tx.send(FetchMsg {
            seq: 1,
            result: Err("generador caído".into()),
        })
        .expect("canal vivo");
        app.poll_fetches();

        assert!(app.active_quiz.is_none());
        assert!(!app.quiz_request_pending);
        assert!(!app.message.is_empty());
    }
}
