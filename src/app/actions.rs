use super::*;
use crate::model::QuizMode;
use crate::text_utils::normalize_answer;

impl HomeApp {
    /// Arranca la partida con el quiz recibido del generador.
    pub(crate) fn empezar_quiz(&mut self, quiz: Quiz) {
        if quiz.questions.is_empty() {
            self.message = "⚠ El generador devolvió un quiz vacío.".into();
            return;
        }
        self.active_quiz = Some(QuizSession {
            quiz,
            current: 0,
            correct: 0,
            input: String::new(),
            show_solution: false,
        });
        self.state = AppState::Quiz;
        self.message.clear();
    }

    pub fn procesar_respuesta(&mut self, respuesta: &str) {
        if respuesta.trim().is_empty() {
            self.message = "⚠ Debes escribir una respuesta antes de enviar.".into();
            return;
        }

        // 1) Corregir la respuesta contra la pregunta actual
        let Some((correcta, word, script)) = self.active_quiz.as_ref().and_then(|session| {
            session.quiz.questions.get(session.current).map(|q| {
                let correcta = normalize_answer(respuesta) == normalize_answer(&q.answer);
                let word = q.word.clone().unwrap_or_else(|| q.answer.clone());
                (correcta, word, q.script)
            })
        }) else {
            return;
        };

        // 2) Registrar la palabra en el historial del perfil
        if let Some(profile) = self.profile_mut() {
            profile.record_word(&word, correcta, script);
        }

        // 3) Avanzar la partida
        let mut finished = false;
        if let Some(session) = self.active_quiz.as_mut() {
            if correcta {
                session.correct += 1;
                session.current += 1;
                session.input.clear();
                session.show_solution = false;
                finished = session.current >= session.quiz.questions.len();
            }
        }

        self.message = if correcta {
            "✅ ¡Correcto!".into()
        } else {
            "❌ Incorrecto. Inténtalo de nuevo.".into()
        };

        if finished {
            self.finalizar_quiz();
        }
    }

    /// Salta la pregunta actual: cuenta como fallo en el historial.
    pub fn saltar_pregunta(&mut self) {
        let Some((word, script)) = self.active_quiz.as_ref().and_then(|session| {
            session
                .quiz
                .questions
                .get(session.current)
                .map(|q| (q.word.clone().unwrap_or_else(|| q.answer.clone()), q.script))
        }) else {
            return;
        };

        if let Some(profile) = self.profile_mut() {
            profile.record_word(&word, false, script);
        }

        let mut finished = false;
        if let Some(session) = self.active_quiz.as_mut() {
            session.current += 1;
            session.input.clear();
            session.show_solution = false;
            finished = session.current >= session.quiz.questions.len();
        }

        self.message = "⏩ Pregunta saltada.".into();
        if finished {
            self.finalizar_quiz();
        }
    }

    pub fn ver_solucion(&mut self) {
        if let Some(session) = self.active_quiz.as_mut() {
            session.show_solution = true;
        }
    }

    /// Cierra la partida: una lección aprobada actualiza el progreso del
    /// tema y puede desbloquear el nivel siguiente.
    fn finalizar_quiz(&mut self) {
        let Some(session) = self.active_quiz.take() else {
            return;
        };
        let total = session.quiz.questions.len();
        let score = if total == 0 {
            0.0
        } else {
            session.correct as f32 / total as f32
        };

        if let QuizMode::Lesson { topic, level } = session.quiz.mode {
            if let Some(profile) = self.profile_mut() {
                profile.record_level_result(topic, level, score);
            }
        }

        self.ir_a_inicio();
        self.message = format!("Quiz terminado: {}/{} correctas.", session.correct, total);
    }
}
