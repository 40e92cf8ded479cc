use super::progress::max_completed_level_in;
use super::repetition::{palabras_para_repaso, review_dormancy};
use super::*;
use crate::model::{
    LEVEL_CEILING, MAX_REVIEW_QUIZ_WORDS, MIN_REVIEW_WORDS, ProgressMap, Suggestion,
    SuggestionAction,
};
use chrono::Utc;

/// Elige la única sugerencia del panel de inicio.
///
/// Lista de reglas con prioridad fija, gana la primera que aplique:
/// 1. Hay análisis de errores -> repaso inteligente.
/// 2. Hay >= 5 palabras dormidas -> quiz de repaso con las 15 primeras.
/// 3. Continuar el tema más flojo en su siguiente nivel (si está
///    desbloqueado y por debajo del tope).
/// 4. Empezar el primer tema sin ninguna entrada de progreso.
/// 5. Todo al día -> abrir la ruta.
///
/// Función pura y determinista: con las mismas entradas devuelve siempre lo
/// mismo. Las reglas 4 y 5 no revalidan el predicado de desbloqueo.
pub fn elegir_sugerencia(
    mistake_analysis: Option<&str>,
    review_words: &[String],
    progress: &ProgressMap,
    is_unlocked: impl Fn(Topic, u32) -> bool,
) -> Suggestion {
    // 1) Repaso inteligente de errores
    if let Some(analysis) = mistake_analysis {
        if !analysis.trim().is_empty() {
            return Suggestion {
                text: "He detectado un patrón en tus errores. Un repaso dirigido te vendrá bien."
                    .into(),
                button_label: "Repasar mis errores".into(),
                action: SuggestionAction::ReviewMistakes,
                smart: true,
            };
        }
    }

    // 2) Quiz de repaso espaciado
    if review_words.len() >= MIN_REVIEW_WORDS {
        let words: Vec<String> = review_words
            .iter()
            .take(MAX_REVIEW_QUIZ_WORDS)
            .cloned()
            .collect();
        return Suggestion {
            text: format!(
                "Tienes {} palabras listas para repasar.",
                review_words.len()
            ),
            button_label: "Quiz de repaso".into(),
            action: SuggestionAction::GenerateReviewQuiz { words },
            smart: false,
        };
    }

    // 3) Continuar el tema más flojo
    let (weakest, min_level) = weakest_topic(progress);
    if min_level < LEVEL_CEILING && is_unlocked(weakest, min_level + 1) {
        return Suggestion {
            text: format!(
                "{} es tu tema más flojo. Sigue con el nivel {}.",
                weakest.display_name(),
                min_level + 1
            ),
            button_label: "Continuar".into(),
            action: SuggestionAction::ContinueTopic {
                topic: weakest,
                level: min_level + 1,
            },
            smart: false,
        };
    }

    // 4) Empezar un tema sin estrenar
    if let Some(topic) = Topic::ALL
        .iter()
        .copied()
        .find(|t| !progress.contains_key(t))
    {
        return Suggestion {
            text: format!("Todavía no has probado {}.", topic.display_name()),
            button_label: "Empezar".into(),
            action: SuggestionAction::StartTopic { topic },
            smart: false,
        };
    }

    // 5) Todo al día
    Suggestion {
        text: "¡Estás al día! Echa un vistazo a la ruta de aprendizaje.".into(),
        button_label: "Ver ruta".into(),
        action: SuggestionAction::OpenLearningPath,
        smart: false,
    }
}

/// (tema, nivel máximo completado) mínimo entre todos los temas; el empate
/// lo gana el primero de `Topic::ALL`.
fn weakest_topic(progress: &ProgressMap) -> (Topic, u32) {
    let mut weakest = Topic::ALL[0];
    let mut min_level = u32::MAX;
    for topic in Topic::ALL {
        let level = max_completed_level_in(progress, topic);
        if level < min_level {
            min_level = level;
            weakest = topic;
        }
    }
    (weakest, min_level)
}

impl HomeApp {
    /// Sugerencia del panel: se recalcula en cada activación, nunca se
    /// persiste. `None` sólo cuando aún no hay perfil.
    pub fn sugerencia_actual(&self) -> Option<Suggestion> {
        let profile = self.profile()?;
        let review = palabras_para_repaso(&profile.word_history, review_dormancy(), Utc::now());
        Some(elegir_sugerencia(
            profile.mistake_analysis.as_deref(),
            &review,
            &profile.progress,
            |topic, level| profile.is_level_unlocked(topic, level),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelProgress;
    use std::collections::BTreeMap;

    fn progress_with(entries: &[(Topic, &[(u32, u32)])]) -> ProgressMap {
        let mut map = ProgressMap::new();
        for (topic, levels) in entries {
            let mut tree = BTreeMap::new();
            for (level, completions) in *levels {
                tree.insert(
                    *level,
                    LevelProgress {
                        completed_count: *completions,
                        high_score: 1.0,
                    },
                );
            }
            map.insert(*topic, tree);
        }
        map
    }

    fn words(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("palabra{i}")).collect()
    }

    #[test]
    fn mistake_analysis_always_wins() {
        // Aunque haya palabras de repaso y un tema flojo, gana la regla 1.
        let progress = progress_with(&[(Topic::Vocabulary, &[(1, 2)])]);
        let s = elegir_sugerencia(
            Some("Confundes las partículas wa y ga"),
            &words(10),
            &progress,
            |_, _| true,
        );
        assert_eq!(s.action, SuggestionAction::ReviewMistakes);
        assert!(s.smart);
    }

    #[test]
    fn blank_analysis_does_not_count() {
        let s = elegir_sugerencia(Some("   "), &words(10), &ProgressMap::new(), |_, _| true);
        assert_ne!(s.action, SuggestionAction::ReviewMistakes);
    }

    #[test]
    fn five_review_words_beat_the_weakest_topic_rule() {
        let progress = progress_with(&[(Topic::Vocabulary, &[(1, 2)])]);
        let s = elegir_sugerencia(None, &words(5), &progress, |_, _| true);
        match s.action {
            SuggestionAction::GenerateReviewQuiz { words } => assert_eq!(words.len(), 5),
            other => panic!("esperaba quiz de repaso, no {other:?}"),
        }
        assert!(!s.smart);
    }

    #[test]
    fn review_quiz_takes_at_most_fifteen_words() {
        let s = elegir_sugerencia(None, &words(40), &ProgressMap::new(), |_, _| true);
        match s.action {
            SuggestionAction::GenerateReviewQuiz { words } => {
                assert_eq!(words.len(), MAX_REVIEW_QUIZ_WORDS);
                assert_eq!(words[0], "palabra0");
            }
            other => panic!("esperaba quiz de repaso, no {other:?}"),
        }
    }

    #[test]
    fn four_review_words_are_not_enough() {
        let s = elegir_sugerencia(None, &words(4), &ProgressMap::new(), |_, _| true);
        assert!(!matches!(
            s.action,
            SuggestionAction::GenerateReviewQuiz { .. }
        ));
    }

    #[test]
    fn continues_the_weakest_topic_at_the_next_level() {
        // Ejemplo del contrato: Vocabulario nivel 1 completado, Gramática
        // presente pero sin completar -> continuar Gramática en el nivel 1.
        let progress = progress_with(&[
            (Topic::Vocabulary, &[(1, 2)]),
            (Topic::Grammar, &[]),
        ]);
        let s = elegir_sugerencia(None, &[], &progress, |_, _| true);
        assert_eq!(
            s.action,
            SuggestionAction::ContinueTopic {
                topic: Topic::Grammar,
                level: 1
            }
        );
    }

    #[test]
    fn ties_resolve_in_fixed_topic_order() {
        // Todos los temas a cero: el primero de Topic::ALL gana el empate.
        let s = elegir_sugerencia(None, &[], &ProgressMap::new(), |_, _| true);
        assert_eq!(
            s.action,
            SuggestionAction::ContinueTopic {
                topic: Topic::Vocabulary,
                level: 1
            }
        );
    }

    #[test]
    fn locked_next_level_falls_through_to_start_topic() {
        let progress = progress_with(&[(Topic::Vocabulary, &[(1, 1)])]);
        let s = elegir_sugerencia(None, &[], &progress, |_, _| false);
        assert_eq!(
            s.action,
            SuggestionAction::StartTopic {
                topic: Topic::Grammar
            }
        );
    }

    #[test]
    fn all_topics_present_and_locked_is_all_caught_up() {
        let progress = progress_with(&[
            (Topic::Vocabulary, &[(1, 1)]),
            (Topic::Grammar, &[(1, 1)]),
            (Topic::Writing, &[(1, 1)]),
            (Topic::Listening, &[(1, 1)]),
        ]);
        let s = elegir_sugerencia(None, &[], &progress, |_, _| false);
        assert_eq!(s.action, SuggestionAction::OpenLearningPath);
    }

    #[test]
    fn level_ceiling_stops_the_continue_rule() {
        let progress = progress_with(&[
            (Topic::Vocabulary, &[(50, 1)]),
            (Topic::Grammar, &[(50, 1)]),
            (Topic::Writing, &[(50, 1)]),
            (Topic::Listening, &[(50, 1)]),
        ]);
        let s = elegir_sugerencia(None, &[], &progress, |_, _| true);
        assert_eq!(s.action, SuggestionAction::OpenLearningPath);
    }

    #[test]
    fn never_returns_nothing() {
        // Recorrido de combinaciones básicas: siempre sale una sugerencia.
        for analysis in [None, Some("texto")] {
            for count in [0usize, 5, 20] {
                let s = elegir_sugerencia(analysis, &words(count), &ProgressMap::new(), |_, _| {
                    true
                });
                assert!(!s.text.is_empty());
                assert!(!s.button_label.is_empty());
            }
        }
    }
}
