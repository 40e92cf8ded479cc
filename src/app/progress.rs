use super::*;
use crate::model::{LESSON_PASS_SCORE, LEVEL_CEILING, ProgressMap, ScriptVariant};
use chrono::Utc;

impl HomeApp {
    // Accesores: sin perfil no hay nada que personalizar todavía.
    pub fn profile(&self) -> Option<&UserProfile> {
        self.selected_language.and_then(|l| self.profiles.get(&l))
    }

    pub fn profile_mut(&mut self) -> Option<&mut UserProfile> {
        self.selected_language
            .and_then(|l| self.profiles.get_mut(&l))
    }
}

/// Nivel más alto del tema con al menos una compleción; 0 si el tema nunca
/// se ha completado (o ni siquiera aparece en el mapa).
pub fn max_completed_level_in(progress: &ProgressMap, topic: Topic) -> u32 {
    progress
        .get(&topic)
        .map(|levels| {
            levels
                .iter()
                .filter(|(_, p)| p.completed_count > 0)
                .map(|(lvl, _)| *lvl)
                .max()
                .unwrap_or(0)
        })
        .unwrap_or(0)
}

impl UserProfile {
    pub fn max_completed_level(&self, topic: Topic) -> u32 {
        max_completed_level_in(&self.progress, topic)
    }

    /// Predicado de desbloqueo: consulta pura, sin efectos.
    pub fn is_level_unlocked(&self, topic: Topic, level: u32) -> bool {
        let max = self.max_unlocked_level.get(&topic).copied().unwrap_or(1);
        level >= 1 && level <= max
    }

    /// Registra una palabra practicada en el historial (log sólo-añadir).
    pub fn record_word(&mut self, word: &str, correct: bool, script: ScriptVariant) {
        self.word_history.push(crate::model::WordHistoryEntry {
            word: word.to_owned(),
            correct,
            timestamp: Utc::now(),
            script,
        });
    }

    /// Aplica el resultado de una lección: sube el récord y, si la puntuación
    /// llega al umbral, cuenta la compleción y desbloquea el nivel siguiente.
    pub fn record_level_result(&mut self, topic: Topic, level: u32, score: f32) {
        let entry = self
            .progress
            .entry(topic)
            .or_default()
            .entry(level)
            .or_default();
        if score > entry.high_score {
            entry.high_score = score;
        }
        if score >= LESSON_PASS_SCORE {
            entry.completed_count += 1;
            let max = self.max_unlocked_level.entry(topic).or_insert(1);
            if level + 1 > *max && level < LEVEL_CEILING {
                *max = level + 1;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::LevelProgress;
    use std::collections::BTreeMap;

    fn profile() -> UserProfile {
        UserProfile::new("u1", "Test")
    }

    #[test]
    fn max_completed_level_ignores_levels_without_completions() {
        let mut p = profile();
        let mut levels = BTreeMap::new();
        levels.insert(
            1,
            LevelProgress {
                completed_count: 2,
                high_score: 1.0,
            },
        );
        levels.insert(
            2,
            LevelProgress {
                completed_count: 0,
                high_score: 0.5,
            },
        );
        p.progress.insert(Topic::Vocabulary, levels);

        assert_eq!(p.max_completed_level(Topic::Vocabulary), 1);
        assert_eq!(p.max_completed_level(Topic::Grammar), 0);
    }

    #[test]
    fn level_one_is_unlocked_by_default() {
        let p = profile();
        assert!(p.is_level_unlocked(Topic::Writing, 1));
        assert!(!p.is_level_unlocked(Topic::Writing, 2));
        assert!(!p.is_level_unlocked(Topic::Writing, 0));
    }

    #[test]
    fn passing_a_lesson_unlocks_the_next_level() {
        let mut p = profile();
        p.record_level_result(Topic::Grammar, 1, 0.9);

        assert_eq!(p.max_completed_level(Topic::Grammar), 1);
        assert!(p.is_level_unlocked(Topic::Grammar, 2));
        assert!(!p.is_level_unlocked(Topic::Grammar, 3));
    }

    #[test]
    fn failing_a_lesson_keeps_the_level_locked_but_raises_high_score() {
        let mut p = profile();
        p.record_level_result(Topic::Grammar, 1, 0.5);

        assert_eq!(p.max_completed_level(Topic::Grammar), 0);
        assert!(!p.is_level_unlocked(Topic::Grammar, 2));
        let saved = &p.progress[&Topic::Grammar][&1];
        assert_eq!(saved.completed_count, 0);
        assert!((saved.high_score - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn high_score_never_goes_down() {
        let mut p = profile();
        p.record_level_result(Topic::Listening, 1, 0.9);
        p.record_level_result(Topic::Listening, 1, 0.8);

        let saved = &p.progress[&Topic::Listening][&1];
        assert!((saved.high_score - 0.9).abs() < f32::EPSILON);
        assert_eq!(saved.completed_count, 2);
    }
}
