use crate::model::{REVIEW_DORMANCY_HOURS, WordHistoryEntry};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashSet;

pub fn review_dormancy() -> Duration {
    Duration::hours(REVIEW_DORMANCY_HOURS)
}

/// Filtro de elegibilidad para repaso espaciado.
///
/// Una sola pasada del historial, de la entrada más reciente a la más
/// antigua. Se queda una entrada sólo si fue acertada, su texto en minúsculas
/// no se había quedado ya, y lleva dormida más que el umbral. La salida
/// conserva el orden de recencia (acierto más reciente primero) y cada
/// palabra distinta aparece como mucho una vez.
pub fn palabras_para_repaso(
    history: &[WordHistoryEntry],
    dormancy: Duration,
    now: DateTime<Utc>,
) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Vec::new();

    for entry in history.iter().rev() {
        if !entry.correct {
            continue;
        }
        let key = entry.word.to_lowercase();
        if seen.contains(&key) {
            continue;
        }
        if now.signed_duration_since(entry.timestamp) > dormancy {
            seen.insert(key);
            out.push(entry.word.clone());
        }
    }

    out
}
