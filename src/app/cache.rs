use crate::model::WordOfTheDay;
use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Fecha UTC de hoy en formato ISO (YYYY-MM-DD).
pub fn fecha_utc_hoy() -> String {
    Utc::now().format("%Y-%m-%d").to_string()
}

/// Caché de la palabra del día: dos huecos de texto (valor serializado y
/// fecha ISO del último fetch), con ámbito de sesión. La expiración es
/// explícita: fecha distinta de hoy = caché inválida. Como mucho hay un
/// fetch por (usuario, día) dentro de la sesión.
#[derive(Default, Clone, Debug, Serialize, Deserialize)]
pub struct WordOfDayCache {
    value: Option<String>,
    date: Option<String>,
}

impl WordOfDayCache {
    /// Valor cacheado si la fecha guardada es exactamente `today`.
    pub fn lookup(&self, today: &str) -> Option<WordOfTheDay> {
        match (&self.value, &self.date) {
            (Some(json), Some(date)) if date == today => serde_json::from_str(json).ok(),
            _ => None,
        }
    }

    pub fn store(&mut self, word: &WordOfTheDay, today: &str) {
        match serde_json::to_string(word) {
            Ok(json) => {
                self.value = Some(json);
                self.date = Some(today.to_owned());
            }
            Err(err) => {
                log::warn!("No se pudo serializar la palabra del día: {err}");
                self.invalidate();
            }
        }
    }

    /// Invalidación explícita (p. ej. al cambiar de idioma).
    pub fn invalidate(&mut self) {
        self.value = None;
        self.date = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word() -> WordOfTheDay {
        WordOfTheDay {
            romaji: "mizu".into(),
            native: Some("水".into()),
            definition: "agua".into(),
            examples: vec![],
        }
    }

    #[test]
    fn same_day_lookups_hit_without_refetch() {
        let mut cache = WordOfDayCache::default();
        assert!(cache.lookup("2026-03-10").is_none());

        cache.store(&word(), "2026-03-10");
        // Dos activaciones el mismo día: ambas resuelven desde caché.
        assert_eq!(cache.lookup("2026-03-10"), Some(word()));
        assert_eq!(cache.lookup("2026-03-10"), Some(word()));
    }

    #[test]
    fn a_new_date_misses() {
        let mut cache = WordOfDayCache::default();
        cache.store(&word(), "2026-03-10");
        assert!(cache.lookup("2026-03-11").is_none());
    }

    #[test]
    fn invalidate_forces_a_miss_on_the_same_day() {
        let mut cache = WordOfDayCache::default();
        cache.store(&word(), "2026-03-10");
        cache.invalidate();
        assert!(cache.lookup("2026-03-10").is_none());
    }
}
