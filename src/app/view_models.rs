use super::*;
use crate::view_models::{LeaderboardRow, PathNodeInfo};

/// Cuántas filas muestra el recorte del panel de inicio.
pub const LEADERBOARD_TOP: usize = 3;

/// Recorte de la clasificación para el panel: top 3, la fila propia si queda
/// fuera, y el delta de alcance respecto a la fila inmediatamente superior.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardSnippet {
    pub top: Vec<LeaderboardEntry>,
    pub own_row: Option<LeaderboardEntry>,
    pub catch_up: Option<i64>,
}

pub fn recorte_clasificacion(entries: &[LeaderboardEntry], user_id: &str) -> LeaderboardSnippet {
    let top: Vec<LeaderboardEntry> = entries.iter().take(LEADERBOARD_TOP).cloned().collect();
    let own_pos = entries.iter().position(|e| e.user_id == user_id);

    let own_row = own_pos
        .filter(|&i| i >= LEADERBOARD_TOP)
        .map(|i| entries[i].clone());

    // Delta de alcance: sólo si el usuario aparece, no es el primero, y la
    // diferencia con la fila superior es positiva.
    let catch_up = own_pos.and_then(|i| {
        let own = &entries[i];
        if own.rank <= 1 {
            return None;
        }
        let above = entries.get(i.checked_sub(1)?)?;
        let delta = above.score - own.score;
        (delta > 0).then_some(delta)
    });

    LeaderboardSnippet {
        top,
        own_row,
        catch_up,
    }
}

impl HomeApp {
    /// `None` mientras la clasificación no haya resuelto (o sin perfil).
    pub fn leaderboard_snippet(&self) -> Option<LeaderboardSnippet> {
        let profile = self.profile()?;
        match &self.leaderboard_state {
            LeaderboardState::Ready(entries) => {
                Some(recorte_clasificacion(entries, &profile.user_id))
            }
            _ => None,
        }
    }

    /// Filas completas para la vista de clasificación.
    pub fn leaderboard_rows(&self) -> Option<Vec<LeaderboardRow>> {
        let profile = self.profile()?;
        match &self.leaderboard_state {
            LeaderboardState::Ready(entries) => Some(
                entries
                    .iter()
                    .map(|e| LeaderboardRow {
                        rank: e.rank,
                        name: e.name.clone(),
                        score: e.score,
                        is_self: e.user_id == profile.user_id,
                    })
                    .collect(),
            ),
            _ => None,
        }
    }

    /// Nodos de la ruta de un tema, anotados con el estado del perfil.
    pub fn path_nodes(&self, topic: Topic) -> Vec<PathNodeInfo> {
        let Some(profile) = self.profile() else {
            return Vec::new();
        };
        let current = profile.max_completed_level(topic) + 1;
        self.learning_path
            .iter()
            .find(|tp| tp.topic == topic)
            .map(|tp| {
                tp.levels
                    .iter()
                    .map(|lvl| {
                        let saved = profile
                            .progress
                            .get(&topic)
                            .and_then(|levels| levels.get(&lvl.number));
                        PathNodeInfo {
                            level: lvl.number,
                            title: lvl.title.clone(),
                            unlocked: profile.is_level_unlocked(topic, lvl.number),
                            completed: saved.map(|p| p.completed_count > 0).unwrap_or(false),
                            current: lvl.number == current,
                            high_score: saved.map(|p| p.high_score).unwrap_or(0.0),
                        }
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(user_id: &str, score: i64, rank: u32) -> LeaderboardEntry {
        LeaderboardEntry {
            user_id: user_id.into(),
            name: format!("Usuario {user_id}"),
            avatar: None,
            score,
            rank,
        }
    }

    fn board() -> Vec<LeaderboardEntry> {
        vec![
            entry("a", 900, 1),
            entry("b", 700, 2),
            entry("c", 650, 3),
            entry("d", 500, 4),
            entry("e", 480, 5),
        ]
    }

    #[test]
    fn shows_top_three_plus_own_row_outside() {
        let s = recorte_clasificacion(&board(), "e");
        assert_eq!(s.top.len(), 3);
        assert_eq!(s.own_row.as_ref().map(|e| e.rank), Some(5));
        assert_eq!(s.catch_up, Some(20));
    }

    #[test]
    fn own_row_inside_top_three_is_not_duplicated() {
        let s = recorte_clasificacion(&board(), "b");
        assert!(s.own_row.is_none());
        assert_eq!(s.catch_up, Some(200));
    }

    #[test]
    fn rank_one_has_no_catch_up() {
        let s = recorte_clasificacion(&board(), "a");
        assert!(s.catch_up.is_none());
        assert!(s.own_row.is_none());
    }

    #[test]
    fn absent_user_has_no_own_row_nor_catch_up() {
        let s = recorte_clasificacion(&board(), "zz");
        assert!(s.own_row.is_none());
        assert!(s.catch_up.is_none());
        assert_eq!(s.top.len(), 3);
    }

    #[test]
    fn non_positive_delta_is_omitted() {
        // Empate de puntos con la fila superior: no hay mensaje de alcance.
        let entries = vec![entry("a", 500, 1), entry("b", 500, 2)];
        let s = recorte_clasificacion(&entries, "b");
        assert!(s.catch_up.is_none());
    }

    #[test]
    fn empty_board_degrades_to_nothing() {
        let s = recorte_clasificacion(&[], "a");
        assert!(s.top.is_empty());
        assert!(s.own_row.is_none());
        assert!(s.catch_up.is_none());
    }
}
