// src/view_models.rs

/// Nodo de la ruta de aprendizaje listo para pintar.
#[derive(Clone, Debug, PartialEq)]
pub struct PathNodeInfo {
    pub level: u32,
    pub title: String,
    pub unlocked: bool,
    pub completed: bool,
    /// El siguiente nivel a jugar dentro del tema.
    pub current: bool,
    /// Mejor puntuación del nivel, fracción en [0,1].
    pub high_score: f32,
}

impl PathNodeInfo {
    pub fn label(&self) -> String {
        if self.completed {
            format!(
                "Nivel {} ✅ {} (récord {:.0} %)",
                self.level,
                self.title,
                self.high_score * 100.0
            )
        } else if self.current {
            format!("Nivel {} ▶ {}", self.level, self.title)
        } else if self.unlocked {
            format!("Nivel {} 🔓 {}", self.level, self.title)
        } else {
            format!("Nivel {} 🔒 {}", self.level, self.title)
        }
    }
}

/// Fila de clasificación lista para pintar.
#[derive(Clone, Debug, PartialEq)]
pub struct LeaderboardRow {
    pub rank: u32,
    pub name: String,
    pub score: i64,
    pub is_self: bool,
}

impl LeaderboardRow {
    pub fn label(&self) -> String {
        let medal = match self.rank {
            1 => "🥇",
            2 => "🥈",
            3 => "🥉",
            _ => "",
        };
        let name = if self.is_self {
            format!("{} (tú)", self.name)
        } else {
            self.name.clone()
        };
        if medal.is_empty() {
            format!("{}. {} — {} pts", self.rank, name, self.score)
        } else {
            format!("{medal} {}. {} — {} pts", self.rank, name, self.score)
        }
    }
}
