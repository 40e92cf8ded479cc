use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Tope de la ruta: por encima de este nivel ya no se sugiere "continuar".
pub const LEVEL_CEILING: u32 = 50;
/// Mínimo de palabras dormidas para proponer un quiz de repaso.
pub const MIN_REVIEW_WORDS: usize = 5;
/// Máximo de palabras que se envían al generador de quizzes.
pub const MAX_REVIEW_QUIZ_WORDS: usize = 15;
/// Horas que una palabra acertada debe "dormir" antes de ser repasable.
pub const REVIEW_DORMANCY_HOURS: i64 = 72;
/// Fracción de aciertos que completa un nivel de lección.
pub const LESSON_PASS_SCORE: f32 = 0.8;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Language {
    Japanese,
    Korean,
}

impl Language {
    pub fn display_name(self) -> &'static str {
        match self {
            Language::Japanese => "Japonés",
            Language::Korean => "Coreano",
        }
    }

    /// Código que espera el backend generativo.
    pub fn backend_code(self) -> &'static str {
        match self {
            Language::Japanese => "japanese",
            Language::Korean => "korean",
        }
    }
}

/// Temas fijos del curso. El orden de `ALL` es el orden con el que se
/// recorren SIEMPRE: los empates del selector se resuelven por esta lista,
/// nunca por el orden de iteración de un HashMap.
#[derive(
    Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash, Ord, PartialOrd,
)]
pub enum Topic {
    #[default]
    Vocabulary,
    Grammar,
    Writing,
    Listening,
}

impl Topic {
    pub const ALL: [Topic; 4] = [
        Topic::Vocabulary,
        Topic::Grammar,
        Topic::Writing,
        Topic::Listening,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            Topic::Vocabulary => "Vocabulario",
            Topic::Grammar => "Gramática",
            Topic::Writing => "Escritura",
            Topic::Listening => "Comprensión",
        }
    }

    pub fn backend_code(self) -> &'static str {
        match self {
            Topic::Vocabulary => "vocabulary",
            Topic::Grammar => "grammar",
            Topic::Writing => "writing",
            Topic::Listening => "listening",
        }
    }
}

/// Escritura con la que se practicó una palabra.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ScriptVariant {
    #[default]
    Latin,
    Native,
}

/// Progreso de un nivel concreto. `high_score` es una fracción en [0,1].
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct LevelProgress {
    pub completed_count: u32,
    pub high_score: f32,
}

/// tema -> (nivel -> progreso). BTreeMap para que los barridos por nivel
/// sean deterministas.
pub type ProgressMap = HashMap<Topic, BTreeMap<u32, LevelProgress>>;

/// Entrada del historial de palabras. El historial es un log sólo-añadir
/// propiedad del perfil; el panel de inicio únicamente lo lee.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordHistoryEntry {
    pub word: String,
    pub correct: bool,
    pub timestamp: DateTime<Utc>,
    pub script: ScriptVariant,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserProfile {
    pub user_id: String,
    pub display_name: String,
    pub progress: ProgressMap,
    pub word_history: Vec<WordHistoryEntry>,
    /// Nivel máximo desbloqueado por tema (el nivel 1 siempre lo está).
    pub max_unlocked_level: HashMap<Topic, u32>,
    /// Resumen de errores calculado fuera de la app; aquí sólo se lee.
    pub mistake_analysis: Option<String>,
}

impl UserProfile {
    pub fn new(user_id: &str, display_name: &str) -> Self {
        Self {
            user_id: user_id.to_owned(),
            display_name: display_name.to_owned(),
            progress: HashMap::new(),
            word_history: Vec::new(),
            max_unlocked_level: HashMap::new(),
            mistake_analysis: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ExampleSentence {
    pub sentence: String,
    pub translation: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct WordOfTheDay {
    /// Transliteración latina; siempre presente.
    pub romaji: String,
    #[serde(default)]
    pub native: Option<String>,
    pub definition: String,
    #[serde(default)]
    pub examples: Vec<ExampleSentence>,
}

/// Fila de la clasificación. El orden y el `rank` los decide el almacén
/// externo; aquí no se reordena nada.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LeaderboardEntry {
    pub user_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub score: i64,
    pub rank: u32,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum QuizMode {
    /// Quiz generado a partir de una lista de palabras del usuario.
    Review,
    /// Lección de un tema y nivel concretos de la ruta.
    Lesson { topic: Topic, level: u32 },
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct QuizQuestion {
    pub prompt: String,
    pub answer: String,
    #[serde(default)]
    pub word: Option<String>,
    #[serde(default)]
    pub hint: Option<String>,
    #[serde(default)]
    pub script: ScriptVariant,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub mode: QuizMode,
    pub questions: Vec<QuizQuestion>,
}

/// Sugerencia del panel de inicio: objeto-valor transitorio, recalculado en
/// cada cambio de entrada. Nunca se persiste.
#[derive(Debug, Clone, PartialEq)]
pub struct Suggestion {
    pub text: String,
    pub button_label: String,
    pub action: SuggestionAction,
    /// Sólo afecta a la presentación (tarjeta "inteligente").
    pub smart: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SuggestionAction {
    ReviewMistakes,
    GenerateReviewQuiz { words: Vec<String> },
    ContinueTopic { topic: Topic, level: u32 },
    StartTopic { topic: Topic },
    OpenLearningPath,
}

/// Definición embebida de la ruta de aprendizaje (títulos por nivel).
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TopicPath {
    pub topic: Topic,
    pub levels: Vec<PathLevel>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PathLevel {
    pub number: u32,
    pub title: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub enum AppState {
    LanguageSelect,
    Home,
    LearningPath,
    Leaderboard,
    Mistakes,
    Quiz,
    Duel,
}

impl Default for AppState {
    fn default() -> Self {
        AppState::Home
    }
}
