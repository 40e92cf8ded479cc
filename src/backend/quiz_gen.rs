use crate::model::{Quiz, QuizMode, QuizQuestion};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
struct QuizRequest<'a> {
    mode: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    topic: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    level: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    word: Option<&'a str>,
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    words: &'a [String],
}

#[derive(Debug, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum QuizGenResponse {
    Ok { questions: Vec<QuizQuestion> },
    Error { message: String },
}

fn url(base: &str) -> String {
    format!("{base}/quiz/generate")
}

fn build_request<'a>(
    mode: &QuizMode,
    word: Option<&'a str>,
    words: &'a [String],
) -> QuizRequest<'a> {
    match mode {
        QuizMode::Review => QuizRequest {
            mode: "review",
            topic: None,
            level: None,
            word,
            words,
        },
        QuizMode::Lesson { topic, level } => QuizRequest {
            mode: "lesson",
            topic: Some(topic.backend_code()),
            level: Some(*level),
            word,
            words,
        },
    }
}

fn map_response(mode: &QuizMode, resp: QuizGenResponse) -> Result<Quiz, String> {
    match resp {
        QuizGenResponse::Ok { questions } => Ok(Quiz {
            mode: mode.clone(),
            questions,
        }),
        QuizGenResponse::Error { message } => Err(format!("El generador rechazó la petición: {message}")),
    }
}

/// `generateQuiz(mode, level, optionalWord, wordList)`. Si falla, la acción
/// del selector simplemente no se completa: no arranca ningún quiz.
#[cfg(not(target_arch = "wasm32"))]
pub fn generate(
    base: &str,
    mode: &QuizMode,
    word: Option<&str>,
    words: &[String],
) -> Result<Quiz, String> {
    let resp: QuizGenResponse = super::post_json(&url(base), &build_request(mode, word, words))?;
    map_response(mode, resp)
}

#[cfg(target_arch = "wasm32")]
pub async fn generate(
    base: &str,
    mode: &QuizMode,
    word: Option<&str>,
    words: &[String],
) -> Result<Quiz, String> {
    let resp: QuizGenResponse =
        super::post_json(&url(base), &build_request(mode, word, words)).await?;
    map_response(mode, resp)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Topic;

    #[test]
    fn lesson_request_carries_topic_and_level() {
        let mode = QuizMode::Lesson {
            topic: Topic::Grammar,
            level: 3,
        };
        let req = build_request(&mode, None, &[]);
        let json = serde_json::to_string(&req).expect("serializa");
        assert!(json.contains("\"mode\":\"lesson\""));
        assert!(json.contains("\"topic\":\"grammar\""));
        assert!(json.contains("\"level\":3"));
        assert!(!json.contains("words"));
    }

    #[test]
    fn review_request_carries_the_word_list() {
        let words = vec!["neko".to_string(), "inu".to_string()];
        let req = build_request(&QuizMode::Review, None, &words);
        let json = serde_json::to_string(&req).expect("serializa");
        assert!(json.contains("\"mode\":\"review\""));
        assert!(json.contains("\"words\":[\"neko\",\"inu\"]"));
        assert!(!json.contains("topic"));
    }

    #[test]
    fn error_response_maps_to_a_message() {
        let resp = QuizGenResponse::Error {
            message: "sin palabras".into(),
        };
        let err = map_response(&QuizMode::Review, resp).unwrap_err();
        assert!(err.contains("sin palabras"));
    }
}
