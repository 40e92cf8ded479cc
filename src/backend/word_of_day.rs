use crate::model::{Language, WordOfTheDay};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct WordOfDayRequest<'a> {
    language: &'a str,
}

fn url(base: &str) -> String {
    format!("{base}/word_of_day")
}

/// `getWordOfTheDay(language)`: una petición por activación como mucho; la
/// caché diaria vive en el lado de la app.
#[cfg(not(target_arch = "wasm32"))]
pub fn fetch(base: &str, language: Language) -> Result<WordOfTheDay, String> {
    super::post_json(
        &url(base),
        &WordOfDayRequest {
            language: language.backend_code(),
        },
    )
}

#[cfg(target_arch = "wasm32")]
pub async fn fetch(base: &str, language: Language) -> Result<WordOfTheDay, String> {
    super::post_json(
        &url(base),
        &WordOfDayRequest {
            language: language.backend_code(),
        },
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::url;

    #[test]
    fn url_joins_without_double_slash() {
        assert_eq!(url("/api"), "/api/word_of_day");
    }
}
