/// Normaliza una respuesta de quiz para compararla sin ruido: minúsculas,
/// espacios colapsados y sin puntuación final.
pub fn normalize_answer(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let mut text = lowered
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    while let Some(last) = text.chars().last() {
        // Puntuación final latina y japonesa
        if matches!(last, '.' | ',' | '!' | '?' | '。' | '、' | '！' | '？') {
            text.pop();
        } else {
            break;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::normalize_answer;

    #[test]
    fn normalize_ignores_case_and_spacing() {
        assert_eq!(normalize_answer("  Konnichi  wa "), "konnichi wa");
    }

    #[test]
    fn normalize_strips_trailing_punctuation() {
        assert_eq!(normalize_answer("neko."), "neko");
        assert_eq!(normalize_answer("ねこ。"), "ねこ");
    }

    #[test]
    fn normalize_keeps_inner_punctuation() {
        assert_eq!(normalize_answer("A, b!"), "a, b");
    }
}
