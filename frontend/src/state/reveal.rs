/// Longer copy is cut off to keep the DOM small.
pub const MAX_WORDS: usize = 30;

#[derive(Debug, Clone, PartialEq)]
pub struct RevealWord {
    pub word: String,
    pub delay: f64,
}

/// Staggered reveal plan: word `i` starts at `initial_delay + i * speed`.
pub fn schedule(text: &str, speed: f64, initial_delay: f64) -> Vec<RevealWord> {
    text.split_whitespace()
        .take(MAX_WORDS)
        .enumerate()
        .map(|(index, word)| RevealWord {
            word: word.to_string(),
            delay: initial_delay + index as f64 * speed,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_are_staggered_after_initial_delay() {
        let plan = schedule("Engineering  your unfair advantage.", 0.2, 1.0);
        let words: Vec<_> = plan.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words, ["Engineering", "your", "unfair", "advantage."]);
        assert!((plan[0].delay - 1.0).abs() < 1e-9);
        assert!((plan[3].delay - 1.6).abs() < 1e-9);
    }

    #[test]
    fn long_copy_is_truncated() {
        let text = vec!["word"; 45].join(" ");
        assert_eq!(schedule(&text, 0.1, 0.0).len(), MAX_WORDS);
    }
}
