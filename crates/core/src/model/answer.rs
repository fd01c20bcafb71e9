//
// ─── ANSWER ────────────────────────────────────────────────────────────────────
//

/// The accepted answer for a catalog entry, derived from its filename.
///
/// `canonical` is the lowercase comparison form; `display` is the title-cased
/// form shown to the player. Both come out of the same derivation (strip the
/// extension, underscores become spaces) so scoring and display can never
/// disagree about what the answer is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    canonical: String,
    display: String,
}

impl Answer {
    /// Derives the answer pair from an image filename.
    #[must_use]
    pub fn resolve(filename: &str) -> Self {
        let stem = filename
            .rsplit_once('.')
            .map_or(filename, |(stem, _ext)| stem);
        let canonical = stem.replace('_', " ").trim().to_lowercase();
        let display = title_case(&canonical);
        Self { canonical, display }
    }

    /// The lowercase comparison form.
    #[must_use]
    pub fn canonical(&self) -> &str {
        &self.canonical
    }

    /// The title-cased form shown to the player.
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// True when an already-normalized guess equals the canonical answer.
    #[must_use]
    pub fn matches(&self, normalized_guess: &str) -> bool {
        normalized_guess == self.canonical
    }
}

/// Uppercases the first letter of every word, where a word starts after any
/// non-alphabetic character ("new york" → "New York", "winston-salem" →
/// "Winston-Salem").
#[must_use]
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;
    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.push(ch);
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_strips_extension_and_underscores() {
        let answer = Answer::resolve("san_francisco.png");
        assert_eq!(answer.canonical(), "san francisco");
        assert_eq!(answer.display(), "San Francisco");
    }

    #[test]
    fn resolve_keeps_only_the_last_extension() {
        let answer = Answer::resolve("st._louis.jpg");
        assert_eq!(answer.canonical(), "st. louis");
        assert_eq!(answer.display(), "St. Louis");
    }

    #[test]
    fn resolve_handles_filename_without_extension() {
        let answer = Answer::resolve("denver");
        assert_eq!(answer.canonical(), "denver");
        assert_eq!(answer.display(), "Denver");
    }

    #[test]
    fn matches_is_exact_equality() {
        let answer = Answer::resolve("new_york_city.jpg");
        assert!(answer.matches("new york city"));
        assert!(!answer.matches("new york"));
        assert!(!answer.matches("New York City"));
    }

    #[test]
    fn title_case_restarts_after_punctuation() {
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
        assert_eq!(title_case("coeur d'alene"), "Coeur D'Alene");
    }
}
