//! Word lists for the game
//!
//! Provides the `WordBank` of valid guesses and the list embedded into the binary.

mod embedded;
pub mod loader;

pub use embedded::EMBEDDED_WORDS_CSV;
pub use loader::{DEFAULT_OCCURRENCE_THRESHOLD, LoadError, WordBank, WordSource};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_list_loads_with_default_threshold() {
        let bank = WordBank::load(&WordSource::Embedded, DEFAULT_OCCURRENCE_THRESHOLD).unwrap();
        assert!(bank.len() > 100, "only {} words loaded", bank.len());
    }

    #[test]
    fn embedded_list_has_header() {
        let header = EMBEDDED_WORDS_CSV.lines().next().unwrap();
        assert_eq!(header, "word,occurrence");
    }

    #[test]
    fn embedded_list_excludes_obscure_words() {
        let bank = WordBank::load(&WordSource::Embedded, DEFAULT_OCCURRENCE_THRESHOLD).unwrap();
        assert!(bank.is_valid("crane"));
        assert!(!bank.is_valid("xylyl"));

        let everything = WordBank::load(&WordSource::Embedded, 0.0).unwrap();
        assert!(everything.is_valid("xylyl"));
        assert!(everything.len() > bank.len());
    }

    #[test]
    fn embedded_words_are_valid() {
        let bank = WordBank::load(&WordSource::Embedded, 0.0).unwrap();
        for word in bank.words() {
            assert_eq!(word.text().len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.text().chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }
}
