// ============================================================
// Layer 4 — Word-Punct Tokenizer
// ============================================================
// Splits raw text into word-level tokens, treating runs of
// punctuation as tokens of their own.
//
// The pattern is `\w+|[^\w\s]+`:
//   - `\w+`      a run of word characters ("hello", "don", "42")
//   - `[^\w\s]+` a run of anything that is neither word nor
//                whitespace — i.e. punctuation ("!", "...", "'")
//
// This is the classic word-punct split used in NLP pipelines.
// Note what it does to contractions:
//   "Don't stop!" → ["don", "'", "t", "stop", "!"]
//
// The input is case-folded BEFORE matching, so the tokenizer
// only ever produces lower-case tokens. Empty input produces
// an empty token list — there is no error condition here.
//
// Reference: Rust Book §13 (Iterators)
//            regex crate documentation

use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once on first use and shared by every caller.
// The pattern is a compile-time constant, so unwrap is safe.
static WORD_PUNCT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\w+|[^\w\s]+").unwrap());

/// Split `text` into lower-cased word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_PUNCT
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Returns true if `token` consists entirely of ASCII punctuation.
/// Used by the corpus to drop punctuation-only tokens before they
/// reach the frequency counter.
pub fn is_punctuation(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_punctuation())
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_words_and_punctuation() {
        let toks = tokenize("Hi, there!");
        assert_eq!(toks, vec!["hi", ",", "there", "!"]);
    }

    #[test]
    fn test_contractions_split_at_apostrophe() {
        let toks = tokenize("Don't stop");
        assert_eq!(toks, vec!["don", "'", "t", "stop"]);
    }

    #[test]
    fn test_case_folding() {
        assert_eq!(tokenize("HELLO World"), vec!["hello", "world"]);
    }

    #[test]
    fn test_empty_string_gives_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_punctuation_runs_are_single_tokens() {
        let toks = tokenize("wait...");
        assert_eq!(toks, vec!["wait", "..."]);
    }

    #[test]
    fn test_is_punctuation() {
        assert!(is_punctuation("!"));
        assert!(is_punctuation("..."));
        assert!(!is_punctuation("n't"));
        assert!(!is_punctuation("word"));
        assert!(!is_punctuation(""));
    }
}
