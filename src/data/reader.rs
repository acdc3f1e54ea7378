// ============================================================
// Layer 4 — Parallel Corpus Reader
// ============================================================
// Turns tab-separated bilingual lines into aligned sentence
// pairs and drives vocabulary construction for both sides.
//
// Input format (one pair per line):
//
//   source sentence<TAB>target sentence
//
// A tab INSIDE a sentence is indistinguishable from the field
// separator — that line will split into three fields and the
// whole read aborts with MalformedLine. This is a documented
// limitation of the format, not something we try to repair.
//
// Construction is all-or-nothing: the first bad line fails the
// read and no partially-built corpora escape to the caller.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §13 (Iterators)

use crate::data::error::CorpusError;
use crate::data::lang::LanguageCorpus;
use crate::domain::pair::SentencePair;

/// Split one line into its (source, target) fields.
/// `line_no` is 1-based and only used for the error.
fn split_line(line: &str, line_no: usize) -> Result<(&str, &str), CorpusError> {
    let fields: Vec<&str> = line.trim().split('\t').collect();
    match fields.as_slice() {
        [source, target] => Ok((*source, *target)),
        other => Err(CorpusError::MalformedLine {
            line:   line_no,
            fields: other.len(),
        }),
    }
}

/// Read every line, feeding both corpora's counters, then
/// finalize both vocabularies. Pairs come back in input order —
/// that order is the dataset's natural iteration order.
pub fn read_parallel<S: AsRef<str>>(
    source_name: &str,
    target_name: &str,
    lines: &[S],
) -> Result<(LanguageCorpus, LanguageCorpus, Vec<SentencePair>), CorpusError> {
    let mut source_lang = LanguageCorpus::new(source_name);
    let mut target_lang = LanguageCorpus::new(target_name);
    let mut pairs = Vec::with_capacity(lines.len());

    for (idx, line) in lines.iter().enumerate() {
        let (src, tgt) = split_line(line.as_ref(), idx + 1)?;
        let src_toks = source_lang.add_sentence(src)?;
        let tgt_toks = target_lang.add_sentence(tgt)?;
        pairs.push(SentencePair::new(src_toks, tgt_toks));
    }

    source_lang.finalize_vocabulary()?;
    target_lang.finalize_vocabulary()?;

    tracing::info!(
        "Read {} sentence pairs ({}: {} ids, {}: {} ids)",
        pairs.len(),
        source_lang.name(),
        source_lang.vocab_size()?,
        target_lang.name(),
        target_lang.vocab_size()?,
    );

    Ok((source_lang, target_lang, pairs))
}

/// Tokenize pairs WITHOUT building vocabularies — the same split
/// and punctuation filtering add_sentence applies, minus the
/// counting. Used when encoding new lines against corpora that
/// were already finalized elsewhere (val/test sets sharing the
/// training vocabulary).
pub fn tokenize_pairs<S: AsRef<str>>(
    lines: &[S],
) -> Result<Vec<SentencePair>, CorpusError> {
    use crate::data::tokenizer;

    let filter = |sent: &str| -> Vec<String> {
        tokenizer::tokenize(sent)
            .into_iter()
            .filter(|t| !tokenizer::is_punctuation(t))
            .collect()
    };

    let mut pairs = Vec::with_capacity(lines.len());
    for (idx, line) in lines.iter().enumerate() {
        let (src, tgt) = split_line(line.as_ref(), idx + 1)?;
        pairs.push(SentencePair::new(filter(src), filter(tgt)));
    }
    Ok(pairs)
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::vocab::{EOS_ID, SOS_ID, UNK_ID};

    #[test]
    fn test_reads_pairs_in_order() {
        let lines = ["hi there\tsalut toi", "how are you\tcomment vas tu"];
        let (_, _, pairs) = read_parallel("en", "fr", &lines).unwrap();

        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].source, vec!["hi", "there"]);
        assert_eq!(pairs[1].target, vec!["comment", "vas", "tu"]);
    }

    #[test]
    fn test_all_rare_tokens_give_reserved_only_vocab() {
        // every token appears exactly once → nothing clears min_freq
        let lines = ["hi there\tsalut toi", "how are you\tcomment vas tu"];
        let (en, _, pairs) = read_parallel("en", "fr", &lines).unwrap();

        assert_eq!(en.vocab_size().unwrap(), 4);
        // every content word therefore encodes to <unk>
        let ids = en.encode(&pairs[0].source, None).unwrap();
        assert_eq!(ids, vec![SOS_ID, UNK_ID, UNK_ID, EOS_ID]);
    }

    #[test]
    fn test_repeated_line_builds_content_vocab() {
        let lines = ["a b\tc", "a b\tc"];
        let (en, fr, _) = read_parallel("en", "fr", &lines).unwrap();

        // 4 reserved + {a, b} and 4 reserved + {c}
        assert_eq!(en.vocab_size().unwrap(), 6);
        assert_eq!(fr.vocab_size().unwrap(), 5);

        let ids = en.encode(&["a", "b"], None).unwrap();
        let vocab = en.vocabulary().unwrap();
        assert_eq!(
            ids,
            vec![SOS_ID, vocab.token_to_id("a"), vocab.token_to_id("b"), EOS_ID]
        );
    }

    #[test]
    fn test_three_content_tokens_give_vocab_of_seven() {
        let lines = ["a b c\tx y z", "a b c\tx y z"];
        let (en, _, _) = read_parallel("en", "fr", &lines).unwrap();
        // 4 reserved + {a, b, c}
        assert_eq!(en.vocab_size().unwrap(), 7);
    }

    #[test]
    fn test_missing_tab_is_malformed() {
        let lines = ["onlyonefield"];
        let err = read_parallel("en", "fr", &lines).unwrap_err();
        assert_eq!(err, CorpusError::MalformedLine { line: 1, fields: 1 });
    }

    #[test]
    fn test_embedded_tab_is_malformed() {
        let lines = ["good\tline", "one\ttwo\tthree"];
        let err = read_parallel("en", "fr", &lines).unwrap_err();
        assert_eq!(err, CorpusError::MalformedLine { line: 2, fields: 3 });
    }

    #[test]
    fn test_no_lines_fails_on_empty_vocabulary() {
        let lines: [&str; 0] = [];
        let err = read_parallel("en", "fr", &lines).unwrap_err();
        assert_eq!(err, CorpusError::EmptyVocabulary { lang: "en".into() });
    }

    #[test]
    fn test_tokenize_pairs_matches_add_sentence_filtering() {
        let lines = ["Hello, world!\tBonjour."];
        let pairs = tokenize_pairs(&lines).unwrap();
        assert_eq!(pairs[0].source, vec!["hello", "world"]);
        assert_eq!(pairs[0].target, vec!["bonjour"]);
    }

    #[test]
    fn test_tokenize_pairs_rejects_malformed_lines() {
        let lines = ["no tab here"];
        let err = tokenize_pairs(&lines).unwrap_err();
        assert_eq!(err, CorpusError::MalformedLine { line: 1, fields: 1 });
    }
}
