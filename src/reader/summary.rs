//! Extractive summarization with the service's historical envelope:
//! short inputs pass through, longer inputs are condensed chunk by chunk
//! under a word budget.

use std::collections::HashMap;

use crate::config::SummaryConfig;

/// Summarize `text` under the configured envelope.
///
/// Inputs under `short_text_words` are returned unchanged. Otherwise the
/// budget is `budget_words_long` when the input exceeds `long_text_words`
/// words, else `budget_words_short`, and the text is summarized in
/// `chunk_chars`-character chunks whose summaries are joined with single
/// spaces. Deterministic for a given input and config.
pub fn summarize(text: &str, cfg: &SummaryConfig) -> String {
    let num_words = text.split_whitespace().count();
    if num_words < cfg.short_text_words {
        return text.to_string();
    }

    let budget = if num_words > cfg.long_text_words {
        cfg.budget_words_long
    } else {
        cfg.budget_words_short
    };

    let mut summaries = Vec::new();
    for chunk in char_chunks(text, cfg.chunk_chars) {
        let summary = summarize_chunk(chunk, budget, cfg.min_summary_words);
        if !summary.is_empty() {
            summaries.push(summary);
        }
    }
    summaries.join(" ")
}

/// Split `text` into slices of at most `chunk_chars` characters, never
/// cutting inside a UTF-8 sequence. Chunk boundaries ignore sentence
/// structure; `summarize_chunk` copes with the ragged edges.
fn char_chunks(text: &str, chunk_chars: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut start = 0usize;
    let mut count = 0usize;
    for (idx, _) in text.char_indices() {
        if count == chunk_chars {
            chunks.push(&text[start..idx]);
            start = idx;
            count = 0;
        }
        count += 1;
    }
    if start < text.len() {
        chunks.push(&text[start..]);
    }
    chunks
}

/// Pick the highest-scoring sentences of one chunk, re-emitted in their
/// original order.
///
/// Sentences are scored by the mean corpus frequency of their words.
/// Selection is greedy by score: a sentence is kept while the running word
/// count stays inside `budget_words`, and the budget is allowed to
/// overflow only while fewer than `min_words` words have been kept. At
/// least one sentence is always kept.
fn summarize_chunk(chunk: &str, budget_words: usize, min_words: usize) -> String {
    let mut sentences = Vec::new();
    for (index, raw) in chunk.split(". ").enumerate() {
        let text = raw.trim();
        if text.is_empty() {
            continue;
        }
        sentences.push(Sentence {
            index,
            text,
            words: text.split_whitespace().count(),
            score: 0,
        });
    }
    if sentences.is_empty() {
        return String::new();
    }

    let mut frequency: HashMap<String, u64> = HashMap::new();
    for sentence in &sentences {
        for word in sentence.text.split_whitespace() {
            if let Some(term) = normalize_term(word) {
                *frequency.entry(term).or_insert(0) += 1;
            }
        }
    }

    for sentence in &mut sentences {
        sentence.score = sentence
            .text
            .split_whitespace()
            .filter_map(normalize_term)
            .map(|term| frequency.get(&term).copied().unwrap_or(0))
            .sum();
    }

    // Rank by mean frequency without touching floats: a/b > c/d compared
    // as a*d > c*b, with the original index as the deterministic tiebreak.
    let mut ranked: Vec<usize> = (0..sentences.len()).collect();
    ranked.sort_by(|&a, &b| {
        let left = sentences[a].score * sentences[b].words as u64;
        let right = sentences[b].score * sentences[a].words as u64;
        right.cmp(&left).then(sentences[a].index.cmp(&sentences[b].index))
    });

    let mut kept = Vec::new();
    let mut kept_words = 0usize;
    for &candidate in &ranked {
        let words = sentences[candidate].words;
        let fits = kept_words + words <= budget_words;
        if kept.is_empty() || fits || kept_words < min_words {
            kept.push(candidate);
            kept_words += words;
        }
    }

    kept.sort_by_key(|&idx| sentences[idx].index);
    let pieces: Vec<String> = kept
        .iter()
        .map(|&idx| {
            let text = sentences[idx].text;
            if text.ends_with('.') {
                text.to_string()
            } else {
                format!("{}.", text)
            }
        })
        .collect();
    pieces.join(" ")
}

struct Sentence<'a> {
    index: usize,
    text: &'a str,
    words: usize,
    score: u64,
}

fn normalize_term(word: &str) -> Option<String> {
    let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}
