//! Text conversion: summarization followed by bionic emphasis, plus the
//! HTML text extraction used for URL submissions.

mod bionic;
mod extract;
mod summary;

pub use bionic::emphasize;
pub use extract::extract_text;
pub use summary::summarize;

use crate::config::SummaryConfig;

/// The conversion pipeline shared by every endpoint: condense the input
/// under the summary envelope, then add bionic emphasis word by word.
#[derive(Debug, Clone)]
pub struct ReaderPipeline {
    summary: SummaryConfig,
}

impl ReaderPipeline {
    pub fn new(summary: SummaryConfig) -> Self {
        Self { summary }
    }

    /// Convert plain text into bionic HTML.
    pub fn convert(&self, text: &str) -> String {
        emphasize(&summarize(text, &self.summary))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_emphasized_without_summarization() {
        let pipeline = ReaderPipeline::new(SummaryConfig::default());
        assert_eq!(pipeline.convert("Hello world"), "<b>He</b>llo <b>wo</b>rld");
    }

    #[test]
    fn every_output_word_carries_emphasis() {
        let pipeline = ReaderPipeline::new(SummaryConfig::default());
        let text = "Reading speed improves when the eye can anchor on the first \
                    half of each word. This sentence repeats the point about the \
                    eye and the word so the summarizer has something to score. \
                    The final sentence exists only to pad the word count well \
                    past the pass-through threshold for summarization.";
        let converted = pipeline.convert(text);
        assert!(!converted.is_empty());
        for word in converted.split(' ') {
            assert!(word.starts_with("<b>"), "word without emphasis: {:?}", word);
            assert!(word.contains("</b>"));
        }
    }
}
