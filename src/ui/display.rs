//! Pure helpers that turn a conversion result into renderable pieces.

/// Split converted text into sentence list items.
///
/// The text is split on the literal separator `". "`, each piece is
/// trimmed, and a literal `.` is appended. Pieces that already end in a
/// period gain a second one, and a trailing separator produces a bare
/// `"."` item; both artifacts are part of the displayed contract.
pub fn sentence_items(text: &str) -> Vec<String> {
    text.split(". ")
        .map(|piece| format!("{}.", piece.trim()))
        .collect()
}

/// One run of output text, bold or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub text: String,
    pub bold: bool,
}

/// Parse `<b>...</b>` markup into text runs.
///
/// Empty runs are dropped, so the `<b></b>` prefix emitted for one-letter
/// words renders as nothing. An unclosed `<b>` bolds the remainder of the
/// piece.
pub fn text_runs(piece: &str) -> Vec<TextRun> {
    let mut runs = Vec::new();
    let mut rest = piece;
    loop {
        let Some(open) = rest.find("<b>") else {
            push_run(rest, false, &mut runs);
            break;
        };
        push_run(&rest[..open], false, &mut runs);
        rest = &rest[open + 3..];

        let Some(close) = rest.find("</b>") else {
            push_run(rest, true, &mut runs);
            break;
        };
        push_run(&rest[..close], true, &mut runs);
        rest = &rest[close + 4..];
    }
    runs
}

fn push_run(text: &str, bold: bool, runs: &mut Vec<TextRun>) {
    if !text.is_empty() {
        runs.push(TextRun {
            text: text.to_string(),
            bold,
        });
    }
}
