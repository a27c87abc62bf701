//! Plain-text extraction from fetched HTML pages.
//!
//! Boilerplate elements (navigation, headers, footers, asides, ad
//! containers) and non-text elements (script, style) are dropped; the
//! remaining text fragments are entity-decoded, trimmed, and joined with
//! single spaces.

/// Elements whose entire subtree is dropped from the extracted text.
const SUPPRESSED_ELEMENTS: &[&str] = &["header", "footer", "nav", "aside", "advertisement"];

/// Extract readable text from an HTML document.
///
/// Returns an empty string when the page has no text content outside the
/// suppressed elements. Does not handle `>` inside attribute values.
pub fn extract_text(html: &str) -> String {
    let mut fragments: Vec<String> = Vec::new();
    let mut suppressing: Vec<String> = Vec::new();
    let mut rest = html;

    loop {
        let Some(open) = rest.find('<') else {
            push_fragment(rest, suppressing.is_empty(), &mut fragments);
            break;
        };
        push_fragment(&rest[..open], suppressing.is_empty(), &mut fragments);
        rest = &rest[open..];

        if rest.starts_with("<!--") {
            rest = match rest.find("-->") {
                Some(end) => &rest[end + 3..],
                None => break,
            };
            continue;
        }

        let Some(close) = rest.find('>') else {
            break;
        };
        let tag = &rest[1..close];
        rest = &rest[close + 1..];

        let closing = tag.starts_with('/');
        let self_closing = tag.ends_with('/');
        let name = element_name(tag);

        if !closing && (name == "script" || name == "style") {
            let terminator = format!("</{}", name);
            rest = match find_ignore_case(rest, &terminator) {
                Some(pos) => {
                    let after = &rest[pos..];
                    match after.find('>') {
                        Some(end) => &after[end + 1..],
                        None => break,
                    }
                }
                None => break,
            };
            continue;
        }

        if SUPPRESSED_ELEMENTS.contains(&name.as_str()) {
            if closing {
                if suppressing.last() == Some(&name) {
                    suppressing.pop();
                }
            } else if !self_closing {
                suppressing.push(name);
            }
        }
    }

    fragments.join(" ")
}

fn push_fragment(raw: &str, visible: bool, fragments: &mut Vec<String>) {
    if !visible || raw.is_empty() {
        return;
    }
    let decoded = decode_entities(raw);
    let trimmed = decoded.trim();
    if !trimmed.is_empty() {
        fragments.push(trimmed.to_string());
    }
}

/// Lowercased element name of a tag body such as `/div`, `p class="x"`,
/// or `br/`.
fn element_name(tag: &str) -> String {
    tag.trim_start_matches('/')
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric())
        .collect::<String>()
        .to_ascii_lowercase()
}

fn find_ignore_case(haystack: &str, needle: &str) -> Option<usize> {
    let needle = needle.as_bytes();
    if needle.is_empty() || haystack.len() < needle.len() {
        return None;
    }
    haystack
        .as_bytes()
        .windows(needle.len())
        .position(|window| window.eq_ignore_ascii_case(needle))
}

/// Decode the common named entities plus numeric character references.
/// Unknown or malformed entities pass through unchanged; `&nbsp;`
/// becomes a plain space.
fn decode_entities(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        rest = &rest[amp..];
        match parse_entity(rest) {
            Some((decoded, consumed)) => {
                out.push_str(&decoded);
                rest = &rest[consumed..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Parse one entity at the start of `rest` (which begins with `&`),
/// returning the decoded text and the number of bytes consumed.
fn parse_entity(rest: &str) -> Option<(String, usize)> {
    let body = &rest[1..];
    let semicolon = body.find(';').filter(|&pos| pos <= 10)?;
    let name = &body[..semicolon];
    let consumed = semicolon + 2;

    let decoded = if let Some(hex) = name.strip_prefix("#x").or_else(|| name.strip_prefix("#X")) {
        let code = u32::from_str_radix(hex, 16).ok()?;
        char::from_u32(code)?.to_string()
    } else if let Some(dec) = name.strip_prefix('#') {
        let code: u32 = dec.parse().ok()?;
        char::from_u32(code)?.to_string()
    } else {
        match name {
            "amp" => "&".to_string(),
            "lt" => "<".to_string(),
            "gt" => ">".to_string(),
            "quot" => "\"".to_string(),
            "apos" => "'".to_string(),
            "nbsp" => " ".to_string(),
            _ => return None,
        }
    };
    Some((decoded, consumed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_paragraph_text() {
        let html = "<html><body><p>Hello world</p></body></html>";
        assert_eq!(extract_text(html), "Hello world");
    }

    #[test]
    fn joins_fragments_with_single_spaces() {
        let html = "<p> one </p><p>two</p><div>three</div>";
        assert_eq!(extract_text(html), "one two three");
    }

    #[test]
    fn drops_script_and_style_content() {
        let html = "<p>before</p><script>var x = '<p>hidden</p>';</script>\
                    <style>p { color: red; }</style><p>after</p>";
        assert_eq!(extract_text(html), "before after");
    }

    #[test]
    fn script_close_tag_match_is_case_insensitive() {
        let html = "<SCRIPT>alert(1)</ScRiPt><p>kept</p>";
        assert_eq!(extract_text(html), "kept");
    }

    #[test]
    fn suppresses_boilerplate_elements() {
        let html = "<header>Site name</header><nav><a href=\"/\">home</a></nav>\
                    <p>article body</p><aside>related</aside><footer>c 2020</footer>";
        assert_eq!(extract_text(html), "article body");
    }

    #[test]
    fn suppresses_nested_markup_inside_boilerplate() {
        let html = "<nav>a<div><span>b</span></div>c</nav>d";
        assert_eq!(extract_text(html), "d");
    }

    #[test]
    fn nested_same_name_elements_stay_suppressed() {
        let html = "<nav>a<nav>b</nav>c</nav>visible";
        assert_eq!(extract_text(html), "visible");
    }

    #[test]
    fn suppresses_advertisement_elements() {
        let html = "<p>story</p><advertisement>buy now</advertisement><p>more</p>";
        assert_eq!(extract_text(html), "story more");
    }

    #[test]
    fn strips_comments() {
        let html = "a<!-- hidden <p>not a tag</p> -->b";
        assert_eq!(extract_text(html), "a b");
    }

    #[test]
    fn decodes_named_entities() {
        let html = "<p>Fish &amp; chips &lt;hot&gt; &quot;fresh&quot; &apos;daily&apos;</p>";
        assert_eq!(extract_text(html), "Fish & chips <hot> \"fresh\" 'daily'");
    }

    #[test]
    fn decodes_numeric_entities() {
        assert_eq!(extract_text("<p>&#65;&#x42;&#x63;</p>"), "ABc");
    }

    #[test]
    fn unknown_entities_pass_through() {
        assert_eq!(extract_text("<p>&bogus; &amp;</p>"), "&bogus; &");
    }

    #[test]
    fn bare_ampersand_passes_through() {
        assert_eq!(extract_text("<p>AT&T works & plays</p>"), "AT&T works & plays");
    }

    #[test]
    fn nbsp_separates_instead_of_gluing() {
        assert_eq!(extract_text("<p>a&nbsp;b</p>"), "a b");
    }

    #[test]
    fn fragment_of_only_entities_can_vanish() {
        assert_eq!(extract_text("<p>&nbsp;&nbsp;</p><p>x</p>"), "x");
    }

    #[test]
    fn empty_page_yields_empty_text() {
        assert_eq!(extract_text(""), "");
        assert_eq!(extract_text("<html><body></body></html>"), "");
    }

    #[test]
    fn unterminated_tag_keeps_preceding_text() {
        assert_eq!(extract_text("kept<a href="), "kept");
    }

    #[test]
    fn self_closing_boilerplate_does_not_suppress() {
        assert_eq!(extract_text("<nav/>still here"), "still here");
    }
}
