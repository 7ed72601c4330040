//! Markdown to prose conversion for scoring.
//!
//! Uses pulldown-cmark so that code fences, inline code and link targets are
//! recognised properly instead of guessed at with regexes.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Strip markdown formatting, returning plain prose text.
///
/// Removes YAML frontmatter, code blocks, inline code, headings, tables and
/// HTML. Keeps paragraph, list item, blockquote, emphasis and link text.
///
/// Every paragraph and list item is closed as a sentence: if its text does
/// not already end in `.`, `!` or `?`, a period is appended, so bullet lists
/// do not collapse into one enormous sentence.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_frontmatter(text);

    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(body, options);

    let mut prose = String::with_capacity(body.len() / 2);
    let mut skip_depth: usize = 0;

    for event in parser {
        match event {
            Event::Start(Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_)) => {
                skip_depth += 1;
            }
            Event::End(TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table) => {
                skip_depth = skip_depth.saturating_sub(1);
            }
            Event::Text(t) if skip_depth == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if skip_depth == 0 => prose.push(' '),
            Event::Start(Tag::List(_) | Tag::Item)
            | Event::End(TagEnd::Paragraph | TagEnd::Item)
                if skip_depth == 0 =>
            {
                close_block(&mut prose);
            }
            _ => {}
        }
    }

    prose.truncate(prose.trim_end().len());
    prose
}

/// Terminate the current block as a sentence and separate it from the next.
fn close_block(prose: &mut String) {
    prose.truncate(prose.trim_end().len());
    if prose.is_empty() {
        return;
    }
    if !prose.ends_with(['.', '!', '?']) {
        prose.push('.');
    }
    prose.push(' ');
}

/// Drop a leading `---` delimited YAML block.
fn strip_frontmatter(text: &str) -> &str {
    let Some(rest) = text.trim_start().strip_prefix("---") else {
        return text;
    };
    match rest.split_once("\n---") {
        Some((_, after)) => after.strip_prefix('\n').unwrap_or(after),
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_blocks_are_removed() {
        let input = "Some text.\n\n```rust\nlet x = 1;\n```\n\nMore text.";
        let result = strip_to_prose(input);
        assert_eq!(result, "Some text. More text.");
    }

    #[test]
    fn frontmatter_is_removed() {
        let input = "---\ntitle: Notes\ndate: 2026-02-07\n---\n\nSome text.";
        assert_eq!(strip_to_prose(input), "Some text.");
    }

    #[test]
    fn unterminated_frontmatter_is_kept_as_text() {
        let input = "---\nnot really frontmatter";
        assert!(strip_to_prose(input).contains("not really frontmatter"));
    }

    #[test]
    fn headings_are_removed() {
        let input = "# Header\n\nSome text.\n\n## Subheader\n\nMore text.";
        let result = strip_to_prose(input);
        assert!(!result.contains("Header"));
        assert_eq!(result, "Some text. More text.");
    }

    #[test]
    fn link_text_survives_without_target() {
        let result = strip_to_prose("Check [this link](https://example.com) for details.");
        assert_eq!(result, "Check this link for details.");
    }

    #[test]
    fn inline_code_is_removed() {
        let result = strip_to_prose("Use `foo()` to do things.");
        assert!(!result.contains("foo()"));
        assert!(result.contains("to do things."));
    }

    #[test]
    fn emphasis_markers_are_removed() {
        let result = strip_to_prose("This is **bold** and *italic* text.");
        assert_eq!(result, "This is bold and italic text.");
    }

    #[test]
    fn tables_are_removed() {
        let input = "Text before.\n\n| A | B |\n|---|---|\n| 1 | 2 |\n\nText after.";
        assert_eq!(strip_to_prose(input), "Text before. Text after.");
    }

    #[test]
    fn list_items_become_sentences() {
        let input = "We need food.\n\n- eggs\n- milk\n- bread!\n";
        assert_eq!(strip_to_prose(input), "We need food. eggs. milk. bread!");
    }

    #[test]
    fn nested_list_items_stay_separate() {
        let input = "- apple\n  - banana\n- cherry\n";
        assert_eq!(strip_to_prose(input), "apple. banana. cherry.");
    }

    #[test]
    fn list_after_unterminated_paragraph_is_split() {
        let input = "Pack these\n- tent\n- stove\n";
        assert_eq!(strip_to_prose(input), "Pack these. tent. stove.");
    }

    #[test]
    fn blockquote_text_survives() {
        let input = "> This is a quote.\n\nRegular text.";
        assert_eq!(strip_to_prose(input), "This is a quote. Regular text.");
    }

    #[test]
    fn empty_input_returns_empty() {
        assert!(strip_to_prose("").is_empty());
    }
}
