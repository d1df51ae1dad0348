// src/core/extractor.rs

//! Turns raw markup into a queryable document and isolates the readable
//! content from it: the page title, the meta description, and the body text
//! with boilerplate (scripts, navigation, ads) stripped out.

use once_cell::sync::Lazy;
use regex::Regex;
use ego_tree::NodeRef;
use scraper::node::{Element, Node};
use scraper::{Html, Selector};

use crate::core::models::ExtractedContent;

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());
static META_DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("body").unwrap());

static WHITESPACE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NEWLINE_RUNS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n+").unwrap());

/// Elements whose entire subtree never contributes to readable body text.
const SKIPPED_TAGS: &[&str] = &["script", "style", "noscript", "nav", "footer", "aside", "header"];

/// Class-name fragments marking non-content containers, matched
/// case-insensitively as substrings of the element's `class` attribute.
const NON_CONTENT_CLASS_FRAGMENTS: &[&str] = &[
    "navigation",
    "nav",
    "menu",
    "sidebar",
    "footer",
    "header",
    "advertisement",
    "ads",
    "social",
    "share",
    "comments",
];

/// Parses markup into a document, recovering from malformed input the way
/// browsers do. Never fails.
pub fn parse(markup: &str) -> Html {
    Html::parse_document(markup)
}

/// Isolates the title, meta description, and cleaned body text from a
/// parsed document. Pure with respect to the document.
pub fn extract(document: &Html) -> ExtractedContent {
    ExtractedContent {
        title: extract_title(document),
        meta_description: extract_meta_description(document),
        body_text: extract_body_text(document),
    }
}

/// Trimmed text of the first `<title>` element, or empty when absent.
pub fn extract_title(document: &Html) -> String {
    document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Trimmed `content` attribute of `<meta name="description">`, or empty
/// when absent.
pub fn extract_meta_description(document: &Html) -> String {
    document
        .select(&META_DESCRIPTION_SELECTOR)
        .next()
        .and_then(|element| element.value().attr("content"))
        .map(|content| content.trim().to_string())
        .unwrap_or_default()
}

/// Readable body text: text nodes under `<body>` (the whole document when
/// no body exists), skipping script/style/comment nodes and structural or
/// denylisted non-content containers, joined on single spaces with
/// whitespace runs collapsed.
pub fn extract_body_text(document: &Html) -> String {
    let mut segments = Vec::new();
    match document.select(&BODY_SELECTOR).next() {
        Some(body) => collect_text(*body, &mut segments),
        None => collect_text(document.tree.root(), &mut segments),
    }

    let joined = segments.join(" ");
    let collapsed = WHITESPACE_RUNS.replace_all(&joined, " ");
    NEWLINE_RUNS.replace_all(&collapsed, "\n").trim().to_string()
}

fn collect_text(node: NodeRef<'_, Node>, segments: &mut Vec<String>) {
    for child in node.children() {
        match child.value() {
            Node::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    segments.push(trimmed.to_string());
                }
            }
            Node::Element(element) => {
                if is_content_element(element) {
                    collect_text(child, segments);
                }
            }
            // Comments, doctypes, and processing instructions carry no
            // readable text.
            _ => {}
        }
    }
}

fn is_content_element(element: &Element) -> bool {
    if SKIPPED_TAGS.contains(&element.name()) {
        return false;
    }
    if let Some(class) = element.attr("class") {
        let class = class.to_lowercase();
        if NON_CONTENT_CLASS_FRAGMENTS
            .iter()
            .any(|fragment| class.contains(fragment))
        {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_title_and_meta_description() {
        let document = parse(
            r#"<html><head><title> Sample Page </title>
            <meta name="description" content=" A sample description. "></head>
            <body><p>Body</p></body></html>"#,
        );
        let content = extract(&document);
        assert_eq!(content.title, "Sample Page");
        assert_eq!(content.meta_description, "A sample description.");
    }

    #[test]
    fn missing_title_and_meta_yield_empty_strings() {
        let document = parse("<html><head></head><body><p>Body</p></body></html>");
        let content = extract(&document);
        assert_eq!(content.title, "");
        assert_eq!(content.meta_description, "");
    }

    #[test]
    fn script_content_never_reaches_body_text() {
        let document =
            parse("<body><script>ignored();</script><p>Hello &nbsp; world</p></body>");
        let text = extract_body_text(&document);
        assert_eq!(text, "Hello world");
        assert!(!text.contains("ignored()"));
    }

    #[test]
    fn comments_and_styles_are_stripped() {
        let document = parse(
            "<body><style>p { color: red; }</style><!-- hidden --><p>Visible</p></body>",
        );
        assert_eq!(extract_body_text(&document), "Visible");
    }

    #[test]
    fn structural_elements_are_stripped() {
        let document = parse(
            "<body><nav>Menu</nav><header>Top</header><p>Article text</p>\
             <aside>Related</aside><footer>Legal</footer></body>",
        );
        assert_eq!(extract_body_text(&document), "Article text");
    }

    #[test]
    fn denylisted_class_containers_are_stripped() {
        let document = parse(
            r#"<body><div class="Sidebar-Widget">Links</div>
            <div class="main-advertisement">Buy now</div>
            <div class="content"><p>Keep me</p></div></body>"#,
        );
        assert_eq!(extract_body_text(&document), "Keep me");
    }

    #[test]
    fn whitespace_runs_collapse_to_single_spaces() {
        let document = parse("<body><p>One\n\n  two</p><p>three</p></body>");
        assert_eq!(extract_body_text(&document), "One two three");
    }

    #[test]
    fn malformed_markup_still_extracts() {
        let document = parse("<body><p>Unclosed <div><span>nested</body>");
        let text = extract_body_text(&document);
        assert!(text.contains("Unclosed"));
        assert!(text.contains("nested"));
    }
}
