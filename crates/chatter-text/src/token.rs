#![forbid(unsafe_code)]

//! Inline icon tokenizing.
//!
//! Dialogue text is plain words with `{name}` icon references mixed in:
//!
//! ```text
//! Hello {smile} world
//! ```
//!
//! [`tokenize`] turns that into a flat run of [`Token`]s. A `{...}` candidate
//! is the shortest brace pair that does not cross a newline. It becomes an
//! [`Token::Icon`] only when its inner name is a key of the icon table;
//! otherwise the braces and name are ordinary text and are word-split like
//! everything else. Tokenizing never fails.

use rustc_hash::FxHashMap;

use crate::ImageHandle;

/// Case-sensitive mapping from resource name to image handle.
#[derive(Debug, Clone, Default)]
pub struct ImageTable {
    images: FxHashMap<String, ImageHandle>,
}

impl ImageTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the image for `name`.
    pub fn insert(&mut self, name: impl Into<String>, handle: ImageHandle) -> Option<ImageHandle> {
        self.images.insert(name.into(), handle)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ImageHandle> {
        self.images.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.images.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.images.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ImageHandle)> {
        self.images.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, ImageHandle)> for ImageTable {
    fn from_iter<I: IntoIterator<Item = (K, ImageHandle)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (name, handle) in iter {
            table.insert(name, handle);
        }
        table
    }
}

/// One unit of inline content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A word with exactly one trailing space, as it is measured and drawn.
    Word(String),
    /// A reference to a known icon, by name.
    Icon(String),
}

impl Token {
    /// The word text, if this is a word.
    #[must_use]
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Self::Word(w) => Some(w),
            Self::Icon(_) => None,
        }
    }

    #[must_use]
    pub fn is_icon(&self) -> bool {
        matches!(self, Self::Icon(_))
    }
}

/// Split `text` into words and icon references.
#[must_use]
pub fn tokenize(text: &str, icons: &ImageTable) -> Vec<Token> {
    let mut tokens = Vec::new();
    for segment in segments(text) {
        match segment {
            Segment::Candidate(raw) => {
                let name = &raw[1..raw.len() - 1];
                if !name.is_empty() && icons.contains(name) {
                    tokens.push(Token::Icon(name.to_string()));
                } else {
                    push_words(raw, &mut tokens);
                }
            }
            Segment::Literal(raw) => push_words(raw, &mut tokens),
        }
    }
    tokens
}

fn push_words(raw: &str, tokens: &mut Vec<Token>) {
    tokens.extend(
        raw.split_whitespace()
            .map(|word| Token::Word(format!("{word} "))),
    );
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Segment<'a> {
    Literal(&'a str),
    /// A `{...}` run, braces included.
    Candidate(&'a str),
}

/// Alternate literal runs with brace candidates, in source order.
fn segments(text: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut search_from = 0;

    while let Some(rel) = text[search_from..].find('{') {
        let open = search_from + rel;
        let after = open + 1;
        match text[after..].find(['}', '\n']) {
            Some(off) if text.as_bytes()[after + off] == b'}' => {
                let close = after + off;
                if literal_start < open {
                    out.push(Segment::Literal(&text[literal_start..open]));
                }
                out.push(Segment::Candidate(&text[open..=close]));
                literal_start = close + 1;
                search_from = close + 1;
            }
            // A newline (or end of text) comes first; this brace opens
            // nothing, retry from the next one.
            _ => search_from = after,
        }
    }

    if literal_start < text.len() {
        out.push(Segment::Literal(&text[literal_start..]));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icons(names: &[&str]) -> ImageTable {
        names
            .iter()
            .map(|n| (*n, ImageHandle::new(format!("{n}.png"))))
            .collect()
    }

    fn word(w: &str) -> Token {
        Token::Word(w.to_string())
    }

    fn icon(n: &str) -> Token {
        Token::Icon(n.to_string())
    }

    #[test]
    fn known_icon_between_words() {
        let tokens = tokenize("Hello {smile} world", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("Hello "), icon("smile"), word("world ")]);
    }

    #[test]
    fn unknown_icon_is_literal_text() {
        let tokens = tokenize("so {unknown} here", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("so "), word("{unknown} "), word("here ")]);
    }

    #[test]
    fn names_are_case_sensitive() {
        let tokens = tokenize("{Smile}", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("{Smile} ")]);
    }

    #[test]
    fn adjacent_icons_and_glued_words() {
        let tokens = tokenize("hi{a}{b}there", &icons(&["a", "b"]));
        assert_eq!(tokens, vec![word("hi "), icon("a"), icon("b"), word("there ")]);
    }

    #[test]
    fn consecutive_whitespace_is_dropped() {
        let tokens = tokenize("  one \t  two\n\nthree  ", &ImageTable::new());
        assert_eq!(tokens, vec![word("one "), word("two "), word("three ")]);
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("", &icons(&["smile"])).is_empty());
        assert!(tokenize("   ", &icons(&["smile"])).is_empty());
    }

    #[test]
    fn unclosed_brace_is_literal() {
        let tokens = tokenize("a {smile b", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("a "), word("{smile "), word("b ")]);
    }

    #[test]
    fn candidate_does_not_cross_newline() {
        let tokens = tokenize("{sm\nile}", &icons(&["sm\nile", "smile"]));
        assert!(tokens.iter().all(|t| !t.is_icon()));
    }

    #[test]
    fn shortest_pair_wins() {
        // The candidate is `{x{smile}`, whose name `x{smile` is unknown.
        let tokens = tokenize("{x{smile}}", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("{x{smile} "), word("} ")]);
    }

    #[test]
    fn empty_braces_are_text_even_with_empty_key() {
        let tokens = tokenize("{}", &icons(&[""]));
        assert_eq!(tokens, vec![word("{} ")]);
    }

    #[test]
    fn unicode_text_survives() {
        let tokens = tokenize("héllo {smile} 你好", &icons(&["smile"]));
        assert_eq!(tokens, vec![word("héllo "), icon("smile"), word("你好 ")]);
    }

    #[test]
    fn table_replaces_duplicate_names() {
        let mut table = ImageTable::new();
        table.insert("a", ImageHandle::new("1.png"));
        let old = table.insert("a", ImageHandle::new("2.png"));
        assert_eq!(old, Some(ImageHandle::new("1.png")));
        assert_eq!(table.get("a").map(ImageHandle::source), Some("2.png"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn token_accessors() {
        assert_eq!(word("x ").as_word(), Some("x "));
        assert_eq!(icon("x").as_word(), None);
        assert!(icon("x").is_icon());
    }
}
