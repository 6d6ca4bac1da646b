//! Property tests for tokenizing and greedy line packing.
//!
//! 1. Words carry exactly one trailing space and no other whitespace.
//! 2. Brace-free text tokenizes to its whitespace-split words.
//! 3. Unknown `{name}` tokens are literal words.
//! 4. Every packed line stays within `max_x` unless it holds a single item.
//! 5. The packer uses as many lines as a straightforward greedy count.

use chatter_text::{ImageHandle, ImageTable, LineBox, LineLimits, Token, tokenize};
use proptest::prelude::*;

fn icons() -> ImageTable {
    ["smile", "sad"]
        .into_iter()
        .map(|n| (n, ImageHandle::new(n)))
        .collect()
}

/// Reference greedy count written from the break rule, independent of
/// `LineBox`.
fn greedy_lines(widths: &[f32], first_x: f32, limits: &LineLimits) -> usize {
    let mut lines = 1;
    let mut x = first_x;
    for &w in widths {
        if x + w > limits.max_x {
            lines += 1;
            x = limits.indent;
        }
        x += w;
    }
    lines
}

proptest! {
    #[test]
    fn words_have_single_trailing_space(text in "[a-z {}\\t\\n]{0,80}") {
        for token in tokenize(&text, &icons()) {
            if let Token::Word(w) = token {
                prop_assert!(w.ends_with(' '));
                let body = &w[..w.len() - 1];
                prop_assert!(!body.is_empty());
                prop_assert!(!body.chars().any(char::is_whitespace));
            }
        }
    }

    #[test]
    fn brace_free_text_is_whitespace_split(text in "[a-zA-Z0-9 \\t\\n]{0,80}") {
        let expected: Vec<Token> = text
            .split_whitespace()
            .map(|w| Token::Word(format!("{w} ")))
            .collect();
        prop_assert_eq!(tokenize(&text, &icons()), expected);
    }

    #[test]
    fn unknown_names_stay_literal(name in "[a-z]{1,8}") {
        prop_assume!(name != "smile" && name != "sad");
        let tokens = tokenize(&format!("x {{{name}}} y"), &icons());
        prop_assert_eq!(tokens[1].clone(), Token::Word(format!("{{{name}}} ")));
    }

    #[test]
    fn lines_respect_limit_or_hold_one_item(
        widths in prop::collection::vec(1u16..120, 0..40),
        first_x in 0u16..100,
    ) {
        let limits = LineLimits { max_x: 200.0, indent: 20.0, line_height: 28.0 };
        let widths: Vec<f32> = widths.into_iter().map(f32::from).collect();

        let mut cursor = LineBox::new(f32::from(first_x));
        let mut per_line: Vec<Vec<(f32, f32)>> = vec![Vec::new()];
        for &w in &widths {
            let (next, at) = cursor.place(w, w, &limits);
            if at.wrapped {
                per_line.push(Vec::new());
            }
            per_line[at.line].push((at.x, w));
            cursor = next;
        }

        prop_assert_eq!(cursor.line_count(), per_line.len());
        prop_assert_eq!(cursor.line_count(), greedy_lines(&widths, f32::from(first_x), &limits));
        for line in &per_line {
            if line.len() > 1 {
                let (x, w) = line[line.len() - 1];
                prop_assert!(x + w <= limits.max_x);
            }
        }
    }

    #[test]
    fn more_items_never_fewer_lines(
        widths in prop::collection::vec(1u16..120, 0..30),
        extra in 1u16..120,
    ) {
        let limits = LineLimits { max_x: 200.0, indent: 20.0, line_height: 28.0 };
        let pack = |ws: &[u16]| {
            ws.iter().fold(LineBox::new(60.0), |c, &w| c.place(f32::from(w), f32::from(w), &limits).0)
        };
        let mut longer = widths.clone();
        longer.push(extra);
        prop_assert!(pack(&longer).line_count() >= pack(&widths).line_count());
    }
}
