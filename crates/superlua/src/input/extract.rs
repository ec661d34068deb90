//! Function body extraction by nesting depth.
//!
//! This is a keyword-prefix heuristic, not a parser. Only the openers in
//! [`BLOCK_OPENERS`](super::classify::BLOCK_OPENERS) raise the depth and only
//! a bare `end` lowers it. `elseif`, `repeat ... until`, one-line
//! `if ... end` and `end` inside strings or comments all desynchronize the
//! count. That behavior is kept as is.

use super::classify::{is_block_closer, opens_block};

/// The body of a function block and where scanning resumes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block<'a> {
    /// Original lines strictly between the opener and its matching `end`.
    pub body: Vec<&'a str>,
    /// Index of the first line after the consumed `end`, or `lines.len()`.
    pub next: usize,
    /// False when `lines` ran out before the depth reached zero.
    pub closed: bool,
}

/// Collect the body of the block whose opening line is `lines[start - 1]`.
///
/// Depth starts at 1. Each line is classified on its trimmed text; openers
/// increment, `end` decrements, and a line is kept only while the depth
/// after it is still positive. The line that brings the depth to zero is
/// consumed but not kept.
pub fn extract_block<'a>(lines: &[&'a str], start: usize) -> Block<'a> {
    let mut depth = 1usize;
    let mut body = Vec::new();
    let mut cursor = start;

    while cursor < lines.len() {
        let line = lines[cursor];
        cursor += 1;

        if opens_block(line) {
            depth += 1;
        } else if is_block_closer(line) {
            depth -= 1;
        }

        if depth == 0 {
            return Block {
                body,
                next: cursor,
                closed: true,
            };
        }
        body.push(line);
    }

    Block {
        body,
        next: cursor,
        closed: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(src: &str) -> Vec<&str> {
        src.split('\n').collect()
    }

    #[test]
    fn stops_at_matching_end() {
        let src = lines("function f()\n  x = 1\nend\nafter");
        let block = extract_block(&src, 1);
        assert_eq!(block.body, ["  x = 1"]);
        assert_eq!(block.next, 3);
        assert!(block.closed);
    }

    #[test]
    fn nested_blocks_are_kept_in_body() {
        let src = lines(
            "function f(n)\n  if n > 0 then\n    for i = 1, n do\n      print(i)\n    end\n  end\nend\nrest",
        );
        let block = extract_block(&src, 1);
        assert_eq!(
            block.body,
            [
                "  if n > 0 then",
                "    for i = 1, n do",
                "      print(i)",
                "    end",
                "  end",
            ]
        );
        assert_eq!(src[block.next], "rest");
    }

    #[test]
    fn empty_body() {
        let src = lines("function f()\nend");
        let block = extract_block(&src, 1);
        assert!(block.body.is_empty());
        assert_eq!(block.next, 2);
        assert!(block.closed);
    }

    #[test]
    fn runs_to_end_of_input_when_unbalanced() {
        let src = lines("function f()\n  if x then\n  end\n  y()");
        let block = extract_block(&src, 1);
        assert_eq!(block.body, ["  if x then", "  end", "  y()"]);
        assert_eq!(block.next, src.len());
        assert!(!block.closed);
    }

    #[test]
    fn one_line_if_desynchronizes() {
        // `if ... end` on one line opens but never closes.
        let src = lines("function f()\n  if x then y() end\nend\nend\nafter");
        let block = extract_block(&src, 1);
        assert_eq!(block.body, ["  if x then y() end", "end"]);
        assert_eq!(src[block.next], "after");
    }
}
