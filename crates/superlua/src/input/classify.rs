//! Line classification.
//!
//! Classification only ever looks at the trimmed line. Callers keep the
//! original line for output.

use regex::Regex;
use std::sync::LazyLock;

static FUNCTION_SIGNATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^function\s+(\w+)\s*\((.*?)\)").expect("function signature regex")
});

/// Prefixes that open a block the extractor has to balance with an `end`.
pub const BLOCK_OPENERS: &[&str] = &["if ", "for ", "while ", "function "];

/// What a single source line means to the translator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    ClassStart { name: &'a str },
    FunctionStart { name: &'a str, params: &'a str },
    /// Starts with `function ` but the signature does not match.
    MalformedFunction,
    BlockCloser,
    Passthrough,
}

/// Classify a line.
///
/// `FunctionStart` is reported everywhere; it only has an effect inside a
/// class body. `params` is the raw text between the parentheses, trimmed.
pub fn classify(line: &str) -> LineKind<'_> {
    let trimmed = line.trim();

    if trimmed.starts_with("class ") {
        // trimmed, so a token always follows the keyword
        if let Some(name) = trimmed.split_whitespace().nth(1) {
            return LineKind::ClassStart { name };
        }
    }

    if trimmed.starts_with("function ") {
        return match FUNCTION_SIGNATURE.captures(trimmed) {
            Some(caps) => {
                let (Some(name), Some(params)) = (caps.get(1), caps.get(2)) else {
                    return LineKind::MalformedFunction;
                };
                LineKind::FunctionStart {
                    name: name.as_str(),
                    params: params.as_str().trim(),
                }
            }
            None => LineKind::MalformedFunction,
        };
    }

    if is_block_closer(trimmed) {
        return LineKind::BlockCloser;
    }

    LineKind::Passthrough
}

/// Whether the trimmed line is exactly `end`.
pub fn is_block_closer(line: &str) -> bool {
    line.trim() == "end"
}

/// Whether the trimmed line opens a nested block.
pub fn opens_block(line: &str) -> bool {
    let trimmed = line.trim();
    BLOCK_OPENERS.iter().any(|p| trimmed.starts_with(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_start_takes_first_token() {
        assert_eq!(
            classify("class Animal"),
            LineKind::ClassStart { name: "Animal" }
        );
        assert_eq!(
            classify("   class Dog extends Animal  "),
            LineKind::ClassStart { name: "Dog" }
        );
    }

    #[test]
    fn bare_class_keyword_is_passthrough() {
        assert_eq!(classify("class"), LineKind::Passthrough);
        assert_eq!(classify("class   "), LineKind::Passthrough);
        assert_eq!(classify("classify(x)"), LineKind::Passthrough);
    }

    #[test]
    fn function_start_captures_name_and_params() {
        assert_eq!(
            classify("  function new(self, name)"),
            LineKind::FunctionStart {
                name: "new",
                params: "self, name"
            }
        );
        assert_eq!(
            classify("function speak ( )"),
            LineKind::FunctionStart {
                name: "speak",
                params: ""
            }
        );
    }

    #[test]
    fn params_stop_at_first_close_paren() {
        assert_eq!(
            classify("function f(a, b) return (a) end"),
            LineKind::FunctionStart {
                name: "f",
                params: "a, b"
            }
        );
    }

    #[test]
    fn unparsable_function_lines() {
        assert_eq!(classify("function Foo.bar()"), LineKind::MalformedFunction);
        assert_eq!(classify("function noparens"), LineKind::MalformedFunction);
        assert_eq!(classify("function (x)"), LineKind::MalformedFunction);
    }

    #[test]
    fn closer_must_be_exact() {
        assert_eq!(classify("  end  "), LineKind::BlockCloser);
        assert_eq!(classify("end)"), LineKind::Passthrough);
        assert_eq!(classify("end -- done"), LineKind::Passthrough);
    }

    #[test]
    fn block_openers() {
        assert!(opens_block("  if x then"));
        assert!(opens_block("for i = 1, 3 do"));
        assert!(opens_block("while true do"));
        assert!(opens_block("function inner()"));
        assert!(!opens_block("elseif x then"));
        assert!(!opens_block("repeat"));
        assert!(!opens_block("iffy = 1"));
    }
}
