//! SuperLua reader: one forward sweep from source lines to a [`Document`].

use super::classify::{LineKind, classify};
use super::extract::extract_block;
use crate::ir::{ClassDecl, Diagnostic, DiagnosticKind, Document, Item, MethodDecl};
use crate::traits::{BlockKind, ReadError, Reader};

/// Static instance of the SuperLua reader for registry.
pub static SUPERLUA_READER: SuperLuaReader = SuperLuaReader;

/// Reader behavior switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Fail on the first unterminated method or class instead of recording a
    /// warning and keeping the truncated block.
    pub strict: bool,
}

impl ReadOptions {
    pub const STRICT: Self = Self { strict: true };
}

/// SuperLua reader implementing the Reader trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct SuperLuaReader;

impl Reader for SuperLuaReader {
    fn language(&self) -> &'static str {
        "superlua"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["slua"]
    }

    fn read(&self, source: &str, options: &ReadOptions) -> Result<Document, ReadError> {
        let document = read_superlua(source);
        if options.strict {
            check_terminated(&document)?;
        }
        Ok(document)
    }
}

/// Read SuperLua source into a document. Never fails.
pub fn read_superlua(source: &str) -> Document {
    let lines: Vec<&str> = source.split('\n').collect();
    let mut document = Document::default();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        match classify(line) {
            LineKind::ClassStart { name } => {
                let (class, next) = read_class(&lines, cursor, name, &mut document.diagnostics);
                tracing::debug!(
                    class = %class.name,
                    methods = class.methods.len(),
                    line = class.line,
                    "read class"
                );
                document.items.push(Item::Class(class));
                cursor = next;
            }
            _ => {
                document.items.push(Item::Line {
                    text: line.to_string(),
                });
                cursor += 1;
            }
        }
    }

    document
}

/// Scan a class body starting at the `class` line at `start`.
///
/// Returns the class and the index of the first line after its closing
/// `end` (or `lines.len()` if there is none).
fn read_class(
    lines: &[&str],
    start: usize,
    name: &str,
    diagnostics: &mut Vec<Diagnostic>,
) -> (ClassDecl, usize) {
    let mut class = ClassDecl {
        name: name.to_string(),
        methods: Vec::new(),
        line: start + 1,
        closed: false,
    };
    let mut cursor = start + 1;

    while cursor < lines.len() {
        let line = lines[cursor];
        match classify(line) {
            LineKind::BlockCloser => {
                class.closed = true;
                return (class, cursor + 1);
            }
            LineKind::FunctionStart { name, params } => {
                let block = extract_block(lines, cursor + 1);
                let method = MethodDecl {
                    name: name.to_string(),
                    params: params.to_string(),
                    body: block.body.iter().map(|l| l.to_string()).collect(),
                    line: cursor + 1,
                    closed: block.closed,
                };
                if !method.closed {
                    diagnostics.push(Diagnostic::new(
                        method.line,
                        DiagnosticKind::UnterminatedMethod {
                            class: class.name.clone(),
                            method: method.name.clone(),
                        },
                    ));
                }
                class.methods.push(method);
                cursor = block.next;
            }
            LineKind::MalformedFunction => {
                diagnostics.push(Diagnostic::new(
                    cursor + 1,
                    DiagnosticKind::UnparsedFunction {
                        class: class.name.clone(),
                    },
                ));
                cursor += 1;
            }
            LineKind::ClassStart { .. } | LineKind::Passthrough => {
                if !line.trim().is_empty() {
                    diagnostics.push(Diagnostic::new(
                        cursor + 1,
                        DiagnosticKind::DiscardedLine {
                            class: class.name.clone(),
                        },
                    ));
                }
                cursor += 1;
            }
        }
    }

    diagnostics.push(Diagnostic::new(
        class.line,
        DiagnosticKind::UnterminatedClass {
            class: class.name.clone(),
        },
    ));
    (class, cursor)
}

fn check_terminated(document: &Document) -> Result<(), ReadError> {
    for class in document.classes() {
        if let Some(method) = class.methods.iter().find(|m| !m.closed) {
            return Err(ReadError::Unterminated {
                kind: BlockKind::Method,
                name: format!("{}:{}", class.name, method.name),
                line: method.line,
            });
        }
        if !class.closed {
            return Err(ReadError::Unterminated {
                kind: BlockKind::Class,
                name: class.name.clone(),
                line: class.line,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::Severity;

    #[test]
    fn lines_outside_classes_are_kept() {
        let doc = read_superlua("local x = 1\n\nprint(x)");
        assert_eq!(doc.items.len(), 3);
        assert!(doc.diagnostics.is_empty());
    }

    #[test]
    fn reads_methods() {
        let doc = read_superlua(
            "class Animal\nfunction new(self, name)\n  self.name = name\nend\nfunction speak(self)\nend\nend",
        );
        let class = doc.classes().next().unwrap();
        assert_eq!(class.name, "Animal");
        assert!(class.closed);
        assert_eq!(class.methods.len(), 2);
        assert_eq!(class.methods[0].params, "self, name");
        assert_eq!(class.methods[0].body, ["  self.name = name"]);
        assert_eq!(class.methods[0].line, 2);
        assert_eq!(class.methods[1].name, "speak");
        assert!(class.methods[1].body.is_empty());
    }

    #[test]
    fn class_body_noise_is_noted() {
        let doc = read_superlua("class A\n-- comment\n\nx = 1\nfunction A.b()\nend");
        let class = doc.classes().next().unwrap();
        assert!(class.methods.is_empty());
        assert!(class.closed);
        let lines: Vec<_> = doc.diagnostics.iter().map(|d| d.line).collect();
        assert_eq!(lines, [2, 4, 5]);
        assert!(doc.diagnostics.iter().all(|d| d.severity == Severity::Note));
    }

    #[test]
    fn unterminated_method_swallows_class_end() {
        let doc = read_superlua("class A\nfunction f()\n  if x then\nend");
        let class = doc.classes().next().unwrap();
        assert!(!class.methods[0].closed);
        assert!(!class.closed);
        assert_eq!(doc.warnings().count(), 2);
    }

    #[test]
    fn strict_reader_rejects_unterminated_blocks() {
        let err = SUPERLUA_READER
            .read(
                "class A\nfunction f()\n  while true do\nend",
                &ReadOptions::STRICT,
            )
            .unwrap_err();
        assert!(matches!(
            err,
            ReadError::Unterminated {
                kind: BlockKind::Method,
                line: 2,
                ..
            }
        ));

        let err = SUPERLUA_READER
            .read("class A", &ReadOptions::STRICT)
            .unwrap_err();
        assert_eq!(err.to_string(), "line 1: class `A` is not closed by a matching `end`");
    }

    #[test]
    fn lenient_reader_accepts_anything() {
        let options = ReadOptions::default();
        assert!(SUPERLUA_READER.read("class A\nfunction f()", &options).is_ok());
    }
}
