//! End-to-end translation tests.
//!
//! Inline snapshots are compared after trimming trailing blank lines, so the
//! exact-output cases use `assert_eq!` instead.

use superlua::{DiagnosticKind, translate, translate_with_diagnostics};

const ANIMAL: &str = "\
class Animal
function new(self, name)
self.name = name
end

function speak(self)
print(self.name)
end
end";

#[test]
fn animal_scenario_is_line_exact() {
    let expected = "\
Animal = {}
Animal.__index = Animal

function Animal:new(name)
  local self = setmetatable({__class = 'Animal'}, Animal)
  self.name = name
  return self
end

function Animal:speak()
  print(self.name)
end

";
    assert_eq!(translate(ANIMAL), expected);
}

#[test]
fn empty_class_emits_preamble_only() {
    assert_eq!(
        translate("class Empty\nend"),
        "Empty = {}\nEmpty.__index = Empty\n\n"
    );
}

#[test]
fn code_around_classes_passes_through() {
    let src = "local M = {}\nclass A\nfunction f(self)\nreturn 1\nend\nend\nreturn M\n";
    let expected = "\
local M = {}
A = {}
A.__index = A

function A:f()
  return 1
end


return M
";
    assert_eq!(translate(src), expected);
}

#[test]
fn indentation_is_prefixed_not_normalized() {
    let src = "class Counter\n    function add(self, n)\n        if n > 0 then\n            self.count = self.count + n\n        end\n    end\nend";
    insta::assert_snapshot!(translate(src).trim_end(), @r"
    Counter = {}
    Counter.__index = Counter

    function Counter:add(n)
              if n > 0 then
                  self.count = self.count + n
              end
    end
    ");
}

#[test]
fn params_without_self_are_untouched() {
    let lua = translate("class Math\nfunction add(a, b)\nreturn a + b\nend\nend");
    assert!(lua.contains("function Math:add(a, b)\n"));
}

#[test]
fn self_never_appears_in_signatures() {
    let src = "class S\nfunction new(self, self, x)\nend\nfunction m(self,a,self)\nend\nfunction n(self)\nend\nend";
    let lua = translate(src);
    for line in lua.lines().filter(|l| l.starts_with("function ")) {
        let params = &line[line.find('(').unwrap()..];
        assert!(!params.contains("self"), "{line}");
    }
}

#[test]
fn constructor_binds_class_metatable() {
    let lua = translate("class Vec2\nfunction new(self, x, y)\nself.x = x\nself.y = y\nend\nend");
    let ctor = lua
        .lines()
        .find(|l| l.contains("setmetatable("))
        .expect("constructor line");
    assert!(ctor.contains("__class = 'Vec2'"));
    assert!(ctor.ends_with(", Vec2)"));
    assert!(lua.contains("  return self\nend"));
}

#[test]
fn one_terminator_per_method() {
    let src = "\
class Shape
function new(self)
end
function area(self)
  if self.w then
    for i = 1, 2 do
      while false do
      end
    end
  end
  return 0
end
function name(self)
  function helper()
    return 'shape'
  end
  return helper()
end
end";
    let lua = translate(src);
    let terminators = lua.lines().filter(|l| *l == "end").count();
    assert_eq!(terminators, 3);
}

#[test]
fn nested_function_stays_in_body() {
    let lua = translate("class A\nfunction f(self)\n  local g = 1\n  function inner()\n  end\nend\nend");
    assert!(lua.contains("function A:f()\n    local g = 1\n    function inner()\n    end\nend"));
}

#[test]
fn class_body_comments_are_dropped() {
    let src = "class A\n-- a comment\nfield = 1\nfunction f(self)\nend\nend";
    let t = translate_with_diagnostics(src);
    assert!(!t.output.contains("comment"));
    assert!(!t.output.contains("field"));
    let dropped = t
        .diagnostics
        .iter()
        .filter(|d| matches!(d.kind, DiagnosticKind::DiscardedLine { .. }))
        .count();
    assert_eq!(dropped, 2);
}

#[test]
fn unbalanced_blocks_truncate_silently() {
    // `elseif` is not an opener; the `if` already counted once.
    let src = "class A\nfunction f(self)\n  if a then\n  elseif b then\n  end\nend\nend\nprint('after')";
    let t = translate_with_diagnostics(src);
    assert!(t.output.contains("function A:f()"));
    assert!(t.output.ends_with("end\n\n\nprint('after')"));
    assert!(t.diagnostics.is_empty());

    // A one-line `if ... end` opens without closing, so the method takes
    // the class's `end` and the class runs to end of file.
    let src = "class B\nfunction g(self)\n  if a then b() end\nend\nend";
    let t = translate_with_diagnostics(src);
    assert_eq!(
        t.output,
        "B = {}\nB.__index = B\n\nfunction B:g()\n    if a then b() end\n  end\nend\n\n"
    );
    assert!(
        t.diagnostics
            .iter()
            .any(|d| matches!(d.kind, DiagnosticKind::UnterminatedClass { .. }))
    );
}

#[test]
fn crlf_lines_are_classified_trimmed() {
    let lua = translate("class A\r\nfunction f(self)\r\nx()\r\nend\r\nend\r\n");
    assert!(lua.starts_with("A = {}\nA.__index = A\n\nfunction A:f()\n  x()\r\nend\n"));
}

#[test]
fn receiver_is_removed_only_as_whole_word() {
    let lua = translate("class A\nfunction f(self, selfRef, myself)\nend\nend");
    assert_eq!(lua.lines().nth(3), Some("function A:f(selfRef, myself)"));
}
