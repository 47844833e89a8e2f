use std::fs::{self};

use brewin::{
    error::{ErrorKind, InterpretError, RuntimeError},
    interpreter::console::ScriptedConsole,
    run_source,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn book_examples_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("book/src").into_iter()
                                .filter_map(Result::ok)
                                .filter(|e| e.path().extension().is_some_and(|ext| ext == "md"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (i, code) in extract_brewin_blocks(&content).into_iter().enumerate() {
            count += 1;
            let mut console = ScriptedConsole::new(["5", "6", "7", "8"]);
            if let Err(e) = run_source(&code, &mut console) {
                panic!("Brewin example {} in {:?} failed:\n{}\nError: {:?}",
                       i + 1,
                       path,
                       code,
                       e);
            }
        }
    }

    assert!(count > 0, "No Brewin examples found in book/src");
}

fn extract_brewin_blocks(content: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut inside = false;
    let mut buf = String::new();

    for line in content.lines() {
        let trimmed = line.trim_start();
        if trimmed.starts_with("```brewin") {
            inside = true;
            buf.clear();
            continue;
        }
        if inside && trimmed.starts_with("```") {
            inside = false;
            blocks.push(buf.clone());
            continue;
        }
        if inside {
            buf.push_str(line);
            buf.push('\n');
        }
    }

    blocks
}

/// Wraps statements in `func main() { ... }`.
fn main_with(body: &str) -> String {
    format!("func main() {{\n{body}\n}}")
}

/// Runs `body` as the body of `main`, feeding it `input`, and returns the
/// console afterwards.
fn run_with_input(body: &str, input: &[&str]) -> (Result<(), InterpretError>, ScriptedConsole) {
    let mut console = ScriptedConsole::new(input.iter().copied());
    let result = run_source(&main_with(body), &mut console).map(|_| ());
    (result, console)
}

fn assert_output(body: &str, expected: &[&str]) {
    let (result, console) = run_with_input(body, &[]);
    if let Err(e) = result {
        panic!("Script failed: {e}");
    }
    assert_eq!(console.lines(), expected);
}

fn assert_failure(body: &str, kind: ErrorKind) {
    let (result, _) = run_with_input(body, &[]);
    match result {
        Ok(()) => panic!("Script succeeded but was expected to fail"),
        Err(e) => assert_eq!(e.kind(), Some(kind), "unexpected error: {e}"),
    }
}

#[test]
fn declaration_assignment_and_print() {
    assert_output("var x;\nx = 3 + 4;\nprint(x);", &["7"]);
    assert_output("var s;\ns = \"hello\";\nprint(s, \" world\");", &["hello world"]);
}

#[test]
fn print_concatenates_without_separators() {
    assert_output("print(\"a\", 1, \"b\");", &["a1b"]);
    assert_output("print();", &[""]);
    assert_output("print(-3, 4);", &["-34"]);
}

#[test]
fn arithmetic_precedence_and_grouping() {
    assert_output("print(2 + 3 * 4);", &["14"]);
    assert_output("print((2 + 3) * 4);", &["20"]);
    assert_output("print(10 - 4 - 3);", &["3"]);
    assert_output("print(7 / 2, \" \", -7 / 2);", &["3 -3"]);
}

#[test]
fn reassignment_replaces_values_of_any_type() {
    assert_output("var v;\nv = 1;\nv = \"one\";\nprint(v);", &["one"]);
}

#[test]
fn variables_feed_into_expressions() {
    assert_output("var a;\nvar b;\na = 5;\nb = a * a - 1;\nprint(b);", &["24"]);
}

#[test]
fn missing_main_runs_nothing() {
    let mut console = ScriptedConsole::default();
    let err = run_source("func helper() { print(\"ran\"); }", &mut console).unwrap_err();

    assert!(matches!(err, InterpretError::Runtime(RuntimeError::MissingMain)));
    assert_eq!(err.kind(), Some(ErrorKind::Name));
    assert!(console.lines().is_empty());
}

#[test]
fn empty_program_has_no_main() {
    let mut console = ScriptedConsole::default();
    let err = run_source("", &mut console).unwrap_err();
    assert_eq!(err.kind(), Some(ErrorKind::Name));
}

#[test]
fn first_main_wins() {
    let mut console = ScriptedConsole::default();
    let source = "func main() { print(\"first\"); }\nfunc main() { print(\"second\"); }";

    run_source(source, &mut console).unwrap();
    assert_eq!(console.lines(), ["first"]);
}

#[test]
fn duplicate_declaration_stops_the_run() {
    let (result, console) = run_with_input("var x;\nx = 1;\nvar x;\nx = 2;\nprint(x);", &[]);

    let err = result.unwrap_err();
    assert!(matches!(err,
                     InterpretError::Runtime(RuntimeError::VariableRedefinition { line: 4, .. })));
    assert!(console.lines().is_empty());
}

#[test]
fn assignment_to_undeclared_name_consumes_no_input() {
    let (result, console) = run_with_input("y = inputi(\"prompt\");", &["1"]);

    assert_eq!(result.unwrap_err().kind(), Some(ErrorKind::Name));
    assert_eq!(console.remaining_input(), 1);
    assert!(console.lines().is_empty());
}

#[test]
fn reading_undeclared_or_unassigned_variables_fails() {
    assert_failure("print(z);", ErrorKind::Name);
    assert_failure("var z;\nprint(z);", ErrorKind::Name);
}

#[test]
fn division_by_zero_is_a_fault() {
    assert_failure("print(5 / 0);", ErrorKind::Fault);
    assert_failure("var d;\nd = 0;\nprint(1 / d);", ErrorKind::Fault);
}

#[test]
fn mixing_strings_and_integers_is_a_type_error() {
    assert_failure("print(5 + \"x\");", ErrorKind::Type);
    assert_failure("print(\"a\" - \"b\");", ErrorKind::Type);
    assert_failure("print(\"a\" / 0);", ErrorKind::Type);
}

#[test]
fn unsupported_operator_is_a_type_error() {
    assert_failure("print(5 % 2);", ErrorKind::Type);
}

#[test]
fn bare_expression_statement_is_a_type_error() {
    assert_failure("var x;\nx = 1;\nx + 1;", ErrorKind::Type);
}

#[test]
fn unknown_functions_are_name_errors() {
    assert_failure("println(1);", ErrorKind::Name);
    assert_failure("var x;\nx = print(1);", ErrorKind::Name);
    assert_failure("var x;\nx = foo();", ErrorKind::Name);
}

#[test]
fn inputi_with_two_arguments_is_a_name_error() {
    let (result, console) = run_with_input("var x;\nx = inputi(\"a\", \"b\");", &["1"]);

    assert_eq!(result.unwrap_err().kind(), Some(ErrorKind::Name));
    assert_eq!(console.remaining_input(), 1);
    assert!(console.lines().is_empty());
}

#[test]
fn inputi_prompts_and_returns_an_integer() {
    let (result, console) =
        run_with_input("var n;\nn = inputi(\"Enter: \");\nprint(n + 1);", &["41"]);

    result.unwrap();
    assert_eq!(console.lines(), ["Enter: ", "42"]);
}

#[test]
fn inputi_as_a_statement_discards_its_value() {
    let (result, console) = run_with_input("inputi();\nprint(\"done\");", &["3"]);

    result.unwrap();
    assert_eq!(console.remaining_input(), 0);
    assert_eq!(console.lines(), ["done"]);
}

#[test]
fn operands_are_read_left_to_right_depth_first() {
    let body = "var r;\nr = (inputi(\"a\") + inputi(\"b\")) - (inputi(\"c\") - inputi(\"d\"));\nprint(r);";
    let (result, console) = run_with_input(body, &["1", "2", "10", "3"]);

    result.unwrap();
    // (1 + 2) - (10 - 3)
    assert_eq!(console.lines(), ["a", "b", "c", "d", "-4"]);
    assert_eq!(console.remaining_input(), 0);
}

#[test]
fn input_faults() {
    let (result, _) = run_with_input("inputi();", &[]);
    assert!(matches!(result,
                     Err(InterpretError::Runtime(RuntimeError::InputExhausted { .. }))));

    let (result, _) = run_with_input("inputi();", &["twelve"]);
    assert_eq!(result.unwrap_err().kind(), Some(ErrorKind::Fault));
}

#[test]
fn output_before_an_error_is_kept() {
    let (result, console) = run_with_input("print(\"before\");\nprint(1 / 0);\nprint(\"after\");", &[]);

    assert_eq!(result.unwrap_err().kind(), Some(ErrorKind::Fault));
    assert_eq!(console.lines(), ["before"]);
}

#[test]
fn final_environment_is_returned() {
    let mut console = ScriptedConsole::default();
    let env = run_source(&main_with("var a;\nvar b;\na = 2;"), &mut console).unwrap();

    assert_eq!(env.len(), 2);
    assert_eq!(env.get("a", 0).unwrap().to_string(), "2");
    assert!(env.get("b", 0).is_err());
}

#[test]
fn runs_are_independent() {
    let mut console = ScriptedConsole::default();
    let body = main_with("var x;\nx = 1;\nprint(x);");

    run_source(&body, &mut console).unwrap();
    run_source(&body, &mut console).unwrap();
    assert_eq!(console.lines(), ["1", "1"]);
}

#[test]
fn integer_limits() {
    assert_output("print(-9223372036854775808, \" \", 9223372036854775807 + 1);",
                  &["-9223372036854775808 -9223372036854775808"]);
}

#[test]
fn starred_comments_are_ignored() {
    let mut console = ScriptedConsole::default();
    let source = "/** banner **/\nfunc main() { /***/ print(1); }";

    run_source(source, &mut console).unwrap();
    assert_eq!(console.lines(), ["1"]);
}

#[test]
fn truncated_source_names_its_last_line() {
    let mut console = ScriptedConsole::default();
    let err = run_source("func main() {\n  var x;\n  x =", &mut console).unwrap_err();

    assert_eq!(err.to_string(), "Error on line 3: Unexpected end of input.");
}

#[test]
fn syntax_errors_have_no_runtime_kind() {
    let mut console = ScriptedConsole::default();
    let err = run_source("func main() { var x }", &mut console).unwrap_err();

    assert!(matches!(err, InterpretError::Parse(_)));
    assert_eq!(err.kind(), None);
}

#[test]
fn example_works() {
    let contents = fs::read_to_string("tests/example.br").unwrap();
    let mut console = ScriptedConsole::new(["6"]);

    run_source(&contents, &mut console).unwrap();
    assert_eq!(console.lines(),
               ["Pick a number: ", "6 squared is 36", "half of that is 18"]);
}
