//! Error Taxonomy Integration Tests
//!
//! One failing input per error category, verified end to end: the
//! category, its process exit code, and the diagnostic shape.

use es3_cli::{CliError, Compiler};
use es3_core::ErrorCategory;

/// Run a source string through the compiler, expecting a compile error.
fn compile_error(source: &str) -> es3_core::CompileError {
    match Compiler::new().compile_source(source).unwrap_err() {
        CliError::Compile(error) => error,
        other => panic!("expected compile error, got {:?}", other),
    }
}

/// Test: Unrecognized character reports the char and its numeric code
#[test]
fn test_unknown_character_category() {
    let error = compile_error("define x = 5 @ 3;");
    assert_eq!(error.category, ErrorCategory::UnknownCharacter);
    assert_eq!(error.category.exit_code(), 201);
    assert!(error.message.contains("\"@\""));
    assert!(error.message.contains("\"64\""));
}

/// Test: String running to end of input
#[test]
fn test_unterminated_string_category() {
    let error = compile_error("define x = \"never closed");
    assert_eq!(error.category, ErrorCategory::UnterminatedString);
    assert_eq!(error.category.exit_code(), 202);
}

/// Test: Numeral ending on a bare decimal point
#[test]
fn test_unfinished_number_category() {
    let error = compile_error("define x = 3.;");
    assert_eq!(error.category, ErrorCategory::UnfinishedNumber);
    assert_eq!(error.category.exit_code(), 206);
}

/// Test: Missing statement terminator
#[test]
fn test_missing_terminator_category() {
    let error = compile_error("define x = 5");
    assert_eq!(error.category, ErrorCategory::UnexpectedToken);
    assert_eq!(error.category.exit_code(), 401);
    assert!(error.message.contains("expected \"Statement End\""));
    assert!(error.message.contains("got \"End Of File\""));
}

/// Test: Token outside the grammar rule's accepted set
#[test]
fn test_unexpected_token_lists_accepted_set() {
    let error = compile_error("define x = ;");
    assert_eq!(error.category, ErrorCategory::UnexpectedToken);
    assert!(error.message.contains("Number"));
    assert!(error.message.contains("Identifier"));
    assert!(error.message.contains("got \"Statement End\""));
}

/// Test: Function definition after the first executable statement
#[test]
fn test_misplaced_function_category() {
    let error = compile_error("print[1];\ndefine f = [] = { return 1; };");
    assert_eq!(error.category, ErrorCategory::MisplacedFunction);
    assert_eq!(error.category.exit_code(), 402);
    assert!(error.message.contains("\"f\""));
    assert!(error.message.contains("top of the file"));
}

/// Test: Function definition nested inside a block
#[test]
fn test_nested_function_is_misplaced() {
    let error = compile_error("if (true) { define f = [] = { return 1; }; };");
    assert_eq!(error.category, ErrorCategory::MisplacedFunction);
}

/// Test: Parameter list entry that is not a bare identifier
#[test]
fn test_malformed_parameter_category() {
    let error = compile_error("define f = [a, 2] = { return a; };");
    assert_eq!(error.category, ErrorCategory::MalformedParameter);
    assert_eq!(error.category.exit_code(), 403);
    assert!(error.message.contains("got \"Number\""));
}

/// Test: return at top level
#[test]
fn test_return_outside_function_category() {
    let error = compile_error("return 5;");
    assert_eq!(error.category, ErrorCategory::UnexpectedToken);
    assert!(error.message.contains("outside of a function"));
}

/// Test: I/O failures carry their own exit codes
#[test]
fn test_io_error_codes() {
    let missing = Compiler::new()
        .compile_file("nowhere.es3", None)
        .unwrap_err();
    assert_eq!(missing.exit_code(), 101);

    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("ok.es3");
    std::fs::write(&input, "print[1];").unwrap();
    let unwritable = Compiler::new()
        .compile_file(
            input.to_str().unwrap(),
            Some(dir.path().join("no/dir/out.c").to_str().unwrap()),
        )
        .unwrap_err();
    assert_eq!(unwritable.exit_code(), 103);
}

/// Test: Errors surface the line they were detected on
#[test]
fn test_errors_carry_line_numbers() {
    let error = compile_error("define x = 5;\ndefine y = \"bad;");
    assert_eq!(error.category, ErrorCategory::UnterminatedString);
    assert_eq!(error.position.as_ref().map(|position| position.line), Some(2));
}
