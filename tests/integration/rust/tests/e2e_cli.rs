//! End-to-End CLI Integration Tests
//!
//! Tests the complete compiler through the es3_cli Compiler API.
//! This is the highest level integration test - source file to C file.

use es3_cli::{CliError, Compiler};

/// Test: Compile a file to the default .c path
#[test]
fn test_e2e_compile_to_default_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("program.es3");
    std::fs::write(&input, "define x = 5;\nprint[x];").unwrap();

    Compiler::new()
        .compile_file(input.to_str().unwrap(), None)
        .expect("Compilation failed");

    let generated = std::fs::read_to_string(dir.path().join("program.c")).unwrap();
    assert!(generated.starts_with("#include \"std.c\"\n"));
    assert!(generated.contains("ES3Var x__raw = (ES3Var) { .type = 1, .valNum = 5 };"));
    assert!(generated.contains("print__raw(x__raw);"));
}

/// Test: Compile a file to an explicit output path
#[test]
fn test_e2e_compile_to_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("program.es3");
    let output = dir.path().join("translated.c");
    std::fs::write(&input, "print[1];").unwrap();

    Compiler::new()
        .compile_file(input.to_str().unwrap(), output.to_str())
        .expect("Compilation failed");

    let generated = std::fs::read_to_string(&output).unwrap();
    assert!(generated.contains("print__raw((ES3Var) { .type = 1, .valNum = 1 });"));
}

/// Test: compile_source returns the C text directly (the --eval path)
#[test]
fn test_e2e_compile_source_string() {
    let generated = Compiler::new()
        .compile_source("define greeting = \"hi\";\nprint[greeting];")
        .expect("Compilation failed");

    assert!(generated.contains("ES3Var greeting__raw = (ES3Var) { .type = 2, .valString = \"hi\" };"));
    assert!(generated.ends_with("}\n"));
}

/// Test: A larger program survives the whole trip
#[test]
fn test_e2e_larger_program() {
    let source = concat!(
        "define limit = 5;\n",
        "define square = [n] = { return n * n; };\n",
        "define i = 1;\n",
        "loop (i <= limit) {\n",
        "    print[square[i]];\n",
        "    i = i + 1;\n",
        "};\n",
    );
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("squares.es3");
    std::fs::write(&input, source).unwrap();

    Compiler::new()
        .compile_file(input.to_str().unwrap(), None)
        .expect("Compilation failed");

    let generated = std::fs::read_to_string(dir.path().join("squares.c")).unwrap();
    let square_at = generated.find("ES3Var square__raw(ES3Var n__raw) {").unwrap();
    let main_at = generated.find("int main() {").unwrap();
    assert!(square_at < main_at);
    assert!(generated.contains("while (esvTruthy(esvComp(i__raw, 5, limit__raw))) {"));
    assert!(generated.contains("print__raw(square__raw(i__raw));"));
}

/// Test: Missing input file reports SourceRead with exit code 101
#[test]
fn test_e2e_missing_file() {
    let error = Compiler::new()
        .compile_file("no/such/file.es3", None)
        .unwrap_err();

    assert!(matches!(error, CliError::SourceRead { .. }));
    assert_eq!(error.exit_code(), 101);
}

/// Test: Compile errors surface their source line for diagnostics
#[test]
fn test_e2e_error_reports_line() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.es3");
    std::fs::write(&input, "define x = 5;\nprint[x]\nx = 1;").unwrap();

    let error = Compiler::new()
        .compile_file(input.to_str().unwrap(), None)
        .unwrap_err();

    assert_eq!(error.exit_code(), 401);
    assert_eq!(error.line(), Some(3));
}

/// Test: Output is deterministic across runs
#[test]
fn test_e2e_deterministic_output() {
    let source = "define x = 1;\nprint[x + 2];";
    let first = Compiler::new().compile_source(source).unwrap();
    let second = Compiler::new().compile_source(source).unwrap();
    assert_eq!(first, second);
}
