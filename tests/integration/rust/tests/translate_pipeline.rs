//! Full Pipeline Integration Tests
//!
//! Tests the complete flow: Source -> Lexer -> Parser -> AST -> CodeGen -> C text.
//! This is the most critical integration test suite.

use es3_core::CompileError;
use translator::{CodeGen, Parser};

/// Helper function to translate ES3 source code to C
fn translate(source: &str) -> Result<String, CompileError> {
    let program = Parser::new(source).parse()?;
    Ok(CodeGen::new().generate(&program))
}

/// Test: Leading definition stays above the entry point, call goes inside
#[test]
fn test_pipeline_definition_then_call() {
    let output = translate("define x = 5;\nprint[x];").expect("Translation failed");

    let expected = concat!(
        "#include \"std.c\"\n",
        "\n",
        "ES3Var x__raw = (ES3Var) { .type = 1, .valNum = 5 };\n",
        "\n",
        "int main() {\n",
        "    print__raw(x__raw);\n",
        "    return 0;\n",
        "}\n",
    );
    assert_eq!(output, expected);
}

/// Test: Function definitions render as C functions above main
#[test]
fn test_pipeline_function_definition() {
    let source = "define double = [n] = { return n * 2; };\nprint[double[21]];";
    let output = translate(source).expect("Translation failed");

    let function_at = output.find("ES3Var double__raw(ES3Var n__raw) {").unwrap();
    let main_at = output.find("int main() {").unwrap();
    assert!(function_at < main_at);
    assert!(output.contains("return esvTerm(n__raw, 1, (ES3Var) { .type = 1, .valNum = 2 });"));
    assert!(output.contains("print__raw(double__raw((ES3Var) { .type = 1, .valNum = 21 }));"));
}

/// Test: Precedence drives call nesting
#[test]
fn test_pipeline_arithmetic_nesting() {
    let output = translate("print[1 + 2 * 3 - 4];").expect("Translation failed");

    assert!(output.contains(concat!(
        "esvExpr(esvExpr((ES3Var) { .type = 1, .valNum = 1 }, 1, ",
        "esvTerm((ES3Var) { .type = 1, .valNum = 2 }, 1, ",
        "(ES3Var) { .type = 1, .valNum = 3 })), 2, ",
        "(ES3Var) { .type = 1, .valNum = 4 })",
    )));
}

/// Test: Parenthesized groups change the nesting
#[test]
fn test_pipeline_parentheses() {
    let output = translate("print[(1 + 2) * 3];").expect("Translation failed");

    assert!(output.contains(concat!(
        "esvTerm(esvExpr((ES3Var) { .type = 1, .valNum = 1 }, 1, ",
        "(ES3Var) { .type = 1, .valNum = 2 }), 1, ",
        "(ES3Var) { .type = 1, .valNum = 3 })",
    )));
}

/// Test: Conditionals guard with esvTruthy
#[test]
fn test_pipeline_if_statement() {
    let source = "define x = 5;\nif (x > 3) { print[x]; };";
    let output = translate(source).expect("Translation failed");

    assert!(output.contains("if (esvTruthy(esvComp(x__raw, 2, (ES3Var) { .type = 1, .valNum = 3 }))) {"));
}

/// Test: Loops translate to while with the same guard shape
#[test]
fn test_pipeline_loop_statement() {
    let source = "define i = 0;\nloop (i < 10) { i = i + 1; };";
    let output = translate(source).expect("Translation failed");

    assert!(output.contains("while (esvTruthy(esvComp(i__raw, 4, (ES3Var) { .type = 1, .valNum = 10 }))) {"));
    assert!(output.contains("i__raw = esvExpr(i__raw, 1, (ES3Var) { .type = 1, .valNum = 1 });"));
}

/// Test: Strings keep their quotes all the way through
#[test]
fn test_pipeline_string_literal() {
    let output = translate("print[\"hello world\"];").expect("Translation failed");

    assert!(output.contains("print__raw((ES3Var) { .type = 2, .valString = \"hello world\" });"));
}

/// Test: Array literals become counted constructors
#[test]
fn test_pipeline_array_literal() {
    let output = translate("define xs = [1, \"two\", true];").expect("Translation failed");

    assert!(output.contains(concat!(
        "esvArr(3, (ES3Var) { .type = 1, .valNum = 1 }, ",
        "(ES3Var) { .type = 2, .valString = \"two\" }, ",
        "(ES3Var) { .type = 3, .valBool = 1 })",
    )));
}

/// Test: A program of only definitions still gets an entry point
#[test]
fn test_pipeline_definitions_only() {
    let output = translate("define x = 1;\ndefine f = [] = { return x; };")
        .expect("Translation failed");

    assert!(output.ends_with("int main() {\n    return 0;\n}\n"));
}

/// Test: Definitions after the first executable statement become locals
#[test]
fn test_pipeline_late_definition_is_local() {
    let output = translate("print[1];\ndefine x = 2;\nprint[x];").expect("Translation failed");

    let main_at = output.find("int main() {").unwrap();
    assert!(!output[..main_at].contains("x__raw"));
    assert!(output[main_at..].contains("ES3Var x__raw"));
}

/// Test: Multi-statement program keeps source order inside main
#[test]
fn test_pipeline_statement_order() {
    let source = "define a = 1;\nprint[a];\na = 2;\nprint[a];";
    let output = translate(source).expect("Translation failed");

    let first_print = output.find("print__raw(a__raw);").unwrap();
    let reassign = output.find("a__raw = (ES3Var) { .type = 1, .valNum = 2 };").unwrap();
    let last_print = output.rfind("print__raw(a__raw);").unwrap();
    assert!(first_print < reassign);
    assert!(reassign < last_print);
}

/// Test: Nested function calls in expressions
#[test]
fn test_pipeline_nested_calls() {
    let source = "define f = [a] = { return a; };\nprint[f[f[1]]];";
    let output = translate(source).expect("Translation failed");

    assert!(output.contains("print__raw(f__raw(f__raw((ES3Var) { .type = 1, .valNum = 1 })));"));
}

/// Test: Unary minus in a larger expression
#[test]
fn test_pipeline_unary_minus() {
    let output = translate("print[3 * -2];").expect("Translation failed");

    assert!(output.contains(concat!(
        "esvTerm((ES3Var) { .type = 1, .valNum = 3 }, 1, ",
        "esvExpr((ES3Var) { .type = 1, .valNum = 0 }, 2, ",
        "(ES3Var) { .type = 1, .valNum = 2 }))",
    )));
}
