//! C code generation.
//!
//! Renders a parsed [`Program`] as C source over the `ES3Var` runtime.
//! Two passes over the statement list: the leading run of definitions
//! goes out at file scope, then `int main()` opens at the first
//! executable statement and everything from there on renders inside it.
//! Splitting up front means the writer never has to back up and splice
//! the entry point in later.

use es3_core::{AddSubOp, CompareOp, ExpOp, MulDivOp, TAG_BOOLEAN, TAG_NUMBER, TAG_STRING};

use crate::ast::{BinaryOp, Expression, Program, Statement};

/// Suffix every user identifier carries in generated code, keeping user
/// names clear of C keywords and the runtime's own symbols.
const IDENT_SUFFIX: &str = "__raw";

/// Renders a program as C text.
pub struct CodeGen;

impl CodeGen {
    /// Create a new code generator
    pub fn new() -> Self {
        CodeGen
    }

    /// Render the whole program, including the `std.c` include and the
    /// entry-point wrapper.
    pub fn generate(&self, program: &Program) -> String {
        let mut chunks = vec![String::from("#include \"std.c\"")];

        // Leading definitions render at file scope; the first executable
        // statement and everything after it (later variable definitions
        // included, which become locals) render inside main.
        let split = program
            .statements
            .iter()
            .position(|statement| !statement.is_definition())
            .unwrap_or(program.statements.len());

        for statement in &program.statements[..split] {
            chunks.push(self.render_statement(statement, 0));
        }

        let mut entry = String::from("int main() {\n");
        for statement in &program.statements[split..] {
            entry.push_str(&self.render_statement(statement, 1));
            entry.push('\n');
        }
        entry.push_str("    return 0;\n}");
        chunks.push(entry);

        let mut output = chunks.join("\n\n");
        output.push('\n');
        output
    }

    fn render_statement(&self, statement: &Statement, level: usize) -> String {
        let pad = indent(level);
        match statement {
            Statement::VariableDefinition { name, value } => format!(
                "{}ES3Var {} = {};",
                pad,
                decorate(name),
                self.render_expression(value)
            ),
            Statement::Reassignment { name, value } => format!(
                "{}{} = {};",
                pad,
                decorate(name),
                self.render_expression(value)
            ),
            Statement::FunctionDefinition { name, params, body } => {
                let params = params
                    .iter()
                    .map(|param| format!("ES3Var {}", decorate(param)))
                    .collect::<Vec<_>>()
                    .join(", ");
                let mut text = format!("{}ES3Var {}({}) {{\n", pad, decorate(name), params);
                for statement in body {
                    text.push_str(&self.render_statement(statement, level + 1));
                    text.push('\n');
                }
                text.push_str(&pad);
                text.push('}');
                text
            }
            Statement::Call { name, args } => format!(
                "{}{}({});",
                pad,
                decorate(name),
                self.render_arguments(args)
            ),
            Statement::If { condition, body } => {
                self.render_guarded_block("if", condition, body, level)
            }
            Statement::Loop { condition, body } => {
                self.render_guarded_block("while", condition, body, level)
            }
            Statement::Return { value } => {
                format!("{}return {};", pad, self.render_expression(value))
            }
        }
    }

    fn render_guarded_block(
        &self,
        keyword: &str,
        condition: &Expression,
        body: &[Statement],
        level: usize,
    ) -> String {
        let pad = indent(level);
        let mut text = format!(
            "{}{} (esvTruthy({})) {{\n",
            pad,
            keyword,
            self.render_expression(condition)
        );
        for statement in body {
            text.push_str(&self.render_statement(statement, level + 1));
            text.push('\n');
        }
        text.push_str(&pad);
        text.push('}');
        text
    }

    fn render_expression(&self, expression: &Expression) -> String {
        match expression {
            Expression::Number(text) => {
                format!("(ES3Var) {{ .type = {}, .valNum = {} }}", TAG_NUMBER, text)
            }
            Expression::StringLiteral(text) => {
                format!(
                    "(ES3Var) {{ .type = {}, .valString = {} }}",
                    TAG_STRING, text
                )
            }
            Expression::Boolean(value) => {
                format!(
                    "(ES3Var) {{ .type = {}, .valBool = {} }}",
                    TAG_BOOLEAN,
                    i32::from(*value)
                )
            }
            Expression::Variable(name) => decorate(name),
            Expression::Array(items) => {
                if items.is_empty() {
                    String::from("esvArr(0)")
                } else {
                    format!("esvArr({}, {})", items.len(), self.render_arguments(items))
                }
            }
            Expression::Call { name, args } => {
                format!("{}({})", decorate(name), self.render_arguments(args))
            }
            // No unary form in the runtime; subtract from zero instead
            Expression::Negate(operand) => format!(
                "esvExpr((ES3Var) {{ .type = {}, .valNum = 0 }}, {}, {})",
                TAG_NUMBER,
                AddSubOp::Subtract.code(),
                self.render_expression(operand)
            ),
            Expression::Binary { left, op, right } => {
                let (function, code) = runtime_call(*op);
                format!(
                    "{}({}, {}, {})",
                    function,
                    self.render_expression(left),
                    code,
                    self.render_expression(right)
                )
            }
        }
    }

    fn render_arguments(&self, args: &[Expression]) -> String {
        args.iter()
            .map(|arg| self.render_expression(arg))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for CodeGen {
    fn default() -> Self {
        CodeGen::new()
    }
}

/// Runtime function and opcode for a binary operator.
fn runtime_call(op: BinaryOp) -> (&'static str, i32) {
    match op {
        BinaryOp::Equal => ("esvComp", CompareOp::Equal.code()),
        BinaryOp::Greater => ("esvComp", CompareOp::Greater.code()),
        BinaryOp::GreaterEqual => ("esvComp", CompareOp::GreaterEqual.code()),
        BinaryOp::Less => ("esvComp", CompareOp::Less.code()),
        BinaryOp::LessEqual => ("esvComp", CompareOp::LessEqual.code()),
        BinaryOp::Add => ("esvExpr", AddSubOp::Add.code()),
        BinaryOp::Subtract => ("esvExpr", AddSubOp::Subtract.code()),
        BinaryOp::Multiply => ("esvTerm", MulDivOp::Multiply.code()),
        BinaryOp::Divide => ("esvTerm", MulDivOp::Divide.code()),
        BinaryOp::Power => ("esvExpo", ExpOp::Power.code()),
    }
}

fn decorate(name: &str) -> String {
    format!("{}{}", name, IDENT_SUFFIX)
}

fn indent(level: usize) -> String {
    "    ".repeat(level)
}
