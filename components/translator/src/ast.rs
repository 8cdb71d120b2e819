//! Abstract syntax tree node definitions.

/// A complete parsed program.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Top-level statements in source order
    pub statements: Vec<Statement>,
}

/// ES3 statements.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// `define name = value;`
    VariableDefinition {
        /// Bound identifier
        name: String,
        /// Initializer expression
        value: Expression,
    },

    /// `name = value;` on an existing binding
    Reassignment {
        /// Assigned identifier
        name: String,
        /// New value expression
        value: Expression,
    },

    /// `define name = [params] = { body };`
    FunctionDefinition {
        /// Function name
        name: String,
        /// Parameter names, in order
        params: Vec<String>,
        /// Body statements
        body: Vec<Statement>,
    },

    /// `name[args];` as a statement
    Call {
        /// Called function name
        name: String,
        /// Argument expressions
        args: Vec<Expression>,
    },

    /// `if (condition) { body };`
    If {
        /// Branch condition
        condition: Expression,
        /// Body statements
        body: Vec<Statement>,
    },

    /// `loop (condition) { body };`
    Loop {
        /// Continue-while condition, re-tested each iteration
        condition: Expression,
        /// Body statements
        body: Vec<Statement>,
    },

    /// `return value;`
    Return {
        /// Returned expression
        value: Expression,
    },
}

impl Statement {
    /// Whether this statement is a `define` form. The leading run of
    /// definitions is emitted at file scope; everything after the first
    /// non-definition goes inside the generated entry point.
    pub fn is_definition(&self) -> bool {
        matches!(
            self,
            Statement::VariableDefinition { .. } | Statement::FunctionDefinition { .. }
        )
    }
}

/// ES3 expressions.
///
/// Literal variants keep the exact source text; the code generator
/// splices it into the output verbatim rather than reformatting it.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Numeric literal, exact source text
    Number(String),
    /// String literal, source text including the surrounding quotes
    StringLiteral(String),
    /// `true` or `false`
    Boolean(bool),
    /// Reference to a variable
    Variable(String),
    /// `[a, b, c]` literal
    Array(Vec<Expression>),
    /// `name[args]` inside an expression
    Call {
        /// Called function name
        name: String,
        /// Argument expressions
        args: Vec<Expression>,
    },
    /// Unary minus
    Negate(Box<Expression>),
    /// Two operands joined by a binary operator
    Binary {
        /// Left operand
        left: Box<Expression>,
        /// The operator
        op: BinaryOp,
        /// Right operand
        right: Box<Expression>,
    },
}

/// Binary operators as they appear in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    /// `==`
    Equal,
    /// `>`
    Greater,
    /// `>=`
    GreaterEqual,
    /// `<`
    Less,
    /// `<=`
    LessEqual,
    /// `+`
    Add,
    /// `-`
    Subtract,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `^`
    Power,
}
