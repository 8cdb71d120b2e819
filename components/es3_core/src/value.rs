//! ES3 runtime value representation.
//!
//! `Var` models the tagged dynamic value the generated code computes with
//! at its own runtime. The translator itself never evaluates user
//! arithmetic; it uses this module to type literals, to share the tag
//! numbering with emitted constructor literals, and to pin down the
//! semantics the generated runtime calls must have.

use std::cmp::Ordering;
use std::fmt;

/// Runtime type tag for Null, matching the `.type` field in emitted code.
pub const TAG_NULL: i32 = 0;
/// Runtime type tag for Number.
pub const TAG_NUMBER: i32 = 1;
/// Runtime type tag for String.
pub const TAG_STRING: i32 = 2;
/// Runtime type tag for Boolean.
pub const TAG_BOOLEAN: i32 = 3;
/// Runtime type tag for Array.
pub const TAG_ARRAY: i32 = 4;

/// Represents any ES3 runtime value.
///
/// Arrays are singly linked lists of [`Cell`]s; a value and an array
/// share this one type, so an array element can itself be an array.
///
/// # Examples
///
/// ```
/// use es3_core::{AddSubOp, Var};
///
/// let five = Var::Number(2.0).add_sub(AddSubOp::Add, &Var::Number(3.0));
/// assert_eq!(five, Var::Number(5.0));
///
/// // Mismatched tags yield Null
/// let bad = Var::Number(2.0).add_sub(AddSubOp::Add, &Var::Boolean(true));
/// assert_eq!(bad, Var::Null);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Var {
    /// The null value
    Null,
    /// IEEE 754 double-precision number
    Number(f64),
    /// Owned text, stored without the source quotes
    String(String),
    /// Boolean value
    Boolean(bool),
    /// Array: the first cell of the chain, or `None` for an empty array
    Array(Option<Box<Cell>>),
}

/// One link of an array chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The value stored at this position
    pub head: Var,
    /// The rest of the array, or `None` at the last cell
    pub tail: Option<Box<Cell>>,
}

/// Comparison operators.
///
/// The discriminants are the opcodes the generated runtime calls use,
/// so the translator and the C runtime always agree on operator numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    /// No operator matched; the left operand passes through unchanged
    None = 0,
    /// `==`
    Equal = 1,
    /// `>`
    Greater = 2,
    /// `>=`
    GreaterEqual = 3,
    /// `<`
    Less = 4,
    /// `<=`
    LessEqual = 5,
}

/// Addition and subtraction operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddSubOp {
    /// No operator matched; pass-through
    None = 0,
    /// `+`
    Add = 1,
    /// `-`
    Subtract = 2,
}

/// Multiplication and division operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MulDivOp {
    /// No operator matched; pass-through
    None = 0,
    /// `*`
    Multiply = 1,
    /// `/`
    Divide = 2,
}

/// Exponentiation operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpOp {
    /// No operator matched; pass-through
    None = 0,
    /// `^`
    Power = 1,
}

impl CompareOp {
    /// Opcode emitted into generated runtime calls.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl AddSubOp {
    /// Opcode emitted into generated runtime calls.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl MulDivOp {
    /// Opcode emitted into generated runtime calls.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl ExpOp {
    /// Opcode emitted into generated runtime calls.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl Var {
    /// Build an array value from a list of elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use es3_core::Var;
    ///
    /// let arr = Var::array(vec![Var::Number(1.0), Var::Number(2.0)]);
    /// assert_eq!(arr.to_string(), "[1, 2]");
    /// ```
    pub fn array(items: Vec<Var>) -> Var {
        let mut chain = None;
        for item in items.into_iter().rev() {
            chain = Some(Box::new(Cell {
                head: item,
                tail: chain,
            }));
        }
        Var::Array(chain)
    }

    /// Runtime type tag, matching the `.type` field of emitted
    /// constructor literals.
    pub fn type_tag(&self) -> i32 {
        match self {
            Var::Null => TAG_NULL,
            Var::Number(_) => TAG_NUMBER,
            Var::String(_) => TAG_STRING,
            Var::Boolean(_) => TAG_BOOLEAN,
            Var::Array(_) => TAG_ARRAY,
        }
    }

    /// Whether this value counts as true in a condition.
    ///
    /// Numbers are truthy when nonzero, Booleans are their own value,
    /// and Null, String, and Array are always falsy.
    ///
    /// # Examples
    ///
    /// ```
    /// use es3_core::Var;
    ///
    /// assert!(Var::Number(1.0).is_truthy());
    /// assert!(!Var::Number(0.0).is_truthy());
    /// assert!(!Var::String("x".to_string()).is_truthy());
    /// ```
    pub fn is_truthy(&self) -> bool {
        match self {
            Var::Number(n) => *n != 0.0,
            Var::Boolean(b) => *b,
            Var::Null | Var::String(_) | Var::Array(_) => false,
        }
    }

    /// Apply a comparison operator.
    ///
    /// `CompareOp::None` passes the left operand through unchanged.
    /// Operands must share a tag and neither may be an Array; otherwise
    /// the result is Null. Matching operands always yield a Boolean:
    /// native ordering for Number, byte-wise lexicographic ordering for
    /// String, and false-before-true for Boolean.
    pub fn compare(&self, op: CompareOp, other: &Var) -> Var {
        if op == CompareOp::None {
            return self.clone();
        }

        let ordering = match (self, other) {
            (Var::Number(a), Var::Number(b)) => a.partial_cmp(b),
            (Var::String(a), Var::String(b)) => Some(a.cmp(b)),
            (Var::Boolean(a), Var::Boolean(b)) => Some(a.cmp(b)),
            _ => return Var::Null,
        };

        // A NaN operand leaves no ordering; every comparison on it is false.
        let result = match ordering {
            Some(ord) => match op {
                CompareOp::Equal => ord == Ordering::Equal,
                CompareOp::Greater => ord == Ordering::Greater,
                CompareOp::GreaterEqual => ord != Ordering::Less,
                CompareOp::Less => ord == Ordering::Less,
                CompareOp::LessEqual => ord != Ordering::Greater,
                CompareOp::None => unreachable!(),
            },
            None => false,
        };

        Var::Boolean(result)
    }

    /// Apply `+` or `-`. Defined only for two Numbers; anything else
    /// yields Null. `AddSubOp::None` passes the left operand through.
    pub fn add_sub(&self, op: AddSubOp, other: &Var) -> Var {
        if op == AddSubOp::None {
            return self.clone();
        }

        match (self, other) {
            (Var::Number(a), Var::Number(b)) => match op {
                AddSubOp::Add => Var::Number(a + b),
                AddSubOp::Subtract => Var::Number(a - b),
                AddSubOp::None => unreachable!(),
            },
            _ => Var::Null,
        }
    }

    /// Apply `*` or `/`. Defined only for two Numbers. Division by zero
    /// is not guarded; it propagates IEEE infinity or NaN.
    pub fn mul_div(&self, op: MulDivOp, other: &Var) -> Var {
        if op == MulDivOp::None {
            return self.clone();
        }

        match (self, other) {
            (Var::Number(a), Var::Number(b)) => match op {
                MulDivOp::Multiply => Var::Number(a * b),
                MulDivOp::Divide => Var::Number(a / b),
                MulDivOp::None => unreachable!(),
            },
            _ => Var::Null,
        }
    }

    /// Apply `^` (native `pow`). Defined only for two Numbers.
    pub fn exp(&self, op: ExpOp, other: &Var) -> Var {
        if op == ExpOp::None {
            return self.clone();
        }

        match (self, other) {
            (Var::Number(a), Var::Number(b)) => Var::Number(a.powf(*b)),
            _ => Var::Null,
        }
    }
}

/// Render a number the way C `printf("%g", x)` does.
///
/// At most six significant digits, trailing zeros stripped, switching to
/// exponential form (`e+NN` / `e-NN`, two-digit minimum exponent) when
/// the decimal exponent is below -4 or at least 6. Infinities render as
/// `inf` / `-inf` and NaN as `nan`.
pub fn format_g(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value < 0.0 { "-inf" } else { "inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to six significant digits can change the decimal exponent
    // (999999.5 becomes 1e+06), so read the exponent off the rounded form.
    let sci = format!("{:.5e}", value);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if !(-4..6).contains(&exponent) {
        let mantissa = strip_trailing_zeros(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.abs());
    }

    let precision = (5 - exponent) as usize;
    let fixed = format!("{:.*}", precision, value);
    strip_trailing_zeros(&fixed).to_string()
}

fn strip_trailing_zeros(text: &str) -> &str {
    if !text.contains('.') {
        return text;
    }
    text.trim_end_matches('0').trim_end_matches('.')
}

/// Textual rendering used by the generated runtime's `toString`:
/// Null renders as `Null`, Booleans as `true`/`false`, Numbers with
/// `%g` formatting, Strings surrounded by double quotes, and Arrays as
/// `[` + comma-space-joined elements + `]`.
impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Null => write!(f, "Null"),
            Var::Number(n) => write!(f, "{}", format_g(*n)),
            Var::String(s) => write!(f, "\"{}\"", s),
            Var::Boolean(b) => write!(f, "{}", if *b { "true" } else { "false" }),
            Var::Array(chain) => {
                write!(f, "[")?;
                let mut cell = chain.as_deref();
                while let Some(c) = cell {
                    write!(f, "{}", c.head)?;
                    if c.tail.is_some() {
                        write!(f, ", ")?;
                    }
                    cell = c.tail.as_deref();
                }
                write!(f, "]")
            }
        }
    }
}
