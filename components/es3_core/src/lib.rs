//! Core ES3 value and error types.
//!
//! This crate provides the foundational types for the ES3 translator,
//! including the tagged runtime value representation, the compile error
//! taxonomy, and source location tracking.
//!
//! # Overview
//!
//! - [`Var`] - Tagged representation of ES3 runtime values
//! - [`CompileError`] - Fatal translation errors with category and position
//! - [`ErrorCategory`] - Failure classes, each mapped to a process exit code
//! - [`SourcePosition`] - Source code location
//!
//! # Examples
//!
//! ```
//! use es3_core::{CompareOp, Var};
//!
//! // Build ES3 runtime values
//! let num = Var::Number(42.0);
//! assert!(num.is_truthy());
//! assert_eq!(num.type_tag(), 1);
//!
//! // Same-tag comparison yields a Boolean
//! let eq = num.compare(CompareOp::Equal, &Var::Number(42.0));
//! assert_eq!(eq, Var::Boolean(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

mod error;
mod source;
mod value;

pub use error::{CompileError, ErrorCategory};
pub use source::SourcePosition;
pub use value::{
    format_g, AddSubOp, Cell, CompareOp, ExpOp, MulDivOp, Var, TAG_ARRAY, TAG_BOOLEAN, TAG_NULL,
    TAG_NUMBER, TAG_STRING,
};
