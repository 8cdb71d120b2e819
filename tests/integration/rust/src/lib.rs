//! Integration test suite for the ES3 compiler
//!
//! This crate provides integration tests that verify the translation
//! pipeline works correctly across component boundaries.

/// Re-export components for test convenience
pub mod components {
    pub use es3_cli;
    pub use es3_core;
    pub use translator;
}
