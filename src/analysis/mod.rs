//! Text analysis contracts for Xyston.
//!
//! This module defines the token types the rewriting pipeline consumes and
//! the collaborator traits (analysis backend, scope resolver) through which
//! an external tokenization service is plugged in.

pub mod backend;
pub mod token;

// Re-export commonly used types
pub use backend::*;
pub use token::*;
