//! Command classifier
//!
//! Splits raw input into tokens and maps it onto exactly one [`Classified`]
//! value: a dispatchable [`Command`] or a [`Diagnostic`].

pub mod ast;
pub mod grammar;

pub use ast::*;
pub use grammar::{classify, tokenize};
