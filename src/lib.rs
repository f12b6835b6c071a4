//! # pascalite
//!
//! pascalite is a tree-walking interpreter for a small Pascal-like teaching
//! language. A program is lexed, parsed by recursive descent into a syntax
//! tree and evaluated against a flat variable store, which is returned once
//! the program finishes.
//!
//! ```
//! use pascalite::{Config, interpreter::value::Value};
//!
//! let source = "PROGRAM demo;
//! VAR a, b : INTEGER;
//! BEGIN
//!     a := 2 + 3 * 4;
//!     b := a DIV 4
//! END.";
//!
//! let memory = pascalite::interpret(source, Config::default()).unwrap();
//! assert_eq!(memory.lookup("a"), Some(Value::Integer(14)));
//! assert_eq!(memory.lookup("b"), Some(Value::Integer(3)));
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    ast::Node,
    error::Error,
    interpreter::{Interpreter, lexer::Lexer, memory::Memory, parser::Parser},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and the operator types that represent
/// a program as a tree. The tree is built by the parser and traversed by the
/// evaluator.
///
/// # Responsibilities
/// - Defines one node kind per language construct.
/// - Attaches source positions to nodes that can fail at runtime.
pub mod ast;
/// Runtime settings for an interpretation run.
pub mod config;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries the line and column at which it was detected. The
/// top-level [`Error`](error::Error) tags a failure with its stage.
///
/// # Responsibilities
/// - Defines one error enum per stage (lexer, parser, evaluator).
/// - Implements [`std::error::Error`] through `thiserror`.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation and the variable
/// store to provide a complete runtime for a source program.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

pub use config::Config;

/// Interprets a complete program and returns its final variable store.
///
/// Every call starts from an empty store; no state survives between calls.
///
/// # Errors
/// Returns the first lexical, syntax or runtime error. The store is only
/// returned when the whole program ran successfully.
///
/// # Examples
/// ```
/// use pascalite::{Config, error::{Error, RuntimeError}};
///
/// let memory = pascalite::interpret("PROGRAM p; BEGIN x := 10 / 4 END.", Config::default());
/// assert_eq!(memory.unwrap().to_string(), "x = 2.5\n");
///
/// // `y` is read before it is ever assigned.
/// let result = pascalite::interpret("PROGRAM p; BEGIN x := y + 1 END.", Config::default());
/// assert!(matches!(result, Err(Error::Runtime(RuntimeError::UndefinedVariable { .. }))));
/// ```
pub fn interpret(source: &str, config: Config) -> Result<Memory, Error> {
    let parser = Parser::new(Lexer::new(source));
    Interpreter::new(parser, config).interpret()
}

/// Parses a complete program without evaluating it.
///
/// # Errors
/// Returns the first lexical or syntax error.
///
/// # Examples
/// ```
/// use pascalite::{ast::Node, error::{Error, ParseError}};
///
/// assert!(matches!(pascalite::parse("PROGRAM p; BEGIN END."), Ok(Node::Program { .. })));
/// assert!(matches!(pascalite::parse("PROGRAM p; BEGIN END"),
///                  Err(Error::Parse(ParseError::MissingTerminator { .. }))));
/// ```
pub fn parse(source: &str) -> Result<Node, Error> {
    Ok(Parser::new(Lexer::new(source)).parse()?)
}
