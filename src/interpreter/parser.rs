/// Core parsing entry points.
///
/// Defines the result type and the `program` rule, including the final `.`
/// terminator check.
pub mod core;

/// Unary-level parsing.
///
/// Parses factors: literals, signs, parenthesized expressions and variable
/// references.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the two left-associative precedence tiers: `expr` for `+`/`-`
/// and `term` for multiplicative and comparison operators.
pub mod binary;

/// Block parsing.
///
/// Parses the program block: `VAR` declarations, type specs and
/// `BEGIN ... END` compound statements.
pub mod block;

/// Utility functions for the parser.
///
/// Token expectation helpers and error construction shared by all rules.
pub mod utils;

/// Statement parsing.
///
/// Implements statement lists, assignments, `IF`/`ELSE`, `WHILE` and `FOR`.
pub mod statement;

use tracing::instrument;

use crate::{
    ast::Node,
    interpreter::{
        lexer::Lexer,
        parser::core::{ParseResult, parse_program},
    },
};

/// Builds the syntax tree of a whole program from a [`Lexer`].
///
/// The parser pulls one token at a time and looks at most one token ahead.
/// The first mismatch aborts parsing; no partial tree is ever returned.
///
/// # Example
/// ```
/// use pascalite::{
///     ast::Node,
///     interpreter::{lexer::Lexer, parser::Parser},
/// };
///
/// let tree = Parser::new(Lexer::new("PROGRAM p; BEGIN END.")).parse().unwrap();
/// assert!(matches!(tree, Node::Program { .. }));
/// ```
pub struct Parser<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Parser<'src> {
    #[must_use]
    pub const fn new(lexer: Lexer<'src>) -> Self {
        Self { lexer }
    }

    /// Consumes the token stream and returns the `Program` root node.
    #[instrument(level = "debug", skip_all)]
    pub fn parse(mut self) -> ParseResult<Node> {
        parse_program(&mut self.lexer)
    }
}
