use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::Error,
    interpreter::{evaluator::core::Context, memory::Memory, parser::Parser},
};

/// The evaluator module executes AST nodes against a variable store.
///
/// The evaluator walks the tree produced by the parser, evaluates expressions
/// and statements, and records every assignment in the run's [`Memory`].
///
/// # Responsibilities
/// - Evaluates arithmetic and comparison expressions with integer/real
///   promotion.
/// - Runs assignments, compound statements, conditionals and loops.
/// - Reports runtime errors such as undefined variables or division by zero.
pub mod evaluator;
/// The reserved-word table consulted by the lexer.
pub mod keywords;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens, each
/// corresponding to a literal, identifier, keyword, operator or punctuation
/// mark, together with its line and column.
///
/// # Responsibilities
/// - Converts the input character stream into positioned tokens.
/// - Recognizes reserved words and numeric literals.
/// - Reports lexical errors for characters that start no token.
pub mod lexer;
/// The variable store of one interpretation run.
pub mod memory;
/// The parser module builds the abstract syntax tree from tokens.
///
/// The parser is a recursive-descent parser with one token of lookahead. Each
/// grammar rule is a function taking the lexer.
///
/// # Responsibilities
/// - Converts tokens into [`Node`](crate::ast::Node) trees.
/// - Validates the grammar, reporting the first mismatch with its position.
/// - Requires the program to end with `.` followed by end of input.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are integers, reals and the booleans produced by comparisons. The
/// module provides conversion and coercion helpers used by the evaluator.
pub mod value;

/// Runs a parsed program from start to finish.
///
/// The interpreter owns a [`Parser`] and the [`Config`] of the run. Calling
/// [`Interpreter::interpret`] parses the whole program first, so a syntax
/// error leaves no side effects, and then evaluates the tree in a fresh
/// [`Context`].
///
/// # Example
/// ```
/// use pascalite::{
///     Config,
///     interpreter::{Interpreter, lexer::Lexer, parser::Parser, value::Value},
/// };
///
/// let parser = Parser::new(Lexer::new("PROGRAM p; BEGIN a := 10 DIV 4 END."));
/// let memory = Interpreter::new(parser, Config::default()).interpret().unwrap();
///
/// assert_eq!(memory.lookup("a"), Some(Value::Integer(2)));
/// ```
pub struct Interpreter<'src> {
    parser: Parser<'src>,
    config: Config,
}

impl<'src> Interpreter<'src> {
    #[must_use]
    pub const fn new(parser: Parser<'src>, config: Config) -> Self {
        Self { parser, config }
    }

    /// Parses and evaluates the program, returning the final variable store.
    ///
    /// # Errors
    /// Returns the first lexical, syntax or runtime error. Nothing is returned
    /// on failure; a partially updated store is discarded.
    #[instrument(level = "debug", skip_all)]
    pub fn interpret(self) -> Result<Memory, Error> {
        let tree = self.parser.parse()?;

        let mut context = Context::new(self.config);
        context.eval(&tree)?;

        let memory = context.into_memory();
        debug!(variables = memory.len(), "program finished");
        Ok(memory)
    }
}
