use tracing::debug;

use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Token},
        parser::{
            block::parse_block,
            utils::{expect, parse_identifier},
        },
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a whole program.
///
/// Grammar: `program := PROGRAM ID ";" block "." EOF`
///
/// The body must be closed with `.`, and nothing but the end of input may
/// follow it.
///
/// # Errors
/// - `UnexpectedToken` if the header is malformed.
/// - `MissingTerminator` if the block is not followed by `.`.
/// - `UnexpectedTrailingTokens` if anything follows the `.`.
pub fn parse_program(lexer: &mut Lexer<'_>) -> ParseResult<Node> {
    expect(lexer, &Token::Program)?;
    let (name, _) = parse_identifier(lexer)?;
    expect(lexer, &Token::Semicolon)?;
    let block = parse_block(lexer)?;

    let terminator = lexer.next_token()?;
    if terminator.token != Token::Dot {
        return Err(ParseError::MissingTerminator { found:    terminator.token.to_string(),
                                                   position: terminator.position, });
    }

    let trailing = lexer.next_token()?;
    if trailing.token != Token::Eof {
        return Err(ParseError::UnexpectedTrailingTokens { found:    trailing.token.to_string(),
                                                          position: trailing.position, });
    }

    debug!(program = %name, "parsed program");
    Ok(Node::Program { name,
                       block: Box::new(block) })
}
