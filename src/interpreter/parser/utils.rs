use crate::{
    error::ParseError,
    interpreter::{
        lexer::{Lexer, Position, Spanned, Token},
        parser::core::ParseResult,
    },
};

/// Builds an `UnexpectedToken` error for `found`.
pub(in crate::interpreter::parser) fn unexpected(expected: impl Into<String>,
                                                 found: &Spanned)
                                                 -> ParseError {
    ParseError::UnexpectedToken { expected: expected.into(),
                                  found:    found.token.to_string(),
                                  position: found.position, }
}

/// Consumes the next token, which must equal `expected`.
///
/// Only meant for tokens without a payload (keywords and punctuation).
///
/// # Errors
/// Returns `UnexpectedToken` naming `expected` if the next token differs, or
/// the lexer's error if scanning fails.
pub(in crate::interpreter::parser) fn expect(lexer: &mut Lexer<'_>,
                                             expected: &Token)
                                             -> ParseResult<Spanned> {
    let spanned = lexer.next_token()?;
    if &spanned.token == expected {
        Ok(spanned)
    } else {
        Err(unexpected(expected.to_string(), &spanned))
    }
}

/// Parses a plain identifier and returns its name and position.
pub(in crate::interpreter::parser) fn parse_identifier(lexer: &mut Lexer<'_>)
                                                       -> ParseResult<(String, Position)> {
    let spanned = lexer.next_token()?;
    match spanned.token {
        Token::Identifier(name) => Ok((name, spanned.position)),
        _ => Err(unexpected("identifier", &spanned)),
    }
}

/// Returns `true` if the next token equals `token`, without consuming it.
pub(in crate::interpreter::parser) fn next_is(lexer: &mut Lexer<'_>,
                                              token: &Token)
                                              -> ParseResult<bool> {
    Ok(&lexer.peek()?.token == token)
}
