use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::{
    error::{LexError, lex_error::LexResult},
    interpreter::keywords::keyword,
};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
///
/// Reserved words have no lexing rule of their own: they are scanned as
/// [`Token::Identifier`] and swapped for their keyword variant by [`Lexer`].
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(extras = LexerExtras)]
#[logos(skip r"[\s&&[^\n]]+")]
pub enum Token {
    /// Real literal tokens, such as `2.5` or `2.`.
    #[regex(r"[0-9]+\.[0-9]*", parse_real)]
    Real(f64),
    /// Integer literal tokens, such as `42`.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// Identifier tokens; a letter followed by letters or digits.
    #[regex(r"[a-zA-Z][a-zA-Z0-9]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `PROGRAM`
    Program,
    /// `VAR`
    Var,
    /// `BEGIN`
    Begin,
    /// `END`
    End,
    /// `INTEGER`
    IntegerType,
    /// `REAL`
    RealType,
    /// `DIV`
    Div,
    /// `IF`
    If,
    /// `ELSE`
    Else,
    /// `WHILE`
    While,
    /// `FOR`
    For,
    #[token(":=")]
    Assign,
    #[token(";")]
    Semicolon,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token(",")]
    Comma,
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("==")]
    EqualEqual,
    #[token("!=")]
    BangEqual,
    #[token(">")]
    Greater,
    #[token(">=")]
    GreaterEqual,
    #[token("<")]
    Less,
    #[token("<=")]
    LessEqual,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[token("\n", |lex| {
        lex.extras.line += 1;
        lex.extras.line_start = lex.span().end;
        logos::Skip
    })]
    NewLine,
    /// End of input. Never produced by the generated scanner; [`Lexer`]
    /// returns it once the source is exhausted.
    Eof,
}

/// Line bookkeeping carried through the generated scanner.
#[derive(Default)]
pub struct LexerExtras {
    /// Current 1-based line.
    pub line:       usize,
    /// Byte offset where the current line begins.
    pub line_start: usize,
}

fn parse_real(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(r) => write!(f, "real {r:?}"),
            Self::Integer(n) => write!(f, "integer {n}"),
            Self::Identifier(name) => write!(f, "identifier '{name}'"),
            Self::Program => write!(f, "PROGRAM"),
            Self::Var => write!(f, "VAR"),
            Self::Begin => write!(f, "BEGIN"),
            Self::End => write!(f, "END"),
            Self::IntegerType => write!(f, "INTEGER"),
            Self::RealType => write!(f, "REAL"),
            Self::Div => write!(f, "DIV"),
            Self::If => write!(f, "IF"),
            Self::Else => write!(f, "ELSE"),
            Self::While => write!(f, "WHILE"),
            Self::For => write!(f, "FOR"),
            Self::Assign => write!(f, "':='"),
            Self::Semicolon => write!(f, "';'"),
            Self::Dot => write!(f, "'.'"),
            Self::Colon => write!(f, "':'"),
            Self::Comma => write!(f, "','"),
            Self::Plus => write!(f, "'+'"),
            Self::Minus => write!(f, "'-'"),
            Self::Star => write!(f, "'*'"),
            Self::Slash => write!(f, "'/'"),
            Self::EqualEqual => write!(f, "'=='"),
            Self::BangEqual => write!(f, "'!='"),
            Self::Greater => write!(f, "'>'"),
            Self::GreaterEqual => write!(f, "'>='"),
            Self::Less => write!(f, "'<'"),
            Self::LessEqual => write!(f, "'<='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::NewLine => write!(f, "newline"),
            Self::Eof => write!(f, "end of input"),
        }
    }
}

/// A 1-based source location.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub line:   usize,
    pub column: usize,
}

impl Position {
    #[must_use]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A token together with the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Spanned {
    pub token:    Token,
    pub position: Position,
}

/// Turns source text into a lazy stream of [`Spanned`] tokens.
///
/// Tokens are produced one at a time on demand. Once the input is exhausted
/// every further call to [`Lexer::next_token`] returns [`Token::Eof`].
/// A character that starts no token fails with
/// [`LexError::UnexpectedCharacter`]; there is no recovery.
///
/// `Lexer` also implements [`Iterator`], yielding every token before `Eof`
/// and stopping after the first error.
///
/// # Example
/// ```
/// use pascalite::interpreter::lexer::{Lexer, Token};
///
/// let mut lexer = Lexer::new("a := 10 DIV 3");
/// assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("a".into()));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Assign);
/// assert_eq!(lexer.peek().unwrap().token, Token::Integer(10));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Integer(10));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Div);
/// assert_eq!(lexer.next_token().unwrap().token, Token::Integer(3));
/// assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
/// assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
/// ```
pub struct Lexer<'src> {
    inner:    logos::Lexer<'src, Token>,
    peeked:   Option<Spanned>,
    finished: bool,
}

impl<'src> Lexer<'src> {
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self { inner:    Token::lexer_with_extras(source, LexerExtras { line:       1,
                                                                         line_start: 0, }),
               peeked:   None,
               finished: false, }
    }

    /// Consumes and returns the next token.
    pub fn next_token(&mut self) -> LexResult<Spanned> {
        if let Some(spanned) = self.peeked.take() {
            return Ok(spanned);
        }
        self.scan()
    }

    /// Returns the next token without consuming it.
    pub fn peek(&mut self) -> LexResult<&Spanned> {
        let spanned = match self.peeked.take() {
            Some(spanned) => spanned,
            None => self.scan()?,
        };
        Ok(self.peeked.insert(spanned))
    }

    fn scan(&mut self) -> LexResult<Spanned> {
        let Some(result) = self.inner.next() else {
            return Ok(Spanned { token:    Token::Eof,
                                position: self.position_of(self.inner.source().len()), });
        };

        let position = self.position_of(self.inner.span().start);
        let token = match result {
            Ok(Token::Identifier(text)) => keyword(&text).unwrap_or(Token::Identifier(text)),
            Ok(token) => token,
            Err(()) => return Err(self.scan_error(position)),
        };

        trace!(%token, %position, "scanned token");
        Ok(Spanned { token, position })
    }

    fn scan_error(&self, position: Position) -> LexError {
        let slice = self.inner.slice();
        match slice.chars().next() {
            Some(c) if c.is_ascii_digit() => {
                LexError::InvalidNumber { literal: slice.to_string(),
                                          position }
            },
            Some(character) => LexError::UnexpectedCharacter { character, position },
            None => LexError::UnexpectedCharacter { character: '\0',
                                                    position },
        }
    }

    fn position_of(&self, offset: usize) -> Position {
        let extras = &self.inner.extras;
        Position::new(extras.line, offset.saturating_sub(extras.line_start) + 1)
    }
}

impl Iterator for Lexer<'_> {
    type Item = LexResult<Spanned>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.next_token() {
            Ok(Spanned { token: Token::Eof, .. }) => {
                self.finished = true;
                None
            },
            Ok(spanned) => Some(Ok(spanned)),
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn tokens(source: &str) -> Vec<Token> {
        Lexer::new(source).map(|t| t.unwrap().token).collect()
    }

    #[test]
    fn keywords_and_identifiers() {
        assert_eq!(tokens("PROGRAM p1; VAR BEGINx begin END"),
                   vec![Token::Program,
                        Token::Identifier("p1".into()),
                        Token::Semicolon,
                        Token::Var,
                        Token::Identifier("BEGINx".into()),
                        Token::Identifier("begin".into()),
                        Token::End]);
    }

    #[test]
    fn integer_and_real_literals() {
        assert_eq!(tokens("42 2.5 7."),
                   vec![Token::Integer(42), Token::Real(2.5), Token::Real(7.0)]);
    }

    #[test]
    fn end_dot_is_not_a_real() {
        assert_eq!(tokens("END."), vec![Token::End, Token::Dot]);
    }

    #[test]
    fn two_character_operators_win_over_single() {
        assert_eq!(tokens(":= : == != >= > <= < ;"),
                   vec![Token::Assign,
                        Token::Colon,
                        Token::EqualEqual,
                        Token::BangEqual,
                        Token::GreaterEqual,
                        Token::Greater,
                        Token::LessEqual,
                        Token::Less,
                        Token::Semicolon]);
    }

    #[test]
    fn punctuation() {
        assert_eq!(tokens(". , + - * / ( )"),
                   vec![Token::Dot,
                        Token::Comma,
                        Token::Plus,
                        Token::Minus,
                        Token::Star,
                        Token::Slash,
                        Token::LParen,
                        Token::RParen]);
    }

    #[test]
    fn unicode_whitespace_is_skipped() {
        assert_eq!(tokens("a\u{0B}b\u{A0}c\u{2003}\r\td"),
                   vec![Token::Identifier("a".into()),
                        Token::Identifier("b".into()),
                        Token::Identifier("c".into()),
                        Token::Identifier("d".into())]);

        let mut lexer = Lexer::new("a\u{0B}\nb");
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token().unwrap().position, Position::new(2, 1));
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("  ");
        for _ in 0..3 {
            assert_eq!(lexer.next_token().unwrap().token, Token::Eof);
        }
    }

    #[test]
    fn peek_does_not_consume() {
        let mut lexer = Lexer::new("a b");
        assert_eq!(lexer.peek().unwrap().token, Token::Identifier("a".into()));
        assert_eq!(lexer.peek().unwrap().token, Token::Identifier("a".into()));
        assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("a".into()));
        assert_eq!(lexer.next_token().unwrap().token, Token::Identifier("b".into()));
    }

    #[test]
    fn positions_track_lines_and_columns() {
        let mut lexer = Lexer::new("BEGIN\n  a := 1");
        assert_eq!(lexer.next_token().unwrap().position, Position::new(1, 1));
        assert_eq!(lexer.next_token().unwrap().position, Position::new(2, 3));
        assert_eq!(lexer.next_token().unwrap().position, Position::new(2, 5));
        assert_eq!(lexer.next_token().unwrap().position, Position::new(2, 8));
    }

    #[test]
    fn unexpected_character_fails() {
        let mut lexer = Lexer::new("a := 1 # 2");
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        lexer.next_token().unwrap();
        assert_eq!(lexer.next_token(),
                   Err(LexError::UnexpectedCharacter { character: '#',
                                                       position:  Position::new(1, 8), }));
    }

    #[test]
    fn lone_bang_is_rejected() {
        let result: Result<Vec<_>, _> = Lexer::new("a ! b").collect();
        assert!(matches!(result, Err(LexError::UnexpectedCharacter { character: '!', .. })));
    }

    #[test]
    fn oversized_integer_is_invalid_number() {
        let result: Result<Vec<_>, _> = Lexer::new("99999999999999999999").collect();
        assert!(matches!(result, Err(LexError::InvalidNumber { .. })));
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut lexer = Lexer::new("@ a");
        assert!(lexer.next().unwrap().is_err());
        assert!(lexer.next().is_none());
    }
}
