use crate::interpreter::lexer::Token;

/// Looks up a reserved word.
///
/// The lexer scans every word as an identifier first and then asks this table
/// whether the text is reserved. Matching is case-sensitive: only the
/// upper-case spelling is a keyword, so `begin` is an ordinary identifier.
///
/// # Example
/// ```
/// use pascalite::interpreter::{keywords::keyword, lexer::Token};
///
/// assert_eq!(keyword("BEGIN"), Some(Token::Begin));
/// assert_eq!(keyword("DIV"), Some(Token::Div));
/// assert_eq!(keyword("total"), None);
/// ```
#[must_use]
pub fn keyword(text: &str) -> Option<Token> {
    let token = match text {
        "PROGRAM" => Token::Program,
        "VAR" => Token::Var,
        "BEGIN" => Token::Begin,
        "END" => Token::End,
        "DIV" => Token::Div,
        "INTEGER" => Token::IntegerType,
        "REAL" => Token::RealType,
        "IF" => Token::If,
        "ELSE" => Token::Else,
        "WHILE" => Token::While,
        "FOR" => Token::For,
        _ => return None,
    };
    Some(token)
}
